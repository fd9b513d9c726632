pub mod colour_index_function;
pub mod colour_map;
pub mod colouring_function;
pub mod palette_function;
