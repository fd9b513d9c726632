pub mod cache;
pub mod coordinator;
pub mod data;
pub mod iteration_policy;
pub mod png_tile_renderer;
pub mod ports;
pub mod single_flight;
