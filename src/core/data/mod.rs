pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod iteration_params;
pub mod pixel_buffer;
pub mod point;
pub mod region;
pub mod render_request;
pub mod tile_address;
