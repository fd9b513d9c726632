pub mod tile_cache_key;
pub mod tile_params;
pub mod tile_server_status;
