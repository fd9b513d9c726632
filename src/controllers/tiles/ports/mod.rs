pub mod tile_renderer;
