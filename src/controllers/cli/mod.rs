pub mod explore;
pub mod render_controller;
