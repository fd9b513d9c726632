pub mod colouring;
pub mod factory;
pub mod index;
pub mod kinds;
pub mod palettes;
pub mod pipeline;
