pub mod algorithm;
pub mod colour_mapping;
pub mod implementation;
pub mod orbit;
