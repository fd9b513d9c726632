mod bands;
pub mod cool;
pub mod hot;
pub mod simple;
