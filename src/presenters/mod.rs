pub mod file;
pub mod png;
