pub mod continuous_iteration_count;
pub mod iteration_count;
pub mod smooth_iteration_count;
