/// Second pipeline stage: normalises `u` into a palette index. The index is
/// not clamped; palettes must accept values outside `[0, 1]`.
pub trait ColourIndexFunction: Send + Sync + std::fmt::Debug {
    fn index(&self, value: f64, max_iter: u32) -> f64;

    fn display_name(&self) -> &str;
}
