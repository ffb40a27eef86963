/// A whole pixel in the render grid. `(0, 0)` is the top-left pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
