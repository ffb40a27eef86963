pub mod gridline_overlay;
pub mod ppm;
