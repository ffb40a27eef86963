pub mod canvas_point;
pub mod canvas_size;
pub mod colour;
pub mod complex;
pub mod frame;
pub mod gridlines;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
