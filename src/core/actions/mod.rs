pub mod cancellation;
pub mod generate_gridlines;
pub mod generate_pixel_buffer;
pub mod render_frame;
