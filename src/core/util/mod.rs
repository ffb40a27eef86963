pub mod fit_selection;
pub mod plane_mapper;
pub mod screen_to_canvas;
