pub mod render_controller;
pub mod render_plan;
