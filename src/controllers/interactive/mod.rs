//! Background rendering for interactive use.
//!
//! Requests go in through [`InteractiveController::submit_request`]; results
//! come out through the [`ports::presenter::InteractiveControllerPresenterPort`]
//! as [`events::render::RenderEvent`]s, newest generation only.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
