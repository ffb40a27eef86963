pub mod config;
pub mod controller;
pub mod drag;
pub mod readout;
