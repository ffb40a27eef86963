//! Input adapters: turn command lines into render plans.

pub mod cli;
