use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MandelbrotError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("iteration span threshold must be positive and finite, got {threshold}")]
    InvalidSpanThreshold { threshold: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MandelbrotColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}
