use crate::core::data::viewport::{REFERENCE_WIDTH, Viewport};
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

pub const DEFAULT_ZOOMED_CAP: u32 = 1000;
pub const DEFAULT_UNZOOMED_CAP: u32 = 100;

/// Chooses the iteration cap for a render from the viewport's horizontal
/// span. Narrow (zoomed-in) views need more iterations to resolve the
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationPolicy {
    span_threshold: f64,
    zoomed_cap: u32,
    default_cap: u32,
}

impl IterationPolicy {
    pub fn new(
        span_threshold: f64,
        zoomed_cap: u32,
        default_cap: u32,
    ) -> Result<Self, MandelbrotError> {
        if !(span_threshold > 0.0 && span_threshold.is_finite()) {
            return Err(MandelbrotError::InvalidSpanThreshold {
                threshold: span_threshold,
            });
        }

        if zoomed_cap == 0 || default_cap == 0 {
            return Err(MandelbrotError::ZeroMaxIterations);
        }

        Ok(Self {
            span_threshold,
            zoomed_cap,
            default_cap,
        })
    }

    #[must_use]
    pub fn span_threshold(&self) -> f64 {
        self.span_threshold
    }

    #[must_use]
    pub fn zoomed_cap(&self) -> u32 {
        self.zoomed_cap
    }

    #[must_use]
    pub fn default_cap(&self) -> u32 {
        self.default_cap
    }

    #[must_use]
    pub fn cap_for(&self, viewport: &Viewport) -> u32 {
        if viewport.width() < self.span_threshold {
            self.zoomed_cap
        } else {
            self.default_cap
        }
    }
}

impl Default for IterationPolicy {
    fn default() -> Self {
        Self {
            span_threshold: REFERENCE_WIDTH,
            zoomed_cap: DEFAULT_ZOOMED_CAP,
            default_cap: DEFAULT_UNZOOMED_CAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_uses_cheap_cap() {
        let policy = IterationPolicy::default();

        assert_eq!(policy.cap_for(&Viewport::DEFAULT), 100);
    }

    #[test]
    fn zoomed_view_uses_high_cap() {
        let policy = IterationPolicy::default();
        let zoomed = Viewport::new(-1.0, -1.0, 2.999, 2.0).unwrap();

        assert_eq!(policy.cap_for(&zoomed), 1000);
    }

    #[test]
    fn wider_than_default_uses_cheap_cap() {
        let policy = IterationPolicy::default();
        let wide = Viewport::new(-3.0, -3.0, 3.0, 3.0).unwrap();

        assert_eq!(policy.cap_for(&wide), 100);
    }

    #[test]
    fn custom_policy_is_honoured() {
        let policy = IterationPolicy::new(1.0, 5000, 50).unwrap();

        assert_eq!(policy.cap_for(&Viewport::new(0.0, 0.0, 0.5, 0.5).unwrap()), 5000);
        assert_eq!(policy.cap_for(&Viewport::new(0.0, 0.0, 1.0, 1.0).unwrap()), 50);
    }

    #[test]
    fn invalid_policies_are_rejected() {
        assert_eq!(
            IterationPolicy::new(4.0, 0, 100),
            Err(MandelbrotError::ZeroMaxIterations)
        );
        assert_eq!(
            IterationPolicy::new(4.0, 1000, 0),
            Err(MandelbrotError::ZeroMaxIterations)
        );
        assert!(matches!(
            IterationPolicy::new(0.0, 1000, 100),
            Err(MandelbrotError::InvalidSpanThreshold { .. })
        ));
        assert!(IterationPolicy::new(f64::NAN, 1000, 100).is_err());
    }
}
