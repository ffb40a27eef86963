use crate::core::data::viewport::Viewport;
use std::fmt;

/// Display values for the overlay above the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportReadout {
    /// Real part of the view centre.
    pub center_x: f64,
    /// Imaginary part of the view centre, negated so "up" on screen reads as
    /// positive.
    pub center_y: f64,
    pub scale: f64,
    pub frame_width: f64,
    pub frame_height: f64,
    pub reset_available: bool,
}

impl ViewportReadout {
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        let center = viewport.center();

        Self {
            center_x: center.real,
            // + 0.0 turns -0.0 into 0.0
            center_y: -center.imag + 0.0,
            scale: viewport.scale(),
            frame_width: viewport.width(),
            frame_height: viewport.height(),
            reset_available: viewport.is_zoomed_in(),
        }
    }

    #[must_use]
    pub fn location_label(&self) -> String {
        format!("({:.8}, {:.8})", self.center_x, self.center_y)
    }
}

impl fmt::Display for ViewportReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location: {} Scale: {}", self.location_label(), self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_readout() {
        let readout = ViewportReadout::from_viewport(&Viewport::DEFAULT);

        assert_eq!(readout.center_x, 0.0);
        assert_eq!(readout.center_y, 0.0);
        assert!(readout.center_y.is_sign_positive());
        assert_eq!(readout.scale, 1.0);
        assert_eq!(readout.frame_width, 4.0);
        assert_eq!(readout.frame_height, 4.0);
        assert!(!readout.reset_available);
        assert_eq!(readout.location_label(), "(0.00000000, 0.00000000)");
    }

    #[test]
    fn imaginary_axis_is_inverted() {
        let viewport = Viewport::new(-1.0, 0.5, 0.0, 1.5).unwrap();
        let readout = ViewportReadout::from_viewport(&viewport);

        assert_eq!(readout.center_x, -0.5);
        assert_eq!(readout.center_y, -1.0);
        assert_eq!(readout.scale, 0.25);
        assert!(readout.reset_available);
        assert_eq!(readout.location_label(), "(-0.50000000, -1.00000000)");
    }

    #[test]
    fn display_matches_overlay_text() {
        let readout = ViewportReadout::from_viewport(&Viewport::DEFAULT);

        assert_eq!(readout.to_string(), "Location: (0.00000000, 0.00000000) Scale: 1");
    }
}
