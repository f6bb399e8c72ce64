//! Zoom and pan over the gradient's logical [0, 1] extent
//!
//! The viewport turns normalized gesture coordinates into gradient
//! positions. Scale is clamped to [1, 4]; pan is clamped so the visible
//! window never leaves the logical extent, i.e. with
//! `visible_width = 1 / scale` the pan offset stays in
//! `[0, 1 - visible_width]`.

use tracing::debug;

pub const MIN_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 4.0;

/// Zoom/pan transform state for one editor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    scale: f32,
    pan: f32,
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scale: MIN_SCALE,
            pan: 0.0,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn pan(&self) -> f32 {
        self.pan
    }

    /// Width of the visible window in gradient units
    pub fn visible_width(&self) -> f32 {
        1.0 / self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self.pan = self.pan.clamp(0.0, self.max_pan());
        debug!(scale = self.scale, pan = self.pan, "viewport rescaled");
    }

    /// Apply a pinch factor on top of the current scale
    pub fn zoom_by(&mut self, factor: f32) {
        self.set_scale(self.scale * factor);
    }

    pub fn set_pan(&mut self, pan: f32) {
        self.pan = pan.clamp(0.0, self.max_pan());
    }

    /// Apply a drag delta, in gradient units, to the pan offset
    pub fn pan_by(&mut self, delta: f32) {
        self.set_pan(self.pan + delta);
    }

    /// Map a normalized x in the visible window to a gradient position
    pub fn position_at(&self, normalized_x: f32) -> f32 {
        let x = normalized_x.clamp(0.0, 1.0);
        (self.pan + x * self.visible_width()).clamp(0.0, 1.0)
    }

    /// Back to unzoomed, unpanned; only ever by explicit user action
    pub fn reset(&mut self) {
        self.scale = MIN_SCALE;
        self.pan = 0.0;
    }

    fn max_pan(&self) -> f32 {
        1.0 - self.visible_width()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_clamped() {
        let mut vp = Viewport::new();
        vp.set_scale(6.0);
        assert_eq!(vp.scale(), 4.0);
        vp.set_scale(0.2);
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn test_pan_window_at_max_scale() {
        let mut vp = Viewport::new();
        vp.set_scale(4.0);

        vp.set_pan(-1.0);
        assert_eq!(vp.pan(), 0.0);
        vp.set_pan(2.0);
        assert_eq!(vp.pan(), 0.75);
    }

    #[test]
    fn test_zoom_out_reclamps_pan() {
        let mut vp = Viewport::new();
        vp.set_scale(4.0);
        vp.set_pan(0.75);

        vp.set_scale(2.0);
        assert_eq!(vp.pan(), 0.5);

        vp.set_scale(1.0);
        assert_eq!(vp.pan(), 0.0);
    }

    #[test]
    fn test_position_mapping() {
        let mut vp = Viewport::new();
        assert_eq!(vp.position_at(0.5), 0.5);

        vp.set_scale(2.0);
        vp.set_pan(0.5);
        assert_eq!(vp.position_at(0.0), 0.5);
        assert_eq!(vp.position_at(1.0), 1.0);
        assert_eq!(vp.position_at(0.5), 0.75);
    }

    #[test]
    fn test_zoom_by_compounds() {
        let mut vp = Viewport::new();
        vp.zoom_by(2.0);
        vp.zoom_by(2.0);
        assert_eq!(vp.scale(), 4.0);
        vp.zoom_by(2.0);
        assert_eq!(vp.scale(), 4.0);
    }
}
