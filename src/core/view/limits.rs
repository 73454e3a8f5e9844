#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub slider_zoom_max: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl ViewLimits {
    /// Clamps `zoom` into the allowed range. The lower bound never drops to zero.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        let min = self.min_zoom.max(f64::MIN_POSITIVE);
        let max = self.max_zoom.max(min);

        zoom.clamp(min, max)
    }

    /// The value shown on the zoom slider. Display only; the real zoom may exceed it.
    #[must_use]
    pub fn slider_zoom(&self, zoom: f64) -> f64 {
        zoom.min(self.slider_zoom_max)
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 10.0,
            slider_zoom_max: 3.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
        }
    }
}
