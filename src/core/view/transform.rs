use crate::core::data::complex::Complex;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::view_state::ViewState;

/// Pixels per fractal-plane unit at `zoom == 1`.
pub const BASE_PIXELS_PER_UNIT: f64 = 150.0;

/// Maps device pixels to the fractal plane for one surface and view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    center_x: f64,
    center_y: f64,
    scale: f64,
}

impl ViewTransform {
    #[must_use]
    pub fn new(surface: SurfaceSize, offset_x: f64, offset_y: f64, zoom: f64) -> Self {
        Self {
            center_x: f64::from(surface.width()) / 2.0 + offset_x,
            center_y: f64::from(surface.height()) / 2.0 + offset_y,
            scale: scale_for_zoom(zoom),
        }
    }

    #[must_use]
    pub fn from_view(view: &ViewState, surface: SurfaceSize) -> Self {
        Self::new(surface, view.offset_x(), view.offset_y(), view.zoom())
    }

    #[must_use]
    pub fn to_fractal_space(&self, pixel_x: f64, pixel_y: f64) -> Complex {
        Complex {
            real: (pixel_x - self.center_x) / self.scale,
            imag: (pixel_y - self.center_y) / self.scale,
        }
    }

    #[must_use]
    pub fn to_pixel_space(&self, point: Complex) -> (f64, f64) {
        (
            point.real * self.scale + self.center_x,
            point.imag * self.scale + self.center_y,
        )
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

#[must_use]
pub fn scale_for_zoom(zoom: f64) -> f64 {
    zoom * BASE_PIXELS_PER_UNIT
}

/// Solves for the offset that puts `world` back under the pointer at `new_zoom`.
#[must_use]
pub fn anchored_offset(
    surface: SurfaceSize,
    pointer_x: f64,
    pointer_y: f64,
    world: Complex,
    new_zoom: f64,
) -> (f64, f64) {
    let scale = scale_for_zoom(new_zoom);

    (
        pointer_x - f64::from(surface.width()) / 2.0 - world.real * scale,
        pointer_y - f64::from(surface.height()) / 2.0 - world.imag * scale,
    )
}
