use crate::core::data::complex::Complex;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::julia::constant::julia_constant;
use crate::core::view::transform::ViewTransform;

/// Immutable per-frame snapshot read by every pixel of one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub surface: SurfaceSize,
    pub transform: ViewTransform,
    pub constant: Complex,
    pub max_iterations: u32,
    pub time_phase: f64,
}

impl FrameParams {
    #[must_use]
    pub fn from_view(view: &ViewState, surface: SurfaceSize) -> Self {
        Self {
            surface,
            transform: ViewTransform::from_view(view, surface),
            constant: julia_constant(view.time_phase()),
            max_iterations: view.max_iterations().max(1),
            time_phase: view.time_phase(),
        }
    }
}
