use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::view_state::ViewState;
use crate::core::view::limits::ViewLimits;
use crate::core::view::transform::{ViewTransform, anchored_offset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep {
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub slider_zoom: f64,
}

/// One wheel notch of cursor-anchored zoom.
///
/// The fractal-plane point under `(pointer_x, pointer_y)` before the step is
/// still under it afterwards, unless the zoom was already pinned at a limit.
#[must_use]
pub fn zoom_at_pointer(
    view: &ViewState,
    surface: SurfaceSize,
    pointer_x: f64,
    pointer_y: f64,
    direction: ZoomDirection,
    limits: &ViewLimits,
) -> ZoomStep {
    let world = ViewTransform::from_view(view, surface).to_fractal_space(pointer_x, pointer_y);

    let factor = match direction {
        ZoomDirection::In => limits.zoom_in_factor,
        ZoomDirection::Out => limits.zoom_out_factor,
    };
    let zoom = limits.clamp_zoom(view.zoom() * factor);
    let (offset_x, offset_y) = anchored_offset(surface, pointer_x, pointer_y, world, zoom);

    ZoomStep {
        zoom,
        offset_x,
        offset_y,
        slider_zoom: limits.slider_zoom(zoom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn surface() -> SurfaceSize {
        SurfaceSize::new(800, 600).unwrap()
    }

    fn view_with(zoom: f64, offset_x: f64, offset_y: f64) -> ViewState {
        let mut view = ViewState::default();
        view.set_zoom(zoom, &ViewLimits::default());
        view.set_offset(offset_x, offset_y);
        view
    }

    #[test]
    fn zoom_in_multiplies_by_1_1() {
        let step = zoom_at_pointer(
            &ViewState::default(),
            surface(),
            400.0,
            300.0,
            ZoomDirection::In,
            &ViewLimits::default(),
        );

        assert_approx_eq(step.zoom, 1.1);
        assert_approx_eq(step.offset_x, 0.0);
        assert_approx_eq(step.offset_y, 0.0);
    }

    #[test]
    fn zoom_out_multiplies_by_0_9() {
        let step = zoom_at_pointer(
            &view_with(2.0, 0.0, 0.0),
            surface(),
            400.0,
            300.0,
            ZoomDirection::Out,
            &ViewLimits::default(),
        );

        assert_approx_eq(step.zoom, 1.8);
    }

    #[test]
    fn zoom_is_clamped_at_both_ends() {
        let limits = ViewLimits::default();

        let high = zoom_at_pointer(
            &view_with(10.0, 0.0, 0.0),
            surface(),
            10.0,
            10.0,
            ZoomDirection::In,
            &limits,
        );
        let low = zoom_at_pointer(
            &view_with(0.1, 0.0, 0.0),
            surface(),
            10.0,
            10.0,
            ZoomDirection::Out,
            &limits,
        );

        assert_eq!(high.zoom, 10.0);
        assert_eq!(low.zoom, 0.1);
    }

    #[test]
    fn point_under_pointer_stays_fixed() {
        let view = view_with(1.3, -55.0, 18.0);
        let before = ViewTransform::from_view(&view, surface()).to_fractal_space(640.0, 90.0);

        let step = zoom_at_pointer(
            &view,
            surface(),
            640.0,
            90.0,
            ZoomDirection::In,
            &ViewLimits::default(),
        );
        let after = ViewTransform::new(surface(), step.offset_x, step.offset_y, step.zoom)
            .to_fractal_space(640.0, 90.0);

        assert_approx_eq(after.real, before.real);
        assert_approx_eq(after.imag, before.imag);
    }

    #[test]
    fn slider_value_is_capped_at_three() {
        let step = zoom_at_pointer(
            &view_with(4.0, 0.0, 0.0),
            surface(),
            400.0,
            300.0,
            ZoomDirection::In,
            &ViewLimits::default(),
        );

        assert_approx_eq(step.zoom, 4.4);
        assert_eq!(step.slider_zoom, 3.0);
    }
}
