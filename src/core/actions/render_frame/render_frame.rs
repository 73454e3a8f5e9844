use crate::core::actions::render_frame::frame_params::FrameParams;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::view_state::ViewState;
use crate::core::fractals::julia::algorithm::sample;
use crate::core::fractals::julia::colour_mapping::map::JuliaColourMap;
use crate::core::fractals::julia::colour_mapping::phase_cycle::PhaseCycleGradient;
use rayon::prelude::*;

/// Renders one complete frame for `view`, splitting rows across the rayon pool.
#[must_use]
pub fn render_frame(view: &ViewState, surface: SurfaceSize) -> PixelBuffer {
    let params = FrameParams::from_view(view, surface);
    let colour_map = PhaseCycleGradient::new(params.time_phase);

    render_frame_rayon(&params, &colour_map)
}

#[must_use]
pub fn shade_pixel<M: JuliaColourMap + ?Sized>(
    params: &FrameParams,
    colour_map: &M,
    pixel_x: u32,
    pixel_y: u32,
) -> Colour {
    let point = params
        .transform
        .to_fractal_space(f64::from(pixel_x), f64::from(pixel_y));

    colour_map.map(sample(point, params.constant, params.max_iterations))
}

/// Single-threaded reference renderer. Output is byte-identical to
/// [`render_frame_rayon`].
#[must_use]
pub fn render_frame_serial<M: JuliaColourMap + ?Sized>(
    params: &FrameParams,
    colour_map: &M,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(params.surface);
    let stride = buffer.row_stride();

    for (y, row) in buffer.data_mut().chunks_exact_mut(stride).enumerate() {
        shade_row(params, colour_map, y as u32, row);
    }

    buffer
}

/// Renders rows in parallel. The closure only reads `params` and `colour_map`,
/// and every row is joined before this returns.
#[must_use]
pub fn render_frame_rayon<M: JuliaColourMap + ?Sized>(
    params: &FrameParams,
    colour_map: &M,
) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(params.surface);
    let stride = buffer.row_stride();

    buffer
        .data_mut()
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(y, row)| shade_row(params, colour_map, y as u32, row));

    buffer
}

fn shade_row<M: JuliaColourMap + ?Sized>(
    params: &FrameParams,
    colour_map: &M,
    y: u32,
    row: &mut [u8],
) {
    for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
        let colour = shade_pixel(params, colour_map, x as u32, y);
        pixel.copy_from_slice(&colour.to_rgba());
    }
}
