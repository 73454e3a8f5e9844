pub mod frame_params;
#[allow(clippy::module_inception)]
pub mod render_frame;

pub use frame_params::FrameParams;
pub use render_frame::{render_frame, render_frame_rayon, render_frame_serial, shade_pixel};
