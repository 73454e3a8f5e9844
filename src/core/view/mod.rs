pub mod limits;
pub mod transform;
pub mod zoom;

pub use limits::ViewLimits;
pub use transform::{BASE_PIXELS_PER_UNIT, ViewTransform, anchored_offset};
pub use zoom::{ZoomDirection, ZoomStep, zoom_at_pointer};
