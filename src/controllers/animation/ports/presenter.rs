use crate::core::animation::telemetry::FrameTelemetry;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Receives the output of each tick: a finished frame and the numeric readouts.
pub trait FramePresenterPort {
    fn present(&mut self, pixel_buffer: &PixelBuffer);

    fn publish_telemetry(&mut self, telemetry: &FrameTelemetry);
}
