use crate::core::data::colour::Colour;
use crate::core::fractals::julia::algorithm::EscapeSample;

/// Turns an escape-time sample into a pixel colour.
///
/// Implementations are shared across rayon workers while a frame renders.
pub trait JuliaColourMap: Send + Sync {
    fn map(&self, sample: EscapeSample) -> Colour;
}
