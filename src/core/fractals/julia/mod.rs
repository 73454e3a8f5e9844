pub mod algorithm;
pub mod colour_mapping;
pub mod constant;

pub use algorithm::{ESCAPE_RADIUS_SQUARED, EscapeSample, escape_time, sample};
pub use colour_mapping::{JuliaColourMap, PhaseCycleGradient};
pub use constant::julia_constant;
