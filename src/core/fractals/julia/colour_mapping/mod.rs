pub mod map;
pub mod phase_cycle;

pub use map::JuliaColourMap;
pub use phase_cycle::PhaseCycleGradient;
