mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::animation::{
    AnimationController, DEFAULT_FRAME_INTERVAL, DragState, FrameLoop, FramePresenterPort,
    InputCommand, StopHandle, TickReport,
};
pub use core::actions::render_frame::{
    FrameParams, render_frame, render_frame_rayon, render_frame_serial, shade_pixel,
};
pub use core::animation::{
    AnimationSettings, FpsCounter, FrameTelemetry, RandomizeRanges, SessionClock,
    TelemetryReadout, format_elapsed,
};
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::pixel_buffer::{CHANNELS, PixelBuffer};
pub use core::data::surface_size::{SurfaceSize, SurfaceSizeError};
pub use core::data::view_state::{
    Adjustment, DEFAULT_MAX_ITERATIONS, DEFAULT_SPEED, DEFAULT_ZOOM, ViewState,
};
pub use core::fractals::julia::{
    ESCAPE_RADIUS_SQUARED, EscapeSample, JuliaColourMap, PhaseCycleGradient, escape_time,
    julia_constant, sample,
};
pub use core::view::{
    BASE_PIXELS_PER_UNIT, ViewLimits, ViewTransform, ZoomDirection, ZoomStep, anchored_offset,
    zoom_at_pointer,
};

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand, WindowSettings};
#[cfg(feature = "gui")]
pub use presenters::pixels::{PixelsPresenter, PixelsPresenterFactory};
