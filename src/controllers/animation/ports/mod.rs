//! Port definitions for the animation controller.

pub mod presenter;

pub use presenter::FramePresenterPort;
