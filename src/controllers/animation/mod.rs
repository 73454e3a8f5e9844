//! Animation controller: the single writer of view state.
//!
//! Input arrives as [`InputCommand`] values, frames leave through
//! [`FramePresenterPort`]. [`FrameLoop`] drives the controller when the host
//! has no event loop of its own; the GUI drives it from winit instead.

pub mod commands;
mod controller;
pub mod drag;
pub mod frame_loop;
pub mod ports;

pub use commands::InputCommand;
pub use controller::{AnimationController, TickReport};
pub use drag::DragState;
pub use frame_loop::{DEFAULT_FRAME_INTERVAL, FrameLoop, StopHandle};
pub use ports::FramePresenterPort;
