//! Windowed front end for the Julia animation.
//!
//! winit owns the window and event loop, pixels presents the rendered frame
//! and egui draws the control panel on top.

pub mod app;
pub mod commands;
pub mod errors;
pub mod settings;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
pub use settings::WindowSettings;
