//! Input adapters. Each one turns host events into animation commands.

pub mod gui;
