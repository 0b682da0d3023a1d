//! Background tasks module
//! 
//! This module contains the control loop that owns the countdown controller.

pub mod countdown;

// Re-export main functions
pub use countdown::{countdown_task, spawn_countdown_task};
