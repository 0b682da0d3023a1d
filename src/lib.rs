//! Countdown Timer - a terminal-window countdown timer
//! 
//! The user enters a number of seconds, starts a countdown shown as `MM:SS`
//! and gets a popup when it reaches zero. The countdown runs on a single
//! control loop fed by key presses, optional HTTP commands and its own
//! scheduled ticks.

pub mod api;
pub mod config;
pub mod controller;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use controller::{InvalidDurationInput, TimerController};
pub use state::AppState;
pub use tasks::spawn_countdown_task;
pub use utils::signals::shutdown_signal;
