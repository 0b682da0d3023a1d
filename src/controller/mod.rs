//! Countdown controller module
//! 
//! This module contains the timer controller together with the presenter and
//! scheduler seams it is driven through.

pub mod error;
pub mod presenter;
pub mod scheduler;
pub mod timer;

// Re-export main types
pub use error::{parse_duration, InvalidDurationInput};
pub use presenter::{Presenter, ViewPresenter};
pub use scheduler::{Scheduler, TokioScheduler};
pub use timer::{format_remaining, TimerController, TICK_INTERVAL, TIMES_UP};
