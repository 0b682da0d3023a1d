//! State management module
//! 
//! This module contains the countdown session, the presentation state and the
//! shared handle used to talk to the control loop.

pub mod app_state;
pub mod event;
pub mod session;
pub mod snapshot;
pub mod view_state;

// Re-export main types
pub use app_state::AppState;
pub use event::{Event, Reply};
pub use session::{CountdownSession, TickToken};
pub use snapshot::TimerSnapshot;
pub use view_state::{Controls, Dialog, DialogKind, ViewState};
