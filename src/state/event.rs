//! Events serialized through the control loop

use tokio::sync::oneshot;

use super::{TickToken, TimerSnapshot};
use crate::controller::InvalidDurationInput;

/// Reply channel for callers that need the outcome of an event
pub type Reply<T> = oneshot::Sender<T>;

/// Everything the control loop reacts to: user actions, remote commands and
/// scheduler callbacks
#[derive(Debug)]
pub enum Event {
    /// Start a countdown from the entered text
    Start {
        input: String,
        reply: Option<Reply<Result<TimerSnapshot, InvalidDurationInput>>>,
    },
    /// Stop the running countdown
    Stop {
        reply: Option<Reply<TimerSnapshot>>,
    },
    /// Scheduled countdown update
    Tick(TickToken),
    /// Close the current popup
    DismissDialog,
    /// Shut the control loop down
    Quit,
}

impl Event {
    /// A start request without a reply channel
    pub fn start(input: impl Into<String>) -> Self {
        Event::Start {
            input: input.into(),
            reply: None,
        }
    }

    /// A stop request without a reply channel
    pub fn stop() -> Self {
        Event::Stop { reply: None }
    }
}
