//! Published view of the control loop after each event

use serde::{Deserialize, Serialize};

use super::{CountdownSession, ViewState};

/// Session and presentation state as of the last processed event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub session: CountdownSession,
    pub view: ViewState,
}

impl TimerSnapshot {
    pub fn new(session: CountdownSession, view: ViewState) -> Self {
        Self { session, view }
    }
}
