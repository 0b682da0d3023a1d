//! Shared handle to the control loop

use std::time::Instant;
use tokio::sync::{mpsc, oneshot, watch};
use tracing::warn;

use super::{Event, TimerSnapshot};
use crate::controller::InvalidDurationInput;

/// The control loop stopped before the event could be handled
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("countdown control loop is not running")]
pub struct ControlLoopClosed;

/// Handle shared by the window and the HTTP routes. It never touches the
/// session directly: commands go through the event queue and state comes back
/// through the snapshot channel.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Queue drained by the control loop
    pub events: mpsc::UnboundedSender<Event>,
    /// Latest published session and view
    pub snapshots: watch::Receiver<TimerSnapshot>,
    /// Process metadata
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around the control loop's channels
    pub fn new(
        events: mpsc::UnboundedSender<Event>,
        snapshots: watch::Receiver<TimerSnapshot>,
    ) -> Self {
        Self {
            events,
            snapshots,
            start_time: Instant::now(),
        }
    }

    /// Post an event without waiting for it to be handled
    pub fn send(&self, event: Event) -> Result<(), ControlLoopClosed> {
        self.events.send(event).map_err(|e| {
            warn!("Dropping event, control loop closed: {:?}", e.0);
            ControlLoopClosed
        })
    }

    /// Ask the control loop to start a countdown and wait for the outcome
    pub async fn start(
        &self,
        input: impl Into<String>,
    ) -> Result<Result<TimerSnapshot, InvalidDurationInput>, ControlLoopClosed> {
        let (tx, rx) = oneshot::channel();
        self.send(Event::Start {
            input: input.into(),
            reply: Some(tx),
        })?;
        rx.await.map_err(|_| ControlLoopClosed)
    }

    /// Ask the control loop to stop the countdown and wait for the new state
    pub async fn stop(&self) -> Result<TimerSnapshot, ControlLoopClosed> {
        let (tx, rx) = oneshot::channel();
        self.send(Event::Stop { reply: Some(tx) })?;
        rx.await.map_err(|_| ControlLoopClosed)
    }

    /// Get the latest published snapshot
    pub fn snapshot(&self) -> TimerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Calculate process uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;
        
        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
