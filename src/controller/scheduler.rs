//! Delayed tick delivery

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{trace, warn};

use crate::state::{Event, TickToken};

/// Runs a tick callback after a delay. Delivery must be serialized with every
/// other event, so implementations never call back into the controller directly.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, token: TickToken);
}

/// Sleeps on the tokio timer and posts [`Event::Tick`] into the control loop
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    events: mpsc::UnboundedSender<Event>,
}

impl TokioScheduler {
    pub fn new(events: mpsc::UnboundedSender<Event>) -> Self {
        Self { events }
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, token: TickToken) {
        let events = self.events.clone();
        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            trace!("Delivering tick for generation {}", token.generation());
            if events.send(Event::Tick(token)).is_err() {
                warn!("Control loop closed, dropping scheduled tick");
            }
        });
    }
}
