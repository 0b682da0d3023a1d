//! Countdown session state

use serde::{Deserialize, Serialize};

/// Identifies the start a scheduled tick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickToken(u64);

impl TickToken {
    /// Raw generation number
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// In-memory record of whether a countdown is active and how much time remains
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownSession {
    /// Authoritative countdown value
    remaining_seconds: u64,
    /// True between a successful start and a stop or completion
    running: bool,
    /// Bumped on every start so ticks scheduled by an earlier start can be told apart
    generation: u64,
}

impl CountdownSession {
    /// Create an idle session
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a countdown of `seconds` and return the token its ticks must carry
    pub fn begin(&mut self, seconds: u64) -> TickToken {
        self.generation = self.generation.wrapping_add(1);
        self.remaining_seconds = seconds;
        self.running = true;
        TickToken(self.generation)
    }

    /// Mark the session as no longer running
    pub fn finish(&mut self) {
        self.running = false;
    }

    /// Remove one second from the countdown
    pub fn decrement(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
    }

    /// Whether a tick carrying `token` may act on this session
    pub fn accepts(&self, token: TickToken) -> bool {
        self.running && token.0 == self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
