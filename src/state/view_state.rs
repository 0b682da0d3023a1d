//! Presentation state rendered by the terminal window and the status route

use serde::{Deserialize, Serialize};

/// Which of the window's controls accept interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub input_enabled: bool,
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

impl Controls {
    /// Controls while no countdown is active
    pub fn idle() -> Self {
        Self {
            input_enabled: true,
            start_enabled: true,
            stop_enabled: false,
        }
    }

    /// Controls while a countdown is active
    pub fn running() -> Self {
        Self {
            input_enabled: false,
            start_enabled: false,
            stop_enabled: true,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::idle()
    }
}

/// Kind of popup shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    /// Blocks all other input until dismissed
    Error,
    /// Informational, does not block input
    Info,
}

/// A popup notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn is_blocking(&self) -> bool {
        self.kind == DialogKind::Error
    }
}

/// Everything the window needs to draw itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub controls: Controls,
    /// Time label text: `MM:SS`, `Time's up!` or empty
    pub display: String,
    pub dialog: Option<Dialog>,
}

impl ViewState {
    /// Create the view of a freshly opened window
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a blocking dialog is currently shown
    pub fn is_blocked(&self) -> bool {
        self.dialog.as_ref().is_some_and(Dialog::is_blocking)
    }
}
