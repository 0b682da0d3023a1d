//! Presentation layer driven by the controller

use tracing::debug;

use crate::state::{Controls, Dialog, DialogKind, ViewState};

/// What the controller can do to the window
pub trait Presenter {
    /// Enable or disable the input field and buttons
    fn set_controls(&mut self, controls: Controls);
    /// Replace the time label text
    fn set_display(&mut self, text: &str);
    /// Show a blocking error dialog
    fn show_error(&mut self, title: &str, message: &str);
    /// Show a non-blocking informational notification
    fn show_info(&mut self, title: &str, message: &str);
}

/// Presenter that records everything into a [`ViewState`] for rendering
#[derive(Debug, Default)]
pub struct ViewPresenter {
    view: ViewState,
}

impl ViewPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Close whatever popup is shown
    pub fn dismiss_dialog(&mut self) {
        if let Some(dialog) = self.view.dialog.take() {
            debug!("Dismissed {:?} dialog '{}'", dialog.kind, dialog.title);
        }
    }

    fn show(&mut self, kind: DialogKind, title: &str, message: &str) {
        self.view.dialog = Some(Dialog {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl Presenter for ViewPresenter {
    fn set_controls(&mut self, controls: Controls) {
        self.view.controls = controls;
    }

    fn set_display(&mut self, text: &str) {
        self.view.display.clear();
        self.view.display.push_str(text);
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.show(DialogKind::Error, title, message);
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.show(DialogKind::Info, title, message);
    }
}
