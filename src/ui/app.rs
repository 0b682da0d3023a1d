//! Window model and key dispatch
//!
//! Ctrl+C / Ctrl+Q quit. Tab and Shift+Tab move focus between the enabled
//! widgets. Enter activates the focused widget (Enter in the field starts).
//! Esc stops a running countdown. Everything else edits the field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::input_field::InputField;
use crate::state::{Controls, Event, ViewState};

/// Focusable widgets in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Start,
    Stop,
}

impl Focus {
    const ORDER: [Focus; 3] = [Focus::Input, Focus::Start, Focus::Stop];

    pub fn is_enabled(self, controls: Controls) -> bool {
        match self {
            Focus::Input => controls.input_enabled,
            Focus::Start => controls.start_enabled,
            Focus::Stop => controls.stop_enabled,
        }
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// State owned by the window itself: the field text and focus
#[derive(Debug)]
pub struct WindowApp {
    pub input: InputField,
    pub focus: Focus,
    pub should_quit: bool,
}

impl WindowApp {
    pub fn new(prefill: Option<&str>) -> Self {
        Self {
            input: prefill.map(InputField::with_text).unwrap_or_default(),
            focus: Focus::Input,
            should_quit: false,
        }
    }

    /// Move focus off a widget that became disabled
    pub fn sync_focus(&mut self, controls: Controls) {
        if !self.focus.is_enabled(controls) {
            if let Some(first) = Focus::ORDER.into_iter().find(|f| f.is_enabled(controls)) {
                self.focus = first;
            }
        }
    }

    /// Translate a key press into control-loop events
    pub fn handle_key(&mut self, key: KeyEvent, view: &ViewState) -> Vec<Event> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return vec![Event::Quit];
        }

        let mut events = Vec::new();
        if let Some(dialog) = &view.dialog {
            if dialog.is_blocking() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    events.push(Event::DismissDialog);
                }
                return events;
            }
            events.push(Event::DismissDialog);
        }

        let controls = view.controls;
        self.sync_focus(controls);

        match key.code {
            KeyCode::Tab => self.cycle_focus(controls, 1),
            KeyCode::BackTab => self.cycle_focus(controls, Focus::ORDER.len() - 1),
            KeyCode::Enter => match self.focus {
                Focus::Input | Focus::Start if controls.start_enabled => {
                    events.push(Event::start(self.input.content()));
                }
                Focus::Stop if controls.stop_enabled => events.push(Event::stop()),
                _ => {}
            },
            KeyCode::Esc if controls.stop_enabled => events.push(Event::stop()),
            _ if self.focus == Focus::Input && controls.input_enabled => {
                self.input.handle_key(key);
            }
            _ => {}
        }
        events
    }

    fn cycle_focus(&mut self, controls: Controls, step: usize) {
        let len = Focus::ORDER.len();
        let mut index = self.focus.index();
        for _ in 0..len {
            index = (index + step) % len;
            if Focus::ORDER[index].is_enabled(controls) {
                self.focus = Focus::ORDER[index];
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Dialog, DialogKind};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn idle_view() -> ViewState {
        ViewState::new()
    }

    fn running_view() -> ViewState {
        ViewState {
            controls: Controls::running(),
            display: "00:10".into(),
            dialog: None,
        }
    }

    fn with_dialog(mut view: ViewState, kind: DialogKind) -> ViewState {
        view.dialog = Some(Dialog {
            kind,
            title: "t".into(),
            message: "m".into(),
        });
        view
    }

    #[test]
    fn typing_then_enter_starts_with_field_text() {
        let mut app = WindowApp::new(None);
        let view = idle_view();
        for ch in "90".chars() {
            assert!(app.handle_key(press(KeyCode::Char(ch)), &view).is_empty());
        }

        let events = app.handle_key(press(KeyCode::Enter), &view);
        assert!(matches!(events.as_slice(), [Event::Start { input, reply: None }] if input == "90"));
    }

    #[test]
    fn field_is_read_only_while_running() {
        let mut app = WindowApp::new(Some("5"));
        app.handle_key(press(KeyCode::Char('0')), &running_view());
        assert_eq!(app.input.content(), "5");
        assert_eq!(app.focus, Focus::Stop);
    }

    #[test]
    fn enter_and_esc_stop_while_running() {
        let mut app = WindowApp::new(None);
        let view = running_view();
        assert!(matches!(app.handle_key(press(KeyCode::Enter), &view).as_slice(), [Event::Stop { .. }]));
        assert!(matches!(app.handle_key(press(KeyCode::Esc), &view).as_slice(), [Event::Stop { .. }]));
    }

    #[test]
    fn tab_skips_disabled_buttons() {
        let mut app = WindowApp::new(None);
        let view = idle_view();
        app.handle_key(press(KeyCode::Tab), &view);
        assert_eq!(app.focus, Focus::Start);
        app.handle_key(press(KeyCode::Tab), &view);
        assert_eq!(app.focus, Focus::Input);
        app.handle_key(press(KeyCode::BackTab), &view);
        assert_eq!(app.focus, Focus::Start);
    }

    #[test]
    fn blocking_dialog_swallows_everything_but_dismiss() {
        let mut app = WindowApp::new(None);
        let view = with_dialog(idle_view(), DialogKind::Error);

        assert!(app.handle_key(press(KeyCode::Char('7')), &view).is_empty());
        assert_eq!(app.input.content(), "");

        let events = app.handle_key(press(KeyCode::Enter), &view);
        assert!(matches!(events.as_slice(), [Event::DismissDialog]));
    }

    #[test]
    fn info_dialog_is_dismissed_and_key_still_applies() {
        let mut app = WindowApp::new(None);
        let view = with_dialog(idle_view(), DialogKind::Info);

        let events = app.handle_key(press(KeyCode::Char('3')), &view);
        assert!(matches!(events.as_slice(), [Event::DismissDialog]));
        assert_eq!(app.input.content(), "3");
    }

    #[test]
    fn ctrl_c_quits_even_behind_a_dialog() {
        let mut app = WindowApp::new(None);
        let view = with_dialog(idle_view(), DialogKind::Error);
        let events = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &view);
        assert!(matches!(events.as_slice(), [Event::Quit]));
        assert!(app.should_quit);
    }
}
