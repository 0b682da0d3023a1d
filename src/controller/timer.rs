//! Countdown controller
//!
//! Owns the [`CountdownSession`] and drives the presenter on every state
//! transition. All methods run on the single control loop; the scheduler only
//! ever hands ticks back through the event queue, so nothing here locks.

use std::time::Duration;
use tracing::{debug, info, warn};

use super::{parse_duration, InvalidDurationInput, Presenter, Scheduler};
use crate::state::{Controls, CountdownSession, TickToken};

/// Delay between two countdown updates
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Label text and notification message on completion
pub const TIMES_UP: &str = "Time's up!";

const INVALID_INPUT_TITLE: &str = "Invalid Input";
const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number of seconds";
const COMPLETION_TITLE: &str = "Timer";

/// Render seconds as zero-padded `MM:SS`. Minutes are not capped at 59.
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Whether the label keeps its text when the session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Clear,
    Keep,
}

/// Validates durations and runs the countdown
#[derive(Debug)]
pub struct TimerController<P, S> {
    session: CountdownSession,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: Scheduler> TimerController<P, S> {
    /// Create an idle controller and put the presenter in its idle layout
    pub fn new(mut presenter: P, scheduler: S) -> Self {
        presenter.set_controls(Controls::idle());
        Self {
            session: CountdownSession::new(),
            presenter,
            scheduler,
        }
    }

    /// Start a countdown from the text of the seconds field.
    ///
    /// Does nothing while a countdown is already running. Invalid text raises
    /// the error dialog and leaves the session idle.
    pub fn start(&mut self, input: &str) -> Result<(), InvalidDurationInput> {
        if self.session.is_running() {
            debug!("Start ignored, countdown already running");
            return Ok(());
        }

        let seconds = match parse_duration(input) {
            Ok(seconds) => seconds,
            Err(e) => {
                warn!("Rejected duration input: {}", e);
                self.presenter.show_error(INVALID_INPUT_TITLE, INVALID_INPUT_MESSAGE);
                return Err(e);
            }
        };

        let token = self.session.begin(seconds);
        info!("Starting countdown for {} seconds (generation {})", seconds, token.generation());

        self.presenter.set_controls(Controls::running());
        self.scheduler.schedule(Duration::ZERO, token);
        Ok(())
    }

    /// Stop the countdown and clear the label. No-op while idle.
    pub fn stop(&mut self) {
        if !self.session.is_running() {
            debug!("Stop ignored, no countdown running");
            return;
        }
        info!("Countdown stopped with {} seconds left", self.session.remaining_seconds());
        self.finish(Label::Clear);
    }

    /// Scheduled countdown update.
    ///
    /// A tick whose token does not match the running session was queued before
    /// a stop (or an earlier start) and is dropped here; pending callbacks are
    /// never retracted.
    pub fn tick(&mut self, token: TickToken) {
        if !self.session.accepts(token) {
            debug!(
                "Ignoring stale tick for generation {} (current {}, running={})",
                token.generation(),
                self.session.generation(),
                self.session.is_running()
            );
            return;
        }

        let remaining = self.session.remaining_seconds();
        if remaining == 0 {
            info!("Countdown finished");
            self.presenter.set_display(TIMES_UP);
            self.presenter.show_info(COMPLETION_TITLE, TIMES_UP);
            self.finish(Label::Keep);
            return;
        }

        self.presenter.set_display(&format_remaining(remaining));
        self.session.decrement();
        self.scheduler.schedule(TICK_INTERVAL, token);
    }

    fn finish(&mut self, label: Label) {
        self.session.finish();
        self.presenter.set_controls(Controls::idle());
        if label == Label::Clear {
            self.presenter.set_display("");
        }
    }

    pub fn session(&self) -> &CountdownSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ViewPresenter;
    use crate::state::DialogKind;

    /// Records scheduled ticks instead of running them
    #[derive(Debug, Default)]
    struct ManualScheduler {
        pending: Vec<(Duration, TickToken)>,
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&mut self, delay: Duration, token: TickToken) {
            self.pending.push((delay, token));
        }
    }

    type Controller = TimerController<ViewPresenter, ManualScheduler>;

    fn controller() -> Controller {
        TimerController::new(ViewPresenter::new(), ManualScheduler::default())
    }

    /// Fire the oldest scheduled tick
    fn fire(c: &mut Controller) {
        let (_, token) = c.scheduler.pending.remove(0);
        c.tick(token);
    }

    fn display(c: &Controller) -> &str {
        &c.presenter().view().display
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(125), "02:05");
        assert_eq!(format_remaining(6000), "100:00");
    }

    #[test]
    fn invalid_input_shows_error_and_stays_idle() {
        for input in ["", "abc", "0", "-3", "2.5"] {
            let mut c = controller();
            assert!(c.start(input).is_err(), "{input:?} should be rejected");
            assert!(!c.session().is_running());
            assert!(c.scheduler.pending.is_empty());

            let view = c.presenter().view();
            assert_eq!(view.controls, Controls::idle());
            let dialog = view.dialog.as_ref().unwrap();
            assert_eq!(dialog.kind, DialogKind::Error);
            assert_eq!(dialog.title, "Invalid Input");
        }
    }

    #[test]
    fn valid_input_starts_and_schedules_first_tick_immediately() {
        let mut c = controller();
        c.start("125").unwrap();

        assert!(c.session().is_running());
        assert_eq!(c.session().remaining_seconds(), 125);
        assert_eq!(c.presenter().view().controls, Controls::running());
        assert_eq!(c.scheduler.pending.len(), 1);
        assert_eq!(c.scheduler.pending[0].0, Duration::ZERO);

        fire(&mut c);
        assert_eq!(display(&c), "02:05");
        assert_eq!(c.session().remaining_seconds(), 124);
        assert_eq!(c.scheduler.pending[0].0, TICK_INTERVAL);
    }

    #[test]
    fn start_while_running_changes_nothing() {
        let mut c = controller();
        c.start("10").unwrap();
        fire(&mut c);
        let before = c.session().clone();

        assert!(c.start("99").is_ok());
        assert!(c.start("garbage").is_ok());
        assert_eq!(c.session(), &before);
        assert_eq!(c.scheduler.pending.len(), 1);
        assert!(c.presenter().view().dialog.is_none());
    }

    #[test]
    fn counts_down_to_completion() {
        let mut c = controller();
        c.start("3").unwrap();

        for (expected, left) in [("00:03", 2), ("00:02", 1), ("00:01", 0)] {
            fire(&mut c);
            assert_eq!(display(&c), expected);
            assert_eq!(c.session().remaining_seconds(), left);
            assert!(c.session().is_running());
        }

        fire(&mut c);
        assert_eq!(display(&c), "Time's up!");
        assert!(!c.session().is_running());
        assert!(c.scheduler.pending.is_empty());

        let view = c.presenter().view();
        assert_eq!(view.controls, Controls::idle());
        let dialog = view.dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.message, "Time's up!");
    }

    #[test]
    fn completion_is_reached_after_exactly_n_ticks() {
        let mut c = controller();
        c.start("61").unwrap();

        let mut ticks = 0;
        while !c.scheduler.pending.is_empty() {
            fire(&mut c);
            ticks += 1;
        }
        // n countdown ticks plus the terminal one
        assert_eq!(ticks, 62);
        assert_eq!(display(&c), TIMES_UP);
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let mut c = controller();
        c.presenter_mut().set_display("left alone");
        c.stop();

        assert!(!c.session().is_running());
        assert_eq!(display(&c), "left alone");
        assert!(c.presenter().view().dialog.is_none());
    }

    #[test]
    fn stop_clears_label_and_restores_controls() {
        let mut c = controller();
        c.start("30").unwrap();
        fire(&mut c);
        c.stop();

        assert!(!c.session().is_running());
        assert_eq!(display(&c), "");
        assert_eq!(c.presenter().view().controls, Controls::idle());
        assert!(c.presenter().view().dialog.is_none());
    }

    #[test]
    fn tick_queued_before_stop_is_ignored() {
        let mut c = controller();
        c.start("30").unwrap();
        fire(&mut c);
        c.stop();

        let remaining = c.session().remaining_seconds();
        fire(&mut c);

        assert_eq!(c.session().remaining_seconds(), remaining);
        assert!(!c.session().is_running());
        assert_eq!(display(&c), "");
        assert!(c.scheduler.pending.is_empty());
    }

    #[test]
    fn stale_tick_at_zero_does_not_report_completion() {
        let mut c = controller();
        c.start("1").unwrap();
        fire(&mut c);
        assert_eq!(c.session().remaining_seconds(), 0);

        c.stop();
        fire(&mut c);
        assert!(c.presenter().view().dialog.is_none());
        assert_eq!(display(&c), "");
    }

    #[test]
    fn tick_from_previous_start_does_not_speed_up_new_countdown() {
        let mut c = controller();
        c.start("30").unwrap();
        fire(&mut c);
        c.stop();
        c.start("10").unwrap();

        // Queue now holds the stale tick followed by the new first tick
        assert_eq!(c.scheduler.pending.len(), 2);
        fire(&mut c);
        assert_eq!(c.session().remaining_seconds(), 10);

        fire(&mut c);
        assert_eq!(c.session().remaining_seconds(), 9);
        assert_eq!(c.scheduler.pending.len(), 1);
    }
}
