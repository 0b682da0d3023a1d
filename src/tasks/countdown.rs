//! Countdown control loop task

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, info, warn};

use crate::{
    controller::{Scheduler, TimerController, TokioScheduler, ViewPresenter},
    state::{AppState, Event, TimerSnapshot},
};


/// Create the controller, spawn the loop that owns it and return the shared handle
pub fn spawn_countdown_task() -> (AppState, JoinHandle<()>) {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let controller = TimerController::new(ViewPresenter::new(), TokioScheduler::new(events_tx.clone()));
    let (snapshot_tx, snapshot_rx) = watch::channel(snapshot_of(&controller));

    let handle = tokio::spawn(countdown_task(controller, events_rx, snapshot_tx));
    (AppState::new(events_tx, snapshot_rx), handle)
}

/// Drain the event queue one event at a time until `Quit` arrives or every
/// sender is gone. This task is the only owner of the controller.
pub async fn countdown_task<S: Scheduler>(
    mut controller: TimerController<ViewPresenter, S>,
    mut events: mpsc::UnboundedReceiver<Event>,
    snapshots: watch::Sender<TimerSnapshot>,
) {
    info!("Starting countdown control loop");

    while let Some(event) = events.recv().await {
        if matches!(event, Event::Quit) {
            debug!("Quit received");
            break;
        }
        handle_event(&mut controller, event);

        // Receivers may all be gone during shutdown, which is fine
        let _ = snapshots.send(snapshot_of(&controller));
    }

    info!("Countdown control loop stopped");
}

fn handle_event<S: Scheduler>(controller: &mut TimerController<ViewPresenter, S>, event: Event) {
    match event {
        Event::Start { input, reply } => {
            let result = controller.start(&input).map(|()| snapshot_of(controller));
            if let Some(reply) = reply {
                if reply.send(result).is_err() {
                    warn!("Start requester went away before the reply");
                }
            }
        }
        Event::Stop { reply } => {
            controller.stop();
            if let Some(reply) = reply {
                if reply.send(snapshot_of(controller)).is_err() {
                    warn!("Stop requester went away before the reply");
                }
            }
        }
        Event::Tick(token) => controller.tick(token),
        Event::DismissDialog => controller.presenter_mut().dismiss_dialog(),
        Event::Quit => {}
    }
}

fn snapshot_of<S: Scheduler>(controller: &TimerController<ViewPresenter, S>) -> TimerSnapshot {
    TimerSnapshot::new(controller.session().clone(), controller.presenter().view().clone())
}
