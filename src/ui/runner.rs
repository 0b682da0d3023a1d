//! Terminal window lifecycle and its async event loop

use crossterm::event::{Event as TermEvent, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use super::{app::WindowApp, render::render};
use crate::{
    state::{AppState, Event},
    utils::shutdown_signal,
};

/// Take over the terminal, run the window until it is closed, then restore it
pub async fn run_window(state: AppState, prefill: Option<&str>) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init()?;
    info!("Window opened");

    let result = event_loop(&mut terminal, &state, WindowApp::new(prefill)).await;

    ratatui::restore();
    info!("Window closed");
    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    state: &AppState,
    mut app: WindowApp,
) -> anyhow::Result<()> {
    let mut snapshots = state.snapshots.clone();
    let mut terminal_events = EventStream::new();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    while !app.should_quit {
        let view = snapshots.borrow_and_update().view.clone();
        app.sync_focus(view.controls);
        terminal.draw(|frame| render(frame, &app, &view))?;

        tokio::select! {
            next = terminal_events.next() => match next {
                Some(Ok(TermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    for event in app.handle_key(key, &view) {
                        if state.send(event).is_err() {
                            app.should_quit = true;
                        }
                    }
                }
                // Resize and the like only need a redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("Terminal event stream ended");
                    break;
                }
            },
            changed = snapshots.changed() => {
                if changed.is_err() {
                    debug!("Control loop gone, closing window");
                    break;
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }
    Ok(())
}
