//! Countdown Timer - a terminal-window countdown timer
//! 
//! This is the main entry point for the countdown-timer application.

use std::{fs::File, sync::Mutex};
use tokio::net::TcpListener;
use tracing::{error, info};

use countdown_timer::{
    api::create_router,
    config::Config,
    state::Event,
    tasks::spawn_countdown_task,
    ui::run_window,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config)?;

    info!("Starting countdown-timer v{}", env!("CARGO_PKG_VERSION"));

    // The control loop owns the countdown; everything else talks to it through `state`
    let (state, control_loop) = spawn_countdown_task();

    if let Some(addr) = &config.listen {
        let listener = TcpListener::bind(addr).await?;
        let app = create_router(state.clone());

        info!("HTTP control running on http://{}", addr);
        info!("  POST /start  - Start a countdown ({{\"input\": \"<seconds>\"}})");
        info!("  POST /stop   - Stop the countdown");
        info!("  GET  /status - Current countdown state");
        info!("  GET  /health - Health check");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Server error: {}", e);
            }
        });
    }

    if config.headless {
        if let Some(seconds) = config.seconds.as_deref() {
            match state.start(seconds).await? {
                Ok(_) => info!("Countdown started from --seconds"),
                Err(e) => error!("Ignoring --seconds: {}", e),
            }
        }
        shutdown_signal().await;
        info!("Shutdown signal received");
    } else {
        run_window(state.clone(), config.seconds.as_deref()).await?;
    }

    let _ = state.send(Event::Quit);
    control_loop.await?;

    info!("Shutdown complete");
    Ok(())
}

/// Logs go to stdout when headless. While the window owns the terminal they
/// go to `--log-file`, or nowhere.
fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(config.log_filter());

    match &config.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if config.headless => builder.init(),
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}
