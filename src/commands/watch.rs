//! Watch command handler
//!
//! Runs the live dashboard: starts the poller, redraws on every refresh
//! signal, and reads stdin so the operator can acknowledge the displayed
//! alert with Enter. Ctrl-C (or stdin closing) stops the poller and exits.

use crate::cli::args::WatchArgs;
use crate::cli::output::render_dashboard;
use crate::config::Config;
use crate::error::Result;
use crate::services::{Poller, PollerConfig};

use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Run the live polling dashboard until interrupted
pub async fn run_watch(config: &Config, args: &WatchArgs) -> Result<()> {
    let api = Arc::new(super::backend_client(config)?);

    let interval = args
        .interval
        .map(Duration::from_secs)
        .unwrap_or_else(|| config.poll.interval());
    let poller_config = PollerConfig {
        interval,
        notify: config.alerts.enabled && !args.no_notify,
        recipient: args
            .recipient
            .clone()
            .or_else(|| config.alerts.recipient.clone()),
    };
    log::info!("Polling every {}s", interval.as_secs());

    let poller = Poller::new(Arc::clone(&api), api, poller_config);
    let state = poller.state();
    let mut refresh = poller.subscribe();
    let handle = poller.start();

    let use_colors = supports_color();
    let mut colors = HashMap::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = refresh.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&state, &mut colors, use_colors);
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(_)) => {
                        let acked = state
                            .lock()
                            .expect("dashboard state lock poisoned")
                            .queue
                            .acknowledge();
                        if let Some(alert) = acked {
                            log::info!("Acknowledged alert for {}", alert.sid);
                        }
                        draw(&state, &mut colors, use_colors);
                    }
                    Ok(None) | Err(_) => break,
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    handle.stop().await;
    Ok(())
}

fn draw(
    state: &Arc<std::sync::Mutex<crate::services::DashboardState>>,
    colors: &mut HashMap<String, &'static str>,
    use_colors: bool,
) {
    let snapshot = state.lock().expect("dashboard state lock poisoned").clone();
    let rendered = render_dashboard(&snapshot, colors, use_colors);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if use_colors {
        // Clear screen and home the cursor before each redraw
        let _ = write!(handle, "\x1b[2J\x1b[H");
    }
    let _ = writeln!(handle, "{}", rendered);
    let _ = handle.flush();
}

fn supports_color() -> bool {
    match std::env::var("TERM") {
        Ok(term) => term != "dumb",
        Err(_) => false,
    }
}
