//! Polling scheduler
//!
//! Drives the refresh cycle: one immediate fetch-evaluate cycle on start,
//! then a recurring cycle on a fixed interval. Owns cancellation: stopping
//! the poller cancels the timer and drops any in-flight fetch before it can
//! touch state.
//!
//! One cycle fetches readings and limits concurrently, joins them, runs the
//! threshold evaluator, and applies the result to the shared dashboard
//! state. The loop awaits each cycle to completion before the next tick, so
//! cycles never overlap and state mutations apply in cycle-start order.

use crate::alerts::{evaluate, AlertQueue};
use crate::api::{AlertMailer, TelemetrySource};
use crate::domain::{Breach, LimitConfig, SensorReading};
use crate::error::FetchError;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Shared state consumed by the presentation surface
///
/// Mutated exclusively by the poller's cycle and by operator
/// acknowledgment; both go through the mutex, so no two transitions
/// interleave.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Latest readings from provisioned sensors, replaced wholesale each
    /// successful cycle. Never contains the `UNKNOWN` sentinel.
    pub sensors: Vec<SensorReading>,
    /// Latest configured limits, refreshed alongside readings
    pub limits: Vec<LimitConfig>,
    /// Unacknowledged breaches; head is the displayed alert
    pub queue: AlertQueue,
    /// Number of cycles that have applied state so far
    pub cycles_completed: u64,
}

/// Poller settings
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Time between fetch-evaluate cycles
    pub interval: Duration,
    /// Whether breach cycles dispatch an email notification
    pub notify: bool,
    /// Administrator address for notifications
    pub recipient: Option<String>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(240),
            notify: true,
            recipient: None,
        }
    }
}

/// Polling scheduler over a telemetry source and an alert mailer
pub struct Poller<S, M> {
    source: Arc<S>,
    mailer: Arc<M>,
    config: PollerConfig,
    state: Arc<Mutex<DashboardState>>,
    refresh: watch::Sender<u64>,
}

/// Cancellation handle returned by [`Poller::start`]
pub struct PollerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the poller: cancel the timer and any in-flight cycle, then wait
    /// for the task to finish. A fetch that resolves after this point never
    /// updates state.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

impl<S, M> Poller<S, M>
where
    S: TelemetrySource,
    M: AlertMailer + 'static,
{
    /// Create a poller with empty dashboard state
    pub fn new(source: Arc<S>, mailer: Arc<M>, config: PollerConfig) -> Self {
        let (refresh, _) = watch::channel(0);
        Self {
            source,
            mailer,
            config,
            state: Arc::new(Mutex::new(DashboardState::default())),
            refresh,
        }
    }

    /// Handle to the shared dashboard state
    pub fn state(&self) -> Arc<Mutex<DashboardState>> {
        Arc::clone(&self.state)
    }

    /// Subscribe to refresh signals; the value is the completed cycle count
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.refresh.subscribe()
    }

    /// Run the polling loop until `shutdown` fires.
    ///
    /// The first tick fires immediately; subsequent ticks follow the
    /// configured interval.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.config.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {}
            }

            // A cancelled cycle is dropped at an await point, which is
            // always before the synchronous state mutation inside cycle().
            tokio::select! {
                _ = shutdown.changed() => break,
                result = self.cycle() => {
                    if let Err(e) = result {
                        log::warn!("Polling cycle aborted: {}", e);
                    }
                }
            }
        }

        log::debug!("Poller stopped");
    }

    /// Run one fetch-evaluate cycle.
    ///
    /// If either fetch fails the cycle aborts without mutating the queue or
    /// the displayed readings: stale data is preferable to a false-clear.
    async fn cycle(&self) -> Result<(), FetchError> {
        let (readings, limits) = tokio::try_join!(
            self.source.fetch_readings(),
            self.source.fetch_limits(),
        )?;

        let breaches = evaluate(&readings, &limits);

        // No awaits from here to the end of the lock scope: the mutation
        // is atomic with respect to cancellation and other transitions.
        let cycle = {
            let mut state = self.state.lock().expect("dashboard state lock poisoned");
            state.sensors = readings
                .into_iter()
                .filter(SensorReading::is_provisioned)
                .collect();
            state.limits = limits;
            state.queue.on_new_breaches(breaches.clone());
            state.cycles_completed += 1;
            state.cycles_completed
        };

        if !breaches.is_empty() {
            log::info!("Cycle {} detected {} breach(es)", cycle, breaches.len());
            self.dispatch_notification(breaches);
        }

        let _ = self.refresh.send(cycle);
        Ok(())
    }

    /// Fire-and-forget notification for this cycle's breaches.
    ///
    /// Not awaited by the cycle; a slow or failing alert endpoint must not
    /// delay the next poll or block alert display.
    fn dispatch_notification(&self, breaches: Vec<Breach>) {
        if !self.config.notify {
            return;
        }

        let Some(recipient) = self.config.recipient.clone() else {
            log::debug!("No alert recipient configured; skipping notification");
            return;
        };

        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(e) = mailer.send_alert(&recipient, &breaches).await {
                log::warn!("Alert notification failed: {}", e);
            }
        });
    }
}

impl<S, M> Poller<S, M>
where
    S: TelemetrySource + 'static,
    M: AlertMailer + 'static,
{
    /// Spawn the polling loop, returning its cancellation handle
    pub fn start(self) -> PollerHandle {
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(self.run(rx));
        PollerHandle { shutdown: tx, task }
    }
}
