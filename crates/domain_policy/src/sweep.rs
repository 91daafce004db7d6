//! Expiration sweep
//!
//! A long-lived background task that periodically scans every policy and
//! raises one [`ExpirationNotice`] per policy whose detection window contains
//! the sweep time.
//!
//! # Cycle
//!
//! ```text
//! list_all_policies -> skip notified -> should_notify(now) -> emit -> mark notified
//!        │                                                              │
//!        └──────────────── sleep(interval) or shutdown ◄────────────────┘
//! ```
//!
//! The set of notified policies lives in memory for the lifetime of the
//! sweep. A restart forgets it, so a policy still inside its window at
//! restart may be notified again; one whose window has closed will not.
//!
//! # Example
//!
//! ```rust,ignore
//! let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
//! let sweep = ExpirationSweep::new(store, Arc::new(TracingNotificationSink), SweepConfig::default());
//! let handle = sweep.spawn(stop_rx)?;
//! // ...
//! stop_tx.send(true).ok();
//! handle.await?;
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use core_kernel::{PolicyId, PortError};

use crate::error::PolicyError;
use crate::events::ExpirationNotice;
use crate::expiration::ExpirationRules;
use crate::ports::PolicyPort;

/// Default pause between sweep cycles
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Destination for expiration notices
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Delivers a notice. Delivery failures are the sink's own concern.
    async fn emit(&self, notice: &ExpirationNotice);
}

/// Writes each notice as a structured `tracing` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

#[async_trait]
impl NotificationSink for TracingNotificationSink {
    async fn emit(&self, notice: &ExpirationNotice) {
        info!(
            target: "policy_expiration",
            policy_id = %notice.policy_id,
            car_id = %notice.car_id,
            provider = %notice.provider,
            end_date = %notice.end_date,
            expired_at = %notice.expired_at,
            "{}",
            notice.message()
        );
    }
}

/// Sweep timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    interval: Duration,
    rules: ExpirationRules,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SWEEP_INTERVAL,
            rules: ExpirationRules::default(),
        }
    }
}

impl SweepConfig {
    /// Creates a configuration
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidConfiguration` for a zero interval
    pub fn new(interval: Duration, rules: ExpirationRules) -> Result<Self, PolicyError> {
        if interval.is_zero() {
            return Err(PolicyError::invalid_configuration(
                "sweep interval must be greater than zero",
            ));
        }
        Ok(Self { interval, rules })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn rules(&self) -> &ExpirationRules {
        &self.rules
    }
}

/// Outcome of a single sweep cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Policies returned by the store
    pub scanned: usize,
    /// Policies skipped because they were notified in an earlier cycle
    pub already_notified: usize,
    /// Policies notified in this cycle
    pub notified: Vec<PolicyId>,
}

/// Periodic expiration detector
///
/// Only one sweep may run against a given store at a time, however many
/// handles point at it. Stores are told apart by [`PolicyPort::store_key`];
/// `run` and `spawn` refuse to start a second sweep on the same key.
pub struct ExpirationSweep {
    policies: Arc<dyn PolicyPort>,
    sink: Arc<dyn NotificationSink>,
    config: SweepConfig,
    notified: HashSet<PolicyId>,
}

impl ExpirationSweep {
    /// Creates a sweep over `policies` reporting to `sink`
    pub fn new(
        policies: Arc<dyn PolicyPort>,
        sink: Arc<dyn NotificationSink>,
        config: SweepConfig,
    ) -> Self {
        Self {
            policies,
            sink,
            config,
            notified: HashSet::new(),
        }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Returns true if `policy_id` has already been notified
    pub fn is_notified(&self, policy_id: PolicyId) -> bool {
        self.notified.contains(&policy_id)
    }

    /// Number of policies notified so far
    pub fn notified_count(&self) -> usize {
        self.notified.len()
    }

    /// Runs one full pass over all policies as of `now`
    ///
    /// # Errors
    ///
    /// Returns the store error if policies cannot be listed. Nothing is
    /// marked as notified in that case.
    #[instrument(skip(self))]
    pub async fn run_cycle(&mut self, now: DateTime<Utc>) -> Result<CycleReport, PortError> {
        let policies = self.policies.list_all_policies().await?;

        let mut report = CycleReport {
            scanned: policies.len(),
            ..Default::default()
        };

        for policy in &policies {
            if self.notified.contains(&policy.id) {
                report.already_notified += 1;
                continue;
            }

            let Some(notice) = ExpirationNotice::detect(policy, &self.config.rules, now) else {
                continue;
            };

            self.sink.emit(&notice).await;
            self.notified.insert(policy.id);
            report.notified.push(policy.id);
        }

        Ok(report)
    }

    /// Runs the sweep on the current task until `shutdown` fires
    ///
    /// The loop stops when `true` is sent or the sender is dropped.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::SweepAlreadyRunning` if another sweep holds the
    /// lease on the same store.
    pub async fn run(self, shutdown: watch::Receiver<bool>) -> Result<(), PolicyError> {
        let lease = SweepLease::acquire(&self.policies)?;
        self.run_loop(lease, shutdown).await;
        Ok(())
    }

    /// Spawns the sweep as a background tokio task
    ///
    /// The lease is taken before spawning, so a second sweep on the same
    /// store is refused here rather than inside the task.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::SweepAlreadyRunning` if another sweep holds the
    /// lease on the same store.
    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> Result<JoinHandle<()>, PolicyError> {
        let lease = SweepLease::acquire(&self.policies)?;
        Ok(tokio::spawn(self.run_loop(lease, shutdown)))
    }

    async fn run_loop(mut self, _lease: SweepLease, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_ms = self.config.interval.as_millis() as u64,
            detection_window_secs = self.config.rules.detection_window().num_seconds(),
            "Expiration sweep started"
        );

        loop {
            let stopped = *shutdown.borrow();
            if stopped {
                break;
            }

            let now = Utc::now();
            tokio::select! {
                result = self.run_cycle(now) => match result {
                    Ok(report) if !report.notified.is_empty() => {
                        info!(
                            scanned = report.scanned,
                            notified = report.notified.len(),
                            "Expiration sweep cycle complete"
                        );
                    }
                    Ok(report) => {
                        debug!(scanned = report.scanned, "Expiration sweep cycle complete");
                    }
                    Err(error) => {
                        warn!(%error, "Expiration sweep cycle abandoned");
                    }
                },
                _ = stop_requested(&mut shutdown) => break,
            }

            tokio::select! {
                _ = tokio::time::sleep(self.config.interval) => {}
                _ = stop_requested(&mut shutdown) => break,
            }
        }

        info!(notified = self.notified.len(), "Expiration sweep stopped");
    }
}

/// Resolves once `true` is sent or the sender is dropped
///
/// A `false` send wakes the receiver but does not stop the sweep.
async fn stop_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if shutdown.changed().await.is_err() {
            return;
        }
        if *shutdown.borrow_and_update() {
            return;
        }
    }
}

/// Stores with a running sweep
static ACTIVE_SWEEPS: Mutex<Vec<String>> = Mutex::new(Vec::new());

/// Exclusive right to sweep one store, released on drop
struct SweepLease {
    store_key: String,
}

impl SweepLease {
    fn acquire(store: &Arc<dyn PolicyPort>) -> Result<Self, PolicyError> {
        let store_key = store.store_key();
        let mut active = ACTIVE_SWEEPS.lock().unwrap_or_else(PoisonError::into_inner);

        if active.contains(&store_key) {
            return Err(PolicyError::SweepAlreadyRunning);
        }
        active.push(store_key.clone());
        Ok(Self { store_key })
    }
}

impl Drop for SweepLease {
    fn drop(&mut self) {
        let mut active = ACTIVE_SWEEPS.lock().unwrap_or_else(PoisonError::into_inner);
        active.retain(|key| *key != self.store_key);
    }
}
