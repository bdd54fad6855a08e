//! Timing engine: turns a suite into one [`Measurement`] per variant.
//!
//! [`TimingEngine::start`] returns immediately with a [`SuiteRun`]. The run
//! streams a `Cycle` event as each variant finishes, a final `Complete`, and
//! its handle resolves to every measurement in variant order.

pub mod options;
pub mod sampler;
pub mod stats;


use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

pub use options::EngineOptions;
pub use stats::SampleStats;

use crate::suite::Suite;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    /// Operations per second.
    pub hz: f64,
    pub mean_ns: f64,
    /// Relative margin of error, percent.
    pub rme: f64,
    pub samples: usize,
}

impl Measurement {
    pub fn from_stats(name: impl Into<String>, stats: &SampleStats) -> Self {
        Self {
            name: name.into(),
            hz: stats.hz(),
            mean_ns: stats.mean * 1e9,
            rme: stats.rme,
            samples: stats.samples,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuiteEvent {
    Cycle(Measurement),
    Complete,
}

/// An in-flight suite.
pub struct SuiteRun {
    events: mpsc::UnboundedReceiver<SuiteEvent>,
    task: JoinHandle<Result<Vec<Measurement>>>,
}

impl SuiteRun {
    pub fn new(events: mpsc::UnboundedReceiver<SuiteEvent>, task: JoinHandle<Result<Vec<Measurement>>>) -> Self {
        Self { events, task }
    }

    /// Next event, or `None` once the engine has dropped its sender.
    pub async fn next_event(&mut self) -> Option<SuiteEvent> {
        self.events.recv().await
    }

    /// Waits for the engine task and returns its measurements.
    pub async fn finish(self) -> Result<Vec<Measurement>> {
        self.task.await.context("timing engine task did not run to completion")?
    }
}

pub trait TimingEngine {
    fn start(&self, suite: Arc<Suite>) -> SuiteRun;
}

/// Measures variants one after another on tokio's blocking pool.
#[derive(Debug, Clone, Default)]
pub struct SamplingEngine {
    options: EngineOptions,
}

impl SamplingEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }
}

impl TimingEngine for SamplingEngine {
    fn start(&self, suite: Arc<Suite>) -> SuiteRun {
        let (tx, rx) = mpsc::unbounded_channel();
        let options = self.options.clone();
        let task = tokio::task::spawn_blocking(move || {
            let mut measurements = Vec::with_capacity(suite.len());
            for entry in suite.entries() {
                let measurement = sampler::measure(entry, &options);
                // A receiver that went away only loses the event, not the result.
                let _ = tx.send(SuiteEvent::Cycle(measurement.clone()));
                measurements.push(measurement);
            }
            debug!(scenario = suite.scenario(), "suite sampled");
            let _ = tx.send(SuiteEvent::Complete);
            Ok(measurements)
        });
        SuiteRun::new(rx, task)
    }
}
