//! Runs a [`SuiteCollection`] one suite at a time.
//!
//! A suite is only started after the previous one has sent `Complete`, its
//! engine task has resolved and its table has been flushed. Timing loops never
//! overlap.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::engine::{Measurement, SamplingEngine, SuiteEvent, TimingEngine};
use crate::error::HarnessError;
use crate::report::Reporter;
use crate::suite::{Suite, SuiteCollection};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteReport {
    pub scenario: String,
    pub measurements: Vec<Measurement>,
}

impl SuiteReport {
    pub fn names(&self) -> Vec<&str> {
        self.measurements.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Measures and prints every suite of `collection` with the default engine.
pub async fn launch(collection: &SuiteCollection) -> Result<()> {
    let engine = SamplingEngine::default();
    let mut reporter = Reporter::stdout();
    let reports = run_collection(collection, &engine, &mut reporter).await?;
    debug!(summary = %reports_to_json(&reports)?, "run finished");
    Ok(())
}

pub async fn run_collection<E, W>(
    collection: &SuiteCollection,
    engine: &E,
    reporter: &mut Reporter<W>,
) -> Result<Vec<SuiteReport>>
where
    E: TimingEngine + ?Sized,
    W: Write,
{
    let mut reports = Vec::with_capacity(collection.len());
    for suite in collection.iter() {
        let report = run_suite(suite, engine, reporter)
            .await
            .with_context(|| format!("run suite '{}'", suite.scenario()))?;
        reports.push(report);
    }
    Ok(reports)
}

async fn run_suite<E, W>(suite: &Arc<Suite>, engine: &E, reporter: &mut Reporter<W>) -> Result<SuiteReport>
where
    E: TimingEngine + ?Sized,
    W: Write,
{
    let scenario = suite.scenario();
    reporter.heading(scenario)?;
    info!(scenario, variants = suite.len(), "suite started");

    if let Err(err) = collect_cycles(suite, engine, reporter).await {
        reporter.discard();
        return Err(err);
    }

    let measurements = reporter.flush()?;
    info!(scenario, "suite complete");
    Ok(SuiteReport {
        scenario: scenario.to_string(),
        measurements,
    })
}

/// Feeds every cycle of one suite into `reporter` and checks the run ended cleanly.
async fn collect_cycles<E, W>(suite: &Arc<Suite>, engine: &E, reporter: &mut Reporter<W>) -> Result<()>
where
    E: TimingEngine + ?Sized,
    W: Write,
{
    let scenario = suite.scenario();
    let mut run = engine.start(Arc::clone(suite));
    let mut cycles = 0usize;
    let mut completed = false;
    while let Some(event) = run.next_event().await {
        match event {
            SuiteEvent::Cycle(measurement) => {
                debug!(scenario, variant = %measurement.name, hz = measurement.hz, "cycle");
                cycles += 1;
                reporter.add(measurement);
            }
            SuiteEvent::Complete => {
                completed = true;
                break;
            }
        }
    }

    let measured = run.finish().await?;
    if !completed {
        return Err(HarnessError::SuiteIncomplete {
            scenario: scenario.to_string(),
        }
        .into());
    }
    if measured.len() != cycles {
        return Err(HarnessError::MeasurementMismatch {
            scenario: scenario.to_string(),
            reported: cycles,
            measured: measured.len(),
        }
        .into());
    }
    Ok(())
}

pub fn reports_to_json(reports: &[SuiteReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("serialize suite reports")
}
