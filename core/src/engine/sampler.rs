use std::time::{Duration, Instant};

use tracing::debug;

use super::options::EngineOptions;
use super::stats::SampleStats;
use super::Measurement;
use crate::suite::SuiteEntry;

const MAX_BATCH: u64 = 1 << 40;

fn time_batch(entry: &SuiteEntry, count: u64) -> Duration {
    let start = Instant::now();
    for _ in 0..count {
        entry.run();
    }
    start.elapsed()
}

/// Finds an iteration count whose batch takes at least `min_sample_time`.
fn calibrate(entry: &SuiteEntry, options: &EngineOptions) -> u64 {
    let target = options.min_sample_time.as_secs_f64();
    let mut count = 1u64;
    loop {
        let elapsed = time_batch(entry, count);
        if elapsed >= options.min_sample_time || count >= MAX_BATCH {
            let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
            debug!(variant = entry.name(), count, elapsed_ns, "calibrated batch");
            return count;
        }
        let next = if elapsed.is_zero() {
            count.saturating_mul(10)
        } else {
            let period = elapsed.as_secs_f64() / count as f64;
            ((target / period).ceil() as u64).max(count.saturating_add(1))
        };
        count = next.min(MAX_BATCH);
    }
}

/// Repeats `entry` until its per-operation period is statistically settled.
pub fn measure(entry: &SuiteEntry, options: &EngineOptions) -> Measurement {
    let count = calibrate(entry, options);
    let min_samples = options.min_samples.max(1);
    let started = Instant::now();
    let mut periods = Vec::with_capacity(min_samples);
    while periods.len() < min_samples || started.elapsed() < options.max_time {
        let elapsed = time_batch(entry, count);
        periods.push(elapsed.as_secs_f64() / count as f64);
    }
    let stats = SampleStats::from_periods(&periods);
    debug!(
        variant = entry.name(),
        samples = stats.samples,
        mean_ns = stats.mean * 1e9,
        rme = stats.rme,
        "variant measured"
    );
    Measurement::from_stats(entry.name(), &stats)
}
