use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;

use crate::engine::Measurement;
use crate::registry::{RunnableUnit, Variant};

/// Counts factory invocations in `builds` and unit invocations in `runs`.
pub fn counting_variant(name: &str, builds: Arc<AtomicUsize>, runs: Arc<AtomicUsize>) -> Variant {
    Variant::new(name, move || {
        builds.fetch_add(1, Ordering::SeqCst);
        let runs = Arc::clone(&runs);
        let unit: RunnableUnit = Box::new(move || {
            runs.fetch_add(1, Ordering::SeqCst);
        });
        Ok(unit)
    })
}

pub fn noop_variant(name: &str) -> Variant {
    Variant::new(name, || {
        let unit: RunnableUnit = Box::new(|| {});
        Ok(unit)
    })
}

pub fn failing_variant(name: &str) -> Variant {
    let label = name.to_string();
    Variant::new(name, move || Err(anyhow!("fixture for '{}' could not be built", label)))
}

pub fn measurement(name: &str, hz: f64, rme: f64, samples: usize) -> Measurement {
    Measurement {
        name: name.to_string(),
        hz,
        mean_ns: if hz > 0.0 { 1e9 / hz } else { 0.0 },
        rme,
        samples,
    }
}

pub fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}
