use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Shortest acceptable batch; calibration grows the iteration count until a batch reaches it.
    pub min_sample_time: Duration,
    /// Sampling continues until this much time has been spent on one variant.
    pub max_time: Duration,
    pub min_samples: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            min_sample_time: Duration::from_millis(50),
            max_time: Duration::from_secs(5),
            min_samples: 5,
        }
    }
}

impl EngineOptions {
    /// Millisecond-scale settings for smoke runs and tests.
    pub fn quick() -> Self {
        Self {
            min_sample_time: Duration::from_millis(1),
            max_time: Duration::from_millis(20),
            min_samples: 3,
        }
    }
}
