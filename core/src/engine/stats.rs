/// Two-tailed 95% critical values of Student's t, indexed by `df - 1`.
const T_TABLE: [f64; 30] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, 2.201, 2.179, 2.16, 2.145, 2.131, 2.12,
    2.11, 2.101, 2.093, 2.086, 2.08, 2.074, 2.069, 2.064, 2.06, 2.056, 2.052, 2.048, 2.045, 2.042,
];

const T_INFINITY: f64 = 1.96;

pub fn t_critical(df: usize) -> f64 {
    match df {
        0 => T_INFINITY,
        1..=30 => T_TABLE[df - 1],
        _ => T_INFINITY,
    }
}

/// Summary of per-operation periods, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    pub samples: usize,
    pub mean: f64,
    pub variance: f64,
    pub deviation: f64,
    /// Standard error of the mean.
    pub sem: f64,
    /// Margin of error at 95% confidence.
    pub moe: f64,
    /// Relative margin of error, percent of the mean.
    pub rme: f64,
}

impl SampleStats {
    pub fn from_periods(periods: &[f64]) -> Self {
        let samples = periods.len();
        if samples == 0 {
            return Self {
                samples,
                mean: 0.0,
                variance: 0.0,
                deviation: 0.0,
                sem: 0.0,
                moe: 0.0,
                rme: 0.0,
            };
        }
        let n = samples as f64;
        let mean = periods.iter().sum::<f64>() / n;
        let variance = if samples > 1 {
            periods.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let deviation = variance.sqrt();
        let sem = deviation / n.sqrt();
        let moe = sem * t_critical(samples - 1);
        let rme = if mean > 0.0 { moe / mean * 100.0 } else { 0.0 };
        Self {
            samples,
            mean,
            variance,
            deviation,
            sem,
            moe,
            rme,
        }
    }

    /// Operations per second.
    pub fn hz(&self) -> f64 {
        if self.mean > 0.0 { 1.0 / self.mean } else { 0.0 }
    }
}
