use serde::Deserialize;

/// Default imaging interval between consecutive frames, in minutes.
pub const DEFAULT_TIME_INTERVAL_PER_FRAME: f64 = 5.0;

/// Analysis options supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Time elapsed between consecutive frames; the divisor in every
    /// growth-rate finite difference.
    pub time_interval_per_frame: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            time_interval_per_frame: DEFAULT_TIME_INTERVAL_PER_FRAME,
        }
    }
}
