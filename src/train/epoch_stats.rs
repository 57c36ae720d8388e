use serde::{Deserialize, Serialize};

/// Per-epoch training statistics returned by `train_network`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Samples trained on in this epoch.
    pub samples: usize,
    /// Mean squared error of the pre-update predictions over the epoch.
    pub mean_squared_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
