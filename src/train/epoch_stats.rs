use serde::{Serialize, Deserialize};

/// Progress snapshot logged by `train_network`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 0-based epoch index.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Cost of the predictions made at the start of this epoch, before the
    /// weight update.
    pub cost: f64,
}
