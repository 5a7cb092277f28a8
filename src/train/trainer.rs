use tracing::{debug, info};

use crate::{
    error::Result,
    loss::bce::BceLoss,
    math::matrix::Matrix,
    network::network::NeuralNetwork,
    train::{epoch_stats::EpochStats, train_config::TrainConfig},
};

/// Outcome of a `train_network` run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Cost recorded at every epoch, before that epoch's update.
    pub costs: Vec<f64>,
    /// Output of the last forward pass of the run.
    pub final_predictions: Matrix,
}

impl TrainReport {
    /// `None` only for a report with no recorded epochs.
    pub fn initial_cost(&self) -> Option<f64> {
        self.costs.first().copied()
    }

    pub fn final_cost(&self) -> Option<f64> {
        self.costs.last().copied()
    }
}

/// Full-batch gradient descent: every epoch runs feed-forward, measures the
/// cost of that output, then back-propagates against `labels`.
///
/// `inputs` is `dims[0] × N` and `labels` is `dims[L] × N`.
pub fn train_network(
    network: &mut NeuralNetwork,
    inputs: &Matrix,
    labels: &Matrix,
    config: &TrainConfig,
) -> Result<TrainReport> {
    config.validate()?;
    debug!(
        epochs = config.epochs,
        learning_rate = config.learning_rate,
        samples = inputs.cols,
        "starting training"
    );

    let mut costs = Vec::with_capacity(config.epochs);
    let mut predictions = Matrix::default();

    for epoch in 0..config.epochs {
        // Forward pass
        predictions = network.feed_forward(inputs)?;

        let cost = BceLoss::cost(&predictions, labels)?;
        costs.push(cost);

        // Backward pass
        network.back_propagate(labels, config.learning_rate)?;

        if config.log_every > 0 && epoch % config.log_every == 0 {
            let stats = EpochStats { epoch, total_epochs: config.epochs, cost };
            info!(epoch = stats.epoch, total = stats.total_epochs, cost = stats.cost, "epoch {}: cost {:.4}", stats.epoch, stats.cost);
            debug!(epoch = stats.epoch, predictions = ?predictions.data, "epoch predictions");
        }
    }

    Ok(TrainReport { costs, final_predictions: predictions })
}
