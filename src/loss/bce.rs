use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

pub struct BceLoss;

impl BceLoss {
    /// Batch BCE: `(1/N) · Σ −(y·ln(p) + (1−y)·ln(1−p))` over every element of
    /// a `outputs × N` matrix. Summed over output units, averaged over samples.
    ///
    /// The logarithms are not clamped: a prediction of exactly 0 or 1 yields
    /// `inf` or `NaN`, and that value is returned as-is.
    pub fn cost(predictions: &Matrix, labels: &Matrix) -> Result<f64> {
        if predictions.shape() != labels.shape() {
            return Err(NetworkError::ShapeMismatch {
                context: "BceLoss::cost",
                expected: predictions.shape(),
                got: labels.shape(),
            });
        }
        if predictions.cols == 0 {
            return Err(NetworkError::EmptyBatch);
        }

        let losses = predictions.map_indexed(|i, j, p| {
            let y = labels.data[i][j];
            -(y * p.ln() + (1.0 - y) * (1.0 - p).ln())
        });

        Ok(losses.sum() / predictions.cols as f64)
    }
}

/// Binary cross-entropy of `predictions` against `labels`; see `BceLoss::cost`.
pub fn calculate_cost(predictions: &Matrix, labels: &Matrix) -> Result<f64> {
    BceLoss::cost(predictions, labels)
}
