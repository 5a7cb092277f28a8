use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;
use crate::network::spec::NetworkSpec;
use crate::train::train_config::TrainConfig;

/// A complete training run as read by the binary.
///
/// ```json
/// { "network": { "layer_dims": [2, 4, 1], "seed": 1 },
///   "train": { "epochs": 1000, "learning_rate": 0.1 },
///   "inputs": [[0, 0, 1, 1], [0, 1, 0, 1]],
///   "labels": [[0, 1, 1, 0]] }
/// ```
///
/// `inputs` and `labels` are nested rows, one sample per column. They must
/// be given together; when both are absent the run uses `demo_dataset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunFile {
    pub network: NetworkSpec,
    #[serde(default)]
    pub train: TrainConfig,
    #[serde(default)]
    pub inputs: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    pub labels: Option<Vec<Vec<f64>>>,
}

/// Everything needed to start `train_network`.
#[derive(Debug, Clone)]
pub struct Run {
    pub network: NetworkSpec,
    pub train: TrainConfig,
    pub inputs: Matrix,
    pub labels: Matrix,
}

impl RunFile {
    pub fn from_json_str(json: &str) -> Result<RunFile> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_json(path: &str) -> Result<RunFile> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolves the dataset and returns the run.
    pub fn into_run(self) -> Result<Run> {
        let (inputs, labels) = match (self.inputs, self.labels) {
            (Some(inputs), Some(labels)) => (Matrix::try_from_data(inputs)?, Matrix::try_from_data(labels)?),
            (None, None) => demo_dataset()?,
            _ => {
                return Err(NetworkError::InvalidConfig(
                    "run file must give both inputs and labels".into(),
                ))
            }
        };
        Ok(Run { network: self.network, train: self.train, inputs, labels })
    }
}

/// Ten height/weight samples with binary labels, `2 × 10` and `1 × 10`.
pub fn demo_dataset() -> Result<(Matrix, Matrix)> {
    let inputs = Matrix::from_flat(2, 10, &[
        150.0, 70.0,
        254.0, 73.0,
        312.0, 68.0,
        120.0, 60.0,
        154.0, 61.0,
        212.0, 65.0,
        216.0, 67.0,
        145.0, 67.0,
        184.0, 64.0,
        130.0, 69.0,
    ])?;
    let labels = Matrix::from_flat(1, 10, &[0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0])?;
    Ok((inputs, labels))
}
