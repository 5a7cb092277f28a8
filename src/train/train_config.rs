use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

fn default_epochs() -> usize {
    1000
}

fn default_learning_rate() -> f64 {
    0.1
}

fn default_log_every() -> usize {
    20
}

/// Configuration for a `train_network` run.
///
/// # Fields
/// - `epochs`        — number of full-batch forward/backward cycles
/// - `learning_rate` — step size applied to every gradient
/// - `log_every`     — emit an `EpochStats` log line every this many epochs;
///                     `0` disables progress logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_log_every")]
    pub log_every: usize,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with the default logging interval.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            log_every: default_log_every(),
        }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NetworkError::InvalidConfig("epochs must be at least 1".into()));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetworkError::InvalidConfig(format!(
                "learning_rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(default_epochs(), default_learning_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: TrainConfig = serde_json::from_str(r#"{ "learning_rate": 1.0 }"#).unwrap();
        assert_eq!(config, TrainConfig { epochs: 1000, learning_rate: 1.0, log_every: 20 });
    }

    #[test]
    fn validation() {
        assert!(TrainConfig::default().validate().is_ok());
        assert!(TrainConfig::new(0, 0.1).validate().is_err());
        assert!(TrainConfig::new(10, 0.0).validate().is_err());
        assert!(TrainConfig::new(10, f64::NAN).validate().is_err());
    }
}
