pub mod error;
pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::{sigmoid, ActivationFunction};
pub use network::{NeuralNetwork, NetworkSpec, Topology};
pub use loss::bce::{calculate_cost, BceLoss};
pub use train::{demo_dataset, train_network, EpochStats, Run, RunFile, TrainConfig, TrainReport};
