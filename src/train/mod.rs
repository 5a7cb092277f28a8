pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod run_file;

pub use trainer::{train_network, TrainReport};
pub use epoch_stats::EpochStats;
pub use train_config::TrainConfig;
pub use run_file::{demo_dataset, Run, RunFile};
