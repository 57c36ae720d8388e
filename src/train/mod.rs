pub mod epoch_stats;
pub mod evaluate;
pub mod train_config;
pub mod trainer;

pub use epoch_stats::EpochStats;
pub use evaluate::{argmax, evaluate, Evaluation, Miss};
pub use train_config::RunConfig;
pub use trainer::train_network;
