pub mod activation;
pub mod data;
pub mod error;
pub mod knn;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use data::sample::Sample;
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use train::evaluate::{argmax, evaluate, Evaluation};
pub use train::train_config::RunConfig;
pub use train::trainer::train_network;
