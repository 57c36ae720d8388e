use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    network::spec::NetworkSpec,
};

/// Everything a training/evaluation run needs.
///
/// # Fields
/// - `network`          — node counts and learning rate
/// - `epochs`           — full passes over the training file
/// - `train_path`       — CSV file to train on
/// - `test_path`        — CSV file to evaluate on
/// - `checkpoint_path`  — where checkpoints are read from / written to
/// - `load_checkpoint`  — restore the network instead of training it
/// - `save_checkpoint`  — write the network after evaluation
/// - `seed`             — fixed seed for weight initialization
///
/// Missing fields in a JSON config fall back to [`RunConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub network: NetworkSpec,
    pub epochs: usize,
    pub train_path: PathBuf,
    pub test_path: PathBuf,
    pub checkpoint_path: PathBuf,
    pub load_checkpoint: bool,
    pub save_checkpoint: bool,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks the settings that matter for this run. A run that loads a
    /// checkpoint takes its shape from the file, so `network` and `epochs`
    /// are not checked then.
    pub fn validate(&self) -> Result<()> {
        if self.load_checkpoint {
            return Ok(());
        }
        self.network.validate()?;
        if self.epochs == 0 {
            return Err(Error::InvalidSpec("epochs must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            network: NetworkSpec::default(),
            epochs: 2,
            train_path: PathBuf::from("./mnist_dataset/mnist_train_100.csv"),
            test_path: PathBuf::from("./mnist_dataset/mnist_test_10.csv"),
            checkpoint_path: PathBuf::from("./checkpoints/784-100-10-01.json"),
            load_checkpoint: false,
            save_checkpoint: false,
            seed: None,
        }
    }
}
