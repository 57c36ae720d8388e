use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shape and learning rate of a network.
///
/// Fields:
/// - `input_nodes`   — length of the feature vector fed to `query`/`train`
/// - `hidden_nodes`  — sizes of the hidden layers, input side first
/// - `output_nodes`  — number of classes
/// - `learning_rate` — step size of every weight update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_nodes: usize,
    pub hidden_nodes: Vec<usize>,
    pub output_nodes: usize,
    pub learning_rate: f64,
}

impl NetworkSpec {
    pub fn new(
        input_nodes: usize,
        hidden_nodes: Vec<usize>,
        output_nodes: usize,
        learning_rate: f64,
    ) -> NetworkSpec {
        NetworkSpec {
            input_nodes,
            hidden_nodes,
            output_nodes,
            learning_rate,
        }
    }

    /// Node counts of every layer, input first and output last.
    pub fn layer_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_nodes.len() + 2);
        sizes.push(self.input_nodes);
        sizes.extend_from_slice(&self.hidden_nodes);
        sizes.push(self.output_nodes);
        sizes
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = self.layer_sizes();
        if let Some(pos) = sizes.iter().position(|&n| n == 0) {
            return Err(Error::InvalidSpec(format!("layer {pos} has zero nodes")));
        }
        if let Some(pos) = sizes.windows(2).position(|p| p[0].checked_mul(p[1]).is_none()) {
            return Err(Error::InvalidSpec(format!(
                "weight matrix {pos} ({}x{}) is too large",
                sizes[pos + 1],
                sizes[pos]
            )));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(Error::InvalidSpec(format!(
                "learning rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let reader = BufReader::new(File::open(path)?);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::new(784, vec![100], 10, 0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_sizes_in_order() {
        let spec = NetworkSpec::new(4, vec![3, 2], 1, 0.2);
        assert_eq!(spec.layer_sizes(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn validate_rejects_zero_nodes_and_bad_rates() {
        assert!(NetworkSpec::new(0, vec![3], 2, 0.1).validate().is_err());
        assert!(NetworkSpec::new(4, vec![0], 2, 0.1).validate().is_err());
        assert!(NetworkSpec::new(4, vec![3], 2, 0.0).validate().is_err());
        assert!(NetworkSpec::new(4, vec![3], 2, f64::NAN).validate().is_err());
        assert!(NetworkSpec::new(4, vec![], 2, 0.3).validate().is_ok());
        assert!(NetworkSpec::new(2, vec![], usize::MAX / 2 + 1, 0.3).validate().is_err());
    }

    #[test]
    fn json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        let spec = NetworkSpec::new(784, vec![200, 100], 10, 0.2);

        spec.save_json(&path).unwrap();
        assert_eq!(NetworkSpec::load_json(&path).unwrap(), spec);
    }
}
