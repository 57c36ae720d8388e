use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{Error, Result},
    math::matrix::Matrix,
    network::{network::Network, spec::NetworkSpec},
};

/// Serialized snapshot of a trained network.
///
/// The activation function is not part of the record; a restored network is
/// always a sigmoid network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub input_nodes: usize,
    pub hidden_nodes: Vec<usize>,
    pub output_nodes: usize,
    pub learning_rate: f64,
    /// One matrix per layer transition, input side first.
    pub weights: Vec<Matrix>,
}

impl Checkpoint {
    pub fn from_network(network: &Network) -> Checkpoint {
        let spec = network.spec();
        Checkpoint {
            input_nodes: spec.input_nodes,
            hidden_nodes: spec.hidden_nodes.clone(),
            output_nodes: spec.output_nodes,
            learning_rate: spec.learning_rate,
            weights: network.weights().cloned().collect(),
        }
    }

    pub fn into_network(self) -> Result<Network> {
        let spec = NetworkSpec::new(
            self.input_nodes,
            self.hidden_nodes,
            self.output_nodes,
            self.learning_rate,
        );
        Network::from_weights(spec, self.weights)
            .map_err(|e| Error::InvalidCheckpoint(e.to_string()))
    }
}

impl Network {
    /// Writes the network to a pretty-printed JSON checkpoint.
    pub fn save_checkpoint(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &Checkpoint::from_network(self))?;
        info!(path = %path.display(), "saved checkpoint");
        Ok(())
    }

    /// Restores a network previously written by `save_checkpoint`.
    pub fn load_checkpoint(path: impl AsRef<Path>) -> Result<Network> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let checkpoint: Checkpoint = serde_json::from_reader(reader)?;
        let network = checkpoint.into_network()?;
        info!(
            path = %path.display(),
            layers = ?network.spec().layer_sizes(),
            "loaded checkpoint"
        );
        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_network_rejects_inconsistent_weights() {
        let checkpoint = Checkpoint {
            input_nodes: 3,
            hidden_nodes: vec![2],
            output_nodes: 2,
            learning_rate: 0.1,
            weights: vec![Matrix::zeros(2, 3)],
        };
        assert!(matches!(
            checkpoint.into_network(),
            Err(Error::InvalidCheckpoint(_))
        ));
    }

    #[test]
    fn activation_is_not_serialized() {
        let net = Network::new(NetworkSpec::new(2, vec![2], 1, 0.1)).unwrap();
        let json = serde_json::to_string(&Checkpoint::from_network(&net)).unwrap();
        assert!(!json.contains("activ"));
        assert!(!json.contains("Sigmoid"));
    }
}
