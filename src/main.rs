/// digit-net
///
/// Trains (or restores) a sigmoid network on a CSV digit dataset, then
/// reports accuracy on a test file.
///
/// Run with:
///   cargo run --release -- --train mnist_train.csv --test mnist_test.csv --epochs 5
///   cargo run --release -- --config run.json --load
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use digit_net::{data, evaluate, train_network, Network, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "digit-net", version, about)]
struct Cli {
    /// JSON run configuration; flags below override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Training CSV (label first, then pixel values)
    #[arg(long, value_name = "FILE")]
    train: Option<PathBuf>,

    /// Test CSV
    #[arg(long, value_name = "FILE")]
    test: Option<PathBuf>,

    #[arg(long)]
    epochs: Option<usize>,

    #[arg(long)]
    input_nodes: Option<usize>,

    /// Hidden layer size; repeat for more hidden layers
    #[arg(long = "hidden", value_name = "NODES")]
    hidden: Vec<usize>,

    #[arg(long)]
    output_nodes: Option<usize>,

    #[arg(long)]
    learning_rate: Option<f64>,

    #[arg(long, value_name = "FILE")]
    checkpoint: Option<PathBuf>,

    /// Restore the network from the checkpoint instead of training
    #[arg(long)]
    load: bool,

    /// Write the network to the checkpoint after evaluation
    #[arg(long)]
    save: bool,

    /// Seed for weight initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Log every misclassified sample
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides_shape(&self) -> bool {
        self.input_nodes.is_some()
            || !self.hidden.is_empty()
            || self.output_nodes.is_some()
            || self.learning_rate.is_some()
            || self.epochs.is_some()
            || self.seed.is_some()
    }

    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_json(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => RunConfig::default(),
        };
        let shape_flags = self.overrides_shape();

        if let Some(p) = self.train {
            config.train_path = p;
        }
        if let Some(p) = self.test {
            config.test_path = p;
        }
        if let Some(p) = self.checkpoint {
            config.checkpoint_path = p;
        }
        if let Some(n) = self.epochs {
            config.epochs = n;
        }
        if let Some(n) = self.input_nodes {
            config.network.input_nodes = n;
        }
        if !self.hidden.is_empty() {
            config.network.hidden_nodes = self.hidden;
        }
        if let Some(n) = self.output_nodes {
            config.network.output_nodes = n;
        }
        if let Some(lr) = self.learning_rate {
            config.network.learning_rate = lr;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.load_checkpoint |= self.load;
        config.save_checkpoint |= self.save;

        if config.load_checkpoint && shape_flags {
            warn!(
                checkpoint = %config.checkpoint_path.display(),
                "network shape, learning rate, epochs and seed come from the checkpoint; \
                 the corresponding flags are ignored"
            );
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_network(config: &RunConfig) -> Result<Network> {
    if config.load_checkpoint {
        return Network::load_checkpoint(&config.checkpoint_path).with_context(|| {
            format!("loading checkpoint {}", config.checkpoint_path.display())
        });
    }

    let network = match config.seed {
        Some(seed) => Network::with_rng(config.network.clone(), &mut StdRng::seed_from_u64(seed)),
        None => Network::new(config.network.clone()),
    }?;
    Ok(network)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = cli.into_config()?;

    let now = Instant::now();
    let mut network = build_network(&config)?;

    if !config.load_checkpoint {
        let samples = data::load_csv(&config.train_path)
            .with_context(|| format!("loading training data {}", config.train_path.display()))?;
        train_network(&mut network, &samples, config.epochs)?;
    }
    info!(elapsed = ?now.elapsed(), "finished training");

    let now = Instant::now();
    let samples = data::load_csv(&config.test_path)
        .with_context(|| format!("loading test data {}", config.test_path.display()))?;
    let result = evaluate(&network, &samples)?;
    info!(
        elapsed = ?now.elapsed(),
        correct = result.correct,
        total = result.total,
        accuracy = result.accuracy(),
        "finished testing"
    );
    println!("{}", result.accuracy());

    if config.save_checkpoint {
        if let Some(dir) = config.checkpoint_path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        network
            .save_checkpoint(&config.checkpoint_path)
            .with_context(|| format!("saving checkpoint {}", config.checkpoint_path.display()))?;
    }

    Ok(())
}
