use std::time::Instant;

use tracing::info;

use crate::{
    data::sample::{target_vector, Sample},
    error::Result,
    loss::mse::MseLoss,
    network::network::Network,
    train::epoch_stats::EpochStats,
};

/// Trains `network` on `samples` for `epochs` full passes, in file order.
///
/// Every sample is scaled, paired with its 0.01/0.99 target vector and fed to
/// `Network::train`. The first failing sample aborts the run.
pub fn train_network(
    network: &mut Network,
    samples: &[Sample],
    epochs: usize,
) -> Result<Vec<EpochStats>> {
    let mut history = Vec::with_capacity(epochs);

    for epoch in 1..=epochs {
        let t_start = Instant::now();
        let mut total_loss = 0.0;

        for sample in samples {
            let target = target_vector(sample.label, network.output_nodes())?;
            let output = network.train(&sample.scaled_input(), &target)?;
            total_loss += MseLoss::loss(&output, &target)?;
        }

        let stats = EpochStats {
            epoch,
            total_epochs: epochs,
            samples: samples.len(),
            mean_squared_error: if samples.is_empty() {
                0.0
            } else {
                total_loss / samples.len() as f64
            },
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        info!(
            epoch = stats.epoch,
            total_epochs = stats.total_epochs,
            samples = stats.samples,
            mse = stats.mean_squared_error,
            elapsed_ms = stats.elapsed_ms,
            "finished epoch"
        );
        history.push(stats);
    }

    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{math::matrix::Matrix, network::spec::NetworkSpec};
    use rand::{rngs::StdRng, SeedableRng};

    fn sample(label: usize, pixels: &[f64]) -> Sample {
        Sample {
            label,
            pixels: Matrix::from_values(pixels.len(), 1, pixels.to_vec()).unwrap(),
        }
    }

    #[test]
    fn loss_decreases_across_epochs() {
        let samples = vec![
            sample(0, &[255.0, 0.0, 0.0, 0.0]),
            sample(1, &[0.0, 255.0, 0.0, 0.0]),
            sample(2, &[0.0, 0.0, 255.0, 255.0]),
        ];
        let spec = NetworkSpec::new(4, vec![6], 3, 0.3);
        let mut net = Network::with_rng(spec, &mut StdRng::seed_from_u64(5)).unwrap();

        let history = train_network(&mut net, &samples, 30).unwrap();

        assert_eq!(history.len(), 30);
        assert_eq!(history[0].epoch, 1);
        assert_eq!(history[29].total_epochs, 30);
        assert!(history[29].mean_squared_error < history[0].mean_squared_error);
    }

    #[test]
    fn out_of_range_label_aborts() {
        let samples = vec![sample(3, &[1.0, 2.0])];
        let mut net = Network::new(NetworkSpec::new(2, vec![2], 3, 0.1)).unwrap();
        assert!(train_network(&mut net, &samples, 1).is_err());
    }
}
