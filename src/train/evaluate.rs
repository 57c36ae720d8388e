use tracing::debug;

use crate::{data::sample::Sample, error::Result, math::matrix::Matrix, network::network::Network};

/// A misclassified sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miss {
    /// Position of the sample in the evaluated set.
    pub line: usize,
    pub target: usize,
    pub predicted: usize,
}

/// Outcome of running a network over a labeled set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub correct: usize,
    pub total: usize,
    pub misses: Vec<Miss>,
}

impl Evaluation {
    /// Fraction of samples classified correctly, in `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }
}

/// Row index of the largest entry in the first column.
///
/// Scans top to bottom starting from row 0 and only moves on a strictly
/// greater value, so ties resolve to the lowest index.
pub fn argmax(output: &Matrix) -> usize {
    let mut max = 0;
    for i in 1..output.rows() {
        if output[(max, 0)] < output[(i, 0)] {
            max = i;
        }
    }
    max
}

/// Queries every sample (scaled the same way as during training) and
/// compares the arg-max prediction with its label.
pub fn evaluate(network: &Network, samples: &[Sample]) -> Result<Evaluation> {
    let mut eval = Evaluation {
        total: samples.len(),
        ..Evaluation::default()
    };

    for (line, sample) in samples.iter().enumerate() {
        let predicted = argmax(&network.query(&sample.scaled_input())?);

        if predicted == sample.label {
            eval.correct += 1;
        } else {
            debug!(line, target = sample.label, found = predicted, "misclassified");
            eval.misses.push(Miss {
                line,
                target: sample.label,
                predicted,
            });
        }
    }

    Ok(eval)
}
