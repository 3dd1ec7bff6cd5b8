//! Seeded row splits.
//!
//! Split rule: the held-out side receives `ceil(n * fraction)` rows. Row
//! assignment comes from a Fisher-Yates shuffle of the row indices driven by
//! an RNG seeded with a fixed value; the first `ceil(n * fraction)` shuffled
//! indices form the held-out side, the remainder the retained side. Both
//! sides keep shuffle order, so repeated runs produce identical partitions.

use anyhow::Result;
use polars::prelude::{DataFrame, IdxCa, IdxSize};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

use churn_model::PrepError;

/// Parameters of one split.
#[derive(Debug, Clone, Copy)]
pub struct SplitSpec {
    holdout_fraction: f64,
    seed: u64,
}

impl SplitSpec {
    /// The fraction must lie strictly between 0 and 1.
    pub fn new(holdout_fraction: f64, seed: u64) -> Result<Self> {
        if !(holdout_fraction > 0.0 && holdout_fraction < 1.0) {
            return Err(PrepError::Message(format!(
                "holdout fraction {holdout_fraction} is outside (0, 1)"
            ))
            .into());
        }
        Ok(Self {
            holdout_fraction,
            seed,
        })
    }

    /// Number of rows the held-out side receives from `height` rows.
    pub fn holdout_len(&self, height: usize) -> usize {
        ((height as f64) * self.holdout_fraction).ceil() as usize
    }
}

/// Split a frame into `(retained, holdout)` row subsets.
pub fn split_rows(frame: &DataFrame, spec: SplitSpec) -> Result<(DataFrame, DataFrame)> {
    let height = frame.height();
    let holdout_len = spec.holdout_len(height);

    let mut indices: Vec<IdxSize> = (0..height as IdxSize).collect();
    let mut rng = StdRng::seed_from_u64(spec.seed);
    indices.shuffle(&mut rng);

    let holdout_idx = IdxCa::from_vec("holdout".into(), indices[..holdout_len].to_vec());
    let retained_idx = IdxCa::from_vec("retained".into(), indices[holdout_len..].to_vec());

    let retained = frame.take(&retained_idx)?;
    let holdout = frame.take(&holdout_idx)?;
    debug!(
        rows = height,
        retained = retained.height(),
        holdout = holdout.height(),
        "split rows"
    );
    Ok((retained, holdout))
}
