//! Uniform integer noise.
//!
//! Each output cell is the input plus an offset drawn uniformly from
//! `[-amount, amount]`, independently per cell. Every call seeds its own
//! generator from OS entropy; results are not reproducible.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::core::{derived_label, int_token, LOG_TARGET};
use crate::error::{FilterError, FilterResult};
use crate::raster::Raster;

/// Add uniform noise of at most `amount` to every cell.
///
/// # Arguments
/// * `source` - Raster to read, left untouched
/// * `amount` - Maximum absolute offset, must be `>= 0`
///
/// # Returns
/// New raster of the same size labelled `noise<amount>-...`
///
/// # Errors
/// `InvalidParameter` if `amount` is negative.
pub fn noise(source: &Raster, amount: i32) -> FilterResult<Raster> {
    let mut rng = StdRng::from_entropy();
    noise_with(source, amount, &mut rng)
}

/// [`noise`] drawing from a caller-supplied generator.
pub(crate) fn noise_with<R: Rng>(
    source: &Raster,
    amount: i32,
    rng: &mut R,
) -> FilterResult<Raster> {
    if amount < 0 {
        warn!(target: LOG_TARGET, "noise amount {} rejected", amount);
        return Err(FilterError::invalid_parameter(
            "amount",
            format!("must be non-negative, got {}", amount),
        ));
    }

    let (width, height) = (source.width(), source.height());
    let label = derived_label(&int_token("noise", amount), source);
    let mut output = Raster::new(width, height, label)?;

    for (dst, src) in output.cells_mut().zip(source.cells()) {
        let offset = rng.gen_range(-amount..=amount);
        dst.set_value(src.value().saturating_add(offset));
    }

    debug!(target: LOG_TARGET, "noise up to {} ({}x{})", amount, width, height);
    Ok(output)
}
