//! Point-wise intensity filters: Brighten, Darken, Invert, Contrast.
//!
//! These filters map each cell independently and need no spatial context.
//! Brighten, darken and invert rewrite the raster in place; contrast
//! allocates a new raster.
//!
//! Results outside `0..=255` are saturated by the cell write path.

use log::{debug, warn};

use super::core::{derived_label, int_token, map_cells, real_token, relabel, LOG_TARGET};
use crate::error::{FilterError, FilterResult};
use crate::raster::{Cell, Raster};

// ============================================================================
// Brighten / Darken
// ============================================================================

/// Add `amount` to every cell, in place.
///
/// The label is prefixed `brighten<amount>-`.
pub fn brighten(raster: &mut Raster, amount: i32) -> &mut Raster {
    for cell in raster.cells_mut() {
        cell.set_value(cell.value().saturating_add(amount));
    }
    relabel(raster, &int_token("brighten", amount));

    debug!(target: LOG_TARGET, "brighten by {} ({}x{})", amount, raster.width(), raster.height());
    raster
}

/// Subtract `amount` from every cell, in place.
///
/// The label is prefixed `darken<amount>-`.
pub fn darken(raster: &mut Raster, amount: i32) -> &mut Raster {
    for cell in raster.cells_mut() {
        cell.set_value(cell.value().saturating_sub(amount));
    }
    relabel(raster, &int_token("darken", amount));

    debug!(target: LOG_TARGET, "darken by {} ({}x{})", amount, raster.width(), raster.height());
    raster
}

// ============================================================================
// Invert
// ============================================================================

/// Map every cell `v` to `255 - v`, in place.
pub fn invert(raster: &mut Raster) -> &mut Raster {
    for cell in raster.cells_mut() {
        cell.set_value(Cell::MAX - cell.value());
    }
    relabel(raster, "invert");

    debug!(target: LOG_TARGET, "invert ({}x{})", raster.width(), raster.height());
    raster
}

// ============================================================================
// Contrast
// ============================================================================

/// Remap one intensity through the contrast curve with exponent `p`.
///
/// The intensity is moved to `[-1, 1]`, raised to `p` keeping its sign, and
/// moved back to `[0, 255]` with rounding. `x == 0` stays at mid-gray for
/// every `p`.
pub fn contrast_curve(value: i32, p: f64) -> i32 {
    let scale = Cell::MAX as f64;
    let x = (2.0 * value as f64) / scale - 1.0;
    let y = if x == 0.0 {
        0.0
    } else {
        x.signum() * x.abs().powf(p)
    };
    (((y + 1.0) / 2.0) * scale).round() as i32
}

/// Increase (or, for negative `amount`, reduce) contrast around mid-gray.
///
/// Each intensity goes through [`contrast_curve`] with `p = e^(-amount)`.
/// `amount = 0` is the identity.
///
/// # Arguments
/// * `source` - Raster to read, left untouched
/// * `amount` - Curve steepness; positive steepens, negative flattens
///
/// # Returns
/// New raster labelled `contrast<amount>-<source label>`
///
/// # Errors
/// `InvalidParameter` if `amount` is NaN or infinite.
pub fn increase_contrast(source: &Raster, amount: f64) -> FilterResult<Raster> {
    if !amount.is_finite() {
        warn!(target: LOG_TARGET, "contrast amount {} rejected", amount);
        return Err(FilterError::invalid_parameter(
            "amount",
            format!("must be finite, got {}", amount),
        ));
    }

    let p = (-amount).exp();
    let label = derived_label(&real_token("contrast", amount), source);
    let output = map_cells(source, label, |v| contrast_curve(v, p))?;

    debug!(
        target: LOG_TARGET,
        "contrast {} (p = {:.4}, {}x{})",
        amount,
        p,
        output.width(),
        output.height()
    );
    Ok(output)
}
