//! Geometric filters: Mirror, Flip, Rotate, Rotate counter-clockwise, Resize.
//!
//! Every function allocates a new raster and leaves the source untouched.
//!
//! ## Coordinate conventions
//!
//! Coordinates are `(x, y)` with `x` along the width and `y` along the
//! height, origin at the top-left.
//! - Mirror: out(x, y) = in(w - 1 - x, y)
//! - Flip: out(x, y) = in(x, h - 1 - y)
//! - Rotate 90° CW: out(y, x) = in(x, h - 1 - y), output is `h x w`
//! - Rotate 90° CCW: three clockwise steps
//! - Resize: out(x, y) = in(floor(x / f), floor(y / f)), output is
//!   `floor(w * f) x floor(h * f)`

use log::{debug, warn};

use super::core::{derived_label, real_token, LOG_TARGET};
use crate::error::{FilterError, FilterResult};
use crate::raster::Raster;

// ============================================================================
// Mirror / Flip
// ============================================================================

/// Mirror across the vertical axis (left-right).
pub fn mirror(source: &Raster) -> FilterResult<Raster> {
    let (w, h) = (source.width(), source.height());
    let mut output = Raster::new(w, h, derived_label("mirror", source))?;

    for y in 0..h {
        for x in 0..w {
            output.set_value_at(x, y, source.value_at(w - 1 - x, y)?)?;
        }
    }

    debug!(target: LOG_TARGET, "mirror ({}x{})", w, h);
    Ok(output)
}

/// Flip across the horizontal axis (top-bottom).
pub fn flip(source: &Raster) -> FilterResult<Raster> {
    let (w, h) = (source.width(), source.height());
    let mut output = Raster::new(w, h, derived_label("flip", source))?;

    for y in 0..h {
        let src_y = h - 1 - y;
        for x in 0..w {
            output.set_value_at(x, y, source.value_at(x, src_y)?)?;
        }
    }

    debug!(target: LOG_TARGET, "flip ({}x{})", w, h);
    Ok(output)
}

// ============================================================================
// Rotation
// ============================================================================

/// One clockwise quarter turn into a new `h x w` raster labelled `label`.
fn quarter_turn(source: &Raster, label: String) -> FilterResult<Raster> {
    let (w, h) = (source.width(), source.height());
    let mut output = Raster::new(h, w, label)?;

    for y in 0..h {
        for x in 0..w {
            output.set_value_at(y, x, source.value_at(x, h - 1 - y)?)?;
        }
    }

    Ok(output)
}

/// Rotate 90 degrees clockwise.
///
/// # Returns
/// New raster with width and height swapped, labelled `rotate-...`
pub fn rotate(source: &Raster) -> FilterResult<Raster> {
    let output = quarter_turn(source, derived_label("rotate", source))?;

    debug!(
        target: LOG_TARGET,
        "rotate ({}x{} -> {}x{})",
        source.width(),
        source.height(),
        output.width(),
        output.height()
    );
    Ok(output)
}

/// Rotate 90 degrees counter-clockwise.
///
/// Computed as three clockwise quarter turns. Only the single `rotateAC-`
/// token is added to the label.
pub fn rotate_ac(source: &Raster) -> FilterResult<Raster> {
    let label = derived_label("rotateAC", source);
    let once = quarter_turn(source, label.clone())?;
    let twice = quarter_turn(&once, label.clone())?;
    let output = quarter_turn(&twice, label)?;

    debug!(
        target: LOG_TARGET,
        "rotateAC ({}x{} -> {}x{})",
        source.width(),
        source.height(),
        output.width(),
        output.height()
    );
    Ok(output)
}

// ============================================================================
// Resize
// ============================================================================

/// Nearest-neighbor resize by `factor`, sampling toward the origin.
///
/// # Arguments
/// * `source` - Raster to sample
/// * `factor` - Scale factor, must be finite and positive
///
/// # Returns
/// New `floor(w * factor) x floor(h * factor)` raster labelled
/// `resize<factor>-...`
///
/// # Errors
/// - `InvalidParameter` if `factor` is not finite or `<= 0`
/// - `InvalidDimensions` if the scaled size rounds down to zero or is too
///   large to allocate
pub fn resize(source: &Raster, factor: f64) -> FilterResult<Raster> {
    if !factor.is_finite() || factor <= 0.0 {
        warn!(target: LOG_TARGET, "resize factor {} rejected", factor);
        return Err(FilterError::invalid_parameter(
            "factor",
            format!("must be finite and positive, got {}", factor),
        ));
    }

    let (w, h) = (source.width(), source.height());
    let (new_w, new_h) = match (scaled_extent(w, factor), scaled_extent(h, factor)) {
        (Some(new_w), Some(new_h)) => (new_w, new_h),
        (new_w, new_h) => {
            warn!(target: LOG_TARGET, "resize factor {} overflows {}x{}", factor, w, h);
            return Err(FilterError::InvalidDimensions {
                width: new_w.unwrap_or(usize::MAX),
                height: new_h.unwrap_or(usize::MAX),
            });
        }
    };
    let label = derived_label(&real_token("resize", factor), source);
    let mut output = Raster::new(new_w, new_h, label)?;

    for y in 0..new_h {
        // min() only guards float rounding at very large factors
        let src_y = ((y as f64 / factor).floor() as usize).min(h - 1);
        for x in 0..new_w {
            let src_x = ((x as f64 / factor).floor() as usize).min(w - 1);
            output.set_value_at(x, y, source.value_at(src_x, src_y)?)?;
        }
    }

    debug!(target: LOG_TARGET, "resize by {} ({}x{} -> {}x{})", factor, w, h, new_w, new_h);
    Ok(output)
}

/// `floor(len * factor)`, or `None` when it does not fit in a `usize`.
fn scaled_extent(len: usize, factor: f64) -> Option<usize> {
    let scaled = (len as f64 * factor).floor();
    if scaled < usize::MAX as f64 {
        Some(scaled as usize)
    } else {
        None
    }
}
