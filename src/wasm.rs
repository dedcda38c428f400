//! WebAssembly exports for the raster filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! ## Buffer Layout
//!
//! Every function takes a flat row-major grayscale buffer
//! (length = width * height, one byte per cell) and returns a new buffer.
//! Rotations return a `height x width` buffer; resize returns
//! `floor(width * factor) x floor(height * factor)`. Invalid input raises a
//! JavaScript error carrying the message.

use wasm_bindgen::prelude::*;

use crate::error::{FilterError, FilterResult};
use crate::filters;
use crate::raster::Raster;

fn to_js(err: FilterError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn load(data: &[u8], width: usize, height: usize) -> Result<Raster, JsValue> {
    Raster::from_vec(width, height, data.to_vec(), "").map_err(to_js)
}

/// Load the buffer, run a filter that builds a new raster, and flatten it.
fn apply(
    data: &[u8],
    width: usize,
    height: usize,
    filter: impl FnOnce(&Raster) -> FilterResult<Raster>,
) -> Result<Vec<u8>, JsValue> {
    let raster = load(data, width, height)?;
    let result = filter(&raster).map_err(to_js)?;
    Ok(result.to_vec())
}

/// Load the buffer, run an in-place filter, and flatten it.
fn apply_in_place(
    data: &[u8],
    width: usize,
    height: usize,
    filter: impl FnOnce(&mut Raster),
) -> Result<Vec<u8>, JsValue> {
    let mut raster = load(data, width, height)?;
    filter(&mut raster);
    Ok(raster.to_vec())
}

// ============================================================================
// Intensity Filters
// ============================================================================

/// Add `amount` to every intensity, saturating at 255.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
/// * `amount` - Value added to each cell
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn brighten_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    amount: i32,
) -> Result<Vec<u8>, JsValue> {
    apply_in_place(data, width, height, |r| {
        filters::brighten(r, amount);
    })
}

/// Subtract `amount` from every intensity, saturating at 0.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
/// * `amount` - Value subtracted from each cell
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn darken_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    amount: i32,
) -> Result<Vec<u8>, JsValue> {
    apply_in_place(data, width, height, |r| {
        filters::darken(r, amount);
    })
}

/// Replace every intensity `v` with `255 - v`.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn invert_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsValue> {
    apply_in_place(data, width, height, |r| {
        filters::invert(r);
    })
}

/// Apply the contrast curve around mid-gray.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
/// * `amount` - Curve strength, 0.0 leaves the raster unchanged
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn increase_contrast_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    amount: f64,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, |r| filters::increase_contrast(r, amount))
}

// ============================================================================
// Geometry Filters
// ============================================================================

/// Mirror across the vertical axis (left-right).
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn mirror_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, filters::mirror)
}

/// Flip across the horizontal axis (top-bottom).
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn flip_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, filters::flip)
}

/// Rotate 90 degrees clockwise.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
///
/// # Returns
/// Flat array of intensity bytes laid out as `height x width`
#[wasm_bindgen]
pub fn rotate_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, filters::rotate)
}

/// Rotate 90 degrees counter-clockwise.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
///
/// # Returns
/// Flat array of intensity bytes laid out as `height x width`
#[wasm_bindgen]
pub fn rotate_ac_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, filters::rotate_ac)
}

/// Nearest-neighbor resize by `factor`.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
/// * `factor` - Scale factor, must be finite and positive
///
/// # Returns
/// Flat array of intensity bytes laid out as
/// `floor(width * factor) x floor(height * factor)`
#[wasm_bindgen]
pub fn resize_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    factor: f64,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, |r| filters::resize(r, factor))
}

// ============================================================================
// Blur / Noise
// ============================================================================

/// 3x3 box average, clipped at the borders.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, filters::blur)
}

/// Add uniform integer noise in `[-amount, amount]` to every cell.
///
/// # Arguments
/// * `data` - Flat array of intensity bytes (length = width * height)
/// * `width` - Raster width in cells
/// * `height` - Raster height in cells
/// * `amount` - Noise bound, must not be negative
///
/// # Returns
/// Flat array of intensity bytes with the same dimensions
#[wasm_bindgen]
pub fn noise_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    amount: i32,
) -> Result<Vec<u8>, JsValue> {
    apply(data, width, height, |r| filters::noise(r, amount))
}
