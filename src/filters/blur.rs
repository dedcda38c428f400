//! Box blur over the clipped 3x3 neighborhood.
//!
//! Each output cell is the integer mean of the input cell and its in-bounds
//! neighbors. Border cells average over fewer contributors instead of
//! padding or wrapping.

use log::debug;

use super::core::{derived_label, neighborhood_average, LOG_TARGET};
use crate::error::FilterResult;
use crate::raster::Raster;

/// Blur a raster with a 3x3 box average.
///
/// # Arguments
/// * `source` - Raster to read, left untouched
///
/// # Returns
/// New raster of the same size labelled `blur-...`
pub fn blur(source: &Raster) -> FilterResult<Raster> {
    let (width, height) = (source.width(), source.height());
    let mut output = Raster::new(width, height, derived_label("blur", source))?;

    for y in 0..height {
        for x in 0..width {
            output.set_value_at(x, y, neighborhood_average(source, x, y)?)?;
        }
    }

    debug!(target: LOG_TARGET, "blur ({}x{})", width, height);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::core::values;

    #[test]
    fn test_blur_constant_field() {
        let source = Raster::from_vec(5, 4, vec![77; 20], "flat").unwrap();
        let result = blur(&source).unwrap();
        assert!(values(&result).iter().all(|&v| v == 77));
        assert_eq!(result.label(), "blur-flat");
    }

    #[test]
    fn test_blur_single_bright_cell() {
        // 90 in the middle of a 3x3 black field
        let mut source = Raster::new(3, 3, "dot").unwrap();
        source.set_value_at(1, 1, 90).unwrap();

        let result = blur(&source).unwrap();

        // Corners see 4 cells, edges 6, centre 9
        assert_eq!(
            values(&result),
            vec![
                22, 15, 22, //
                15, 10, 15, //
                22, 15, 22,
            ]
        );
    }

    #[test]
    fn test_blur_no_wraparound() {
        // Bright column on the right must not leak into the left column
        let source = Raster::from_vec(4, 1, vec![0, 0, 0, 200], "edge").unwrap();
        let result = blur(&source).unwrap();
        assert_eq!(values(&result), vec![0, 0, 66, 100]);
    }

    #[test]
    fn test_blur_single_cell() {
        let source = Raster::from_vec(1, 1, vec![42], "one").unwrap();
        let result = blur(&source).unwrap();
        assert_eq!(values(&result), vec![42]);
    }

    #[test]
    fn test_blur_leaves_source() {
        let source = Raster::from_vec(2, 2, vec![0, 255, 100, 200], "square").unwrap();
        let _ = blur(&source).unwrap();
        assert_eq!(values(&source), vec![0, 255, 100, 200]);
    }
}
