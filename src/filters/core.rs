//! Core utilities shared by the filters.
//!
//! This module provides:
//! - Provenance labelling (`<token>-<previous label>`)
//! - Token formatting for integer and real parameters
//! - The clipped 3x3 neighborhood average used by blur

use crate::error::FilterResult;
use crate::raster::Raster;

/// Log target for every filter in the crate.
pub(crate) const LOG_TARGET: &str = "Filters";

/// Label for a raster derived from `source` by the filter named `token`.
pub fn derived_label(token: &str, source: &Raster) -> String {
    format!("{}-{}", token, source.label())
}

/// Prepend `token` to the raster's own label (in-place filters).
pub fn relabel(raster: &mut Raster, token: &str) {
    let label = derived_label(token, raster);
    raster.set_label(label);
}

/// Token for a filter with an integer parameter, e.g. `brighten10`.
pub fn int_token(name: &str, amount: i32) -> String {
    format!("{}{}", name, amount)
}

/// Token for a filter with a real parameter, e.g. `resize2.0`.
///
/// Reals always carry a fractional part so `2.0` and `2` label differently
/// from an integer parameter.
pub fn real_token(name: &str, amount: f64) -> String {
    format!("{}{:?}", name, amount)
}

/// Integer mean of the in-bounds 3x3 block centred on `(x, y)`.
///
/// Border cells average over fewer contributors: 4 at corners, 6 along
/// edges. No padding, no wraparound.
pub fn neighborhood_average(raster: &Raster, x: usize, y: usize) -> FilterResult<i32> {
    let mut sum = 0i32;
    let mut count = 0i32;
    for cell in raster.neighbors_of(x, y)? {
        sum += cell.value();
        count += 1;
    }
    // count >= 1: the centre is always in bounds here
    Ok(sum / count)
}

/// Map every cell of `source` into a fresh raster of the same size.
pub(crate) fn map_cells(
    source: &Raster,
    label: String,
    f: impl Fn(i32) -> i32,
) -> FilterResult<Raster> {
    let (width, height) = (source.width(), source.height());
    let mut output = Raster::new(width, height, label)?;

    for (dst, src) in output.cells_mut().zip(source.cells()) {
        dst.set_value(f(src.value()));
    }

    Ok(output)
}

/// Values of a raster as a row-major `Vec<i32>`, handy in assertions.
#[cfg(test)]
pub(crate) fn values(raster: &Raster) -> Vec<i32> {
    raster.cells().map(|c| c.value()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relabel_prepends_token() {
        let mut raster = Raster::new(1, 1, "dog").unwrap();
        relabel(&mut raster, "invert");
        relabel(&mut raster, &int_token("brighten", 10));
        assert_eq!(raster.label(), "brighten10-invert-dog");
    }

    #[test]
    fn test_real_token_keeps_fraction() {
        assert_eq!(real_token("resize", 2.0), "resize2.0");
        assert_eq!(real_token("contrast", 0.5), "contrast0.5");
        assert_eq!(real_token("contrast", -1.25), "contrast-1.25");
    }

    #[test]
    fn test_int_token_negative() {
        assert_eq!(int_token("darken", -3), "darken-3");
    }

    #[test]
    fn test_neighborhood_average_corner_edge_interior() {
        // 3x3 grid:
        //  0  30  60
        // 90 120 150
        // 180 210 240
        let raster = Raster::from_vec(
            3,
            3,
            vec![0, 30, 60, 90, 120, 150, 180, 210, 240],
            "grid",
        )
        .unwrap();

        // corner: (0 + 30 + 90 + 120) / 4
        assert_eq!(neighborhood_average(&raster, 0, 0).unwrap(), 60);
        // top edge: (0 + 30 + 60 + 90 + 120 + 150) / 6
        assert_eq!(neighborhood_average(&raster, 1, 0).unwrap(), 75);
        // interior: all nine
        assert_eq!(neighborhood_average(&raster, 1, 1).unwrap(), 120);
    }

    #[test]
    fn test_neighborhood_average_truncates() {
        let raster = Raster::from_vec(2, 1, vec![0, 1], "pair").unwrap();
        assert_eq!(neighborhood_average(&raster, 0, 0).unwrap(), 0);
    }

    #[test]
    fn test_map_cells_keeps_source() {
        let source = Raster::from_vec(2, 1, vec![5, 10], "src").unwrap();
        let doubled = map_cells(&source, "x2-src".to_string(), |v| v * 2).unwrap();
        assert_eq!(values(&doubled), vec![10, 20]);
        assert_eq!(values(&source), vec![5, 10]);
        assert_eq!(doubled.label(), "x2-src");
    }
}
