//! Single-channel raster storage.
//!
//! A [`Raster`] owns a `height x width` grid of [`Cell`]s plus a text label.
//! Cells are stored row-major in an `ndarray::Array2`, indexed `[[y, x]]`,
//! the same layout the filters use for their scatter/gather loops.
//!
//! ## Intensity range
//!
//! Every cell holds an intensity in `0..=255`. Writes through
//! [`Cell::set_value`] clamp to that range, so filters are free to compute
//! out-of-range sums (brighten, darken, noise) and rely on the write path to
//! saturate them.

use ndarray::{s, Array2, ArrayView2};

use crate::error::{FilterError, FilterResult};

/// One grayscale intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    /// Darkest intensity.
    pub const MIN: i32 = 0;
    /// Brightest intensity.
    pub const MAX: i32 = 255;

    /// Create a cell, clamping `value` into `MIN..=MAX`.
    pub fn new(value: i32) -> Self {
        Cell(value.clamp(Self::MIN, Self::MAX) as u8)
    }

    pub fn value(&self) -> i32 {
        self.0 as i32
    }

    /// Store `value`, clamped into `MIN..=MAX`.
    pub fn set_value(&mut self, value: i32) {
        self.0 = value.clamp(Self::MIN, Self::MAX) as u8;
    }
}

impl From<u8> for Cell {
    fn from(value: u8) -> Self {
        Cell(value)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

/// A labelled grid of intensity cells with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    cells: Array2<Cell>,
    label: String,
}

impl Raster {
    /// Allocate a `width x height` raster with every cell at 0.
    ///
    /// # Errors
    /// `InvalidDimensions` if either dimension is zero, or if the grid is too
    /// large to address or allocate.
    pub fn new(width: usize, height: usize, label: impl Into<String>) -> FilterResult<Self> {
        let len = check_dimensions(width, height)?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| FilterError::InvalidDimensions { width, height })?;
        cells.resize(len, Cell::default());

        Self::from_cells(width, height, cells, label)
    }

    /// Build a raster from row-major intensities.
    ///
    /// # Errors
    /// `InvalidDimensions` on a zero or oversized dimension, `ShapeMismatch`
    /// when `values.len() != width * height`.
    pub fn from_vec(
        width: usize,
        height: usize,
        values: Vec<u8>,
        label: impl Into<String>,
    ) -> FilterResult<Self> {
        let expected = check_dimensions(width, height)?;
        if values.len() != expected {
            return Err(FilterError::ShapeMismatch {
                expected,
                actual: values.len(),
            });
        }

        let cells = values.into_iter().map(Cell::from).collect();
        Self::from_cells(width, height, cells, label)
    }

    /// Build a raster from a `(height, width)` array.
    pub fn from_array(array: ArrayView2<u8>, label: impl Into<String>) -> FilterResult<Self> {
        let (height, width) = array.dim();
        check_dimensions(width, height)?;
        Ok(Raster {
            cells: array.mapv(Cell::from),
            label: label.into(),
        })
    }

    /// Copy the intensities out as a `(height, width)` array.
    pub fn to_array(&self) -> Array2<u8> {
        self.cells.mapv(u8::from)
    }

    /// Copy the intensities out in row-major order.
    pub fn to_vec(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| u8::from(c)).collect()
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Cell at `(x, y)`.
    ///
    /// # Errors
    /// `OutOfBounds` if `x >= width` or `y >= height`.
    pub fn cell_at(&self, x: usize, y: usize) -> FilterResult<&Cell> {
        let err = self.out_of_bounds(x, y);
        self.cells.get([y, x]).ok_or(err)
    }

    /// Mutable cell at `(x, y)`.
    pub fn cell_at_mut(&mut self, x: usize, y: usize) -> FilterResult<&mut Cell> {
        let err = self.out_of_bounds(x, y);
        self.cells.get_mut([y, x]).ok_or(err)
    }

    /// Intensity at `(x, y)`.
    pub fn value_at(&self, x: usize, y: usize) -> FilterResult<i32> {
        self.cell_at(x, y).map(Cell::value)
    }

    /// Write `value` (clamped) at `(x, y)`.
    pub fn set_value_at(&mut self, x: usize, y: usize, value: i32) -> FilterResult<()> {
        self.cell_at_mut(x, y)?.set_value(value);
        Ok(())
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> + '_ {
        self.cells.iter_mut()
    }

    /// Cells of the 3x3 block centred on `(x, y)` that lie inside the grid,
    /// centre included. Corners yield 4 cells, edges 6, interior cells 9.
    ///
    /// # Errors
    /// `OutOfBounds` if the centre itself is outside the grid.
    pub fn neighbors_of(
        &self,
        x: usize,
        y: usize,
    ) -> FilterResult<impl Iterator<Item = &Cell> + '_> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(self.out_of_bounds(x, y));
        }

        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 2).min(width);
        let y1 = (y + 2).min(height);

        Ok(self.cells.slice(s![y0..y1, x0..x1]).into_iter())
    }

    fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
        label: impl Into<String>,
    ) -> FilterResult<Self> {
        let actual = cells.len();
        let cells = Array2::from_shape_vec((height, width), cells).map_err(|_| {
            FilterError::ShapeMismatch {
                expected: width.saturating_mul(height),
                actual,
            }
        })?;

        Ok(Raster {
            cells,
            label: label.into(),
        })
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> FilterError {
        FilterError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Number of cells in a `width x height` grid.
///
/// Rejects zero dimensions and grids whose cell count overflows `isize`,
/// the limit ndarray places on any shape.
fn check_dimensions(width: usize, height: usize) -> FilterResult<usize> {
    match width.checked_mul(height) {
        Some(len) if len > 0 && len <= isize::MAX as usize => Ok(len),
        _ => Err(FilterError::InvalidDimensions { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_clamps_writes() {
        let mut cell = Cell::default();
        cell.set_value(300);
        assert_eq!(cell.value(), 255);
        cell.set_value(-12);
        assert_eq!(cell.value(), 0);
        cell.set_value(77);
        assert_eq!(cell.value(), 77);
        assert_eq!(Cell::new(1000).value(), 255);
    }

    #[test]
    fn test_new_is_black() {
        let raster = Raster::new(3, 2, "blank").unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.label(), "blank");
        assert_eq!(raster.cells().count(), 6);
        assert!(raster.cells().all(|c| c.value() == 0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Raster::new(0, 4, "empty"),
            Err(FilterError::InvalidDimensions { width: 0, height: 4 })
        );
        assert!(Raster::from_array(Array2::<u8>::zeros((3, 0)).view(), "empty").is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Raster::new(usize::MAX, 2, "huge"),
            Err(FilterError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            })
        );
        assert_eq!(
            Raster::new(usize::MAX / 2, 3, "huge"),
            Err(FilterError::InvalidDimensions {
                width: usize::MAX / 2,
                height: 3
            })
        );
        assert!(matches!(
            Raster::from_vec(usize::MAX, usize::MAX, vec![0; 4], "huge"),
            Err(FilterError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_vec_row_major() {
        let raster = Raster::from_vec(3, 2, vec![1, 2, 3, 4, 5, 6], "grid").unwrap();
        assert_eq!(raster.value_at(0, 0).unwrap(), 1);
        assert_eq!(raster.value_at(2, 0).unwrap(), 3);
        assert_eq!(raster.value_at(0, 1).unwrap(), 4);
        assert_eq!(raster.value_at(2, 1).unwrap(), 6);
        assert_eq!(raster.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(raster.to_array().dim(), (2, 3));
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        assert_eq!(
            Raster::from_vec(2, 2, vec![1, 2, 3], "short"),
            Err(FilterError::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let mut raster = Raster::new(2, 3, "r").unwrap();
        assert!(raster.cell_at(1, 2).is_ok());
        assert_eq!(
            raster.cell_at(2, 0),
            Err(FilterError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 3
            })
        );
        assert!(raster.cell_at_mut(0, 3).is_err());
        assert!(raster.set_value_at(5, 5, 10).is_err());
    }

    #[test]
    fn test_set_value_at_clamps() {
        let mut raster = Raster::new(1, 1, "r").unwrap();
        raster.set_value_at(0, 0, 400).unwrap();
        assert_eq!(raster.value_at(0, 0).unwrap(), 255);
    }

    #[test]
    fn test_neighbor_counts() {
        let raster = Raster::new(4, 3, "r").unwrap();
        assert_eq!(raster.neighbors_of(0, 0).unwrap().count(), 4);
        assert_eq!(raster.neighbors_of(3, 2).unwrap().count(), 4);
        assert_eq!(raster.neighbors_of(1, 0).unwrap().count(), 6);
        assert_eq!(raster.neighbors_of(0, 1).unwrap().count(), 6);
        assert_eq!(raster.neighbors_of(1, 1).unwrap().count(), 9);
        assert!(raster.neighbors_of(4, 0).is_err());
    }

    #[test]
    fn test_neighbors_include_centre() {
        let raster = Raster::from_vec(3, 1, vec![10, 20, 30], "row").unwrap();
        let values: Vec<i32> = raster.neighbors_of(0, 0).unwrap().map(Cell::value).collect();
        assert_eq!(values, vec![10, 20]);
    }

    #[test]
    fn test_cells_mut_visits_every_cell() {
        let mut raster = Raster::new(5, 4, "r").unwrap();
        for cell in raster.cells_mut() {
            cell.set_value(cell.value() + 1);
        }
        assert!(raster.cells().all(|c| c.value() == 1));
    }
}
