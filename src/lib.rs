//! Raster Filters
//!
//! Pixel-space filters for single-channel (grayscale) rasters, with optional
//! Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Raster Format
//! A [`Raster`] is a `width x height` grid of intensity cells in `0..=255`
//! plus a text label. Writes saturate at the range ends.
//!
//! ## Filter Architecture
//! Filters are free functions in [`filters`] that take the target raster
//! explicitly. Brighten, darken and invert rewrite it in place; every other
//! filter returns a new raster, possibly with different dimensions (rotate,
//! resize). Each filter prepends a provenance token to the label of the
//! raster it produces.
//!
//! [`Filters`] binds one raster and exposes the same operations as methods.

pub mod error;
pub mod raster;
pub mod filters;
pub mod engine;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use engine::Filters;
pub use error::{FilterError, FilterResult};
pub use raster::{Cell, Raster};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters;
    use crate::raster::Raster;

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn to_raster(image: &PyReadonlyArray2<'_, u8>) -> PyResult<Raster> {
        Ok(Raster::from_array(image.as_array(), "")?)
    }

    fn to_py<'py>(py: Python<'py>, raster: &Raster) -> Bound<'py, PyArray2<u8>> {
        raster.to_array().into_pyarray(py)
    }

    // ========================================================================
    // Intensity Filters
    // ========================================================================

    /// Add `amount` to every intensity (saturating).
    #[pyfunction]
    pub fn brighten<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        amount: i32,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let mut raster = to_raster(&image)?;
        filters::brighten(&mut raster, amount);
        Ok(to_py(py, &raster))
    }

    /// Subtract `amount` from every intensity (saturating).
    #[pyfunction]
    pub fn darken<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        amount: i32,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let mut raster = to_raster(&image)?;
        filters::darken(&mut raster, amount);
        Ok(to_py(py, &raster))
    }

    #[pyfunction]
    pub fn invert<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let mut raster = to_raster(&image)?;
        filters::invert(&mut raster);
        Ok(to_py(py, &raster))
    }

    /// Nonlinear contrast curve around mid-gray; 0.0 = no change.
    #[pyfunction]
    pub fn increase_contrast<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        amount: f64,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::increase_contrast(&to_raster(&image)?, amount)?;
        Ok(to_py(py, &result))
    }

    // ========================================================================
    // Geometry Filters
    // ========================================================================

    #[pyfunction]
    pub fn mirror<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::mirror(&to_raster(&image)?)?;
        Ok(to_py(py, &result))
    }

    #[pyfunction]
    pub fn flip<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::flip(&to_raster(&image)?)?;
        Ok(to_py(py, &result))
    }

    /// Rotate 90° clockwise. Output shape is (W, H).
    #[pyfunction]
    pub fn rotate<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::rotate(&to_raster(&image)?)?;
        Ok(to_py(py, &result))
    }

    /// Rotate 90° counter-clockwise. Output shape is (W, H).
    #[pyfunction]
    pub fn rotate_ac<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::rotate_ac(&to_raster(&image)?)?;
        Ok(to_py(py, &result))
    }

    /// Nearest-neighbor resize. Raises ValueError for factor <= 0.
    #[pyfunction]
    pub fn resize<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        factor: f64,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::resize(&to_raster(&image)?, factor)?;
        Ok(to_py(py, &result))
    }

    // ========================================================================
    // Blur / Noise
    // ========================================================================

    #[pyfunction]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::blur(&to_raster(&image)?)?;
        Ok(to_py(py, &result))
    }

    /// Uniform noise in [-amount, amount]. Raises ValueError for amount < 0.
    #[pyfunction]
    pub fn noise<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        amount: i32,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = filters::noise(&to_raster(&image)?, amount)?;
        Ok(to_py(py, &result))
    }

    #[pymodule]
    pub fn raster_filters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Intensity filters
        m.add_function(wrap_pyfunction!(brighten, m)?)?;
        m.add_function(wrap_pyfunction!(darken, m)?)?;
        m.add_function(wrap_pyfunction!(invert, m)?)?;
        m.add_function(wrap_pyfunction!(increase_contrast, m)?)?;

        // Geometry filters
        m.add_function(wrap_pyfunction!(mirror, m)?)?;
        m.add_function(wrap_pyfunction!(flip, m)?)?;
        m.add_function(wrap_pyfunction!(rotate, m)?)?;
        m.add_function(wrap_pyfunction!(rotate_ac, m)?)?;
        m.add_function(wrap_pyfunction!(resize, m)?)?;

        // Blur / noise
        m.add_function(wrap_pyfunction!(blur, m)?)?;
        m.add_function(wrap_pyfunction!(noise, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::raster_filters;
