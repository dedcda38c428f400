//! Filter modules for single-channel rasters.
//!
//! ## Raster Format
//!
//! | Property | Value |
//! |----------|-------|
//! | Channels | 1 (grayscale intensity) |
//! | Range | 0-255, saturated on write |
//! | Layout | row-major, `(x, y)` with origin top-left |
//!
//! ## Labelling
//!
//! Every filter prepends a provenance token to the label of the raster it
//! produces: `"<token><param?>-" + previous label`. The most recent filter
//! therefore appears first, e.g. `invert-brighten10-dog`.
//!
//! ## Filter Categories
//!
//! - **Intensity** (point-wise): brighten, darken, invert (in place), contrast
//! - **Geometry**: mirror, flip, rotate, rotate_ac, resize
//! - **Blur**: 3x3 box average clipped at the borders
//! - **Noise**: uniform integer perturbation
//!
//! All filters are synchronous and single-threaded; each call materializes
//! its full output before returning.

pub mod core;
pub mod intensity;
pub mod geometry;
pub mod blur;
pub mod noise;

pub use self::blur::blur;
pub use self::geometry::{flip, mirror, resize, rotate, rotate_ac};
pub use self::intensity::{brighten, darken, increase_contrast, invert};
pub use self::noise::noise;
