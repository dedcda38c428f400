//! Filter engine bound to one raster.
//!
//! [`Filters`] keeps a mutable borrow of a single target raster and exposes
//! one method per filter. In-place filters rewrite the target and hand it
//! back; the others read it and return a new raster.
//!
//! ```
//! use raster_filters::{Filters, Raster};
//!
//! let mut image = Raster::from_vec(2, 2, vec![0, 255, 100, 200], "dog").unwrap();
//! let mut filters = Filters::new(&mut image);
//!
//! filters.brighten(10);
//! filters.invert();
//! assert_eq!(filters.raster().label(), "invert-brighten10-dog");
//!
//! let mirrored = filters.mirror().unwrap();
//! assert_eq!(mirrored.label(), "mirror-invert-brighten10-dog");
//! ```

use crate::error::FilterResult;
use crate::filters::{blur, geometry, intensity, noise};
use crate::raster::Raster;

/// Applies filters to one bound raster.
pub struct Filters<'a> {
    image: &'a mut Raster,
}

impl<'a> Filters<'a> {
    pub fn new(image: &'a mut Raster) -> Self {
        Filters { image }
    }

    /// The bound raster.
    pub fn raster(&self) -> &Raster {
        &*self.image
    }

    pub fn brighten(&mut self, amount: i32) -> &mut Raster {
        intensity::brighten(&mut *self.image, amount)
    }

    pub fn darken(&mut self, amount: i32) -> &mut Raster {
        intensity::darken(&mut *self.image, amount)
    }

    pub fn invert(&mut self) -> &mut Raster {
        intensity::invert(&mut *self.image)
    }

    pub fn mirror(&self) -> FilterResult<Raster> {
        geometry::mirror(&*self.image)
    }

    pub fn flip(&self) -> FilterResult<Raster> {
        geometry::flip(&*self.image)
    }

    pub fn rotate(&self) -> FilterResult<Raster> {
        geometry::rotate(&*self.image)
    }

    pub fn rotate_ac(&self) -> FilterResult<Raster> {
        geometry::rotate_ac(&*self.image)
    }

    pub fn blur(&self) -> FilterResult<Raster> {
        blur::blur(&*self.image)
    }

    pub fn noise(&self, amount: i32) -> FilterResult<Raster> {
        noise::noise(&*self.image, amount)
    }

    pub fn resize(&self, factor: f64) -> FilterResult<Raster> {
        geometry::resize(&*self.image, factor)
    }

    pub fn increase_contrast(&self, amount: f64) -> FilterResult<Raster> {
        intensity::increase_contrast(&*self.image, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_place_filters_mutate_bound_raster() {
        let mut image = Raster::from_vec(2, 1, vec![10, 20], "pic").unwrap();
        {
            let mut filters = Filters::new(&mut image);
            filters.brighten(5);
            filters.darken(1);
        }
        assert_eq!(image.to_vec(), vec![14, 24]);
        assert_eq!(image.label(), "darken1-brighten5-pic");
    }

    #[test]
    fn test_new_raster_filters_leave_bound_raster() {
        let mut image = Raster::from_vec(2, 1, vec![10, 20], "pic").unwrap();
        let filters = Filters::new(&mut image);

        let rotated = filters.rotate().unwrap();
        let blurred = filters.blur().unwrap();
        let bigger = filters.resize(2.0).unwrap();

        assert_eq!((rotated.width(), rotated.height()), (1, 2));
        assert_eq!(blurred.to_vec(), vec![15, 15]);
        assert_eq!((bigger.width(), bigger.height()), (4, 2));
        assert_eq!(filters.raster().label(), "pic");
        assert_eq!(filters.raster().to_vec(), vec![10, 20]);
    }

    #[test]
    fn test_every_filter_labels_its_output() {
        let mut image = Raster::from_vec(2, 2, vec![0, 255, 100, 200], "pic").unwrap();
        let filters = Filters::new(&mut image);

        assert_eq!(filters.mirror().unwrap().label(), "mirror-pic");
        assert_eq!(filters.flip().unwrap().label(), "flip-pic");
        assert_eq!(filters.rotate_ac().unwrap().label(), "rotateAC-pic");
        assert_eq!(filters.noise(3).unwrap().label(), "noise3-pic");
        assert_eq!(filters.increase_contrast(1.5).unwrap().label(), "contrast1.5-pic");
    }
}
