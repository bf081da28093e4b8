//! In order for the image plane to show anything, there must be a
//! source of illumination. Every light answers the same question:
//! how much light arrives at a point on a surface with a given
//! orientation, assuming nothing is in the way.

// light_test
use crate::core::geometry::{Normal3f, Point3f};
use crate::core::pbrt::Spectrum;

pub trait Light: Send + Sync {
    /// Returns the RGB contribution of the light at point *p* on a
    /// surface with normal *n*. The result is never negative and is
    /// black for surfaces facing away from the light.
    fn contrib(&self, p: &Point3f, n: &Normal3f) -> Spectrum;
}
