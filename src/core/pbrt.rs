//! Type definitions of Float and Spectrum, otherwise constants and
//! functions which can be used almost everywhere else in the code.

// std
use std::f64::consts::PI;
// light_test
use crate::core::spectrum::RGBSpectrum;

pub type Spectrum = RGBSpectrum;

/// The sampler works in double precision.
pub type Float = f64;

/// Clamp the given value *val* to lie between the values *low* and *high*.
pub fn clamp_t<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    let r: T;
    if val < low {
        r = low;
    } else if val > high {
        r = high;
    } else {
        r = val;
    }
    r
}

/// Convert from angles expressed in degrees to radians.
pub fn radians(deg: Float) -> Float {
    (PI / 180.0) * deg
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_t_keeps_values_in_range() {
        assert_eq!(clamp_t(-0.5 as Float, 0.0, 1.0), 0.0);
        assert_eq!(clamp_t(0.25 as Float, 0.0, 1.0), 0.25);
        assert_eq!(clamp_t(7_i32, 0, 5), 5);
    }

    #[test]
    fn radians_from_degrees() {
        assert_relative_eq!(radians(180.0), PI);
        assert_relative_eq!(radians(90.0), 0.5 * PI);
        assert_relative_eq!(radians(0.0), 0.0);
    }
}
