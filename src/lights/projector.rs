// std
use std::f64::consts::PI;
// others
use log::debug;
// light_test
use crate::core::error::{Error, Result};
use crate::core::geometry::{vec3_dot_nrmf, vec3_dot_vec3f};
use crate::core::geometry::{Normal3f, Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::pbrt::{clamp_t, Float, Spectrum};

/// A point light restricted to a cone of directions around its axis.
/// Outside the cone no light is emitted; an optional soft edge lets
/// the intensity fade out towards the cone boundary.
#[derive(Debug, Copy, Clone)]
pub struct ProjectorLight {
    pub p_light: Point3f,
    pub i: Spectrum,
    /// Unit vector along the cone axis, pointing away from the light.
    pub w_axis: Vector3f,
    pub cos_total_width: Float,
    pub cos_falloff_start: Float,
}

impl ProjectorLight {
    /// *aperture* is the full opening angle of the cone in radians.
    /// The edge of the cone is hard until `with_falloff_start` is
    /// used.
    pub fn new(
        p_light: &Point3f,
        direction: &Vector3f,
        aperture: Float,
        i: &Spectrum,
    ) -> Result<Self> {
        if direction.length_squared() == 0.0 as Float {
            return Err(Error::DegenerateDirection("projector light"));
        }
        let half_angle: Float = clamp_t(0.5 as Float * aperture, 0.0 as Float, PI);
        let cos_total_width: Float = half_angle.cos();
        let w_axis: Vector3f = direction.normalize();
        debug!(
            "projector light at {:?} along {:?}, half angle {} rad, intensity {:?}",
            p_light, w_axis, half_angle, i
        );
        Ok(ProjectorLight {
            p_light: *p_light,
            i: *i,
            w_axis,
            cos_total_width,
            cos_falloff_start: cos_total_width,
        })
    }
    /// Start fading out at *falloff_start* radians off the axis. Angles
    /// beyond the cone's half-angle are clamped to it.
    pub fn with_falloff_start(mut self, falloff_start: Float) -> Self {
        let cos_falloff_start: Float = clamp_t(falloff_start, 0.0 as Float, PI).cos();
        self.cos_falloff_start = cos_falloff_start.max(self.cos_total_width);
        self
    }
    /// Fraction of the intensity emitted along the unit direction *w*.
    pub fn falloff(&self, w: &Vector3f) -> Float {
        let cos_theta: Float = vec3_dot_vec3f(w, &self.w_axis);
        if cos_theta < self.cos_total_width {
            return 0.0 as Float;
        }
        if cos_theta >= self.cos_falloff_start {
            return 1.0 as Float;
        }
        // compute falloff inside the cone
        let delta: Float =
            (cos_theta - self.cos_total_width) / (self.cos_falloff_start - self.cos_total_width);
        (delta * delta) * (delta * delta)
    }
}

impl Light for ProjectorLight {
    fn contrib(&self, p: &Point3f, n: &Normal3f) -> Spectrum {
        let w: Vector3f = *p - self.p_light;
        let dist2: Float = w.length_squared();
        if dist2 == 0.0 as Float {
            return Spectrum::default();
        }
        let w: Vector3f = w / dist2.sqrt();
        let falloff: Float = self.falloff(&w);
        if falloff == 0.0 as Float {
            return Spectrum::default();
        }
        let cos_theta: Float = vec3_dot_nrmf(&-w, n);
        if cos_theta <= 0.0 as Float {
            return Spectrum::default();
        }
        self.i * (falloff * cos_theta / dist2)
    }
}
