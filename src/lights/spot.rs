// others
use log::debug;
// light_test
use crate::core::geometry::vec3_dot_nrmf;
use crate::core::geometry::{Normal3f, Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::pbrt::{Float, Spectrum};

/// Isotropic light source at a single point. The light it deposits
/// falls off with the squared distance to the receiving point.
#[derive(Debug, Copy, Clone)]
pub struct SpotLight {
    pub p_light: Point3f,
    pub i: Spectrum,
}

impl SpotLight {
    pub fn new(p_light: &Point3f, i: &Spectrum) -> Self {
        debug!("spot light at {:?} with intensity {:?}", p_light, i);
        SpotLight {
            p_light: *p_light,
            i: *i,
        }
    }
}

impl Light for SpotLight {
    fn contrib(&self, p: &Point3f, n: &Normal3f) -> Spectrum {
        let wi: Vector3f = self.p_light - *p;
        let dist2: Float = wi.length_squared();
        if dist2 == 0.0 as Float {
            return Spectrum::default();
        }
        let cos_theta: Float = vec3_dot_nrmf(&wi, n) / dist2.sqrt();
        if cos_theta <= 0.0 as Float {
            return Spectrum::default();
        }
        self.i * cos_theta / dist2
    }
}
