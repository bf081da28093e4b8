// others
use log::debug;
// light_test
use crate::core::error::{Error, Result};
use crate::core::geometry::vec3_dot_nrmf;
use crate::core::geometry::{Normal3f, Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::pbrt::{Float, Spectrum};

/// Light arriving from the same direction at every point, like the
/// sun seen from the ground.
#[derive(Debug, Copy, Clone)]
pub struct DirectionalLight {
    /// Unit vector along which the light travels.
    pub w_light: Vector3f,
    pub l: Spectrum,
}

impl DirectionalLight {
    pub fn new(direction: &Vector3f, l: &Spectrum) -> Result<Self> {
        if direction.length_squared() == 0.0 as Float {
            return Err(Error::DegenerateDirection("directional light"));
        }
        let w_light: Vector3f = direction.normalize();
        debug!("directional light along {:?} with color {:?}", w_light, l);
        Ok(DirectionalLight {
            w_light,
            l: *l,
        })
    }
}

impl Light for DirectionalLight {
    fn contrib(&self, _p: &Point3f, n: &Normal3f) -> Spectrum {
        let cos_theta: Float = vec3_dot_nrmf(&-self.w_light, n);
        if cos_theta <= 0.0 as Float {
            return Spectrum::default();
        }
        self.l * cos_theta
    }
}
