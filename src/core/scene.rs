//! The fixed light setups that get rendered. Each scene is a list of
//! lights in red, green, blue order and the name of the image it is
//! written to.

// std
use std::fs;
use std::path::{Path, PathBuf};
// others
use log::info;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
// light_test
use crate::core::error::{Error, Result};
use crate::core::film::Film;
use crate::core::geometry::{Point3f, Vector3f};
use crate::core::light::Light;
use crate::core::pbrt::{Float, Spectrum};
use crate::lights::directional::DirectionalLight;
use crate::lights::projector::ProjectorLight;
use crate::lights::spot::SpotLight;

/// Angle unit the projector apertures are given in (two degrees).
pub const ANGLE_UNIT: Float = 0.034_906_585_039_886_59;

/// Resolution every scene is rendered at.
pub const RESOLUTION: usize = 1024;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Scene {
    /// Three spot lights above three corners of the plane.
    Spotlight,
    /// Three white-summing directional lights shining straight down.
    Dirlight,
    /// Three narrow projectors, two of them slightly tilted.
    Projlight,
    /// One light of every kind, placed close to the plane.
    CompLight,
}

impl Scene {
    pub fn filename(&self) -> String {
        format!("{}.ppm", self)
    }
    pub fn lights(&self) -> Result<Vec<Box<dyn Light>>> {
        let red: Spectrum = Spectrum::rgb(1.0, 0.0, 0.0);
        let green: Spectrum = Spectrum::rgb(0.0, 1.0, 0.0);
        let blue: Spectrum = Spectrum::rgb(0.0, 0.0, 1.0);
        let down: Vector3f = Vector3f::new(0.0, 0.0, -1.0);
        let lights: Vec<Box<dyn Light>> = match self {
            Scene::Spotlight => vec![
                Box::new(SpotLight::new(&Point3f::new(0.5, 0.5, 1.0), &red)),
                Box::new(SpotLight::new(&Point3f::new(-0.5, 0.5, 1.0), &green)),
                Box::new(SpotLight::new(&Point3f::new(0.5, -0.5, 1.0), &blue)),
            ],
            Scene::Dirlight => vec![
                Box::new(DirectionalLight::new(&down, &red)?),
                Box::new(DirectionalLight::new(&down, &green)?),
                Box::new(DirectionalLight::new(&down, &blue)?),
            ],
            Scene::Projlight => {
                let aperture: Float = 15.0 * ANGLE_UNIT;
                vec![
                    Box::new(ProjectorLight::new(
                        &Point3f::new(0.5, 0.5, 1.0),
                        &down,
                        aperture,
                        &red,
                    )?),
                    Box::new(ProjectorLight::new(
                        &Point3f::new(-0.5, 0.5, 1.0),
                        &Vector3f::new(0.1, 0.0, -1.0),
                        aperture,
                        &green,
                    )?),
                    Box::new(ProjectorLight::new(
                        &Point3f::new(0.5, -0.5, 1.0),
                        &Vector3f::new(0.0, 0.1, -1.0),
                        aperture,
                        &blue,
                    )?),
                ]
            }
            Scene::CompLight => vec![
                Box::new(DirectionalLight::new(&down, &red)?),
                Box::new(SpotLight::new(&Point3f::new(-0.5, 0.5, 0.25), &green)),
                Box::new(ProjectorLight::new(
                    &Point3f::new(0.5, -0.5, 0.125),
                    &Vector3f::new(-0.3, 0.1, -1.0),
                    30.0 * ANGLE_UNIT,
                    &blue,
                )?),
            ],
        };
        Ok(lights)
    }
}

/// Render every scene at *resolution* x *resolution* pixels into
/// *outdir*, which is created if missing. Returns the written files
/// in scene order.
pub fn render_scenes(outdir: &Path, resolution: usize) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(outdir).map_err(|source| Error::Io {
        path: outdir.to_path_buf(),
        source,
    })?;
    let mut film: Film = Film::new(resolution, resolution)?;
    let mut written: Vec<PathBuf> = Vec::new();
    for scene in Scene::iter() {
        let lights: Vec<Box<dyn Light>> = scene.lights()?;
        film.build_image(&lights);
        let path: PathBuf = outdir.join(scene.filename());
        film.write_ppm(&path)?;
        info!(
            "{}: average luminance {:.4}",
            scene,
            film.average_luminance()
        );
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::geometry::Normal3f;
    use crate::core::pbrt::radians;
    use approx::assert_relative_eq;
    use std::str::FromStr;

    #[test]
    fn filenames_follow_scene_names() {
        let names: Vec<String> = Scene::iter().map(|s| s.filename()).collect();
        assert_eq!(
            names,
            vec!["spotlight.ppm", "dirlight.ppm", "projlight.ppm", "comp_light.ppm"]
        );
        assert_eq!(Scene::from_str("comp_light").unwrap(), Scene::CompLight);
    }

    #[test]
    fn every_scene_has_three_lights() {
        for scene in Scene::iter() {
            assert_eq!(scene.lights().unwrap().len(), 3, "{}", scene);
        }
    }

    #[test]
    fn angle_unit_is_two_degrees() {
        assert_relative_eq!(ANGLE_UNIT, radians(2.0), epsilon = 1e-15);
    }

    #[test]
    fn dirlight_sums_to_white() {
        let lights = Scene::Dirlight.lights().unwrap();
        let p = Point3f::new(0.25, -0.75, -1.0);
        let n = Film::sample_normal();
        let mut l = Spectrum::default();
        for light in &lights {
            l += light.contrib(&p, &n);
        }
        assert_eq!(l, Spectrum::new(1.0));
    }

    #[test]
    fn projlight_spots_are_separated() {
        let lights = Scene::Projlight.lights().unwrap();
        let n = Normal3f::new(0.0, 0.0, 1.0);
        let under_red = Point3f::new(0.5, 0.5, -1.0);
        assert!(lights[0].contrib(&under_red, &n)[0] > 0.0);
        assert!(lights[1].contrib(&under_red, &n).is_black());
        assert!(lights[2].contrib(&under_red, &n).is_black());
    }

    #[test]
    fn comp_light_projector_and_spot_positions() {
        let lights = Scene::CompLight.lights().unwrap();
        let n = Film::sample_normal();
        // the projector axis meets the plane at (0.1625, -0.3875)
        let under_axis = Point3f::new(0.1625, -0.3875, -1.0);
        let blue = lights[2].contrib(&under_axis, &n);
        assert!(blue[2] > 0.5, "blue {} under the projector axis", blue[2]);
        assert_eq!(blue[0], 0.0);
        // about 37 and 57 degrees off the axis, beyond the 30 degree half angle
        let green_corner = Point3f::new(-0.5, 0.5, -1.0);
        assert!(lights[2].contrib(&green_corner, &n).is_black());
        assert!(lights[2].contrib(&Point3f::new(1.0, 1.0, -1.0), &n).is_black());
        // the directional light is uniform, the spot peaks below itself
        assert_eq!(lights[0].contrib(&green_corner, &n), Spectrum::rgb(1.0, 0.0, 0.0));
        let green = lights[1].contrib(&green_corner, &n);
        assert_relative_eq!(green[1], 0.64, epsilon = 1e-12);
        let green_far = lights[1].contrib(&Point3f::new(0.5, -0.5, -1.0), &n);
        assert!(green[1] > 3.0 * green_far[1]);
        let mut l = Spectrum::default();
        for light in &lights {
            l += light.contrib(&green_corner, &n);
        }
        assert!(l[1] > l[2]);
    }
}
