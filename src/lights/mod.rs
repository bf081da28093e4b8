//! The three light models that can illuminate the image plane.
//!
//! - DirectionalLight
//! - ProjectorLight
//! - SpotLight
//!
//! ## Directional Lights
//!
//! A directional light, also known as distant light, describes an
//! emitter that deposits illumination from the same direction at
//! every point in space.
//!
//! ```rust
//! use light_test::core::geometry::{Normal3f, Point3f, Vector3f};
//! use light_test::core::light::Light;
//! use light_test::core::pbrt::Spectrum;
//! use light_test::lights::directional::DirectionalLight;
//!
//! let red: Spectrum = Spectrum::rgb(1.0, 0.0, 0.0);
//! let light = DirectionalLight::new(&Vector3f::new(0.0, 0.0, -1.0), &red).unwrap();
//! let c = light.contrib(&Point3f::new(0.0, 0.0, -1.0), &Normal3f::new(0.0, 0.0, 1.0));
//! assert_eq!(c, red);
//! ```
//!
//! ## Spot Lights
//!
//! Isotropic point light source that emits the same amount of light
//! in all directions. What arrives at a surface falls off with the
//! squared distance.
//!
//! ```rust
//! use light_test::core::geometry::{Normal3f, Point3f};
//! use light_test::core::light::Light;
//! use light_test::core::pbrt::Spectrum;
//! use light_test::lights::spot::SpotLight;
//!
//! let light = SpotLight::new(&Point3f::new(0.0, 0.0, 1.0), &Spectrum::new(1.0));
//! let c = light.contrib(&Point3f::new(0.0, 0.0, -1.0), &Normal3f::new(0.0, 0.0, 1.0));
//! assert_eq!(c, Spectrum::new(0.25));
//! ```
//!
//! ## Projector Lights
//!
//! A spot light limited to a cone of directions. The cone is given
//! by its axis and its full opening angle.
//!
//! ```rust
//! use light_test::core::geometry::{Normal3f, Point3f, Vector3f};
//! use light_test::core::light::Light;
//! use light_test::core::pbrt::{radians, Spectrum};
//! use light_test::lights::projector::ProjectorLight;
//!
//! let light = ProjectorLight::new(
//!     &Point3f::new(0.0, 0.0, 1.0),
//!     &Vector3f::new(0.0, 0.0, -1.0),
//!     radians(30.0),
//!     &Spectrum::new(1.0),
//! )
//! .unwrap();
//! let n = Normal3f::new(0.0, 0.0, 1.0);
//! assert!(!light.contrib(&Point3f::new(0.0, 0.0, -1.0), &n).is_black());
//! assert!(light.contrib(&Point3f::new(1.0, 0.0, -1.0), &n).is_black());
//! ```

pub mod directional;
pub mod projector;
pub mod spot;
