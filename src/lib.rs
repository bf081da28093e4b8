//! # light_test
//!
//! Renders a plane at fixed depth lit by a handful of light sources
//! and writes one binary PPM image per scene.
//!
//! Three light models share the [Light][light] interface, which maps
//! a surface point and its normal to an RGB contribution:
//!
//! 1. [directional lights][directional]
//! 2. [spot lights][spot] (point lights with distance falloff)
//! 3. [projector lights][projector] (cone lights)
//!
//! The [Film][film] samples every pixel, sums the contributions of
//! all lights and encodes the result. The four hardcoded scenes live
//! in [core::scene][scene].
//!
//! [light]: core/light/trait.Light.html
//! [directional]: lights/directional/struct.DirectionalLight.html
//! [spot]: lights/spot/struct.SpotLight.html
//! [projector]: lights/projector/struct.ProjectorLight.html
//! [film]: core/film/struct.Film.html
//! [scene]: core/scene/enum.Scene.html

#[macro_use]
extern crate impl_ops;

pub mod core;
pub mod lights;
