//! The building blocks shared by all lights: numeric types, geometry,
//! RGB colors, the **Light** interface, the film that samples the
//! plane and the fixed scenes.

pub mod error;
pub mod film;
pub mod geometry;
pub mod light;
pub mod pbrt;
pub mod scene;
pub mod spectrum;
