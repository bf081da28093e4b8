//! The **Film** models the sensing device: a fixed grid of samples on
//! the plane `z = -1`, seen by an implicit orthographic camera looking
//! down the negative z axis. Every pixel collects the sum of all light
//! contributions at its sample point. When rendering is done the film
//! writes the final image to a binary PPM file.

// std
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
// others
use log::{info, warn};
use rayon::prelude::*;
// light_test
use crate::core::error::{Error, Result};
use crate::core::geometry::{Normal3f, Point3f};
use crate::core::light::Light;
use crate::core::pbrt::clamp_t;
use crate::core::pbrt::{Float, Spectrum};

/// Depth of the sampled plane.
pub const PLANE_Z: Float = -1.0;

pub struct Film {
    pub width: usize,
    pub height: usize,
    pixels: Vec<Spectrum>,
}

impl Film {
    /// Both dimensions need at least two samples to span the plane
    /// from -1 to 1.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(Error::InvalidResolution { width, height });
        }
        Ok(Film {
            width,
            height,
            pixels: vec![Spectrum::default(); width * height],
        })
    }
    /// Position on the plane sampled by pixel column *x* and row *y*.
    pub fn sample_point(&self, x: usize, y: usize) -> Point3f {
        sample_point(self.width, self.height, x, y)
    }
    /// Normal of the sampled plane, facing the lights.
    pub fn sample_normal() -> Normal3f {
        Normal3f::new(0.0, 0.0, 1.0)
    }
    /// Sample all *lights* at every pixel, replacing whatever the film
    /// held before. Non-finite contributions are dropped.
    pub fn build_image(&mut self, lights: &[Box<dyn Light>]) {
        let width: usize = self.width;
        let height: usize = self.height;
        let n: Normal3f = Film::sample_normal();
        let dropped: usize = self
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| {
                let mut dropped: usize = 0;
                for (x, pixel) in row.iter_mut().enumerate() {
                    let p: Point3f = sample_point(width, height, x, y);
                    let mut l: Spectrum = Spectrum::default();
                    for light in lights {
                        let c: Spectrum = light.contrib(&p, &n);
                        if c.is_finite() {
                            l += c;
                        } else {
                            dropped += 1;
                        }
                    }
                    *pixel = l;
                }
                dropped
            })
            .sum();
        if dropped > 0 {
            warn!("dropped {} non-finite light contribution(s)", dropped);
        }
        info!(
            "sampled {} light(s) over {}x{} pixels",
            lights.len(),
            width,
            height
        );
    }
    pub fn get_pixel(&self, x: usize, y: usize) -> Spectrum {
        assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }
    pub fn pixels(&self) -> &[Spectrum] {
        &self.pixels
    }
    /// Average luminance over all pixels, clamped like the written
    /// image.
    pub fn average_luminance(&self) -> Float {
        let sum: Float = self
            .pixels
            .iter()
            .map(|l| l.clamp(0.0 as Float, 1.0 as Float).y())
            .sum();
        sum / self.pixels.len() as Float
    }
    /// Convert to 8-bit RGB, scanline by scanline starting at the row
    /// sampled at `y = -1`. Values are clamped to `[0, 1]` and scaled
    /// to `[0, 255]` without rounding.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut buffer: Vec<u8> = Vec::with_capacity(3 * self.pixels.len());
        for l in &self.pixels {
            for i in 0..3 {
                buffer.push((255.0 as Float * clamp_t(l[i], 0.0 as Float, 1.0 as Float)) as u8);
            }
        }
        buffer
    }
    /// Write the film as a binary portable pixmap: the header
    /// `P6\n<width> <height>\n255\n` followed by the raw samples.
    pub fn write_ppm(&self, path: &Path) -> Result<()> {
        info!(
            "Writing image {:?} with resolution {}x{}",
            path, self.width, self.height
        );
        let buffer: Vec<u8> = self.to_rgb8();
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)
            .and_then(|_| writer.write_all(&buffer))
            .and_then(|_| writer.flush())
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(())
    }
}

fn sample_point(width: usize, height: usize, x: usize, y: usize) -> Point3f {
    let scale_x: Float = 2.0 as Float / (width - 1) as Float;
    let scale_y: Float = 2.0 as Float / (height - 1) as Float;
    Point3f {
        x: -1.0 as Float + scale_x * x as Float,
        y: -1.0 as Float + scale_y * y as Float,
        z: PLANE_Z,
    }
}
