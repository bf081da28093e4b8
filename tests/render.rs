use std::fs;

use image::GenericImageView;
use light_test::core::error::Error;
use light_test::core::film::Film;
use light_test::core::light::Light;
use light_test::core::scene::{render_scenes, Scene};

#[test]
fn writes_one_binary_ppm_per_scene() {
    let dir = tempfile::tempdir().unwrap();
    let outdir = dir.path().join("images");
    let written = render_scenes(&outdir, 32).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec!["spotlight.ppm", "dirlight.ppm", "projlight.ppm", "comp_light.ppm"]
    );
    for path in &written {
        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..13], b"P6\n32 32\n255\n");
        // header plus raw samples
        assert!(bytes.len() > 3 * 32 * 32);
        assert!(bytes.len() < 3 * 32 * 32 + 64);
        let img = image::open(path).unwrap();
        assert_eq!(img.dimensions(), (32, 32));
    }
}

#[test]
fn dirlight_image_is_white() {
    let dir = tempfile::tempdir().unwrap();
    let written = render_scenes(dir.path(), 8).unwrap();
    let img = image::open(&written[1]).unwrap().to_rgb8();
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn written_pixels_match_the_film() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("comp.ppm");
    let mut film = Film::new(24, 16).unwrap();
    let lights: Vec<Box<dyn Light>> = Scene::CompLight.lights().unwrap();
    film.build_image(&lights);
    film.write_ppm(&path).unwrap();
    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (24, 16));
    assert_eq!(img.into_raw(), film.to_rgb8());
}

#[test]
fn spot_lights_brighten_their_own_corner() {
    let mut film = Film::new(65, 65).unwrap();
    film.build_image(&Scene::Spotlight.lights().unwrap());
    // (0.5, 0.5) is below the red light, (-0.5, -0.5) is below none
    let red_corner = film.get_pixel(48, 48);
    assert!(red_corner[0] > red_corner[1]);
    assert!(red_corner[0] > red_corner[2]);
    let empty_corner = film.get_pixel(16, 16);
    assert!(empty_corner[0] < red_corner[0]);
}

#[test]
fn first_row_of_the_file_is_sampled_at_y_minus_one() {
    let dir = tempfile::tempdir().unwrap();
    let written = render_scenes(dir.path(), 65).unwrap();
    let img = image::open(&written[2]).unwrap().to_rgb8();
    // blue projector sits over (0.5, -0.5), red over (0.5, 0.5)
    assert_eq!(img.get_pixel(48, 16).0, [0, 0, 63]);
    assert_eq!(img.get_pixel(48, 48).0, [63, 0, 0]);
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let film = Film::new(2, 2).unwrap();
    let result = film.write_ppm(&dir.path().join("missing").join("x.ppm"));
    assert!(matches!(result, Err(Error::Io { .. })));
}
