use std::{fs, path::PathBuf, process};

use raytracer_basics::{
    error::RenderError,
    options::RenderOptions,
    pass::{render_all, PassKind},
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("raytracer-basics-{}-{}", name, process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn all_passes_write_their_files() {
    let dir = scratch_dir("all");
    let options = RenderOptions {
        size: 32,
        output_dir: dir.clone(),
    };

    let written = render_all(&options, &PassKind::ALL).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        names,
        [
            "sphere_orthographic.png",
            "plane_orthographic.png",
            "plane_perspective.png",
            "shading.png"
        ]
    );

    for path in &written {
        let image = image::open(path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (32, 32));
        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            assert!(a == 0 || a == 255, "{} has soft alpha", path.display());
            if a == 0 {
                assert_eq!([r, g, b], [0, 0, 0]);
            }
        }
    }

    let sphere = image::open(dir.join("sphere_orthographic.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(sphere.get_pixel(16, 16).0[3], 255);
    assert_eq!(sphere.get_pixel(0, 0).0[3], 0);

    // grayscale passes write the same value to every channel
    let [r, g, b, _] = sphere.get_pixel(12, 12).0;
    assert!(r == g && g == b);

    let shaded = image::open(dir.join("shading.png")).unwrap().to_rgba8();
    let [r, g, b, a] = shaded.get_pixel(16, 16).0;
    assert_eq!(a, 255);
    assert!(r > g && g > b);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rerunning_overwrites_with_identical_bytes() {
    let dir = scratch_dir("rerun");
    let options = RenderOptions {
        size: 24,
        output_dir: dir.clone(),
    };

    let first = render_all(&options, &[PassKind::PlanePerspective]).unwrap();
    let before = fs::read(&first[0]).unwrap();
    render_all(&options, &[PassKind::Shading, PassKind::PlanePerspective]).unwrap();
    let after = fs::read(&first[0]).unwrap();
    assert_eq!(before, after);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = scratch_dir("blocked");
    fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("not-a-dir");
    fs::write(&blocker, b"").unwrap();

    let options = RenderOptions {
        size: 8,
        output_dir: blocker,
    };
    assert!(matches!(
        render_all(&options, &[PassKind::SphereOrthographic]),
        Err(RenderError::Io(_))
    ));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn zero_size_is_rejected_before_rendering() {
    let options = RenderOptions {
        size: 0,
        output_dir: scratch_dir("zero"),
    };
    assert!(matches!(
        render_all(&options, &PassKind::ALL),
        Err(RenderError::InvalidSize(0))
    ));
}

#[test]
fn oversized_render_is_rejected_before_allocating() {
    let options = RenderOptions {
        size: 70000,
        output_dir: scratch_dir("huge"),
    };
    assert!(matches!(
        render_all(&options, &[PassKind::SphereOrthographic]),
        Err(RenderError::InvalidSize(70000))
    ));
}
