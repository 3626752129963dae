// Target generators, mask sampling and the table regeneration policy.

use glam::Vec3;
use particles_core::error::RasterError;
use particles_core::raster::{FixedRasterizer, PixelBuffer, RasterScene, Rasterizer, SoftwareRasterizer};
use particles_core::targets::{self, scenes, TargetConfiguration, TargetKind, TargetLibrary};
use particles_core::Pattern;
use rand::rngs::StdRng;
use rand::SeedableRng;

const N: usize = 2_000;

fn rng() -> StdRng {
    StdRng::seed_from_u64(1234)
}

fn check_shape(t: &TargetConfiguration) {
    assert_eq!(t.len(), N);
    assert!(t.is_finite());
    assert_eq!(t.as_flat().len(), N * 3);
}

struct BrokenSurface;

impl Rasterizer for BrokenSurface {
    fn rasterize(&mut self, _scene: &RasterScene) -> Result<PixelBuffer, RasterError> {
        Err(RasterError::SurfaceUnavailable("no context".into()))
    }
}

#[test]
fn sphere_points_lie_in_the_shell() {
    let t = targets::sphere(N, &mut rng());
    check_shape(&t);
    for p in t.points() {
        let r = p.length();
        assert!((3.75 - 1e-3..=4.25 + 1e-3).contains(&r), "radius {r}");
    }
}

#[test]
fn cube_points_lie_inside_the_cube() {
    let t = targets::cube(N, &mut rng());
    check_shape(&t);
    assert!(t.points().iter().all(|p| p.abs().max_element() <= 3.0));
}

#[test]
fn ring_points_form_a_band() {
    let t = targets::ring(N, &mut rng());
    check_shape(&t);
    for p in t.points() {
        let r = p.truncate().length();
        assert!((4.25 - 1e-3..=5.75 + 1e-3).contains(&r), "radius {r}");
        assert!(p.z.abs() <= 1.0);
    }
}

#[test]
fn random_cloud_stays_in_bounds() {
    let t = targets::random_cloud(N, &mut rng());
    check_shape(&t);
    assert!(t.points().iter().all(|p| p.abs().max_element() <= 7.5));
}

#[test]
fn pattern_target_dispatches_by_pattern() {
    for pattern in Pattern::ALL {
        check_shape(&targets::pattern_target(pattern, N, &mut rng()));
    }
    let a = targets::pattern_target(Pattern::Cube, N, &mut rng());
    let b = targets::cube(N, &mut rng());
    assert_eq!(a, b);
}

#[test]
fn hollow_heart_is_flat_and_bounded() {
    let t = targets::hollow_heart(N, &mut rng());
    check_shape(&t);
    for p in t.points() {
        assert!(p.z.abs() <= 0.25);
        assert!(p.x.abs() <= 16.0 * 0.35 + 0.25);
    }
}

#[test]
fn layered_heart_shrinks_layer_by_layer() {
    let t = targets::layered_heart(N, &mut rng());
    check_shape(&t);
    let max_x = |range: std::ops::Range<usize>| {
        t.points()[range]
            .iter()
            .map(|p| p.x.abs())
            .fold(0.0f32, f32::max)
    };
    // outer 50%, middle 30%, inner 20%
    assert!(max_x(0..N / 2) <= 16.0 * 0.35 + 0.2);
    assert!(max_x(N / 2..N * 8 / 10) <= 16.0 * 0.22 + 0.2);
    assert!(max_x(N * 8 / 10..N) <= 16.0 * 0.12 + 0.2);
    assert!(max_x(0..N / 2) > max_x(N * 8 / 10..N));
}

#[test]
fn saturn_splits_core_and_ring() {
    let t = targets::saturn(N, &mut rng());
    check_shape(&t);
    let core = N * 3 / 10;
    for p in &t.points()[..core] {
        assert!((p.length() - 2.5).abs() < 1e-3);
    }
    for p in &t.points()[core..] {
        let r = p.length();
        assert!((4.5 - 1e-3..=8.0 + 0.06).contains(&r), "ring radius {r}");
    }
}

#[test]
fn mask_samples_only_bright_pixels() {
    let mut buf = PixelBuffer::new(10, 10);
    buf.set_pixel(4, 4, [255, 255, 255, 255]);
    // odd coordinates are skipped by the sampling grid
    buf.set_pixel(5, 5, [255, 255, 255, 255]);
    assert_eq!(targets::candidate_pixels(&buf, 2, 128), vec![(4, 4)]);

    let t = targets::sample_mask(&buf, 1.0, 50, &mut rng());
    assert_eq!(t.len(), 50);
    for p in t.points() {
        assert_eq!((p.x, p.y), (-1.0, 1.0));
        assert!(p.z.abs() <= 0.25);
    }
}

#[test]
fn mask_cycles_through_candidates_in_scan_order() {
    let mut buf = PixelBuffer::new(4, 4);
    buf.set_pixel(0, 0, [200, 0, 0, 255]);
    buf.set_pixel(2, 2, [200, 0, 0, 255]);
    let t = targets::sample_mask(&buf, 0.5, 4, &mut rng());
    let xy: Vec<(f32, f32)> = t.points().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(xy, [(-1.0, 1.0), (0.0, 0.0), (-1.0, 1.0), (0.0, 0.0)]);
}

#[test]
fn dark_mask_falls_back_to_origin() {
    let t = targets::sample_mask(&PixelBuffer::new(20, 20), 0.05, N, &mut rng());
    check_shape(&t);
    assert!(t.points().iter().all(|p| *p == Vec3::ZERO));
}

#[test]
fn failing_surface_falls_back_to_origin() {
    let scene = scenes::love_text().scene;
    let t = targets::rasterized_target(&mut BrokenSurface, &scene, 0.05, N, &mut rng());
    assert_eq!(t, TargetConfiguration::zeros(N));
}

#[test]
fn fixed_rasterizer_feeds_mask_sampling() {
    let mut buf = PixelBuffer::new(8, 8);
    buf.set_pixel(6, 2, [255, 0, 0, 255]);
    let mut surface = FixedRasterizer { buffer: buf };
    let scene = scenes::characters().scene;
    let t = targets::rasterized_target(&mut surface, &scene, 2.0, 3, &mut rng());
    assert!(t.points().iter().all(|p| (p.x, p.y) == (4.0, 4.0)));
}

#[test]
fn check_len_reports_both_sizes() {
    let t = TargetConfiguration::zeros(3);
    assert!(t.check_len(3).is_ok());
    let err = t.check_len(4).unwrap_err();
    assert_eq!((err.expected, err.actual), (4, 3));
}

#[test]
fn library_builds_every_table_at_full_size() {
    let lib = TargetLibrary::new(N, 9, &mut SoftwareRasterizer::new());
    assert_eq!(lib.count(), N);
    assert_eq!(lib.pattern(), Pattern::Sphere);
    for kind in TargetKind::FIXED.into_iter().chain([TargetKind::Pattern]) {
        let t = lib.get(kind).unwrap();
        check_shape(t);
        assert!(t.points().iter().any(|p| *p != Vec3::ZERO), "{kind:?} is empty");
    }
}

#[test]
fn library_is_deterministic_for_a_seed() {
    let a = TargetLibrary::new(500, 3, &mut SoftwareRasterizer::new());
    let b = TargetLibrary::new(500, 3, &mut SoftwareRasterizer::new());
    for kind in TargetKind::FIXED {
        assert_eq!(a.get(kind), b.get(kind));
    }
}

#[test]
fn only_the_pattern_table_is_regenerated() {
    let mut lib = TargetLibrary::new(500, 5, &mut SoftwareRasterizer::new());
    let fixed_before: Vec<TargetConfiguration> = TargetKind::FIXED
        .iter()
        .map(|k| lib.resolve(*k).clone())
        .collect();
    let sphere = lib.resolve(TargetKind::Pattern).clone();

    assert!(!lib.set_pattern(Pattern::Sphere));
    assert_eq!(lib.resolve(TargetKind::Pattern), &sphere);

    assert!(lib.set_pattern(Pattern::Cube));
    assert_eq!(lib.pattern(), Pattern::Cube);
    assert_ne!(lib.resolve(TargetKind::Pattern), &sphere);
    assert!(lib
        .resolve(TargetKind::Pattern)
        .points()
        .iter()
        .all(|p| p.abs().max_element() <= 3.0));

    for (kind, before) in TargetKind::FIXED.iter().zip(&fixed_before) {
        assert_eq!(lib.resolve(*kind), before);
    }
}
