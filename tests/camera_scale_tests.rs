use approx::assert_relative_eq;
use slide_lens::camera::{CameraPolicy, ContentCategory, ScreenViewport};
use slide_lens::core::Rect;

fn full_hd() -> ScreenViewport {
    ScreenViewport::new(1920.0, 1080.0)
}

#[test]
fn wide_title_fits_horizontally_and_clamps_to_max() {
    let policy = CameraPolicy::default();
    let target = Rect::new(0.0, 0.0, 200.0, 50.0);

    let scale = policy.compute_scale(target, ContentCategory::Title, full_hd());
    assert_eq!(scale, 1.5);
}

#[test]
fn tall_targets_fit_vertically() {
    let policy = CameraPolicy::default();
    let target = Rect::new(0.0, 0.0, 600.0, 1500.0);

    let scale = policy.compute_scale(target, ContentCategory::Generic, full_hd());
    assert_relative_eq!(scale, 1080.0 / 1550.0, epsilon = 1e-12);
}

#[test]
fn grouped_layout_always_fits_horizontally() {
    let policy = CameraPolicy::default();
    let tall = Rect::new(0.0, 0.0, 600.0, 1500.0);
    assert_eq!(
        policy.compute_scale(tall, ContentCategory::GroupedLayout, full_hd()),
        1.2
    );

    let wide = Rect::new(0.0, 0.0, 1500.0, 600.0);
    assert_relative_eq!(
        policy.compute_scale(wide, ContentCategory::GroupedLayout, full_hd()),
        1920.0 / 1620.0,
        epsilon = 1e-12
    );
}

#[test]
fn visualization_containers_cap_at_lower_zoom() {
    let policy = CameraPolicy::default();
    let small = Rect::new(0.0, 0.0, 300.0, 200.0);

    let scale = policy.compute_scale(
        small,
        ContentCategory::VisualizationContainer { index: 3 },
        full_hd(),
    );
    assert_eq!(scale, 1.2);
}

#[test]
fn oversized_targets_clamp_to_min() {
    let policy = CameraPolicy::default();
    let huge = Rect::new(0.0, 0.0, 10_000.0, 100.0);

    assert_eq!(
        policy.compute_scale(huge, ContentCategory::StepContent, full_hd()),
        0.5
    );
}

#[test]
fn high_density_surfaces_get_extra_zoom() {
    let policy = CameraPolicy::default();
    let target = Rect::new(0.0, 0.0, 200.0, 50.0);

    let retina = full_hd().with_device_pixel_ratio(2.0);
    assert_relative_eq!(
        policy.compute_scale(target, ContentCategory::Title, retina),
        1.8,
        epsilon = 1e-12
    );

    let slight = full_hd().with_device_pixel_ratio(1.1);
    assert_relative_eq!(
        policy.compute_scale(target, ContentCategory::Title, slight),
        1.5 * 0.88,
        epsilon = 1e-12
    );

    assert_eq!(policy.density_factor(1.0), 1.0);
    assert_eq!(policy.density_factor(0.5), 1.0);
    assert_eq!(policy.density_factor(f64::NAN), 1.0);
}

#[test]
fn unresolvable_geometry_scales_to_one() {
    let policy = CameraPolicy::default();

    let broken = Rect::new(f64::NAN, 0.0, 100.0, 100.0);
    assert_eq!(
        policy.compute_scale(broken, ContentCategory::Title, full_hd()),
        1.0
    );

    let target = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(
        policy.compute_scale(target, ContentCategory::Title, ScreenViewport::new(0.0, 1080.0)),
        1.0
    );

    let collapsed = Rect::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(
        policy.compute_scale(collapsed, ContentCategory::Title, full_hd()),
        1.0
    );

    let flat = Rect::new(10.0, 10.0, 400.0, 0.0);
    assert_eq!(
        policy.compute_scale(flat, ContentCategory::Generic, full_hd()),
        1.0
    );
}

#[test]
fn ancestor_scale_correction_is_applied_before_fitting() {
    let policy = CameraPolicy::default();
    let measured = Rect::new(0.0, 0.0, 1400.0, 300.0);

    let raw = policy.compute_scale(measured, ContentCategory::Generic, full_hd());
    let corrected = policy.compute_scale(measured.unscaled(0.5), ContentCategory::Generic, full_hd());

    assert_relative_eq!(raw, 1920.0 / 1450.0, epsilon = 1e-12);
    assert_relative_eq!(corrected, 1920.0 / 2850.0, epsilon = 1e-12);
}
