use approx::assert_relative_eq;
use slide_lens::LensError;
use slide_lens::camera::{
    CameraDirector, CameraPolicy, ContentCategory, ElementRole, FramingResult, SceneElement,
    ScreenViewport, StaticScene,
};
use slide_lens::core::Rect;

fn slide_scene() -> StaticScene {
    StaticScene::new(ScreenViewport::new(1920.0, 1080.0))
        .with_container(Rect::new(0.0, 0.0, 1920.0, 1080.0))
        .with_element(
            "tag1",
            SceneElement::new(Rect::new(700.0, 515.0, 100.0, 50.0)).with_role(ElementRole::Tag),
        )
        .with_element(
            "title1",
            SceneElement::new(Rect::new(860.0, 515.0, 200.0, 50.0)).after("tag1"),
        )
        .with_element(
            "lonelyTitle",
            SceneElement::new(Rect::new(860.0, 515.0, 200.0, 50.0)),
        )
        .with_element(
            "scaledPanel",
            SceneElement::new(Rect::new(260.0, 390.0, 1400.0, 300.0)).with_ancestor_scale(0.5),
        )
}

#[test]
fn centered_title_only_zooms() {
    let director = CameraDirector::default();
    let result = director.frame_element(&slide_scene(), "lonelyTitle", ContentCategory::Title, false);

    assert_eq!(result.scale, 1.5);
    assert_relative_eq!(result.translate_x_percent, 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.translate_y_percent, 0.0, epsilon = 1e-12);
}

#[test]
fn title_is_framed_together_with_its_tag() {
    let director = CameraDirector::default();
    let result = director.frame_element(&slide_scene(), "title1", ContentCategory::Title, false);

    assert_eq!(result.scale, 1.5);
    assert_relative_eq!(result.translate_x_percent, 80.0 / 1920.0 * 100.0, epsilon = 1e-12);
    assert_relative_eq!(result.translate_y_percent, 0.0, epsilon = 1e-12);
}

#[test]
fn ancestor_scale_is_divided_out_before_fitting() {
    let director = CameraDirector::default();
    let result =
        director.frame_element(&slide_scene(), "scaledPanel", ContentCategory::Generic, false);

    assert_relative_eq!(result.scale, 1920.0 / 2850.0, epsilon = 1e-12);
}

#[test]
fn missing_geometry_degrades_to_identity() {
    let director = CameraDirector::default();
    let scene = slide_scene();

    let result = director.frame_element(&scene, "nope", ContentCategory::Title, false);
    assert_eq!(result, FramingResult::IDENTITY);

    let err = director
        .try_frame_element(&scene, "nope", ContentCategory::Title)
        .expect_err("unknown element");
    assert!(matches!(err, LensError::MissingGeometry(_)));

    let no_container = StaticScene::new(ScreenViewport::new(1920.0, 1080.0))
        .with_element("title1", SceneElement::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
    let result = director.frame_element(&no_container, "title1", ContentCategory::Title, false);
    assert_eq!(result, FramingResult::IDENTITY);
}

#[test]
fn terminal_frame_skips_geometry_entirely() {
    let director = CameraDirector::default();
    let result = director.frame_element(&slide_scene(), "title1", ContentCategory::Title, true);
    assert_eq!(result, FramingResult::IDENTITY);
}

#[test]
fn highlight_framing_uses_scene_viewport() {
    let director = CameraDirector::default();
    let scene = slide_scene();

    let result = director.frame_highlight(&scene, "lonelyTitle");
    assert_eq!(result.scale, 2.5);

    assert_eq!(
        director.frame_highlight(&scene, "missing"),
        FramingResult::IDENTITY
    );
}

#[test]
fn transition_plan_settles_then_animates() {
    let director =
        CameraDirector::new(CameraPolicy::default().with_transition_duration_ms(600)).expect("director");
    let plan = director.plan_transition(
        &slide_scene(),
        FramingResult::IDENTITY,
        "lonelyTitle",
        ContentCategory::Title,
        false,
    );

    let [settle, animate] = plan.steps();
    assert_eq!(settle.transform, FramingResult::IDENTITY);
    assert_eq!(settle.css_transition(), "none");
    assert_eq!(animate.duration_ms, 600);
    assert_eq!(animate.transform.scale, 1.5);
    assert_eq!(animate.css_transition(), "transform 600ms ease-in-out");
    assert!(!plan.is_noop());
}

#[test]
fn director_rejects_invalid_policy() {
    let mut policy = CameraPolicy::default();
    policy.horizontal_limit_percent = f64::NAN;
    let err = CameraDirector::new(policy).expect_err("invalid policy");
    assert!(matches!(err, LensError::InvalidData(_)));
}

#[test]
fn legacy_identifiers_classify_into_categories() {
    let scene = slide_scene();
    let director = CameraDirector::default();

    let category = ContentCategory::from_markers("title1", &["title"]);
    assert_eq!(category, ContentCategory::Title);
    let result = director.frame_element(&scene, "title1", category, false);
    assert_eq!(result.scale, 1.5);
}
