use approx::assert_relative_eq;
use slide_lens::LensError;
use slide_lens::api::{ScatterChart, ScatterRenderOptions};
use slide_lens::core::{Dataset, Viewport};
use slide_lens::render::{Color, NullRenderer, TextHAlign};

fn squares() -> Dataset {
    Dataset::parse("0,0 1,1 2,4 3,9").expect("dataset")
}

fn options() -> ScatterRenderOptions {
    ScatterRenderOptions::new(Viewport::new(400, 400)).with_padding(50.0)
}

#[test]
fn scene_contains_background_grid_axes_labels_and_points() {
    let chart = ScatterChart::new(NullRenderer::default(), options()).expect("chart");
    let scene = chart.build_scene(&squares()).expect("scene");
    scene.frame.validate().expect("valid frame");

    assert_eq!(scene.frame.rects.len(), 1, "background");
    assert_eq!(scene.frame.lines.len(), 4 + 10 + 2, "grid + axes");
    assert_eq!(scene.frame.texts.len(), 4 + 10, "axis labels");
    assert_eq!(scene.frame.circles.len(), 4);
}

#[test]
fn points_are_drawn_at_mapped_positions_with_darker_outline() {
    let chart = ScatterChart::new(NullRenderer::default(), options()).expect("chart");
    let scene = chart.build_scene(&squares()).expect("scene");
    let system = scene.coordinate_system;

    let last = scene.frame.circles[3];
    assert_relative_eq!(last.center_x, system.to_x(3.0), epsilon = 1e-9);
    assert_relative_eq!(last.center_y, system.to_y(9.0), epsilon = 1e-9);
    assert_relative_eq!(last.center_y, 50.0, epsilon = 1e-9);
    assert_eq!(last.radius, 5.0);
    assert!(last.stroke_color.blue < last.fill_color.blue);
    assert_eq!(last.stroke_color.alpha, last.fill_color.alpha);
}

#[test]
fn axis_titles_are_added_when_configured() {
    let chart = ScatterChart::new(
        NullRenderer::default(),
        options().with_axis_titles("Input", "Output"),
    )
    .expect("chart");
    let scene = chart.build_scene(&squares()).expect("scene");

    assert_eq!(scene.frame.texts.len(), 14 + 2);
    let y_title = scene
        .frame
        .texts
        .iter()
        .find(|text| text.text == "Output")
        .expect("y title");
    assert!(y_title.rotation_rad < 0.0);
    assert_eq!(y_title.h_align, TextHAlign::Center);
}

#[test]
fn blank_titles_are_skipped() {
    let chart = ScatterChart::new(NullRenderer::default(), options().with_axis_titles(" ", ""))
        .expect("chart");
    let scene = chart.build_scene(&squares()).expect("scene");
    assert_eq!(scene.frame.texts.len(), 14);
}

#[test]
fn labels_follow_coarse_intervals() {
    let chart = ScatterChart::new(NullRenderer::default(), options()).expect("chart");
    let dataset = Dataset::parse("0,0 0.5,0.2 1,0.4").expect("dataset");
    let scene = chart.build_scene(&dataset).expect("scene");

    let labels: Vec<&str> = scene.frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "0.5", "1.0", "0", "0.2", "0.4"]);
    assert_eq!(scene.frame.lines.len(), 11 + 5 + 2);
}

#[test]
fn render_hands_frame_to_renderer_and_returns_coordinates() {
    let mut chart = ScatterChart::new(NullRenderer::default(), options()).expect("chart");
    let system = chart.render(&squares()).expect("render");

    assert_relative_eq!(system.cell_size, 100.0 / 3.0, epsilon = 1e-9);
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_circle_count, 4);
    assert_eq!(renderer.last_line_count, 16);
    assert_eq!(renderer.last_text_count, 14);
    assert_eq!(renderer.last_rect_count, 1);
}

#[test]
fn invalid_options_are_rejected() {
    let err = ScatterChart::new(
        NullRenderer::default(),
        options().with_point_radius(0.0),
    )
    .expect_err("zero radius");
    assert!(matches!(err, LensError::InvalidData(_)));

    let mut chart = ScatterChart::new(NullRenderer::default(), options()).expect("chart");
    let err = chart
        .set_options(options().with_point_color(Color::rgb(2.0, 0.0, 0.0)))
        .expect_err("bad color");
    assert!(matches!(err, LensError::InvalidData(_)));
    assert_eq!(chart.options(), &options());
}

#[test]
fn padding_too_large_for_canvas_fails_the_render() {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterRenderOptions::new(Viewport::new(80, 80)).with_padding(50.0),
    )
    .expect("options alone are valid");
    let err = chart.render(&squares()).expect_err("no drawable area");
    assert!(matches!(err, LensError::InvalidViewport { .. }));
}

#[test]
fn options_load_from_partial_json() {
    let options = ScatterRenderOptions::from_json_str(
        r#"{ "canvas": { "width": 320, "height": 240 }, "point_radius": 3.0, "x_axis_title": "t" }"#,
    )
    .expect("parse");

    assert_eq!(options.canvas, Viewport::new(320, 240));
    assert_eq!(options.point_radius, 3.0);
    assert_eq!(options.padding, 50.0);
    assert_eq!(options.x_axis_title.as_deref(), Some("t"));

    let json = options.to_json_pretty().expect("serialize");
    let restored = ScatterRenderOptions::from_json_str(&json).expect("round trip");
    assert_eq!(restored.canvas, options.canvas);
    assert_eq!(restored.point_radius, 3.0);
    assert_eq!(restored.x_axis_title, options.x_axis_title);
    assert_eq!(restored.y_axis_title, None);
}
