use slide_lens::LensError;
use slide_lens::core::Viewport;
use slide_lens::render::{
    CirclePrimitive, Color, LinePrimitive, NullRenderer, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive,
};

#[test]
fn empty_frame_is_valid_and_empty() {
    let frame = RenderFrame::new(Viewport::new(100, 100));
    frame.validate().expect("valid");
    assert!(frame.is_empty());
}

#[test]
fn invalid_primitives_fail_validation() {
    let black = Color::rgb(0.0, 0.0, 0.0);

    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_circle(CirclePrimitive::new(10.0, 10.0, 0.0, black, 1.0, black));
    assert!(matches!(frame.validate(), Err(LensError::InvalidData(_))));

    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_line(LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, black));
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_rect(RectPrimitive::new(0.0, 0.0, -5.0, 5.0, black));
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(Viewport::new(100, 100)).with_text(
        TextPrimitive::new("y", 0.0, 0.0, 12.0, black, TextHAlign::Left).with_rotation(f64::NAN),
    );
    assert!(frame.validate().is_err());

    let frame = RenderFrame::new(Viewport::new(0, 100));
    assert!(matches!(
        frame.validate(),
        Err(LensError::InvalidViewport { .. })
    ));
}

#[test]
fn null_renderer_counts_every_primitive_kind() {
    let black = Color::rgb(0.0, 0.0, 0.0);
    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_rect(RectPrimitive::new(0.0, 0.0, 100.0, 100.0, black).with_border(1.0, black))
        .with_line(LinePrimitive::new(0.0, 0.0, 10.0, 10.0, 1.0, black))
        .with_circle(CirclePrimitive::new(5.0, 5.0, 2.0, black, 0.0, black))
        .with_text(TextPrimitive::new("0", 1.0, 1.0, 10.0, black, TextHAlign::Center));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn colors_parse_from_hex_and_darken() {
    let color = Color::from_hex("#3b82f6").expect("hex");
    assert_eq!(color, Color::rgb(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0));
    assert_eq!(
        Color::from_hex("fff").expect("short hex"),
        Color::rgb(1.0, 1.0, 1.0)
    );
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());

    let darker = Color::rgba(1.0, 0.5, 0.0, 0.4).darken(0.5);
    assert_eq!(darker, Color::rgba(0.5, 0.25, 0.0, 0.4));
    assert_eq!(Color::rgb(0.2, 0.2, 0.2).darken(3.0), Color::rgb(0.0, 0.0, 0.0));
}
