use std::f64::consts::FRAC_PI_2;

use tracing::trace;

use crate::core::{CoordinateSystem, Dataset, project_points};
use crate::error::LensResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ScatterRenderOptions;

const X_LABEL_GAP_PX: f64 = 8.0;
const Y_LABEL_GAP_PX: f64 = 8.0;
const X_TITLE_GAP_PX: f64 = 32.0;
const Y_TITLE_GAP_PX: f64 = 40.0;

/// Render frame plus the coordinate system it was drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterScene {
    pub frame: RenderFrame,
    pub coordinate_system: CoordinateSystem,
}

pub(super) fn build_scatter_scene(
    dataset: &Dataset,
    options: &ScatterRenderOptions,
) -> LensResult<ScatterScene> {
    let system = CoordinateSystem::new(options.canvas, options.padding, dataset.params())?;
    let (left, top, right, bottom) = system.plot_bounds();
    let grid = system.grid_lines();

    let mut frame = RenderFrame::new(options.canvas).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        f64::from(options.canvas.width),
        f64::from(options.canvas.height),
        options.background_color,
    ));

    let x_precision = precision_from_step(system.x_interval);
    for line in grid.x {
        let x = system.to_x(line.value);
        frame.lines.push(LinePrimitive::new(
            x,
            top,
            x,
            bottom,
            options.grid_line_width,
            options.grid_color,
        ));
        if line.show_label {
            frame.texts.push(TextPrimitive::new(
                format_axis_value(line.value, x_precision),
                x,
                bottom + X_LABEL_GAP_PX,
                options.label_font_size_px,
                options.label_color,
                TextHAlign::Center,
            ));
        }
    }

    let y_precision = precision_from_step(system.y_interval);
    for line in grid.y {
        let y = system.to_y(line.value);
        frame.lines.push(LinePrimitive::new(
            left,
            y,
            right,
            y,
            options.grid_line_width,
            options.grid_color,
        ));
        if line.show_label {
            frame.texts.push(TextPrimitive::new(
                format_axis_value(line.value, y_precision),
                left - Y_LABEL_GAP_PX,
                y - options.label_font_size_px / 2.0,
                options.label_font_size_px,
                options.label_color,
                TextHAlign::Right,
            ));
        }
    }

    frame.lines.push(LinePrimitive::new(
        left,
        bottom,
        right,
        bottom,
        options.axis_line_width,
        options.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        left,
        top,
        left,
        bottom,
        options.axis_line_width,
        options.axis_color,
    ));

    if let Some(title) = non_empty(options.x_axis_title.as_deref()) {
        frame.texts.push(TextPrimitive::new(
            title,
            (left + right) / 2.0,
            bottom + X_TITLE_GAP_PX,
            options.title_font_size_px,
            options.label_color,
            TextHAlign::Center,
        ));
    }
    if let Some(title) = non_empty(options.y_axis_title.as_deref()) {
        frame.texts.push(
            TextPrimitive::new(
                title,
                left - Y_TITLE_GAP_PX - options.title_font_size_px,
                (top + bottom) / 2.0,
                options.title_font_size_px,
                options.label_color,
                TextHAlign::Center,
            )
            .with_rotation(-FRAC_PI_2),
        );
    }

    let outline = options.point_color.darken(options.point_outline_darken);
    frame.circles.extend(
        project_points(dataset.points(), &system)
            .into_iter()
            .map(|point| {
                CirclePrimitive::new(
                    point.x,
                    point.y,
                    options.point_radius,
                    options.point_color,
                    options.point_outline_width,
                    outline,
                )
            }),
    );

    trace!(
        lines = frame.lines.len(),
        texts = frame.texts.len(),
        circles = frame.circles.len(),
        "built scatter frame"
    );
    Ok(ScatterScene {
        frame,
        coordinate_system: system,
    })
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

/// Number of decimals needed to print multiples of `step` exactly.
fn precision_from_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 2;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().clamp(0, 12)
}

fn format_axis_value(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    if text.trim_start_matches('-').chars().all(|ch| ch == '0' || ch == '.') {
        return "0".to_owned();
    }
    text
}
