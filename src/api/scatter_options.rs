use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{LensError, LensResult};
use crate::render::Color;

/// Visual configuration of one scatter render.
///
/// Serializable so hosts can keep chart styling next to slide content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterRenderOptions {
    #[serde(default = "default_canvas")]
    pub canvas: Viewport,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_point_color")]
    pub point_color: Color,
    /// How much darker the marker outline is than its fill.
    #[serde(default = "default_point_outline_darken")]
    pub point_outline_darken: f64,
    #[serde(default = "default_point_outline_width")]
    pub point_outline_width: f64,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_grid_line_width")]
    pub grid_line_width: f64,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_line_width")]
    pub axis_line_width: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_title_font_size_px")]
    pub title_font_size_px: f64,
    #[serde(default)]
    pub x_axis_title: Option<String>,
    #[serde(default)]
    pub y_axis_title: Option<String>,
}

impl Default for ScatterRenderOptions {
    fn default() -> Self {
        Self::new(default_canvas())
    }
}

impl ScatterRenderOptions {
    #[must_use]
    pub fn new(canvas: Viewport) -> Self {
        Self {
            canvas,
            padding: default_padding(),
            point_radius: default_point_radius(),
            point_color: default_point_color(),
            point_outline_darken: default_point_outline_darken(),
            point_outline_width: default_point_outline_width(),
            background_color: default_background_color(),
            grid_color: default_grid_color(),
            grid_line_width: default_grid_line_width(),
            axis_color: default_axis_color(),
            axis_line_width: default_axis_line_width(),
            label_color: default_label_color(),
            label_font_size_px: default_label_font_size_px(),
            title_font_size_px: default_title_font_size_px(),
            x_axis_title: None,
            y_axis_title: None,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_point_color(mut self, color: Color) -> Self {
        self.point_color = color;
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_axis_title: impl Into<String>,
        y_axis_title: impl Into<String>,
    ) -> Self {
        self.x_axis_title = Some(x_axis_title.into());
        self.y_axis_title = Some(y_axis_title.into());
        self
    }

    pub fn validate(&self) -> LensResult<()> {
        if !self.canvas.is_valid() {
            return Err(LensError::InvalidViewport {
                width: f64::from(self.canvas.width),
                height: f64::from(self.canvas.height),
            });
        }
        for (name, value) in [
            ("padding", self.padding),
            ("point outline width", self.point_outline_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LensError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("point radius", self.point_radius),
            ("grid line width", self.grid_line_width),
            ("axis line width", self.axis_line_width),
            ("label font size", self.label_font_size_px),
            ("title font size", self.title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LensError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !self.point_outline_darken.is_finite()
            || !(0.0..=1.0).contains(&self.point_outline_darken)
        {
            return Err(LensError::InvalidData(
                "point outline darken must be in [0, 1]".to_owned(),
            ));
        }
        for color in [
            self.point_color,
            self.background_color,
            self.grid_color,
            self.axis_color,
            self.label_color,
        ] {
            color.validate()?;
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> LensResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            LensError::InvalidData(format!("failed to parse scatter options json: {e}"))
        })?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_json_pretty(&self) -> LensResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LensError::InvalidData(format!("failed to serialize scatter options: {e}"))
        })
    }
}

fn default_canvas() -> Viewport {
    Viewport::new(600, 400)
}

fn default_padding() -> f64 {
    50.0
}

fn default_point_radius() -> f64 {
    5.0
}

fn default_point_color() -> Color {
    // #3b82f6
    Color::rgb(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0)
}

fn default_point_outline_darken() -> f64 {
    0.3
}

fn default_point_outline_width() -> f64 {
    1.5
}

fn default_background_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}

fn default_grid_color() -> Color {
    Color::rgb(0.90, 0.90, 0.90)
}

fn default_grid_line_width() -> f64 {
    1.0
}

fn default_axis_color() -> Color {
    Color::rgb(0.20, 0.20, 0.20)
}

fn default_axis_line_width() -> f64 {
    2.0
}

fn default_label_color() -> Color {
    Color::rgb(0.33, 0.33, 0.33)
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_title_font_size_px() -> f64 {
    14.0
}
