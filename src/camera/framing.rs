use serde::{Deserialize, Serialize};

use crate::camera::{CameraPolicy, ContentCategory, ElementRole};
use crate::core::Rect;

/// CSS-pixel viewport plus the surface's device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenViewport {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

impl ScreenViewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, device_pixel_ratio: f64) -> Self {
        self.device_pixel_ratio = device_pixel_ratio;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

/// Camera transform: a scale plus a translate expressed in percent of the
/// container's width and height, applied around the element's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingResult {
    pub scale: f64,
    pub translate_x_percent: f64,
    pub translate_y_percent: f64,
}

impl FramingResult {
    pub const IDENTITY: FramingResult = FramingResult {
        scale: 1.0,
        translate_x_percent: 0.0,
        translate_y_percent: 0.0,
    };

    pub const TRANSFORM_ORIGIN: &'static str = "center center";

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    /// Composed CSS transform, e.g. `scale(1.5) translate(-10%, 4%)`.
    #[must_use]
    pub fn css_transform(self) -> String {
        format!(
            "scale({}) translate({}%, {}%)",
            self.scale, self.translate_x_percent, self.translate_y_percent
        )
    }
}

impl Default for FramingResult {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A sibling rendered directly before the framed element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiblingElement {
    pub role: ElementRole,
    pub rect: Rect,
}

/// Immutable input of one framing computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramingRequest {
    pub target: Rect,
    pub container: Rect,
    pub viewport: ScreenViewport,
    pub category: ContentCategory,
    /// The terminal (answer) frame always keeps the identity camera.
    #[serde(default)]
    pub terminal: bool,
}

/// Title targets absorb a preceding tag so both are framed together.
#[must_use]
pub fn compute_group_rect(
    target: Rect,
    preceding_sibling: Option<SiblingElement>,
    category: ContentCategory,
) -> Rect {
    match (category, preceding_sibling) {
        (
            ContentCategory::Title,
            Some(SiblingElement {
                role: ElementRole::Tag,
                rect,
            }),
        ) => target.union(rect),
        _ => target,
    }
}

impl CameraPolicy {
    /// Zoom factor that fits `target` (plus category padding) in the viewport.
    ///
    /// `target` must already be divided by any ancestor scale. Unresolvable
    /// geometry yields `1.0`.
    #[must_use]
    pub fn compute_scale(
        &self,
        target: Rect,
        category: ContentCategory,
        viewport: ScreenViewport,
    ) -> f64 {
        if !target.has_area() || !viewport.is_valid() {
            return 1.0;
        }
        let policy = self.category(category);
        let desired_width = target.width + policy.padding;
        let desired_height = target.height + policy.padding;
        if desired_width <= 0.0 || desired_height <= 0.0 {
            return 1.0;
        }

        let scale_x = viewport.width / desired_width;
        let scale_y = viewport.height / desired_height;
        let fitted = if policy.force_horizontal_fit || target.width > target.height {
            scale_x
        } else {
            scale_y
        };
        let clamped = fitted.max(policy.min_scale).min(policy.max_scale);

        clamped * self.density_factor(viewport.device_pixel_ratio)
    }

    /// Extra zoom applied on high-density surfaces; `1.0` at or below 1 dppx.
    #[must_use]
    pub fn density_factor(&self, device_pixel_ratio: f64) -> f64 {
        if device_pixel_ratio.is_finite() && device_pixel_ratio > 1.0 {
            (device_pixel_ratio * self.density_factor_per_ratio).min(self.density_factor_cap)
        } else {
            1.0
        }
    }

    /// Translation that moves `group`'s center onto the container's
    /// (possibly biased) center, clamped per category.
    #[must_use]
    pub fn compute_position(
        &self,
        group: Rect,
        container: Rect,
        scale: f64,
        category: ContentCategory,
        terminal: bool,
    ) -> FramingResult {
        if terminal || !group.is_finite() || !container.has_area() {
            return FramingResult::IDENTITY;
        }
        let policy = self.category(category);

        let (center_x, center_y) = group.center();
        let relative_x = center_x - container.left;
        let relative_y = center_y - container.top;
        let offset_x = container.width / 2.0 - relative_x;
        let offset_y = container.height * (0.5 + policy.vertical_bias_ratio) - relative_y;

        let horizontal_limit = self.horizontal_limit_percent;
        let vertical_limit = policy.vertical_ceiling.resolve(category.index());

        FramingResult {
            scale,
            translate_x_percent: clamp_symmetric(
                offset_x / container.width * 100.0,
                horizontal_limit,
            ),
            translate_y_percent: clamp_symmetric(
                offset_y / container.height * 100.0,
                vertical_limit,
            ),
        }
    }

    /// Zooms so the highlight covers a fixed share of the viewport width and
    /// centers it in the container.
    #[must_use]
    pub fn compute_highlight_framing(
        &self,
        highlight: Rect,
        container: Rect,
        viewport_width: f64,
    ) -> FramingResult {
        if !highlight.has_area()
            || !container.has_area()
            || !viewport_width.is_finite()
            || viewport_width <= 0.0
        {
            return FramingResult::IDENTITY;
        }
        let policy = self.highlight;
        let scale = (viewport_width * policy.viewport_fraction / highlight.width)
            .max(policy.min_scale)
            .min(policy.max_scale);

        let (center_x, center_y) = highlight.center();
        let offset_x = container.width / 2.0 - (center_x - container.left);
        let offset_y = container.height / 2.0 - (center_y - container.top);

        FramingResult {
            scale,
            translate_x_percent: offset_x / container.width * 100.0,
            translate_y_percent: offset_y / container.height * 100.0,
        }
    }

    /// Runs scale and position for an already-resolved request.
    #[must_use]
    pub fn frame(&self, request: &FramingRequest) -> FramingResult {
        if request.terminal {
            return FramingResult::IDENTITY;
        }
        let scale = self.compute_scale(request.target, request.category, request.viewport);
        self.compute_position(
            request.target,
            request.container,
            scale,
            request.category,
            false,
        )
    }
}

fn clamp_symmetric(value: f64, limit: f64) -> f64 {
    value.max(-limit).min(limit)
}
