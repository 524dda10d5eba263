use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::camera::{CategoryKind, ContentCategory};
use crate::error::{LensError, LensResult};

/// Ceiling for the absolute vertical translate, in percent of container height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum VerticalCeiling {
    Fixed { percent: f64 },
    /// `min(base + index * per_index, cap)`.
    Indexed { base: f64, per_index: f64, cap: f64 },
}

impl VerticalCeiling {
    #[must_use]
    pub fn resolve(self, index: Option<u32>) -> f64 {
        match self {
            Self::Fixed { percent } => percent,
            Self::Indexed {
                base,
                per_index,
                cap,
            } => (base + f64::from(index.unwrap_or(0)) * per_index).min(cap),
        }
    }

    fn validate(self) -> LensResult<Self> {
        let valid = match self {
            Self::Fixed { percent } => percent.is_finite() && percent >= 0.0,
            Self::Indexed {
                base,
                per_index,
                cap,
            } => {
                base.is_finite()
                    && per_index.is_finite()
                    && cap.is_finite()
                    && base >= 0.0
                    && per_index >= 0.0
                    && cap >= 0.0
            }
        };
        if valid {
            Ok(self)
        } else {
            Err(LensError::InvalidData(
                "vertical ceiling values must be finite and >= 0".to_owned(),
            ))
        }
    }
}

/// Per-category padding, scale bounds and vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    /// Pixels added to both target dimensions before fitting.
    pub padding: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Fraction of container height the target center sits below the middle.
    #[serde(default)]
    pub vertical_bias_ratio: f64,
    pub vertical_ceiling: VerticalCeiling,
    /// Always fit on the horizontal axis, whatever the aspect ratio.
    #[serde(default)]
    pub force_horizontal_fit: bool,
}

impl CategoryPolicy {
    const fn standard(padding: f64, ceiling_percent: f64) -> Self {
        Self {
            padding,
            min_scale: 0.5,
            max_scale: 1.5,
            vertical_bias_ratio: 0.0,
            vertical_ceiling: VerticalCeiling::Fixed {
                percent: ceiling_percent,
            },
            force_horizontal_fit: false,
        }
    }

    #[must_use]
    pub fn defaults_for(kind: CategoryKind) -> Self {
        match kind {
            CategoryKind::Title => Self::standard(70.0, 250.0),
            CategoryKind::StepContent => Self::standard(80.0, 250.0),
            CategoryKind::KeywordContent => Self::standard(60.0, 300.0),
            CategoryKind::DetailContent => Self {
                vertical_bias_ratio: 0.10,
                ..Self::standard(100.0, 300.0)
            },
            CategoryKind::VisualizationContainer => Self {
                max_scale: 1.2,
                vertical_ceiling: VerticalCeiling::Indexed {
                    base: 50.0,
                    per_index: 60.0,
                    cap: 400.0,
                },
                ..Self::standard(40.0, 250.0)
            },
            CategoryKind::Step => Self {
                vertical_ceiling: VerticalCeiling::Indexed {
                    base: 50.0,
                    per_index: 50.0,
                    cap: 400.0,
                },
                ..Self::standard(80.0, 250.0)
            },
            CategoryKind::GroupedLayout => Self {
                max_scale: 1.2,
                force_horizontal_fit: true,
                ..Self::standard(120.0, 250.0)
            },
            CategoryKind::Generic => Self::standard(50.0, 250.0),
        }
    }

    fn validate(self) -> LensResult<Self> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(LensError::InvalidData(
                "category padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_scale.is_finite()
            || !self.max_scale.is_finite()
            || self.min_scale <= 0.0
            || self.min_scale > self.max_scale
        {
            return Err(LensError::InvalidData(
                "category scale bounds must be finite with 0 < min <= max".to_owned(),
            ));
        }
        if !self.vertical_bias_ratio.is_finite() {
            return Err(LensError::InvalidData(
                "vertical bias ratio must be finite".to_owned(),
            ));
        }
        self.vertical_ceiling.validate()?;
        Ok(self)
    }
}

/// Scale policy for zooming onto a highlighted sub-region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightPolicy {
    /// Share of the viewport width the highlight should occupy.
    pub viewport_fraction: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for HighlightPolicy {
    fn default() -> Self {
        Self {
            viewport_fraction: 0.35,
            min_scale: 1.2,
            max_scale: 2.5,
        }
    }
}

/// Complete camera constant table.
///
/// Serializable so hosts can tune framing without recompiling; missing
/// fields fall back to the built-in table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPolicy {
    #[serde(default = "default_categories")]
    pub categories: IndexMap<CategoryKind, CategoryPolicy>,
    #[serde(default = "default_horizontal_limit_percent")]
    pub horizontal_limit_percent: f64,
    /// Density correction is `min(dpr * per_ratio, cap)` when `dpr > 1`.
    #[serde(default = "default_density_factor_per_ratio")]
    pub density_factor_per_ratio: f64,
    #[serde(default = "default_density_factor_cap")]
    pub density_factor_cap: f64,
    #[serde(default)]
    pub highlight: HighlightPolicy,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u32,
}

impl Default for CameraPolicy {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            horizontal_limit_percent: default_horizontal_limit_percent(),
            density_factor_per_ratio: default_density_factor_per_ratio(),
            density_factor_cap: default_density_factor_cap(),
            highlight: HighlightPolicy::default(),
            transition_duration_ms: default_transition_duration_ms(),
        }
    }
}

impl CameraPolicy {
    /// Policy row for `category`, falling back to the built-in row when the
    /// table was loaded without it.
    #[must_use]
    pub fn category(&self, category: ContentCategory) -> CategoryPolicy {
        let kind = category.kind();
        self.categories
            .get(&kind)
            .copied()
            .unwrap_or_else(|| CategoryPolicy::defaults_for(kind))
    }

    /// Replaces one category row.
    #[must_use]
    pub fn with_category(mut self, kind: CategoryKind, policy: CategoryPolicy) -> Self {
        self.categories.insert(kind, policy);
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: HighlightPolicy) -> Self {
        self.highlight = highlight;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: u32) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn validate(&self) -> LensResult<()> {
        for policy in self.categories.values() {
            policy.validate()?;
        }
        if !self.horizontal_limit_percent.is_finite() || self.horizontal_limit_percent < 0.0 {
            return Err(LensError::InvalidData(
                "horizontal limit must be finite and >= 0".to_owned(),
            ));
        }
        if !self.density_factor_per_ratio.is_finite()
            || !self.density_factor_cap.is_finite()
            || self.density_factor_per_ratio <= 0.0
            || self.density_factor_cap <= 0.0
        {
            return Err(LensError::InvalidData(
                "density correction factors must be finite and > 0".to_owned(),
            ));
        }
        let highlight = self.highlight;
        if !highlight.viewport_fraction.is_finite()
            || highlight.viewport_fraction <= 0.0
            || !highlight.min_scale.is_finite()
            || !highlight.max_scale.is_finite()
            || highlight.min_scale <= 0.0
            || highlight.min_scale > highlight.max_scale
        {
            return Err(LensError::InvalidData(
                "highlight policy must have a positive fraction and 0 < min <= max".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> LensResult<Self> {
        let policy: Self = serde_json::from_str(input).map_err(|e| {
            LensError::InvalidData(format!("failed to parse camera policy json: {e}"))
        })?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn to_json_pretty(&self) -> LensResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LensError::InvalidData(format!("failed to serialize camera policy: {e}"))
        })
    }
}

fn default_categories() -> IndexMap<CategoryKind, CategoryPolicy> {
    CategoryKind::ALL
        .into_iter()
        .map(|kind| (kind, CategoryPolicy::defaults_for(kind)))
        .collect()
}

fn default_horizontal_limit_percent() -> f64 {
    50.0
}

fn default_density_factor_per_ratio() -> f64 {
    0.8
}

fn default_density_factor_cap() -> f64 {
    1.2
}

fn default_transition_duration_ms() -> u32 {
    800
}
