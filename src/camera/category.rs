use serde::{Deserialize, Serialize};

/// Content classification that selects padding, clamp and offset policy.
///
/// Index-carrying variants hold the ordinal of the frame inside its slide
/// sequence; later frames are allowed to sit further down the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentCategory {
    Title,
    StepContent,
    KeywordContent,
    DetailContent,
    VisualizationContainer { index: u32 },
    Step { index: u32 },
    GroupedLayout,
    Generic,
}

/// Policy-table key: a `ContentCategory` without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    Title,
    StepContent,
    KeywordContent,
    DetailContent,
    VisualizationContainer,
    Step,
    GroupedLayout,
    Generic,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 8] = [
        CategoryKind::Title,
        CategoryKind::StepContent,
        CategoryKind::KeywordContent,
        CategoryKind::DetailContent,
        CategoryKind::VisualizationContainer,
        CategoryKind::Step,
        CategoryKind::GroupedLayout,
        CategoryKind::Generic,
    ];
}

impl ContentCategory {
    #[must_use]
    pub fn kind(self) -> CategoryKind {
        match self {
            Self::Title => CategoryKind::Title,
            Self::StepContent => CategoryKind::StepContent,
            Self::KeywordContent => CategoryKind::KeywordContent,
            Self::DetailContent => CategoryKind::DetailContent,
            Self::VisualizationContainer { .. } => CategoryKind::VisualizationContainer,
            Self::Step { .. } => CategoryKind::Step,
            Self::GroupedLayout => CategoryKind::GroupedLayout,
            Self::Generic => CategoryKind::Generic,
        }
    }

    /// Frame ordinal for index-dependent policies.
    #[must_use]
    pub fn index(self) -> Option<u32> {
        match self {
            Self::VisualizationContainer { index } | Self::Step { index } => Some(index),
            _ => None,
        }
    }

    /// Maps a legacy element identifier plus its class markers onto a category.
    ///
    /// Host adapters that still address elements by string identifiers use
    /// this once at the boundary; framing math only ever sees the enum.
    #[must_use]
    pub fn from_markers(id: &str, markers: &[&str]) -> Self {
        let has = |marker: &str| markers.iter().any(|candidate| *candidate == marker);

        if has("grouped-layout") {
            return Self::GroupedLayout;
        }
        if has("visualization-container") || id.contains("Visualization") {
            return Self::VisualizationContainer {
                index: trailing_index(id).unwrap_or(0),
            };
        }
        if has("title") {
            return Self::Title;
        }
        if has("detail-content") {
            return Self::DetailContent;
        }
        if has("keyword-content") {
            return Self::KeywordContent;
        }
        if has("step-content") {
            return Self::StepContent;
        }
        if id.contains("Step") {
            return Self::Step {
                index: trailing_index(id).unwrap_or(0),
            };
        }
        Self::Generic
    }
}

/// Structural role of a sibling element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ElementRole {
    /// Short label rendered right before a title.
    Tag,
    #[default]
    Other,
}

impl ElementRole {
    #[must_use]
    pub fn from_markers(markers: &[&str]) -> Self {
        if markers.contains(&"tag") {
            Self::Tag
        } else {
            Self::Other
        }
    }
}

/// Parses the run of ASCII digits at the end of `id` (`"vizStep12"` -> 12).
#[must_use]
pub fn trailing_index(id: &str) -> Option<u32> {
    let digits_start = id
        .char_indices()
        .rev()
        .take_while(|(_, ch)| ch.is_ascii_digit())
        .last()
        .map(|(index, _)| index)?;
    id[digits_start..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_index_reads_last_digit_run() {
        assert_eq!(trailing_index("vizStep12"), Some(12));
        assert_eq!(trailing_index("step3a"), None);
        assert_eq!(trailing_index("7"), Some(7));
        assert_eq!(trailing_index(""), None);
    }

    #[test]
    fn markers_take_priority_over_identifier_hints() {
        assert_eq!(
            ContentCategory::from_markers("introStep2", &["title"]),
            ContentCategory::Title
        );
        assert_eq!(
            ContentCategory::from_markers("introStep2", &[]),
            ContentCategory::Step { index: 2 }
        );
        assert_eq!(
            ContentCategory::from_markers("chartVisualization4", &[]),
            ContentCategory::VisualizationContainer { index: 4 }
        );
        assert_eq!(
            ContentCategory::from_markers("outro", &["grouped-layout", "title"]),
            ContentCategory::GroupedLayout
        );
        assert_eq!(ContentCategory::from_markers("outro", &[]), ContentCategory::Generic);
    }
}
