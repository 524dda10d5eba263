use indexmap::IndexMap;

use crate::camera::{ElementRole, ScreenViewport, SiblingElement};
use crate::core::Rect;

/// Geometry source for camera framing.
///
/// Implemented by the host's layout adapter (DOM, native widget tree, test
/// fixture). Every query is read-only; `None` means the element cannot be
/// resolved right now.
pub trait SceneGeometry {
    fn viewport(&self) -> ScreenViewport;

    /// Bounding box of the slide frame the camera moves.
    fn container_rect(&self) -> Option<Rect>;

    fn element_rect(&self, id: &str) -> Option<Rect>;

    /// Element rendered immediately before `id` under the same parent.
    fn preceding_sibling(&self, id: &str) -> Option<SiblingElement>;

    /// Product of scale factors currently applied by `id`'s ancestors.
    fn ancestor_scale(&self, _id: &str) -> f64 {
        1.0
    }
}

/// One element registered in a `StaticScene`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub rect: Rect,
    pub role: ElementRole,
    pub ancestor_scale: f64,
    pub preceding_sibling: Option<String>,
}

impl SceneElement {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            role: ElementRole::Other,
            ancestor_scale: 1.0,
            preceding_sibling: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: ElementRole) -> Self {
        self.role = role;
        self
    }

    #[must_use]
    pub fn with_ancestor_scale(mut self, ancestor_scale: f64) -> Self {
        self.ancestor_scale = ancestor_scale;
        self
    }

    #[must_use]
    pub fn after(mut self, sibling_id: impl Into<String>) -> Self {
        self.preceding_sibling = Some(sibling_id.into());
        self
    }
}

/// In-memory scene for headless hosts and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticScene {
    viewport: ScreenViewport,
    container: Option<Rect>,
    elements: IndexMap<String, SceneElement>,
}

impl StaticScene {
    #[must_use]
    pub fn new(viewport: ScreenViewport) -> Self {
        Self {
            viewport,
            container: None,
            elements: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_container(mut self, container: Rect) -> Self {
        self.container = Some(container);
        self
    }

    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>, element: SceneElement) -> Self {
        self.elements.insert(id.into(), element);
        self
    }

    #[must_use]
    pub fn element(&self, id: &str) -> Option<&SceneElement> {
        self.elements.get(id)
    }
}

impl SceneGeometry for StaticScene {
    fn viewport(&self) -> ScreenViewport {
        self.viewport
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn element_rect(&self, id: &str) -> Option<Rect> {
        self.elements.get(id).map(|element| element.rect)
    }

    fn preceding_sibling(&self, id: &str) -> Option<SiblingElement> {
        let sibling_id = self.elements.get(id)?.preceding_sibling.as_deref()?;
        let sibling = self.elements.get(sibling_id)?;
        Some(SiblingElement {
            role: sibling.role,
            rect: sibling.rect,
        })
    }

    fn ancestor_scale(&self, id: &str) -> f64 {
        self.elements
            .get(id)
            .map_or(1.0, |element| element.ancestor_scale)
    }
}
