use tracing::{debug, trace};

use crate::camera::{
    CameraPolicy, ContentCategory, FramingResult, SceneGeometry, TransitionPlan,
    compute_group_rect,
};
use crate::error::{LensError, LensResult};

/// Resolves element geometry through a `SceneGeometry` adapter and turns it
/// into camera transforms.
///
/// Framing is best-effort: any element that cannot be resolved yields
/// `FramingResult::IDENTITY` instead of an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraDirector {
    policy: CameraPolicy,
}

impl CameraDirector {
    pub fn new(policy: CameraPolicy) -> LensResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    #[must_use]
    pub fn policy(&self) -> &CameraPolicy {
        &self.policy
    }

    pub fn frame_element<S: SceneGeometry + ?Sized>(
        &self,
        scene: &S,
        id: &str,
        category: ContentCategory,
        terminal: bool,
    ) -> FramingResult {
        if terminal {
            trace!(element = id, "terminal frame keeps identity camera");
            return FramingResult::IDENTITY;
        }
        match self.try_frame_element(scene, id, category) {
            Ok(result) => result,
            Err(err) => {
                debug!(element = id, error = %err, "camera framing fell back to identity");
                FramingResult::IDENTITY
            }
        }
    }

    /// Same as `frame_element` but reports unresolved geometry.
    pub fn try_frame_element<S: SceneGeometry + ?Sized>(
        &self,
        scene: &S,
        id: &str,
        category: ContentCategory,
    ) -> LensResult<FramingResult> {
        let target = scene
            .element_rect(id)
            .ok_or_else(|| LensError::MissingGeometry(format!("target `{id}`")))?;
        let container = scene
            .container_rect()
            .ok_or_else(|| LensError::MissingGeometry("container".to_owned()))?;
        let viewport = scene.viewport();

        let group = compute_group_rect(target, scene.preceding_sibling(id), category);
        let scale = self.policy.compute_scale(
            group.unscaled(scene.ancestor_scale(id)),
            category,
            viewport,
        );
        let result = self
            .policy
            .compute_position(group, container, scale, category, false);

        debug!(
            element = id,
            ?category,
            scale = result.scale,
            translate_x = result.translate_x_percent,
            translate_y = result.translate_y_percent,
            "framed element"
        );
        Ok(result)
    }

    pub fn frame_highlight<S: SceneGeometry + ?Sized>(&self, scene: &S, id: &str) -> FramingResult {
        let (Some(highlight), Some(container)) = (scene.element_rect(id), scene.container_rect())
        else {
            debug!(element = id, "highlight geometry missing, keeping identity camera");
            return FramingResult::IDENTITY;
        };
        self.policy
            .compute_highlight_framing(highlight, container, scene.viewport().width)
    }

    /// Transition from `current` to the camera for `id`.
    pub fn plan_transition<S: SceneGeometry + ?Sized>(
        &self,
        scene: &S,
        current: FramingResult,
        id: &str,
        category: ContentCategory,
        terminal: bool,
    ) -> TransitionPlan {
        let target = self.frame_element(scene, id, category, terminal);
        TransitionPlan::new(current, target, self.policy.transition_duration_ms)
    }
}
