use tracing::debug;

use crate::core::{CoordinateSystem, Dataset};
use crate::error::LensResult;
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::ScatterRenderOptions;
use super::scatter_frame_builder::{ScatterScene, build_scatter_scene};

/// Scatter plot facade: builds a square-cell scene for a dataset and hands
/// it to a renderer.
///
/// Nothing is cached between renders; every call derives a fresh
/// `CoordinateSystem`.
#[derive(Debug)]
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    options: ScatterRenderOptions,
}

impl<R: Renderer> ScatterChart<R> {
    pub fn new(renderer: R, options: ScatterRenderOptions) -> LensResult<Self> {
        options.validate()?;
        Ok(Self { renderer, options })
    }

    #[must_use]
    pub fn options(&self) -> &ScatterRenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ScatterRenderOptions) -> LensResult<()> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    pub fn build_scene(&self, dataset: &Dataset) -> LensResult<ScatterScene> {
        build_scatter_scene(dataset, &self.options)
    }

    /// Draws `dataset` and returns the coordinate system used, so animation
    /// layers can place overlays on the same grid.
    pub fn render(&mut self, dataset: &Dataset) -> LensResult<CoordinateSystem> {
        let scene = self.build_scene(dataset)?;
        self.renderer.render(&scene.frame)?;
        debug!(
            points = dataset.len(),
            cell_size = scene.coordinate_system.cell_size,
            "rendered scatter plot"
        );
        Ok(scene.coordinate_system)
    }

    /// Draws into an external cairo context instead of the renderer's own
    /// surface.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        dataset: &Dataset,
    ) -> LensResult<CoordinateSystem>
    where
        R: CairoContextRenderer,
    {
        let scene = self.build_scene(dataset)?;
        self.renderer
            .render_on_cairo_context(context, &scene.frame)?;
        Ok(scene.coordinate_system)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
