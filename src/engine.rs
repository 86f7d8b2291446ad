use crate::{
    assets::{raster::Raster, snapshot::SnapshotProvider},
    compile::plan::{RenderPlan, compile_stack},
    config::EngineConfig,
    foundation::core::Canvas,
    foundation::error::InkResult,
    layers::build::{build_draw_layer, build_erase_layer},
    layers::model::Layer,
    layers::stack::LayerStack,
    render::backend::{BackendKind, RenderBackend, create_backend},
    stroke::line::{LineDefinition, LineKind},
    stroke::smooth::{SmoothingMode, smooth},
};

/// Owns one layer stack and everything needed to extend, undo and render it.
///
/// All operations are synchronous and take `&mut self`; callers that share an engine across
/// threads must wrap it in their own lock.
pub struct Engine {
    canvas: Canvas,
    smoothing: SmoothingMode,
    stack: LayerStack,
    snapshots: SnapshotProvider,
    backend: Box<dyn RenderBackend>,
    needs_redraw: bool,
}

impl Engine {
    /// Engine with the CPU backend.
    pub fn new(config: EngineConfig) -> InkResult<Self> {
        config.validate()?;
        let backend = create_backend(BackendKind::Cpu, &config.render_settings())?;
        Self::with_backend(config, backend)
    }

    pub fn with_backend(config: EngineConfig, backend: Box<dyn RenderBackend>) -> InkResult<Self> {
        config.validate()?;
        Ok(Self {
            canvas: config.canvas,
            smoothing: config.smoothing,
            stack: LayerStack::new(),
            snapshots: SnapshotProvider::new(config.pattern),
            backend,
            needs_redraw: true,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn smoothing(&self) -> SmoothingMode {
        self.smoothing
    }

    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    /// True when a mutation happened since the last [`Engine::render`].
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Read and clear the redraw flag, for hosts that render on their own schedule.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Smooth the gesture, build its layer and push it. Exactly one layer is pushed per
    /// successful call, even for empty or single-point gestures.
    ///
    /// Erase layers capture the reveal content now; later background changes do not reach them.
    #[tracing::instrument(skip(self, def), fields(kind = ?def.kind, points = def.points.len()))]
    pub fn submit(&mut self, def: &LineDefinition) -> InkResult<()> {
        def.validate()?;
        let path = smooth(&def.points, self.smoothing);
        let layer = match def.kind {
            LineKind::Draw => build_draw_layer(def, path)?,
            LineKind::Erase => {
                let snapshot = self
                    .snapshots
                    .current_reveal_content(self.stack.background().image.as_ref(), self.canvas)?;
                build_erase_layer(def, path, snapshot)?
            }
        };
        self.stack.push(layer);
        self.needs_redraw = true;
        Ok(())
    }

    /// Remove the most recent draw or erase. A no-op when only the background is left.
    #[tracing::instrument(skip(self))]
    pub fn undo(&mut self) -> Option<Layer> {
        let popped = self.stack.pop();
        if popped.is_some() {
            self.needs_redraw = true;
        }
        popped
    }

    /// Swap the background image. Existing erase layers keep the content they captured.
    #[tracing::instrument(skip(self, image), fields(set = image.is_some()))]
    pub fn set_background_image(&mut self, image: Option<Raster>) {
        self.stack.set_background_image(image);
        self.needs_redraw = true;
    }

    /// Change the canvas size. Layer frames follow the new bounds; path geometry is not scaled.
    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, width: u32, height: u32) -> InkResult<()> {
        let canvas = Canvas::new(width, height)?;
        if canvas != self.canvas {
            self.canvas = canvas;
            self.snapshots.invalidate();
            self.needs_redraw = true;
        }
        Ok(())
    }

    /// The ordered drawable primitives for the current stack.
    pub fn plan(&self) -> InkResult<RenderPlan> {
        compile_stack(&self.stack, self.canvas)
    }

    /// Composite the stack. Does not modify the stack; repeated calls give identical output.
    #[tracing::instrument(skip(self), fields(layers = self.stack.len()))]
    pub fn render(&mut self) -> InkResult<Raster> {
        let plan = self.plan()?;
        let raster = self.backend.render_plan(&plan)?;
        self.needs_redraw = false;
        Ok(raster)
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
