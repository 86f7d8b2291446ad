use crate::{
    assets::raster::Raster,
    compile::plan::RenderPlan,
    foundation::error::InkResult,
    render::passes::{PassBackend, execute_plan},
};

/// A backend that can turn a [`RenderPlan`] into pixels.
pub trait RenderBackend: PassBackend {
    fn render_plan(&mut self, plan: &RenderPlan) -> InkResult<Raster> {
        execute_plan(self, plan)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Cpu,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSettings {
    /// Straight RGBA the accumulator starts from; transparent when unset.
    pub clear_rgba: Option<[u8; 4]>,
}

pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> InkResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        ))),
    }
}
