use crate::{
    assets::raster::Raster,
    compile::plan::{DrawOp, RenderPlan},
    foundation::core::Canvas,
    foundation::error::InkResult,
};

/// Primitive execution steps a backend provides to [`execute_plan`].
pub trait PassBackend {
    /// Reset the accumulator to a cleared canvas of the given size.
    fn begin(&mut self, canvas: Canvas) -> InkResult<()>;

    fn exec_op(&mut self, op: &DrawOp) -> InkResult<()>;

    fn readback(&mut self, plan: &RenderPlan) -> InkResult<Raster>;
}

pub fn execute_plan<B: PassBackend + ?Sized>(
    backend: &mut B,
    plan: &RenderPlan,
) -> InkResult<Raster> {
    plan.canvas.validate()?;
    backend.begin(plan.canvas)?;
    for op in &plan.ops {
        backend.exec_op(op)?;
    }
    backend.readback(plan)
}

#[cfg(test)]
#[path = "../../tests/unit/render/passes.rs"]
mod tests;
