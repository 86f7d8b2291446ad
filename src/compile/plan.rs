use crate::{
    assets::raster::Raster,
    foundation::core::{BezPath, Canvas, Rgba8},
    foundation::error::InkResult,
    layers::model::StackEntry,
    layers::stack::LayerStack,
    stroke::smooth::has_segments,
};

/// Backend-agnostic render plan for one composite.
///
/// `ops` are applied in order over a canvas-sized accumulator; every op covers the full
/// canvas frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderPlan {
    pub canvas: Canvas,
    pub ops: Vec<DrawOp>,
}

/// One drawable primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Canvas-sized raster composited source-over.
    Image { raster: Raster, opacity: f32 },
    /// Round-capped stroke of `path` in a solid color.
    Stroke {
        path: BezPath,
        color: Rgba8,
        stroke_width: f64,
        opacity: f32,
    },
    /// Canvas-sized `content`, visible only under the round-capped stroke of `mask`.
    Reveal {
        content: Raster,
        mask: BezPath,
        stroke_width: f64,
        opacity: f32,
    },
}

/// Compile the stack into a plan, bottom to top.
///
/// Background and snapshot rasters are stretched to `canvas`; path geometry is used as-is.
/// Layers with degenerate paths contribute no op.
#[tracing::instrument(skip(stack), fields(layers = stack.len()))]
pub fn compile_stack(stack: &LayerStack, canvas: Canvas) -> InkResult<RenderPlan> {
    canvas.validate()?;
    let mut ops = Vec::with_capacity(stack.len());

    for entry in stack.layers() {
        match entry {
            StackEntry::Background(bg) => {
                if let Some(image) = &bg.image {
                    ops.push(DrawOp::Image {
                        raster: image.fit_to(canvas)?.into_owned(),
                        opacity: 1.0,
                    });
                }
            }
            StackEntry::Stroke(s) => {
                if !has_segments(&s.path) || s.opacity <= 0.0 {
                    continue;
                }
                ops.push(DrawOp::Stroke {
                    path: s.path.clone(),
                    color: s.color,
                    stroke_width: s.stroke_width,
                    opacity: s.opacity,
                });
            }
            StackEntry::Erase(e) => {
                if !has_segments(&e.mask) || e.opacity <= 0.0 {
                    continue;
                }
                ops.push(DrawOp::Reveal {
                    content: e.revealed.fit_to(canvas)?.into_owned(),
                    mask: e.mask.clone(),
                    stroke_width: e.stroke_width,
                    opacity: e.opacity,
                });
            }
        }
    }

    Ok(RenderPlan { canvas, ops })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
