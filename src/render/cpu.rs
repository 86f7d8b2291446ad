use kurbo::Shape;

use crate::{
    assets::raster::Raster,
    compile::plan::{DrawOp, RenderPlan},
    foundation::core::{BezPath, Canvas, PathEl, Rgba8},
    foundation::error::{InkError, InkResult},
    render::backend::{RenderBackend, RenderSettings},
    render::composite::{mask_alpha_into, over_in_place},
    render::passes::PassBackend,
    stroke::smooth::has_segments,
};

/// `vello_cpu` backend. Every op is rasterized into its own canvas-sized surface and then
/// composited over the accumulator, so layer opacity applies to the layer as a whole.
pub struct CpuBackend {
    settings: RenderSettings,
    canvas: Option<Canvas>,
    accum: Vec<u8>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            canvas: None,
            accum: Vec::new(),
        }
    }

    fn active_canvas(&self) -> InkResult<Canvas> {
        self.canvas
            .ok_or_else(|| InkError::render("exec_op called before begin"))
    }
}

impl PassBackend for CpuBackend {
    fn begin(&mut self, canvas: Canvas) -> InkResult<()> {
        canvas.validate()?;
        let clear = self
            .settings
            .clear_rgba
            .map(|c| Rgba8::from(c).to_premul())
            .unwrap_or([0, 0, 0, 0]);
        self.accum.clear();
        self.accum.reserve(canvas.pixel_count() * 4);
        for _ in 0..canvas.pixel_count() {
            self.accum.extend_from_slice(&clear);
        }
        self.canvas = Some(canvas);
        Ok(())
    }

    fn exec_op(&mut self, op: &DrawOp) -> InkResult<()> {
        let canvas = self.active_canvas()?;
        match op {
            DrawOp::Image { raster, opacity } => {
                if raster.canvas() != canvas {
                    return Err(InkError::render(format!(
                        "image op is {}x{}, canvas is {}x{}",
                        raster.width, raster.height, canvas.width, canvas.height
                    )));
                }
                over_in_place(&mut self.accum, raster.data(), *opacity)
            }
            DrawOp::Stroke {
                path,
                color,
                stroke_width,
                opacity,
            } => {
                let layer = rasterize_stroke(canvas, path, *color, *stroke_width)?;
                over_in_place(&mut self.accum, layer.data_as_u8_slice(), *opacity)
            }
            DrawOp::Reveal {
                content,
                mask,
                stroke_width,
                opacity,
            } => {
                if content.canvas() != canvas {
                    return Err(InkError::render(format!(
                        "reveal content is {}x{}, canvas is {}x{}",
                        content.width, content.height, canvas.width, canvas.height
                    )));
                }
                let coverage = rasterize_stroke(canvas, mask, Rgba8::BLACK, *stroke_width)?;
                let mut revealed = vec![0u8; self.accum.len()];
                mask_alpha_into(content.data(), coverage.data_as_u8_slice(), &mut revealed)?;
                over_in_place(&mut self.accum, &revealed, *opacity)
            }
        }
    }

    fn readback(&mut self, plan: &RenderPlan) -> InkResult<Raster> {
        let canvas = self.active_canvas()?;
        if canvas != plan.canvas {
            return Err(InkError::render("readback canvas does not match the plan"));
        }
        Raster::new(canvas.width, canvas.height, self.accum.clone())
    }
}

impl RenderBackend for CpuBackend {}

pub(crate) fn surface_dims(canvas: Canvas) -> InkResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| InkError::render("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| InkError::render("surface height exceeds u16"))?;
    Ok((w, h))
}

pub(crate) fn new_surface(canvas: Canvas) -> InkResult<(vello_cpu::Pixmap, vello_cpu::RenderContext)> {
    let (w, h) = surface_dims(canvas)?;
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    pixmap.data_as_u8_slice_mut().fill(0);
    Ok((pixmap, vello_cpu::RenderContext::new(w, h)))
}

pub(crate) fn paint_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Round caps, miter joins with a miter limit of 10.
fn round_capped_stroke(width: f64) -> vello_cpu::kurbo::Stroke {
    vello_cpu::kurbo::Stroke::new(width)
        .with_caps(vello_cpu::kurbo::Cap::Round)
        .with_join(vello_cpu::kurbo::Join::Miter)
        .with_miter_limit(10.0)
}

/// Stroke `path` alone onto a transparent canvas-sized surface.
///
/// A path whose segments all collapse onto one point is drawn as the disc its round caps
/// would cover, since the stroker emits nothing for zero-length segments.
pub(crate) fn rasterize_stroke(
    canvas: Canvas,
    path: &BezPath,
    color: Rgba8,
    width: f64,
) -> InkResult<vello_cpu::Pixmap> {
    let (mut pixmap, mut ctx) = new_surface(canvas)?;
    ctx.set_paint(paint_color(color));
    if has_segments(path) {
        let bounds = path.bounding_box();
        if bounds.width() == 0.0 && bounds.height() == 0.0 {
            let dot = kurbo::Circle::new(bounds.origin(), width / 2.0).to_path(0.1);
            ctx.fill_path(&bezpath_to_cpu(&dot));
        } else {
            ctx.set_stroke(round_capped_stroke(width));
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
    }
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap)
}

pub(crate) fn pixmap_to_raster(pixmap: &vello_cpu::Pixmap) -> InkResult<Raster> {
    Raster::new(
        u32::from(pixmap.width()),
        u32::from(pixmap.height()),
        pixmap.data_as_u8_slice().to_vec(),
    )
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
