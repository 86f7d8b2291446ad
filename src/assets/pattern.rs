use kurbo::Shape;

use crate::{
    assets::raster::Raster,
    foundation::core::{Canvas, Point, Rgba8},
    foundation::error::{InkError, InkResult},
    render::cpu,
};

/// Evenly spaced dots over an opaque backdrop; what an erase reveals when no background image
/// is set.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DotGridPattern {
    pub columns: u32,
    pub rows: u32,
    pub dot_diameter: f64,
    pub dot_color: Rgba8,
    pub backdrop: Rgba8,
}

impl Default for DotGridPattern {
    fn default() -> Self {
        Self {
            columns: 55,
            rows: 39,
            dot_diameter: 2.0,
            dot_color: Rgba8::RED,
            backdrop: Rgba8::WHITE,
        }
    }
}

impl DotGridPattern {
    /// Upper bound on `columns` and `rows`.
    pub const MAX_DOTS_PER_AXIS: u32 = 4096;

    pub fn validate(&self) -> InkResult<()> {
        if self.columns > Self::MAX_DOTS_PER_AXIS || self.rows > Self::MAX_DOTS_PER_AXIS {
            return Err(InkError::validation(format!(
                "pattern grid {}x{} exceeds {} dots per axis",
                self.columns,
                self.rows,
                Self::MAX_DOTS_PER_AXIS
            )));
        }
        if !self.dot_diameter.is_finite() || self.dot_diameter < 0.0 {
            return Err(InkError::validation(format!(
                "pattern dot_diameter must be finite and >= 0, got {}",
                self.dot_diameter
            )));
        }
        Ok(())
    }

    /// Dot centers, row by row. Column `c` (1-based) sits at `width / columns * c`, so the last
    /// column and row land on the canvas edge.
    pub fn dot_centers(&self, canvas: Canvas) -> InkResult<Vec<Point>> {
        if self.columns == 0 || self.rows == 0 {
            return Ok(Vec::new());
        }
        let count = (self.columns as usize)
            .checked_mul(self.rows as usize)
            .ok_or_else(|| InkError::validation("pattern dot count overflows"))?;
        let dx = f64::from(canvas.width) / f64::from(self.columns);
        let dy = f64::from(canvas.height) / f64::from(self.rows);
        let mut out = Vec::with_capacity(count);
        for r in 1..=self.rows {
            let y = dy * f64::from(r);
            for c in 1..=self.columns {
                out.push(Point::new(dx * f64::from(c), y));
            }
        }
        Ok(out)
    }

    #[tracing::instrument(skip(self))]
    pub fn rasterize(&self, canvas: Canvas) -> InkResult<Raster> {
        canvas.validate()?;
        self.validate()?;
        let (mut pixmap, mut ctx) = cpu::new_surface(canvas)?;

        ctx.set_paint(cpu::paint_color(self.backdrop));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(canvas.width),
            f64::from(canvas.height),
        ));

        if self.dot_diameter > 0.0 {
            ctx.set_paint(cpu::paint_color(self.dot_color));
            let radius = self.dot_diameter / 2.0;
            for center in self.dot_centers(canvas)? {
                let dot = kurbo::Circle::new(center, radius).to_path(0.1);
                ctx.fill_path(&cpu::bezpath_to_cpu(&dot));
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        cpu::pixmap_to_raster(&pixmap)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/pattern.rs"]
mod tests;
