use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{InkError, InkResult};

/// Whether a gesture paints color or reveals the captured snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    #[default]
    Draw,
    Erase,
}

/// One submitted gesture.
///
/// `color` is ignored for [`LineKind::Erase`]: erase masks use alpha only.
/// Zero or one point is legal and yields a layer with no visible effect.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LineDefinition {
    pub kind: LineKind,
    pub color: Rgba8,
    pub opacity: f32,
    pub stroke_width: f64,
    pub points: Vec<Point>,
}

impl Default for LineDefinition {
    fn default() -> Self {
        Self {
            kind: LineKind::Draw,
            color: Rgba8::BLACK,
            opacity: 1.0,
            stroke_width: 8.0,
            points: Vec::new(),
        }
    }
}

impl LineDefinition {
    pub fn draw(color: Rgba8, stroke_width: f64, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            kind: LineKind::Draw,
            color,
            stroke_width,
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn erase(stroke_width: f64, points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            kind: LineKind::Erase,
            stroke_width,
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn validate(&self) -> InkResult<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(InkError::validation(format!(
                "line opacity must be in [0, 1], got {}",
                self.opacity
            )));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(InkError::validation(format!(
                "line stroke_width must be > 0, got {}",
                self.stroke_width
            )));
        }
        if let Some(idx) = self
            .points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(InkError::validation(format!(
                "line point {idx} has a non-finite coordinate"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/line.rs"]
mod tests;
