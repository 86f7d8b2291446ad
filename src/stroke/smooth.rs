use crate::foundation::core::{BezPath, Point};
use crate::foundation::math::midpoint;

/// How raw gesture samples become path geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMode {
    /// Straight segments through every sample.
    Polyline,
    /// Quadratic segments through sample midpoints, using each sample as the control point.
    ///
    /// The first and last samples are not on the resulting curve.
    #[default]
    QuadraticMidpoint,
}

/// Turn an ordered point sequence into a path.
///
/// Empty input yields an empty path; a single point yields a lone move-to.
pub fn smooth(points: &[Point], mode: SmoothingMode) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };

    match mode {
        SmoothingMode::Polyline => {
            path.move_to(first);
            for &p in rest {
                path.line_to(p);
            }
        }
        SmoothingMode::QuadraticMidpoint => {
            path.move_to(midpoint(first, first));
            for pair in points.windows(2) {
                let (prev, cur) = (pair[0], pair[1]);
                path.quad_to(prev, midpoint(cur, prev));
            }
        }
    }
    path
}

/// True when the path has at least one drawing segment after its move-to.
pub fn has_segments(path: &BezPath) -> bool {
    path.elements()
        .iter()
        .any(|el| !matches!(el, kurbo::PathEl::MoveTo(_)))
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/smooth.rs"]
mod tests;
