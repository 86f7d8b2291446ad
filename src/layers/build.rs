use crate::assets::raster::Raster;
use crate::foundation::core::BezPath;
use crate::foundation::error::{InkError, InkResult};
use crate::layers::model::{EraseLayer, Layer, StrokeLayer};
use crate::stroke::line::{LineDefinition, LineKind};

/// Build the stroke layer for a draw gesture from its smoothed path.
pub fn build_draw_layer(def: &LineDefinition, path: BezPath) -> InkResult<Layer> {
    if def.kind != LineKind::Draw {
        return Err(InkError::validation(
            "build_draw_layer requires a draw line",
        ));
    }
    Ok(Layer::Stroke(StrokeLayer {
        path,
        color: def.color,
        opacity: def.opacity,
        stroke_width: def.stroke_width,
    }))
}

/// Build the erase layer for an erase gesture.
///
/// `snapshot` must already be the content to reveal; it is frozen into the layer as-is.
/// The line color plays no part: the mask only contributes coverage.
pub fn build_erase_layer(
    def: &LineDefinition,
    path: BezPath,
    snapshot: Raster,
) -> InkResult<Layer> {
    if def.kind != LineKind::Erase {
        return Err(InkError::validation(
            "build_erase_layer requires an erase line",
        ));
    }
    Ok(Layer::Erase(EraseLayer {
        revealed: snapshot,
        mask: path,
        stroke_width: def.stroke_width,
        opacity: def.opacity,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/layers/build.rs"]
mod tests;
