use crate::{
    assets::{pattern::DotGridPattern, raster::Raster},
    foundation::core::Canvas,
    foundation::error::InkResult,
};

/// Decides what a new erase layer reveals.
///
/// The background image itself lives on the layer stack and is passed in per query; this type
/// only owns the fallback pattern and its raster, cached per canvas size.
#[derive(Clone, Debug, Default)]
pub struct SnapshotProvider {
    pattern: DotGridPattern,
    fallback: Option<Raster>,
}

impl SnapshotProvider {
    pub fn new(pattern: DotGridPattern) -> Self {
        Self {
            pattern,
            fallback: None,
        }
    }

    /// Drop the cached fallback so the next query rasterizes it for the new size.
    pub fn invalidate(&mut self) {
        self.fallback = None;
    }

    /// Content to freeze into an erase layer created right now.
    pub fn current_reveal_content(
        &mut self,
        background: Option<&Raster>,
        canvas: Canvas,
    ) -> InkResult<Raster> {
        if let Some(image) = background {
            tracing::debug!("erase reveals background image");
            return Ok(image.clone());
        }
        if let Some(cached) = &self.fallback
            && cached.canvas() == canvas
        {
            return Ok(cached.clone());
        }
        tracing::debug!(
            width = canvas.width,
            height = canvas.height,
            "rasterizing fallback pattern"
        );
        let raster = self.pattern.rasterize(canvas)?;
        self.fallback = Some(raster.clone());
        Ok(raster)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/snapshot.rs"]
mod tests;
