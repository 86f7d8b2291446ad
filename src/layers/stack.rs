use crate::assets::raster::Raster;
use crate::layers::model::{BackgroundLayer, Layer, StackEntry};

/// Ordered layers, bottom to top.
///
/// The background is a dedicated field rather than element 0 of the vector, so no pop can
/// ever reach it. Through [`LayerStack::layers`] it still appears at index 0.
#[derive(Clone, Debug, Default)]
pub struct LayerStack {
    background: BackgroundLayer,
    layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry count including the background; never below 1.
    pub fn len(&self) -> usize {
        1 + self.layers.len()
    }

    /// True when nothing but the background remains.
    pub fn is_background_only(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn push(&mut self, layer: Layer) {
        tracing::debug!(kind = ?layer.kind(), depth = self.len() + 1, "push layer");
        self.layers.push(layer);
    }

    /// Remove the most recently pushed layer. Returns `None` and leaves the stack untouched
    /// when only the background remains.
    pub fn pop(&mut self) -> Option<Layer> {
        let layer = self.layers.pop()?;
        tracing::debug!(kind = ?layer.kind(), depth = self.len(), "pop layer");
        Some(layer)
    }

    pub fn background(&self) -> &BackgroundLayer {
        &self.background
    }

    /// Swap the background image in place. Pushed layers and the length are unaffected.
    pub fn set_background_image(&mut self, image: Option<Raster>) {
        self.background.image = image;
    }

    pub fn get(&self, index: usize) -> Option<StackEntry<'_>> {
        match index {
            0 => Some(StackEntry::Background(&self.background)),
            i => self.layers.get(i - 1).map(StackEntry::from),
        }
    }

    pub fn top(&self) -> StackEntry<'_> {
        self.layers
            .last()
            .map(StackEntry::from)
            .unwrap_or(StackEntry::Background(&self.background))
    }

    /// Pushed layers only, bottom to top.
    pub fn pushed(&self) -> &[Layer] {
        &self.layers
    }

    /// Every entry, background first.
    pub fn layers(&self) -> impl Iterator<Item = StackEntry<'_>> + '_ {
        std::iter::once(StackEntry::Background(&self.background))
            .chain(self.layers.iter().map(StackEntry::from))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/stack.rs"]
mod tests;
