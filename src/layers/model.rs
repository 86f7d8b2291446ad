use crate::assets::raster::Raster;
use crate::foundation::core::{BezPath, Rgba8};

/// Discriminant of a stack entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Background,
    Stroke,
    Erase,
}

/// Bottom of every stack. Holds the optional background image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundLayer {
    pub image: Option<Raster>,
}

/// Colored outline: round caps, round joins, never filled.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeLayer {
    pub path: BezPath,
    pub color: Rgba8,
    pub opacity: f32,
    pub stroke_width: f64,
}

/// Snapshot content revealed only under the stroked `mask`.
///
/// `revealed` is captured when the layer is built and never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct EraseLayer {
    pub revealed: Raster,
    pub mask: BezPath,
    pub stroke_width: f64,
    pub opacity: f32,
}

/// A pushed layer. Immutable once built; only undo removes it.
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    Stroke(StrokeLayer),
    Erase(EraseLayer),
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Stroke(_) => LayerKind::Stroke,
            Layer::Erase(_) => LayerKind::Erase,
        }
    }
}

/// Borrowed view of one stack position, background included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StackEntry<'a> {
    Background(&'a BackgroundLayer),
    Stroke(&'a StrokeLayer),
    Erase(&'a EraseLayer),
}

impl StackEntry<'_> {
    pub fn kind(self) -> LayerKind {
        match self {
            StackEntry::Background(_) => LayerKind::Background,
            StackEntry::Stroke(_) => LayerKind::Stroke,
            StackEntry::Erase(_) => LayerKind::Erase,
        }
    }
}

impl<'a> From<&'a Layer> for StackEntry<'a> {
    fn from(layer: &'a Layer) -> Self {
        match layer {
            Layer::Stroke(s) => StackEntry::Stroke(s),
            Layer::Erase(e) => StackEntry::Erase(e),
        }
    }
}
