//! inkstack is a layered stroke-compositing engine.
//!
//! A caller appends ordered draw and erase gestures, can undo the most recent one, can swap
//! the background image, and renders the composite to premultiplied RGBA8.
//!
//! # Pipeline overview
//!
//! 1. **Smooth**: raw gesture samples become a path (`smooth`)
//! 2. **Build**: the path becomes a stroke layer or an erase layer (`build_draw_layer`,
//!    `build_erase_layer`); erase layers freeze the current reveal content
//! 3. **Stack**: layers are appended to a `LayerStack`; undo pops the top
//! 4. **Compile**: `LayerStack -> RenderPlan`, an ordered list of canvas-sized draw ops
//! 5. **Render**: `RenderPlan -> Raster` on the CPU backend
//!
//! [`Engine`] wires these together behind `submit` / `undo` / `set_background_image` /
//! `resize` / `render`.
//!
//! Erasing restores content rather than deleting pixels: an erase layer shows the snapshot it
//! captured (the background image, or a dot-grid pattern when there is none) under its stroke.
#![forbid(unsafe_code)]

pub mod assets;
pub mod compile;
pub mod config;
pub mod engine;
pub mod foundation;
pub mod layers;
pub mod render;
pub mod script;
pub mod stroke;

pub use assets::decode::decode_image;
pub use assets::pattern::DotGridPattern;
pub use assets::raster::Raster;
pub use assets::snapshot::SnapshotProvider;
pub use compile::plan::{DrawOp, RenderPlan, compile_stack};
pub use config::{EngineConfig, SMOOTHING_ENV};
pub use engine::Engine;
pub use foundation::core::{BezPath, Canvas, PathEl, Point, Rgba8};
pub use foundation::error::{InkError, InkResult};
pub use layers::build::{build_draw_layer, build_erase_layer};
pub use layers::model::{BackgroundLayer, EraseLayer, Layer, LayerKind, StackEntry, StrokeLayer};
pub use layers::stack::LayerStack;
pub use render::backend::{BackendKind, RenderBackend, RenderSettings, create_backend};
pub use render::cpu::CpuBackend;
pub use render::passes::{PassBackend, execute_plan};
pub use script::{Command, Script, StrokeArgs, apply_command, demo_script, run_script};
pub use stroke::line::{LineDefinition, LineKind};
pub use stroke::smooth::{SmoothingMode, has_segments, smooth};
