//! JSON command scripts: a replayable list of engine commands plus engine options.
//!
//! ```json
//! {
//!   "canvas": { "width": 300, "height": 300 },
//!   "background": "cat.png",
//!   "commands": [
//!     { "op": "draw", "color": [255, 0, 0, 255], "stroke_width": 8, "points": [[20, 20], [40, 140]] },
//!     { "op": "erase", "stroke_width": 32, "points": [[30, 200], [250, 80]] },
//!     { "op": "undo" }
//!   ]
//! }
//! ```
//!
//! Relative image paths resolve against the directory passed to [`run_script`].

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::raster::Raster,
    config::EngineConfig,
    engine::Engine,
    foundation::core::{Point, Rgba8},
    foundation::error::{InkError, InkResult},
    stroke::line::{LineDefinition, LineKind},
};

/// Style and samples of one scripted gesture.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrokeArgs {
    pub color: Rgba8,
    pub opacity: f32,
    pub stroke_width: f64,
    pub points: Vec<Point>,
}

impl Default for StrokeArgs {
    fn default() -> Self {
        let d = LineDefinition::default();
        Self {
            color: d.color,
            opacity: d.opacity,
            stroke_width: d.stroke_width,
            points: d.points,
        }
    }
}

impl StrokeArgs {
    pub fn to_line(&self, kind: LineKind) -> LineDefinition {
        LineDefinition {
            kind,
            color: self.color,
            opacity: self.opacity,
            stroke_width: self.stroke_width,
            points: self.points.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Draw(StrokeArgs),
    Erase(StrokeArgs),
    Undo,
    SetBackground { path: PathBuf },
    ClearBackground,
    Resize { width: u32, height: u32 },
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Script {
    #[serde(flatten)]
    pub config: EngineConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Script {
    pub fn from_json_str(s: &str) -> InkResult<Self> {
        serde_json::from_str(s).map_err(|e| InkError::serde(format!("invalid script: {e}")))
    }

    pub fn open(path: impl AsRef<Path>) -> InkResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read script '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> InkResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| InkError::serde(e.to_string()))
    }
}

/// Build an engine from the script's options and replay every command in order.
#[tracing::instrument(skip(script), fields(commands = script.commands.len()))]
pub fn run_script(script: &Script, base_dir: &Path) -> InkResult<Engine> {
    let mut engine = Engine::new(script.config.clone())?;
    if let Some(bg) = &script.background {
        engine.set_background_image(Some(Raster::open(base_dir.join(bg))?));
    }
    for (idx, cmd) in script.commands.iter().enumerate() {
        apply_command(&mut engine, cmd, base_dir).map_err(|e| match e {
            InkError::Validation(msg) => InkError::validation(format!("command {idx}: {msg}")),
            other => other,
        })?;
    }
    Ok(engine)
}

pub fn apply_command(engine: &mut Engine, cmd: &Command, base_dir: &Path) -> InkResult<()> {
    match cmd {
        Command::Draw(args) => engine.submit(&args.to_line(LineKind::Draw)),
        Command::Erase(args) => engine.submit(&args.to_line(LineKind::Erase)),
        Command::Undo => {
            engine.undo();
            Ok(())
        }
        Command::SetBackground { path } => {
            let image = Raster::open(base_dir.join(path))?;
            engine.set_background_image(Some(image));
            Ok(())
        }
        Command::ClearBackground => {
            engine.set_background_image(None);
            Ok(())
        }
        Command::Resize { width, height } => engine.resize(*width, *height),
    }
}

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn demo_stroke(color: Rgba8, opacity: f32, stroke_width: f64, raw: &[(f64, f64)]) -> StrokeArgs {
    StrokeArgs {
        color,
        opacity,
        stroke_width,
        points: pts(raw),
    }
}

const YELLOW_POINTS: [(f64, f64); 3] = [(30.0, 200.0), (250.0, 80.0), (250.0, 180.0)];

/// The button-driven demo on a 300 x 300 canvas, cut after `steps` presses.
///
/// Presses 1-4 draw red, green, blue (half opacity) and yellow. Every later press undoes the
/// last operation and then alternates between an eraser over the yellow stroke's points and
/// the yellow stroke itself, starting with the eraser.
pub fn demo_script(steps: usize) -> Script {
    let draws = [
        Command::Draw(demo_stroke(
            Rgba8::RED,
            1.0,
            8.0,
            &[(20.0, 20.0), (40.0, 140.0), (280.0, 200.0)],
        )),
        Command::Draw(demo_stroke(
            Rgba8::GREEN,
            1.0,
            16.0,
            &[
                (20.0, 100.0),
                (80.0, 80.0),
                (240.0, 140.0),
                (100.0, 200.0),
                (130.0, 220.0),
                (260.0, 160.0),
                (200.0, 280.0),
            ],
        )),
        Command::Draw(demo_stroke(
            Rgba8::BLUE,
            0.5,
            24.0,
            &[(250.0, 20.0), (150.0, 240.0), (100.0, 60.0)],
        )),
        Command::Draw(demo_stroke(Rgba8::YELLOW, 1.0, 32.0, &YELLOW_POINTS)),
    ];

    let mut commands: Vec<Command> = draws.into_iter().take(steps).collect();
    for toggle in 0..steps.saturating_sub(4) {
        commands.push(Command::Undo);
        commands.push(if toggle % 2 == 0 {
            Command::Erase(demo_stroke(Rgba8::BLACK, 1.0, 32.0, &YELLOW_POINTS))
        } else {
            Command::Draw(demo_stroke(Rgba8::YELLOW, 1.0, 32.0, &YELLOW_POINTS))
        });
    }

    Script {
        config: EngineConfig::default(),
        background: None,
        commands,
    }
}

#[cfg(test)]
#[path = "../tests/unit/script.rs"]
mod tests;
