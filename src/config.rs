use crate::{
    assets::pattern::DotGridPattern,
    foundation::core::Canvas,
    foundation::error::InkResult,
    render::backend::RenderSettings,
    stroke::smooth::SmoothingMode,
};

/// Environment variable overriding [`EngineConfig::smoothing`] (`polyline` or
/// `quadratic_midpoint`).
pub const SMOOTHING_ENV: &str = "INKSTACK_SMOOTHING";

/// Engine construction options. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub canvas: Canvas,
    pub smoothing: SmoothingMode,
    /// Straight RGBA the composite starts from; transparent when unset.
    pub clear_rgba: Option<[u8; 4]>,
    pub pattern: DotGridPattern,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            smoothing: SmoothingMode::default(),
            clear_rgba: None,
            pattern: DotGridPattern::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_smoothing(mut self, smoothing: SmoothingMode) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }

    pub fn with_pattern(mut self, pattern: DotGridPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Apply [`SMOOTHING_ENV`] if it is set to a known mode; anything else is ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(raw) = std::env::var(SMOOTHING_ENV) {
            match parse_smoothing(&raw) {
                Some(mode) => self.smoothing = mode,
                None => tracing::warn!(value = %raw, "ignoring unknown {SMOOTHING_ENV}"),
            }
        }
        self
    }

    pub fn validate(&self) -> InkResult<()> {
        self.canvas.validate()?;
        self.pattern.validate()
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            clear_rgba: self.clear_rgba,
        }
    }
}

pub(crate) fn parse_smoothing(raw: &str) -> Option<SmoothingMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "polyline" | "none" => Some(SmoothingMode::Polyline),
        "quadratic_midpoint" | "quadratic" | "smooth" => Some(SmoothingMode::QuadraticMidpoint),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
