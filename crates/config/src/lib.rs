pub mod schema;
pub mod watcher;

pub use schema::{BarAttributes, DisplayConfig, Geometry, SpanBarConfig};
pub use watcher::ConfigWatcher;

use spanbar_core::{BarConfig, Color, GeometryMode, Result, SpanBarError, SpannableBar};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `SpanBarConfig::default()`
/// if the file doesn't exist so the window always has something to draw.
pub fn load(path: impl AsRef<Path>) -> Result<SpanBarConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(SpanBarConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| SpanBarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<SpanBarConfig> {
    toml::from_str(raw).map_err(|e| SpanBarError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("spanbar").join("spanbar.toml")
}

impl BarAttributes {
    /// Build a widget from these attributes at the given density.
    ///
    /// Unparsable colors are logged and replaced by the widget defaults.
    pub fn build(&self, density: f32) -> SpannableBar {
        let mut config = BarConfig::new(self.columns, self.start, self.span);
        let _ = config.set_text(self.text.as_deref());
        let _ = config.set_radius(self.radius);
        let _ = config.set_geometry_mode(match self.geometry {
            Geometry::Centered => GeometryMode::Centered,
            Geometry::Legacy => GeometryMode::Legacy,
        });
        if let Some(padding) = self.padding {
            let _ = config.set_padding(padding);
        }
        if let Some(color) = parse_color("color", self.color.as_deref()) {
            let _ = config.set_bar_color(color);
        }
        if let Some(color) = parse_color("text_color", self.text_color.as_deref()) {
            let _ = config.set_text_color(color);
        }
        SpannableBar::from_config(config, density)
    }
}

impl SpanBarConfig {
    /// One widget per `[[bars]]` entry, or a single default widget when the
    /// list is empty.
    pub fn build_bars(&self) -> Vec<SpannableBar> {
        let density = if self.display.density > 0.0 {
            self.display.density
        } else {
            tracing::warn!("Ignoring non-positive density {}", self.display.density);
            1.0
        };

        if self.bars.is_empty() {
            return vec![BarAttributes::default().build(density)];
        }
        self.bars.iter().map(|attrs| attrs.build(density)).collect()
    }

    /// Window background, falling back to a dark default.
    pub fn background(&self) -> Color {
        parse_color("display.background", Some(self.display.background.as_str()))
            .unwrap_or_else(|| Color::from_rgb8(0x1e, 0x1e, 0x2e))
    }
}

fn parse_color(key: &str, value: Option<&str>) -> Option<Color> {
    let value = value?;
    let color = Color::from_hex(value);
    if color.is_none() {
        tracing::warn!("Invalid color '{value}' for '{key}'; using default.");
    }
    color
}
