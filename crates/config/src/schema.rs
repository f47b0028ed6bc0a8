use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `spanbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanBarConfig {
    /// Window and density settings shared by every bar.
    pub display: DisplayConfig,
    /// One entry per bar, drawn top to bottom.
    pub bars: Vec<BarAttributes>,
}

impl Default for SpanBarConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            bars: vec![BarAttributes::default()],
        }
    }
}

/// Surface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pixels per density-independent unit.
    pub density: f32,
    /// Exact width of each bar in pixels; unset = widget's desired width.
    pub width: Option<i32>,
    /// Exact height of each bar in pixels; unset = widget's desired height.
    pub height: Option<i32>,
    /// Window title.
    pub title: String,
    /// Window background color (hex).
    pub background: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            width: None,
            height: None,
            title: "spanbar".to_string(),
            background: "#1e1e2e".to_string(),
        }
    }
}

/// Which geometry formulas a bar uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    #[default]
    Centered,
    Legacy,
}

/// Styling attributes of a single bar.
///
/// The four `bar*` attributes are optional and fall back to the widget
/// defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarAttributes {
    /// Label drawn centered on the bar.
    pub text: Option<String>,
    /// Fill color (hex, e.g. `"#74ac23"`).
    pub color: Option<String>,
    /// Inset from each edge in density-independent units.
    pub padding: Option<i32>,
    /// Label color (hex).
    pub text_color: Option<String>,
    pub columns: i32,
    pub start: i32,
    pub span: i32,
    /// Corner radius in pixels.
    pub radius: f32,
    pub geometry: Geometry,
}

impl Default for BarAttributes {
    fn default() -> Self {
        Self {
            text: None,
            color: None,
            padding: None,
            text_color: None,
            columns: spanbar_core::bar::DEFAULT_COLUMN_COUNT,
            start: 0,
            span: spanbar_core::bar::DEFAULT_COLUMN_COUNT,
            radius: spanbar_core::bar::DEFAULT_RADIUS,
            geometry: Geometry::Centered,
        }
    }
}
