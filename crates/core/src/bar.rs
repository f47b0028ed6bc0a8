use crate::{
    color::Color,
    geometry::{CornerRadii, GeometryMode},
    widget::Invalidation,
};

pub const DEFAULT_COLUMN_COUNT: i32 = 7;
pub const DEFAULT_PADDING: i32 = 10;
pub const DEFAULT_RADIUS: f32 = 8.0;

/// Configuration of a single spannable bar.
///
/// Every setter clamps its input so that `1 <= column_count` and
/// `0 <= start`, `0 <= span`, `start + span <= column_count` hold after each
/// call, and reports what the host has to redo.
#[derive(Debug, Clone, PartialEq)]
pub struct BarConfig {
    column_count: i32,
    start: i32,
    span: i32,
    /// Inset from every edge, in density-independent units.
    padding: i32,
    corner_radii: CornerRadii,
    bar_color: Color,
    text_color: Color,
    text: String,
    geometry_mode: GeometryMode,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            start: 0,
            span: DEFAULT_COLUMN_COUNT,
            padding: DEFAULT_PADDING,
            corner_radii: [DEFAULT_RADIUS; 8],
            bar_color: Color::LIGHT_GRAY,
            text_color: Color::WHITE,
            text: String::new(),
            geometry_mode: GeometryMode::default(),
        }
    }
}

impl BarConfig {
    /// Build a config covering `span` columns from `start` out of `column_count`.
    pub fn new(column_count: i32, start: i32, span: i32) -> Self {
        let mut config = Self::default();
        let _ = config.set_column_count(column_count);
        let _ = config.set_range(start, span);
        config
    }

    pub fn column_count(&self) -> i32 {
        self.column_count
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn span(&self) -> i32 {
        self.span
    }

    pub fn padding(&self) -> i32 {
        self.padding
    }

    pub fn corner_radii(&self) -> &CornerRadii {
        &self.corner_radii
    }

    pub fn bar_color(&self) -> Color {
        self.bar_color
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn geometry_mode(&self) -> GeometryMode {
        self.geometry_mode
    }

    /// Set the number of columns, never below one. Start and span shrink to
    /// stay inside the new column range.
    #[must_use]
    pub fn set_column_count(&mut self, columns: i32) -> Invalidation {
        self.column_count = columns.max(1);
        self.start = self.start.min(self.column_count);
        self.clamp_span();
        Invalidation::Layout
    }

    /// Set the first covered column, clamped to `[0, column_count]`.
    #[must_use]
    pub fn set_start(&mut self, start: i32) -> Invalidation {
        self.start = start.clamp(0, self.column_count);
        self.clamp_span();
        Invalidation::Layout
    }

    /// Set the number of covered columns, clamped to `[0, column_count - start]`.
    #[must_use]
    pub fn set_span(&mut self, span: i32) -> Invalidation {
        self.span = span;
        self.clamp_span();
        Invalidation::Layout
    }

    /// Set start and span together.
    #[must_use]
    pub fn set_range(&mut self, start: i32, span: i32) -> Invalidation {
        let _ = self.set_start(start);
        self.set_span(span)
    }

    /// Round all four corners with the same radius.
    #[must_use]
    pub fn set_radius(&mut self, radius: f32) -> Invalidation {
        self.corner_radii = [radius; 8];
        Invalidation::Layout
    }

    #[must_use]
    pub fn set_padding(&mut self, padding: i32) -> Invalidation {
        self.padding = padding;
        Invalidation::Layout
    }

    #[must_use]
    pub fn set_geometry_mode(&mut self, mode: GeometryMode) -> Invalidation {
        self.geometry_mode = mode;
        Invalidation::Layout
    }

    /// Set the label. `None` clears it.
    #[must_use]
    pub fn set_text(&mut self, text: Option<&str>) -> Invalidation {
        self.text = text.unwrap_or_default().to_owned();
        Invalidation::Redraw
    }

    #[must_use]
    pub fn set_bar_color(&mut self, color: Color) -> Invalidation {
        self.bar_color = color;
        Invalidation::Redraw
    }

    #[must_use]
    pub fn set_text_color(&mut self, color: Color) -> Invalidation {
        self.text_color = color;
        Invalidation::Redraw
    }

    fn clamp_span(&mut self) {
        self.span = self.span.clamp(0, self.column_count - self.start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_full_week() {
        let cfg = BarConfig::default();
        assert_eq!(cfg.column_count(), 7);
        assert_eq!((cfg.start(), cfg.span()), (0, 7));
        assert_eq!(cfg.padding(), 10);
        assert_eq!(cfg.corner_radii(), &[8.0; 8]);
        assert_eq!(cfg.text(), "");
    }

    #[test]
    fn column_count_never_below_one() {
        let mut cfg = BarConfig::default();
        assert_eq!(cfg.set_column_count(0), Invalidation::Layout);
        assert_eq!(cfg.column_count(), 1);
        let _ = cfg.set_column_count(-5);
        assert_eq!(cfg.column_count(), 1);
    }

    #[test]
    fn shrinking_columns_reclamps_range() {
        let mut cfg = BarConfig::new(10, 6, 4);
        let _ = cfg.set_column_count(5);
        assert_eq!((cfg.start(), cfg.span()), (5, 0));
    }

    #[test]
    fn start_clamped_to_column_range() {
        let mut cfg = BarConfig::default();
        let _ = cfg.set_start(-3);
        assert_eq!(cfg.start(), 0);
        let _ = cfg.set_start(12);
        assert_eq!(cfg.start(), 7);
        assert_eq!(cfg.span(), 0);
    }

    #[test]
    fn oversized_span_clamps_to_remaining_columns() {
        let mut cfg = BarConfig::default();
        let _ = cfg.set_start(3);
        let _ = cfg.set_span(100);
        assert_eq!(cfg.span(), 4);
        let _ = cfg.set_span(-1);
        assert_eq!(cfg.span(), 0);
    }

    #[test]
    fn null_text_becomes_empty() {
        let mut cfg = BarConfig::default();
        let _ = cfg.set_text(Some("Tue"));
        assert_eq!(cfg.set_text(None), Invalidation::Redraw);
        assert_eq!(cfg.text(), "");
    }

    #[test]
    fn radius_applies_to_every_corner() {
        let mut cfg = BarConfig::default();
        let _ = cfg.set_radius(3.5);
        assert_eq!(cfg.corner_radii(), &[3.5; 8]);
    }

    #[test]
    fn colors_only_request_redraw() {
        let mut cfg = BarConfig::default();
        assert_eq!(cfg.set_bar_color(Color::BLACK), Invalidation::Redraw);
        assert_eq!(cfg.set_text_color(Color::BLACK), Invalidation::Redraw);
        assert_eq!(cfg.bar_color(), Color::BLACK);
    }
}
