//! Pixel geometry for a bar: column math in, paint operations out.
//!
//! Everything here is a pure function of [`BarConfig`], the viewport size and
//! the density scale. A fresh [`RenderPlan`] is computed on every draw.

use crate::{bar::BarConfig, color::Color};

/// Text size of the bar label in density-independent units.
pub const TEXT_SIZE_SP: f32 = 12.0;

/// Eight corner-radius components: `(x, y)` pairs for top-left, top-right,
/// bottom-right and bottom-left.
pub type CornerRadii = [f32; 8];

/// Integer rectangle given by its edges, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub const fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Drawing surface size, supplied by the host on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportSize {
    pub width_px: i32,
    pub height_px: i32,
}

impl ViewportSize {
    pub const fn new(width_px: i32, height_px: i32) -> Self {
        Self { width_px, height_px }
    }
}

/// Vertical font metrics relative to the baseline.
///
/// `ascent` is negative (above the baseline), `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    const SANS_ASCENT: f32 = -0.928;
    const SANS_DESCENT: f32 = 0.244;

    /// Metrics of the sans-serif face at `size_px`.
    pub fn sans_serif(size_px: f32) -> Self {
        Self {
            ascent: Self::SANS_ASCENT * size_px,
            descent: Self::SANS_DESCENT * size_px,
        }
    }

    /// Distance to push the baseline below the vertical center so that the
    /// glyph box sits centered on it.
    pub fn baseline_offset(&self) -> i32 {
        ((self.descent + self.ascent) / 2.0).round().abs() as i32
    }
}

/// Which set of formulas places the fill and the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryMode {
    /// Padding inset on both sides of the covered columns, label at the true
    /// midpoint, baseline placed from font metrics.
    #[default]
    Centered,
    /// Pixel-compatible with the first widget release: the right edge keeps
    /// the leading padding, the label sits at `left + right / 2` (with the
    /// right edge as computed, even when the fill collapses) and the baseline
    /// is offset by half the padding.
    Legacy,
}

/// A single line of label text anchored at its baseline center.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub content: String,
    /// Horizontal center and baseline of the text.
    pub position: Point,
    pub color: Color,
    pub size_px: f32,
    pub metrics: FontMetrics,
}

/// Everything needed to paint one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub fill_rect: Rect,
    pub corner_radii: CornerRadii,
    pub fill_color: Color,
    /// `None` when there is no label to draw.
    pub text: Option<TextRun>,
}

/// Paint operations in the order a host must execute them.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp<'a> {
    FillRoundRect {
        rect: Rect,
        radii: &'a CornerRadii,
        color: Color,
    },
    DrawText(&'a TextRun),
}

impl RenderPlan {
    pub fn paint_ops(&self) -> Vec<PaintOp<'_>> {
        let mut ops = vec![PaintOp::FillRoundRect {
            rect: self.fill_rect,
            radii: &self.corner_radii,
            color: self.fill_color,
        }];
        if let Some(run) = &self.text {
            ops.push(PaintOp::DrawText(run));
        }
        ops
    }
}

/// Convert density-independent units to whole pixels.
pub fn dp_to_px(dp: i32, density: f32) -> i32 {
    (dp as f32 * density).round() as i32
}

/// Compute the render plan for `config` on a surface of `viewport` size.
///
/// Returns `None` when the bar spans no columns: nothing is drawn at all.
/// Edge arithmetic saturates, so extreme padding yields an empty or
/// off-surface rect rather than overflowing.
pub fn compute_plan(
    config: &BarConfig,
    viewport: ViewportSize,
    density: f32,
) -> Option<RenderPlan> {
    let span = config.span();
    if span <= 0 {
        return None;
    }

    let column_width = viewport.width_px / config.column_count();
    let padding = dp_to_px(config.padding(), density);
    let mode = config.geometry_mode();

    let left = padding.saturating_add(config.start() * column_width);
    let top = padding;
    let right = match mode {
        GeometryMode::Centered => ((config.start() + span) * column_width).saturating_sub(padding),
        GeometryMode::Legacy => left.saturating_add(span * column_width).saturating_sub(padding),
    };
    let bottom = viewport.height_px.saturating_sub(padding);
    let fill_rect = Rect::new(left, top, right.max(left), bottom.max(top));

    let text = (!config.text().is_empty()).then(|| {
        let size_px = TEXT_SIZE_SP * density;
        let metrics = FontMetrics::sans_serif(size_px);
        let (x, offset) = match mode {
            GeometryMode::Centered => (
                midpoint(fill_rect.left, fill_rect.right),
                metrics.baseline_offset(),
            ),
            // Uses the right edge before collapsing, as the first release did.
            GeometryMode::Legacy => (left.saturating_add(right / 2), padding / 2),
        };
        TextRun {
            content: config.text().to_owned(),
            position: Point { x, y: (viewport.height_px / 2).saturating_add(offset) },
            color: config.text_color(),
            size_px,
            metrics,
        }
    });

    Some(RenderPlan {
        fill_rect,
        corner_radii: *config.corner_radii(),
        fill_color: config.bar_color(),
        text,
    })
}

fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) / 2) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> BarConfig {
        BarConfig::default()
    }

    #[test]
    fn full_week_fill_rect() {
        let plan = compute_plan(&week(), ViewportSize::new(700, 100), 1.0).unwrap();
        assert_eq!(plan.fill_rect, Rect::new(10, 10, 690, 90));
        assert_eq!(plan.corner_radii, [8.0; 8]);
        assert_eq!(plan.fill_color, Color::LIGHT_GRAY);
        assert!(plan.text.is_none());
    }

    #[test]
    fn zero_span_draws_nothing() {
        let mut cfg = week();
        let _ = cfg.set_text(Some("hidden"));
        let _ = cfg.set_span(0);
        assert!(compute_plan(&cfg, ViewportSize::new(700, 100), 1.0).is_none());
    }

    #[test]
    fn partial_span_offsets_by_columns() {
        let mut cfg = week();
        let _ = cfg.set_range(2, 3);
        let plan = compute_plan(&cfg, ViewportSize::new(700, 100), 1.0).unwrap();
        assert_eq!(plan.fill_rect, Rect::new(210, 10, 490, 90));
    }

    #[test]
    fn column_width_truncates() {
        let plan = compute_plan(&week(), ViewportSize::new(706, 100), 1.0).unwrap();
        // 706 / 7 == 100, the six leftover pixels stay unused.
        assert_eq!(plan.fill_rect.right, 690);
    }

    #[test]
    fn density_scales_padding_and_text() {
        let mut cfg = week();
        let _ = cfg.set_text(Some("Mon"));
        let plan = compute_plan(&cfg, ViewportSize::new(1400, 200), 2.0).unwrap();
        assert_eq!(plan.fill_rect, Rect::new(20, 20, 1380, 180));
        assert_eq!(plan.text.unwrap().size_px, 24.0);
    }

    #[test]
    fn label_centered_from_font_metrics() {
        let mut cfg = week();
        let _ = cfg.set_text(Some("Week 42"));
        let plan = compute_plan(&cfg, ViewportSize::new(700, 100), 1.0).unwrap();
        let run = plan.text.unwrap();
        assert_eq!(run.content, "Week 42");
        assert_eq!(run.color, Color::WHITE);
        // (-0.928 + 0.244) * 12 / 2 == -4.104
        assert_eq!(run.position, Point { x: 350, y: 54 });
    }

    #[test]
    fn legacy_mode_keeps_original_formulas() {
        let mut cfg = week();
        let _ = cfg.set_text(Some("Mon"));
        let _ = cfg.set_geometry_mode(GeometryMode::Legacy);
        let _ = cfg.set_range(1, 2);
        let plan = compute_plan(&cfg, ViewportSize::new(700, 100), 1.0).unwrap();
        assert_eq!(plan.fill_rect, Rect::new(110, 10, 300, 90));
        assert_eq!(plan.text.unwrap().position, Point { x: 110 + 150, y: 55 });
    }

    #[test]
    fn oversized_padding_collapses_instead_of_inverting() {
        let mut cfg = week();
        let _ = cfg.set_padding(40);
        let plan = compute_plan(&cfg, ViewportSize::new(35, 60), 1.0).unwrap();
        assert!(plan.fill_rect.right >= plan.fill_rect.left);
        assert!(plan.fill_rect.bottom >= plan.fill_rect.top);
        assert!(plan.fill_rect.is_empty());
    }

    #[test]
    fn extreme_padding_with_label_does_not_overflow() {
        for mode in [GeometryMode::Centered, GeometryMode::Legacy] {
            for padding in [i32::MAX, i32::MIN] {
                let mut cfg = week();
                let _ = cfg.set_geometry_mode(mode);
                let _ = cfg.set_text(Some("Mon"));
                let _ = cfg.set_padding(padding);
                let plan = compute_plan(&cfg, ViewportSize::new(700, 100), 1.0).unwrap();
                assert!(plan.fill_rect.right >= plan.fill_rect.left);
                assert!(plan.fill_rect.bottom >= plan.fill_rect.top);
                assert!(plan.text.is_some());
            }
        }
    }

    #[test]
    fn legacy_label_uses_uncollapsed_right_edge() {
        let mut cfg = week();
        let _ = cfg.set_geometry_mode(GeometryMode::Legacy);
        let _ = cfg.set_text(Some("Mon"));
        let _ = cfg.set_padding(40);
        let _ = cfg.set_range(1, 1);
        // column width 10: left = 50, right = 50 + 10 - 40 = 20
        let plan = compute_plan(&cfg, ViewportSize::new(70, 100), 1.0).unwrap();
        assert_eq!(plan.fill_rect, Rect::new(50, 40, 50, 60));
        assert_eq!(plan.text.unwrap().position.x, 50 + 20 / 2);
    }

    #[test]
    fn right_never_precedes_left() {
        for mode in [GeometryMode::Centered, GeometryMode::Legacy] {
            for columns in 1..=9 {
                for start in 0..=columns {
                    for span in 0..=(columns - start) {
                        for width in [0, 7, 64, 333, 1080] {
                            let mut cfg = BarConfig::default();
                            let _ = cfg.set_geometry_mode(mode);
                            let _ = cfg.set_column_count(columns);
                            let _ = cfg.set_range(start, span);
                            let plan = compute_plan(&cfg, ViewportSize::new(width, 48), 1.5);
                            match plan {
                                Some(p) => {
                                    assert!(span > 0);
                                    assert!(p.fill_rect.right >= p.fill_rect.left);
                                }
                                None => assert_eq!(span, 0),
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn paint_ops_fill_before_text() {
        let mut cfg = week();
        let _ = cfg.set_text(Some("Mon"));
        let plan = compute_plan(&cfg, ViewportSize::new(700, 100), 1.0).unwrap();
        let ops = plan.paint_ops();
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[0], PaintOp::FillRoundRect { .. }));
        assert!(matches!(ops[1], PaintOp::DrawText(run) if run.content == "Mon"));
    }
}
