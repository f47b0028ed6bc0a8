use crate::{
    bar::BarConfig,
    color::Color,
    geometry::{
        self, CornerRadii, GeometryMode, PaintOp, Rect, RenderPlan, TextRun, ViewportSize,
    },
    measure::{self, MeasureSpec, Size},
};

/// Work a configuration change asks of the host.
///
/// Ordered so that merging two requests keeps the larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Invalidation {
    /// Paint again with the current size.
    Redraw,
    /// Re-measure, then paint.
    Layout,
}

/// 2D drawing surface provided by the host for the duration of one draw.
pub trait Canvas {
    fn size(&self) -> ViewportSize;

    fn fill_round_rect(&mut self, rect: Rect, radii: &CornerRadii, color: Color);

    /// Draw `run` centered horizontally on its position, which is the baseline.
    fn draw_text(&mut self, run: &TextRun);
}

/// Capabilities a host needs from a leaf view.
pub trait BarView {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;

    fn draw(&self, canvas: &mut dyn Canvas);
}

/// A bar spanning a range of equal-width columns, with a centered label.
///
/// Setters mirror [`BarConfig`] and remember the strongest pending
/// [`Invalidation`] until the host collects it with
/// [`SpannableBar::take_invalidation`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpannableBar {
    config: BarConfig,
    /// Pixels per density-independent unit.
    density: f32,
    pending: Option<Invalidation>,
}

impl Default for SpannableBar {
    fn default() -> Self {
        Self::from_config(BarConfig::default(), 1.0)
    }
}

impl SpannableBar {
    pub fn new(columns: i32, start: i32, span: i32) -> Self {
        Self::from_config(BarConfig::new(columns, start, span), 1.0)
    }

    /// `density` falls back to 1.0 unless it is finite and positive.
    pub fn from_config(config: BarConfig, density: f32) -> Self {
        Self {
            config,
            density: if is_valid_density(density) { density } else { 1.0 },
            pending: Some(Invalidation::Layout),
        }
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Plan for the given surface size; `None` when nothing would be drawn.
    pub fn plan(&self, viewport: ViewportSize) -> Option<RenderPlan> {
        geometry::compute_plan(&self.config, viewport, self.density)
    }

    /// Pending request since the last call, if any.
    pub fn take_invalidation(&mut self) -> Option<Invalidation> {
        self.pending.take()
    }

    /// Zero, negative and non-finite densities are ignored.
    pub fn set_density(&mut self, density: f32) {
        if !is_valid_density(density) || density == self.density {
            return;
        }
        self.density = density;
        self.request(Invalidation::Layout);
    }

    pub fn set_column_count(&mut self, columns: i32) {
        let inv = self.config.set_column_count(columns);
        self.request(inv);
    }

    pub fn set_start(&mut self, start: i32) {
        let inv = self.config.set_start(start);
        self.request(inv);
    }

    pub fn set_span(&mut self, span: i32) {
        let inv = self.config.set_span(span);
        self.request(inv);
    }

    /// Set start and span with a single request.
    pub fn set(&mut self, start: i32, span: i32) {
        let inv = self.config.set_range(start, span);
        self.request(inv);
    }

    pub fn set_radius(&mut self, radius: f32) {
        let inv = self.config.set_radius(radius);
        self.request(inv);
    }

    pub fn set_padding(&mut self, padding: i32) {
        let inv = self.config.set_padding(padding);
        self.request(inv);
    }

    pub fn set_geometry_mode(&mut self, mode: GeometryMode) {
        let inv = self.config.set_geometry_mode(mode);
        self.request(inv);
    }

    pub fn set_text(&mut self, text: Option<&str>) {
        let inv = self.config.set_text(text);
        self.request(inv);
    }

    pub fn set_bar_color(&mut self, color: Color) {
        let inv = self.config.set_bar_color(color);
        self.request(inv);
    }

    pub fn set_text_color(&mut self, color: Color) {
        let inv = self.config.set_text_color(color);
        self.request(inv);
    }

    fn request(&mut self, inv: Invalidation) {
        self.pending = self.pending.max(Some(inv));
    }
}

fn is_valid_density(density: f32) -> bool {
    density.is_finite() && density > 0.0
}

impl BarView for SpannableBar {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        measure::measure(width, height)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let Some(plan) = self.plan(canvas.size()) else {
            return;
        };
        for op in plan.paint_ops() {
            match op {
                PaintOp::FillRoundRect { rect, radii, color } => {
                    canvas.fill_round_rect(rect, radii, color)
                }
                PaintOp::DrawText(run) => canvas.draw_text(run),
            }
        }
    }
}
