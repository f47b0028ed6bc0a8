//! Iced host for [`SpannableBar`].
//!
//! - [`FrameCanvas`] executes the widget's paint operations on a canvas frame.
//! - [`BarSurface`] owns a bar plus its geometry cache and turns it into an
//!   Iced element sized by the widget's measurement contract.

use iced::{
    alignment::Vertical,
    border,
    font::{Family, Style, Weight},
    mouse,
    widget::canvas::{self, Cache, Frame, Geometry, Path, Text},
    widget::text::{Alignment, LineHeight},
    Element, Font, Length, Pixels, Rectangle, Renderer, Theme,
};
use spanbar_core::{
    geometry::CornerRadii, BarView, Canvas, Color, MeasureSpec, Rect, SpannableBar, TextRun,
    ViewportSize,
};

/// Bold italic sans-serif, the label face.
pub const LABEL_FONT: Font = Font {
    family: Family::SansSerif,
    weight: Weight::Bold,
    style: Style::Italic,
    ..Font::DEFAULT
};

/// Conversion into Iced's colour type.
pub trait ToIced {
    fn to_iced(self) -> iced::Color;
}

impl ToIced for Color {
    #[inline]
    fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

// ── Canvas adapter ────────────────────────────────────────────────────────────

/// [`Canvas`] backed by an Iced [`Frame`].
pub struct FrameCanvas<'a> {
    frame: &'a mut Frame,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self { frame }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn size(&self) -> ViewportSize {
        let size = self.frame.size();
        ViewportSize::new(size.width as i32, size.height as i32)
    }

    fn fill_round_rect(&mut self, rect: Rect, radii: &CornerRadii, color: Color) {
        if rect.is_empty() {
            return;
        }
        let path = Path::rounded_rectangle(
            iced::Point::new(rect.left as f32, rect.top as f32),
            iced::Size::new(rect.width() as f32, rect.height() as f32),
            corner_radius(radii, rect),
        );
        self.frame.fill(&path, color.to_iced());
    }

    fn draw_text(&mut self, run: &TextRun) {
        let (top, line_height) = text_box(run);
        self.frame.fill_text(Text {
            content: run.content.clone(),
            position: iced::Point::new(run.position.x as f32, top),
            color: run.color.to_iced(),
            size: Pixels(run.size_px),
            line_height: LineHeight::Absolute(Pixels(line_height)),
            font: LABEL_FONT,
            align_x: Alignment::Center,
            align_y: Vertical::Top,
            ..Text::default()
        });
    }
}

/// Map the eight `(x, y)` radius components onto Iced's circular corners,
/// never exceeding half of the shorter side.
fn corner_radius(radii: &CornerRadii, rect: Rect) -> border::Radius {
    let max = rect.width().min(rect.height()) as f32 / 2.0;
    let corner = |i: usize| radii[i].min(radii[i + 1]).clamp(0.0, max);
    border::Radius {
        top_left: corner(0),
        top_right: corner(2),
        bottom_right: corner(4),
        bottom_left: corner(6),
    }
}

/// Top edge and height of a line box whose baseline lands on the run's
/// position.
fn text_box(run: &TextRun) -> (f32, f32) {
    let top = run.position.y as f32 + run.metrics.ascent;
    (top, run.metrics.descent - run.metrics.ascent)
}

// ── Program ───────────────────────────────────────────────────────────────────

/// Canvas program drawing one bar through its geometry cache.
pub struct BarProgram<'a> {
    bar: &'a SpannableBar,
    cache: &'a Cache,
}

impl<Message> canvas::Program<Message> for BarProgram<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            self.bar.draw(&mut FrameCanvas::new(frame));
        });
        vec![geometry]
    }
}

// ── Surface ───────────────────────────────────────────────────────────────────

/// A bar together with the cached geometry Iced redraws from.
pub struct BarSurface {
    bar: SpannableBar,
    cache: Cache,
}

impl BarSurface {
    pub fn new(bar: SpannableBar) -> Self {
        let mut surface = Self { bar, cache: Cache::new() };
        surface.sync();
        surface
    }

    pub fn bar(&self) -> &SpannableBar {
        &self.bar
    }

    /// Mutate the bar, then drop cached geometry if the bar asked for it.
    pub fn update(&mut self, f: impl FnOnce(&mut SpannableBar)) {
        f(&mut self.bar);
        self.sync();
    }

    fn sync(&mut self) {
        if let Some(inv) = self.bar.take_invalidation() {
            tracing::debug!(?inv, "bar invalidated");
            self.cache.clear();
        }
    }

    /// Element sized by the bar's measurement under the given constraints.
    pub fn view<'a, Message: 'a>(
        &'a self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Element<'a, Message> {
        let size = self.bar.measure(width, height);
        canvas::Canvas::new(BarProgram { bar: &self.bar, cache: &self.cache })
            .width(Length::Fixed(size.width as f32))
            .height(Length::Fixed(size.height as f32))
            .into()
    }
}
