//! Column-spanning bar widget: configuration, geometry and the host contract.
//!
//! The crate has no rendering backend of its own. Hosts implement
//! [`Canvas`] and call [`BarView::draw`] from their paint callback.

pub mod bar;
pub mod color;
pub mod error;
pub mod geometry;
pub mod measure;
pub mod widget;

pub use bar::BarConfig;
pub use color::Color;
pub use error::{Result, SpanBarError};
pub use geometry::{GeometryMode, Point, Rect, RenderPlan, TextRun, ViewportSize};
pub use measure::{MeasureSpec, Size};
pub use widget::{BarView, Canvas, Invalidation, SpannableBar};
