//! Desktop window hosting the configured bars.
//!
//! Owns the Iced application loop and the config watcher: every write to
//! `spanbar.toml` rebuilds the bars in place.

use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container},
    Element, Length, Subscription, Task,
};
use spanbar_config::{default_path, load as load_config, ConfigWatcher, SpanBarConfig};
use spanbar_core::{MeasureSpec, Result, SpanBarError, SpannableBar};
use spanbar_renderer::{BarSurface, ToIced};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Vertical gap between stacked bars (logical pixels).
const BAR_GAP: f32 = 8.0;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the window.  Returns once the window is closed.
pub fn run() -> Result<()> {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .style(App::style)
        .run()
        .map_err(|e| SpanBarError::Window(e.to_string()))
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// Config file changed on disk.
    ConfigReloaded,
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    config: SpanBarConfig,
    bars: Vec<BarSurface>,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_else(|e| {
            warn!("{e}; using defaults");
            SpanBarConfig::default()
        });
        let bars = build_surfaces(&config);
        info!("Showing {} bar(s)", bars.len());

        (Self { config, bars }, Task::none())
    }

    fn title(&self) -> String {
        self.config.display.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    self.reload(cfg);
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    fn reload(&mut self, config: SpanBarConfig) {
        match reconcile(&mut self.bars, config.build_bars()) {
            Reconciled::Patched(0) => {}
            Reconciled::Patched(n) => debug!("{n} bar(s) changed"),
            Reconciled::Rebuilt => debug!("Bar list rebuilt with {} bar(s)", self.bars.len()),
        }
        self.config = config;
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let display = &self.config.display;
        let width = display.width.map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly);
        let height = display.height.map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly);

        let bars = self.bars.iter().fold(column![].spacing(BAR_GAP), |col, surface| {
            col.push(surface.view(width, height))
        });

        container(bars)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(BAR_GAP)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(config_stream)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.config.background().to_iced(),
            text_color: theme.palette().text,
        }
    }
}

fn build_surfaces(config: &SpanBarConfig) -> Vec<BarSurface> {
    config.build_bars().into_iter().map(BarSurface::new).collect()
}

/// How [`reconcile`] applied a fresh set of bars.
#[derive(Debug, PartialEq, Eq)]
enum Reconciled {
    /// Same number of bars; this many were replaced in place.
    Patched(usize),
    /// Bar count changed; every surface was recreated.
    Rebuilt,
}

/// Swap `fresh` into `surfaces`, keeping surfaces (and their geometry caches)
/// whose bar did not change when the count is the same.
fn reconcile(surfaces: &mut Vec<BarSurface>, fresh: Vec<SpannableBar>) -> Reconciled {
    if fresh.len() != surfaces.len() {
        *surfaces = fresh.into_iter().map(BarSurface::new).collect();
        return Reconciled::Rebuilt;
    }

    let mut patched = 0;
    for (surface, bar) in surfaces.iter_mut().zip(fresh) {
        let current = surface.bar();
        if current.config() != bar.config() || current.density() != bar.density() {
            surface.update(|current| *current = bar);
            patched += 1;
        }
    }
    Reconciled::Patched(patched)
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/spanbar/spanbar.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up; keep the subscription alive without reloading.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
