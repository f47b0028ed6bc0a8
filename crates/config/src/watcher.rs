use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches a config file and signals every write or re-creation.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// use spanbar_config::ConfigWatcher;
///
/// let (_watcher, mut rx) = ConfigWatcher::spawn("/home/user/.config/spanbar/spanbar.toml");
/// while rx.recv().await.is_some() {
///     println!("config changed, rebuilding bars");
/// }
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path` on the current tokio runtime.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let (event_tx, mut event_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = event_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    // Editors often replace the file instead of writing it in place, so watch
    // the parent directory and filter on the file name.
    let target = path.parent().filter(|p| p.exists()).unwrap_or(path.as_path());
    if let Err(e) = watcher.watch(target, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", target.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = event_rx.recv().await {
        match event {
            Ok(e) => {
                use notify::EventKind::*;
                let touches_config = e.paths.iter().any(|p| p.file_name() == path.file_name());
                if touches_config && matches!(e.kind, Modify(_) | Create(_)) {
                    // A full channel already carries a pending reload.
                    if let Err(mpsc::error::TrySendError::Closed(())) = tx.try_send(()) {
                        break;
                    }
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
