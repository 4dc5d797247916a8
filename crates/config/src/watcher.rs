use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{info, warn};

use vizlet_core::{Result, VizletError};

/// Watches a display config file and fires on every write.
///
/// The returned receiver coalesces bursts: while a reload notification is
/// still pending, further filesystem events are folded into it. Dropping
/// the watcher handle stops the stream.
///
/// # Example
/// ```no_run
/// # use vizlet_config::ConfigWatcher;
/// # async fn demo() -> vizlet_core::Result<()> {
/// let (_watcher, mut rx) = ConfigWatcher::spawn("display.toml")?;
/// while rx.recv().await.is_some() {
///     // reload the config
/// }
/// # Ok(())
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
    // Keeps the native watcher alive for as long as the handle exists.
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Start watching `path`. Fails if the native watcher cannot be set up.
    pub fn spawn(path: impl AsRef<Path>) -> Result<(Self, mpsc::Receiver<()>)> {
        let path = path.as_ref().to_path_buf();
        let (tx, rx) = mpsc::channel(1);

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) => {
                    // a full buffer means a reload is already queued
                    let _ = tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => warn!("watcher error: {e}"),
            },
            notify::Config::default().with_poll_interval(Duration::from_secs(2)),
        )
        .map_err(|e| VizletError::Config(format!("cannot create file watcher: {e}")))?;

        watcher
            .watch(&path, RecursiveMode::NonRecursive)
            .map_err(|e| VizletError::Config(format!("cannot watch '{}': {e}", path.display())))?;

        info!("watching display config: {}", path.display());
        Ok((Self { path, _watcher: watcher }, rx))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for ConfigWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigWatcher").field("path", &self.path).finish()
    }
}
