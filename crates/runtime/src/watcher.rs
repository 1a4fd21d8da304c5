use anyhow::Result;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use tracing::info;

/// Watch `config_path` and send its path on `changes` whenever it is written.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by replacing the file are still picked up.
pub fn start(config_path: &Path, changes: Sender<PathBuf>) -> Result<RecommendedWatcher> {
    info!("Initializing config watcher...");
    let file_name = config_path.file_name().map(ToOwned::to_owned);

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if event.kind.is_modify() || event.kind.is_create() {
                for path in &event.paths {
                    if path.file_name().map(ToOwned::to_owned) == file_name {
                        // receiver is gone once the run loop has finished
                        let _ = changes.send(path.clone());
                    }
                }
            }
        }
        Err(e) => tracing::error!("Error watching config file: {e:?}"),
    })?;

    let dir = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    info!("Config watcher started for {:?}.", config_path);
    Ok(watcher)
}
