use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("cannot open {}: {}", .path.display(), .source)]
pub struct LaunchError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Hands a path to the platform's default file handler.
pub trait Launcher {
    fn open(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Dispatches through the OS file-association mechanism without waiting for
/// the handler to exit.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> Result<(), LaunchError> {
        log::info!("Opening {} with the default handler", path.display());
        open::that_detached(path).map_err(|source| LaunchError {
            path: path.to_path_buf(),
            source,
        })
    }
}
