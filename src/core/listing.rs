//! Directory listing primitive.
//!
//! Walks a directory on the blocking pool and streams eligible file paths
//! through a bounded channel. The channel closing is the "listing done"
//! signal; it is independent of any work the receiver derives from the paths.

use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::sync::mpsc;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::filter::PathFilter;
use crate::error::{ExtractError, Result};

/// Paths buffered between the walker and the traversal.
const LISTING_BUFFER: usize = 64;

/// Start listing `root`. Entries arrive in file-name order per directory.
///
/// The walk stops after the first error (which is sent as the last item) or
/// as soon as the receiver is dropped.
pub fn spawn_listing(root: PathBuf, filter: PathFilter) -> mpsc::Receiver<Result<PathBuf>> {
    let (tx, rx) = mpsc::channel(LISTING_BUFFER);

    tokio::task::spawn_blocking(move || {
        let walker = WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| is_eligible(entry, &filter));

        for entry in walker {
            let item = match entry {
                Ok(entry) if entry.file_type().is_file() => Ok(entry.into_path()),
                Ok(_) => continue,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                    Err(ExtractError::Listing {
                        path,
                        source: io::Error::from(err),
                    })
                }
            };

            let failed = item.is_err();
            if tx.blocking_send(item).is_err() {
                debug!(root = %root.display(), "listing receiver dropped");
                return;
            }
            if failed {
                return;
            }
        }

        debug!(root = %root.display(), "listing finished");
    });

    rx
}

/// The root itself is never filtered, only what is found below it.
fn is_eligible(entry: &DirEntry, filter: &PathFilter) -> bool {
    if entry.depth() == 0 {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    if entry.file_type().is_dir() {
        filter.accepts_dir(&name)
    } else {
        filter.accepts_file(&name)
    }
}
