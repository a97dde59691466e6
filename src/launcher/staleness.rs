// CLASSIFICATION: COMMUNITY
// Filename: staleness.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum StalenessError {
    #[error("cannot scan source tree {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("cannot read modification time of {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// True when `artifact` is missing or any file under `source_root` was
/// modified strictly after it. Only modification times are compared.
pub fn is_stale(artifact: &Path, source_root: &Path) -> Result<bool, StalenessError> {
    let built = match artifact.metadata().and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => {
            log::info!("artifact {} missing", artifact.display());
            return Ok(true);
        }
    };
    match newest_source(source_root)? {
        Some((path, modified)) if modified > built => {
            log::info!("{} is newer than {}", path.display(), artifact.display());
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Most recently modified regular file below `root`.
pub fn newest_source(root: &Path) -> Result<Option<(PathBuf, SystemTime)>, StalenessError> {
    let mut newest: Option<(PathBuf, SystemTime)> = None;
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| StalenessError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let modified = entry
            .metadata()
            .map_err(|e| StalenessError::Walk {
                root: root.to_path_buf(),
                source: e,
            })?
            .modified()
            .map_err(|source| StalenessError::Metadata {
                path: entry.path().to_path_buf(),
                source,
            })?;
        if newest.as_ref().map(|(_, t)| modified > *t).unwrap_or(true) {
            newest = Some((entry.path().to_path_buf(), modified));
        }
    }
    Ok(newest)
}
