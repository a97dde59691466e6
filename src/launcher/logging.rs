// CLASSIFICATION: COMMUNITY
// Filename: logging.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use chrono::Utc;
use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Install the diagnostic logger. Filter comes from `LFC_LOG` (default `warn`).
pub fn init() {
    let env = env_logger::Env::new().filter_or("LFC_LOG", "warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Append-only record of launcher invocations, one line per event.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    path: Option<PathBuf>,
}

impl Journal {
    pub fn new(path: Option<PathBuf>) -> Self {
        Journal { path }
    }

    pub fn disabled() -> Self {
        Journal { path: None }
    }

    pub fn record(&self, event: &str, fields: &[(&str, String)]) {
        let mut line = format!("event={event}");
        for (key, value) in fields {
            line.push_str(&format!(" {key}={value}"));
        }
        log::debug!("{line}");
        if let Some(path) = &self.path {
            if let Err(e) = append(path, &line) {
                log::warn!("cannot write journal {}: {e}", path.display());
            }
        }
    }
}

fn append(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(f, "{} {}", Utc::now().to_rfc3339(), line)?;
    f.flush()
}
