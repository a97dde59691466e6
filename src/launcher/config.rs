// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::{Path, PathBuf};

use crate::launcher::error::LaunchError;

/// Locations the launcher needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// The running launcher binary; checked for staleness and relaunched.
    pub artifact: PathBuf,
    /// Directory holding the launcher's `Cargo.toml`.
    pub build_root: PathBuf,
    /// Tree whose modification times are compared against `artifact`.
    pub source_root: PathBuf,
    pub working_dir: PathBuf,
    /// Append-only invocation journal, when configured.
    pub journal: Option<PathBuf>,
}

impl LauncherConfig {
    pub fn new(
        artifact: impl Into<PathBuf>,
        build_root: impl Into<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        let build_root = build_root.into();
        LauncherConfig {
            artifact: artifact.into(),
            source_root: build_root.join("src"),
            build_root,
            working_dir: working_dir.into(),
            journal: None,
        }
    }

    pub fn with_source_root(mut self, source_root: impl Into<PathBuf>) -> Self {
        self.source_root = source_root.into();
        self
    }

    pub fn with_journal(mut self, journal: Option<PathBuf>) -> Self {
        self.journal = journal;
        self
    }

    /// Resolve from the process environment.
    ///
    /// `LFC_ARTIFACT`, `LFC_BUILD_ROOT`, `LFC_SOURCE_ROOT` and `LFC_JOURNAL`
    /// override the defaults (current executable, this crate's manifest
    /// directory, `<build root>/src`, no journal).
    pub fn from_env() -> Result<Self, LaunchError> {
        let artifact = match std::env::var_os("LFC_ARTIFACT") {
            Some(p) => PathBuf::from(p),
            None => std::env::current_exe()
                .map_err(|e| LaunchError::Config(format!("cannot locate launcher binary: {e}")))?,
        };
        let build_root = std::env::var_os("LFC_BUILD_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        let working_dir = std::env::current_dir()
            .map_err(|e| LaunchError::Config(format!("cannot read working directory: {e}")))?;
        let mut cfg = LauncherConfig::new(artifact, build_root, working_dir)
            .with_journal(std::env::var_os("LFC_JOURNAL").map(PathBuf::from));
        if let Some(src) = std::env::var_os("LFC_SOURCE_ROOT") {
            cfg = cfg.with_source_root(src);
        }
        log::debug!("launcher config {:?}", cfg);
        Ok(cfg)
    }

    /// Make `path` absolute against the startup working directory.
    pub fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Whether the artifact was built with the release profile.
    pub fn release_artifact(&self) -> bool {
        self.artifact
            .parent()
            .and_then(|p| p.file_name())
            .map(|name| name == "release")
            .unwrap_or(false)
    }
}
