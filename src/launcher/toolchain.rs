// CLASSIFICATION: COMMUNITY
// Filename: toolchain.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Rebuilding the launcher itself.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::launcher::config::LauncherConfig;

#[derive(Debug, Error)]
pub enum BuildToolError {
    #[error("failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Exit status and combined stdout/stderr of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub exit_code: Option<i32>,
    pub output: String,
}

impl BuildReport {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub trait BuildTool {
    /// Build the launcher; `offline` forbids network access for dependencies.
    fn build(&self, offline: bool) -> Result<BuildReport, BuildToolError>;
}

/// Where build programs come from.
#[derive(Debug, Clone)]
pub struct Toolchain {
    cargo: PathBuf,
}

impl Toolchain {
    /// `cargo` from the `CARGO` variable (set when run under cargo), else `PATH`.
    pub fn from_env() -> Self {
        let cargo = std::env::var_os("CARGO")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cargo"));
        Toolchain { cargo }
    }

    pub fn with_cargo(cargo: impl Into<PathBuf>) -> Self {
        Toolchain {
            cargo: cargo.into(),
        }
    }

    pub fn cargo(&self) -> &Path {
        &self.cargo
    }
}

/// Runs `cargo build` in the launcher's own crate.
pub struct CargoBuildTool {
    toolchain: Toolchain,
    root: PathBuf,
    release: bool,
}

impl CargoBuildTool {
    pub fn new(toolchain: Toolchain, cfg: &LauncherConfig) -> Self {
        CargoBuildTool {
            toolchain,
            root: cfg.build_root.clone(),
            release: cfg.release_artifact(),
        }
    }

    pub fn arguments(&self, offline: bool) -> Vec<&'static str> {
        let mut args = vec!["build"];
        if self.release {
            args.push("--release");
        }
        if offline {
            args.push("--offline");
        }
        args
    }
}

impl BuildTool for CargoBuildTool {
    fn build(&self, offline: bool) -> Result<BuildReport, BuildToolError> {
        let args = self.arguments(offline);
        log::info!(
            "running {} {} in {}",
            self.toolchain.cargo().display(),
            args.join(" "),
            self.root.display()
        );
        let output = Command::new(self.toolchain.cargo())
            .args(&args)
            .current_dir(&self.root)
            .output()
            .map_err(|source| BuildToolError::Spawn {
                program: self.toolchain.cargo().to_path_buf(),
                source,
            })?;
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(BuildReport {
            exit_code: output.status.code(),
            output: text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_unless_updating() {
        let cfg = LauncherConfig::new("/r/target/debug/lfc", "/r", "/w");
        let tool = CargoBuildTool::new(Toolchain::with_cargo("cargo"), &cfg);
        assert_eq!(tool.arguments(true), vec!["build", "--offline"]);
        assert_eq!(tool.arguments(false), vec!["build"]);
    }

    #[test]
    fn release_artifacts_rebuild_in_release() {
        let cfg = LauncherConfig::new("/r/target/release/lfc", "/r", "/w");
        let tool = CargoBuildTool::new(Toolchain::with_cargo("cargo"), &cfg);
        assert_eq!(tool.arguments(true), vec!["build", "--release", "--offline"]);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let cfg = LauncherConfig::new("/r/target/debug/lfc", std::env::temp_dir(), "/w");
        let tool = CargoBuildTool::new(Toolchain::with_cargo("/nonexistent/cargo-lfc"), &cfg);
        assert!(matches!(tool.build(true), Err(BuildToolError::Spawn { .. })));
    }

    #[test]
    fn report_success_needs_zero_status() {
        let ok = BuildReport { exit_code: Some(0), output: String::new() };
        let failed = BuildReport { exit_code: Some(101), output: "error".into() };
        let killed = BuildReport { exit_code: None, output: String::new() };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }
}
