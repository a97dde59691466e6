// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::PathBuf;
use thiserror::Error;

use crate::launcher::services::ValidationIssue;

/// Every condition that stops an `lfc` invocation.
///
/// The `Display` text of each variant is the single diagnostic printed
/// through [`Reporter::fatal`](crate::launcher::report::Reporter::fatal);
/// all of them terminate the process with status 1.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No input files.")]
    NoInputFiles,
    #[error("Unable to parse commandline arguments. Reason:")]
    Parse(String),
    #[error("{}: No such file or directory", .0.display())]
    FileNotFound(PathBuf),
    #[error("Output location '{}' does not exist.", .0.display())]
    OutputMissing(PathBuf),
    #[error("Output location '{}' is not a directory.", .0.display())]
    OutputNotDirectory(PathBuf),
    #[error("Unable to validate resource. Reason:")]
    ValidationFailed(Vec<ValidationIssue>),
    #[error("Rebuild failed. Reason:")]
    BuildFailed(String),
    #[error("Unable to relaunch the rebuilt compiler. Reason:")]
    RelaunchFailed(String),
    #[error("An unexpected error occurred.")]
    Generator(String),
    #[error("Unable to load '{}': {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
    #[error("invalid launcher configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LaunchError {
    /// Extra lines echoed unstyled after the fatal header, if any.
    pub fn details(&self) -> Vec<String> {
        match self {
            LaunchError::Parse(reason)
            | LaunchError::BuildFailed(reason)
            | LaunchError::RelaunchFailed(reason) => vec![reason.trim_end().to_string()],
            LaunchError::ValidationFailed(issues) => {
                issues.iter().map(ToString::to_string).collect()
            }
            LaunchError::Generator(reason) => vec![reason.clone()],
            _ => Vec::new(),
        }
    }

    /// Short tag recorded in the invocation journal.
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchError::NoInputFiles => "no-input",
            LaunchError::Parse(_) => "parse",
            LaunchError::FileNotFound(_) => "file-not-found",
            LaunchError::OutputMissing(_) | LaunchError::OutputNotDirectory(_) => "output-location",
            LaunchError::ValidationFailed(_) => "validation",
            LaunchError::BuildFailed(_) => "build",
            LaunchError::RelaunchFailed(_) => "relaunch",
            LaunchError::Generator(_) => "generator",
            LaunchError::Load { .. } => "load",
            LaunchError::Config(_) => "config",
            LaunchError::Io(_) => "io",
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
