// CLASSIFICATION: COMMUNITY
// Filename: services.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Collaborators consumed by the compilation driver.
//!
//! The grammar, validation rules and code emitter live outside the launcher;
//! the driver only sees them through the traits below. [`Toolkit`] bundles
//! one implementation of each so the driver can be handed a complete set.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::launcher::text;

/// In-memory representation of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub path: PathBuf,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
}

impl ValidationIssue {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        ValidationIssue {
            severity,
            message: message.into(),
            location: None,
        }
    }

    pub fn at(mut self, path: &Path, line: usize) -> Self {
        self.location = Some(Location {
            path: path.to_path_buf(),
            line,
        });
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "{}:{}: ", loc.path.display(), loc.line)?;
        }
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Cancellation handle passed to the generator.
///
/// `lfc` offers no way to cancel a run, so the only token is
/// [`CancelToken::never`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CancelToken;

impl CancelToken {
    pub fn never() -> Self {
        CancelToken
    }
}

/// Settings handed to the generator for one file.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub cancel: CancelToken,
    /// Long flag name to value; argument-less flags map to `""`.
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(String),
}

pub trait Loader {
    fn load(&self, path: &Path) -> Result<Resource, LoadError>;
}

/// Reinterprets the main unit of a resource as its federated variant.
pub trait FederatedTransform {
    /// Returns `false` when the resource has nothing to make federated.
    fn make_federated(&self, resource: &mut Resource) -> bool;
}

pub trait Validator {
    fn validate(&self, resource: &Resource) -> Vec<ValidationIssue>;
}

pub trait Generator {
    fn generate(
        &self,
        resource: &Resource,
        output_dir: &Path,
        config: &GeneratorConfig,
    ) -> Result<(), GeneratorError>;
}

/// One implementation of every collaborator the driver needs.
pub struct Toolkit {
    pub loader: Box<dyn Loader>,
    pub transform: Box<dyn FederatedTransform>,
    pub validator: Box<dyn Validator>,
    pub generator: Box<dyn Generator>,
}

impl Default for Toolkit {
    fn default() -> Self {
        Toolkit {
            loader: Box::new(text::SourceLoader),
            transform: Box::new(text::FederatedRewrite),
            validator: Box::new(text::TargetValidator),
            generator: Box::new(text::CopyGenerator),
        }
    }
}
