// CLASSIFICATION: COMMUNITY
// Filename: text.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Line-oriented collaborators used when no language services are plugged in.
//!
//! They only look at declarations that start a line, which is enough to run
//! the launcher end to end.

use std::fs;
use std::path::Path;

use crate::launcher::services::{
    FederatedTransform, Generator, GeneratorConfig, GeneratorError, Loader, LoadError, Resource,
    Severity, ValidationIssue, Validator,
};

const KNOWN_TARGETS: &[&str] = &["C", "CCpp", "Cpp", "Python", "TypeScript", "Rust"];

pub struct SourceLoader;

impl Loader for SourceLoader {
    fn load(&self, path: &Path) -> Result<Resource, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Resource {
            path: path.to_path_buf(),
            text,
        })
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with('#')
}

/// Checks that a resource opens with a `target <Name>` declaration.
pub struct TargetValidator;

impl Validator for TargetValidator {
    fn validate(&self, resource: &Resource) -> Vec<ValidationIssue> {
        let first = resource
            .text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .find(|(_, line)| !line.is_empty() && !is_comment(line));
        let Some((line_no, line)) = first else {
            return vec![ValidationIssue::new(Severity::Info, "resource is empty")
                .at(&resource.path, 1)];
        };
        let Some(rest) = line.strip_prefix("target ") else {
            return vec![ValidationIssue::new(
                Severity::Error,
                "expected a target declaration at the start of the file",
            )
            .at(&resource.path, line_no)];
        };
        let name: String = rest
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if name.is_empty() {
            vec![ValidationIssue::new(Severity::Error, "target declaration lacks a name")
                .at(&resource.path, line_no)]
        } else if !KNOWN_TARGETS.contains(&name.as_str()) {
            vec![ValidationIssue::new(Severity::Warning, format!("unknown target '{name}'"))
                .at(&resource.path, line_no)]
        } else {
            Vec::new()
        }
    }
}

/// Turns the first `main reactor` declaration into a `federated reactor`.
pub struct FederatedRewrite;

impl FederatedTransform for FederatedRewrite {
    fn make_federated(&self, resource: &mut Resource) -> bool {
        let mut changed = false;
        let mut out = String::with_capacity(resource.text.len() + 5);
        for line in resource.text.split_inclusive('\n') {
            let trimmed = line.trim_start();
            if !changed && trimmed.starts_with("main reactor") {
                let indent = &line[..line.len() - trimmed.len()];
                out.push_str(indent);
                out.push_str("federated");
                out.push_str(&trimmed["main".len()..]);
                changed = true;
            } else {
                out.push_str(line);
            }
        }
        if changed {
            resource.text = out;
        }
        changed
    }
}

/// Writes the resource into `<output>/<stem>/<file name>` behind a header
/// listing the forwarded properties.
pub struct CopyGenerator;

impl Generator for CopyGenerator {
    fn generate(
        &self,
        resource: &Resource,
        output_dir: &Path,
        config: &GeneratorConfig,
    ) -> Result<(), GeneratorError> {
        let stem = resource
            .path
            .file_stem()
            .ok_or_else(|| GeneratorError::Other(format!("{} has no file name", resource.path.display())))?;
        let name = resource.path.file_name().unwrap_or(stem);
        let dir = output_dir.join(stem);
        fs::create_dir_all(&dir).map_err(|source| GeneratorError::Write {
            path: dir.clone(),
            source,
        })?;

        let mut text = format!("// generated by lfc from {}\n", resource.path.display());
        for (key, value) in &config.properties {
            text.push_str(&format!("// property {key}={value}\n"));
        }
        text.push_str(&resource.text);

        let target = dir.join(name);
        fs::write(&target, text).map_err(|source| GeneratorError::Write {
            path: target.clone(),
            source,
        })?;
        log::info!("wrote {}", target.display());
        Ok(())
    }
}
