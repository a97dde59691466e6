// CLASSIFICATION: COMMUNITY
// Filename: driver.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Per-file compilation pipeline.
//!
//! Files are handled strictly in order: resolve the output directory, load,
//! optionally make federated, validate, generate. The first fatal problem
//! stops the whole run; nothing after it is processed.

use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::launcher::config::LauncherConfig;
use crate::launcher::error::LaunchError;
use crate::launcher::logging::Journal;
use crate::launcher::options::{ParsedInvocation, FEDERATED, OUTPUT_PATH};
use crate::launcher::paths::{resolve_output_directory, GENERATED_DIR};
use crate::launcher::report::Reporter;
use crate::launcher::services::{CancelToken, GeneratorConfig, Resource, Toolkit};
use crate::launcher::report_fatal;

pub struct Driver<'a> {
    toolkit: &'a Toolkit,
    cfg: &'a LauncherConfig,
    reporter: &'a mut Reporter,
    journal: &'a Journal,
}

impl<'a> Driver<'a> {
    pub fn new(
        toolkit: &'a Toolkit,
        cfg: &'a LauncherConfig,
        reporter: &'a mut Reporter,
        journal: &'a Journal,
    ) -> Self {
        Driver {
            toolkit,
            cfg,
            reporter,
            journal,
        }
    }

    /// Compile `files` and return the process exit status.
    pub fn run(&mut self, files: &[PathBuf], invocation: &ParsedInvocation) -> i32 {
        match self.compile_all(files, invocation) {
            Ok(()) => 0,
            Err(e) => {
                report_fatal(self.reporter, self.journal, &e);
                e.exit_code()
            }
        }
    }

    pub fn compile_all(
        &mut self,
        files: &[PathBuf],
        invocation: &ParsedInvocation,
    ) -> Result<(), LaunchError> {
        if files.is_empty() {
            return Err(LaunchError::NoInputFiles);
        }
        for file in files {
            if !self.cfg.absolute(file).exists() {
                return Err(LaunchError::FileNotFound(file.clone()));
            }
        }
        let override_dir = self.output_override(invocation)?;
        let properties = invocation.forwarded_properties();
        let federated = invocation.is_present(FEDERATED);

        for file in files {
            let source = self.cfg.absolute(file);
            let output_dir = match &override_dir {
                Some(dir) => dir.clone(),
                None => resolve_output_directory(&source, &self.cfg.working_dir, self.reporter),
            };
            log::info!("compiling {} into {}", source.display(), output_dir.display());

            let mut resource = self
                .toolkit
                .loader
                .load(&source)
                .map_err(|e| LaunchError::Load {
                    path: file.clone(),
                    reason: e.to_string(),
                })?;

            if federated && !self.toolkit.transform.make_federated(&mut resource) {
                self.reporter
                    .error("Unable to change main reactor to federated reactor.");
            }

            let issues = self.toolkit.validator.validate(&resource);
            if !issues.is_empty() {
                return Err(LaunchError::ValidationFailed(issues));
            }

            let config = GeneratorConfig {
                cancel: CancelToken::never(),
                properties: properties.clone(),
            };
            self.generate(&resource, &output_dir, &config)?;
            self.reporter.plain("Code generation finished.");
            self.journal.record(
                "generated",
                &[
                    ("file", source.display().to_string()),
                    ("output", output_dir.display().to_string()),
                ],
            );
        }
        Ok(())
    }

    /// `<dir>/src-gen` for a valid `--output-path`, checked before any file
    /// is loaded.
    fn output_override(&self, invocation: &ParsedInvocation) -> Result<Option<PathBuf>, LaunchError> {
        let Some(raw) = invocation.value(OUTPUT_PATH) else {
            return Ok(None);
        };
        let given = PathBuf::from(raw);
        let dir = self.cfg.absolute(&given);
        if !dir.exists() {
            return Err(LaunchError::OutputMissing(given));
        }
        if !dir.is_dir() {
            return Err(LaunchError::OutputNotDirectory(given));
        }
        let canonical = fs::canonicalize(&dir)?;
        Ok(Some(canonical.join(GENERATED_DIR)))
    }

    fn generate(
        &self,
        resource: &Resource,
        output_dir: &Path,
        config: &GeneratorConfig,
    ) -> Result<(), LaunchError> {
        let generator = &self.toolkit.generator;
        // The panic becomes the single fatal diagnostic; keep the default
        // hook from printing its own report first.
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|info| log::debug!("generator panicked: {info}")));
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            generator.generate(resource, output_dir, config)
        }));
        panic::set_hook(previous);
        match result {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(LaunchError::Generator(e.to_string())),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "generator panicked".to_string());
                Err(LaunchError::Generator(reason))
            }
        }
    }
}
