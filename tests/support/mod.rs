// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use lfc::launcher::config::LauncherConfig;
use lfc::launcher::relaunch::Relauncher;
use lfc::launcher::report::{Capture, Reporter};
use lfc::launcher::services::{
    Generator, GeneratorConfig, GeneratorError, Resource, Severity, Toolkit, ValidationIssue,
    Validator,
};
use lfc::launcher::toolchain::{BuildReport, BuildTool, BuildToolError};
use lfc::launcher::Launcher;
use tempfile::TempDir;

/// One generator call as seen by [`RecordingGenerator`].
#[derive(Debug, Clone)]
pub struct GenCall {
    pub source: PathBuf,
    pub text: String,
    pub output_dir: PathBuf,
    pub properties: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
pub struct RecordingGenerator {
    pub calls: Arc<Mutex<Vec<GenCall>>>,
    pub panic_with: Option<&'static str>,
    pub fail_with: Option<&'static str>,
}

impl Generator for RecordingGenerator {
    fn generate(
        &self,
        resource: &Resource,
        output_dir: &Path,
        config: &GeneratorConfig,
    ) -> Result<(), GeneratorError> {
        if let Some(msg) = self.panic_with {
            panic!("{}", msg);
        }
        if let Some(msg) = self.fail_with {
            return Err(GeneratorError::Other(msg.to_string()));
        }
        self.calls.lock().unwrap().push(GenCall {
            source: resource.path.clone(),
            text: resource.text.clone(),
            output_dir: output_dir.to_path_buf(),
            properties: config.properties.clone(),
        });
        Ok(())
    }
}

/// Reports the configured issues for every resource.
pub struct FixedValidator(pub Vec<(Severity, &'static str)>);

impl Validator for FixedValidator {
    fn validate(&self, _resource: &Resource) -> Vec<ValidationIssue> {
        self.0
            .iter()
            .map(|(sev, msg)| ValidationIssue::new(*sev, *msg))
            .collect()
    }
}

/// Accepts every resource and keeps the text it was shown.
#[derive(Clone, Default)]
pub struct RecordingValidator {
    pub seen: Arc<Mutex<Vec<String>>>,
}

impl Validator for RecordingValidator {
    fn validate(&self, resource: &Resource) -> Vec<ValidationIssue> {
        self.seen.lock().unwrap().push(resource.text.clone());
        Vec::new()
    }
}

#[derive(Clone)]
pub struct FakeBuild {
    pub calls: Arc<Mutex<Vec<bool>>>,
    pub exit_code: i32,
    pub output: &'static str,
}

impl FakeBuild {
    pub fn succeeding() -> Self {
        FakeBuild {
            calls: Arc::default(),
            exit_code: 0,
            output: "Finished",
        }
    }

    pub fn failing(output: &'static str) -> Self {
        FakeBuild {
            calls: Arc::default(),
            exit_code: 101,
            output,
        }
    }

    pub fn offline_flags(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

impl BuildTool for FakeBuild {
    fn build(&self, offline: bool) -> Result<BuildReport, BuildToolError> {
        self.calls.lock().unwrap().push(offline);
        Ok(BuildReport {
            exit_code: Some(self.exit_code),
            output: self.output.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct FakeRelauncher {
    pub calls: Arc<Mutex<Vec<(PathBuf, Vec<String>)>>>,
    pub result: Result<Option<i32>, &'static str>,
}

impl FakeRelauncher {
    pub fn exiting(code: i32) -> Self {
        FakeRelauncher {
            calls: Arc::default(),
            result: Ok(Some(code)),
        }
    }

    pub fn broken() -> Self {
        FakeRelauncher {
            calls: Arc::default(),
            result: Err("permission denied"),
        }
    }

    pub fn recorded(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Relauncher for FakeRelauncher {
    fn relaunch(&self, program: &Path, args: &[String]) -> io::Result<Option<i32>> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_path_buf(), args.to_vec()));
        self.result
            .map_err(|msg| io::Error::new(io::ErrorKind::PermissionDenied, msg))
    }
}

/// Scratch project: `<tmp>/work` is the working directory, `<tmp>/lfc` the
/// launcher checkout with `target/debug/lfc` and `src/`.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();
        fs::create_dir_all(dir.path().join("lfc/src")).unwrap();
        fs::create_dir_all(dir.path().join("lfc/target/debug")).unwrap();
        Workspace { dir }
    }

    pub fn work(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    pub fn artifact(&self) -> PathBuf {
        self.dir.path().join("lfc/target/debug/lfc")
    }

    pub fn config(&self) -> LauncherConfig {
        LauncherConfig::new(self.artifact(), self.dir.path().join("lfc"), self.work())
    }

    /// Create a file relative to the working directory.
    pub fn source(&self, rel: &str, text: &str) -> PathBuf {
        let path = self.work().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    /// Artifact built after every launcher source.
    pub fn fresh_artifact(&self) {
        let base = SystemTime::now() - Duration::from_secs(600);
        set_mtime(&self.dir.path().join("lfc/src/main.rs"), base - Duration::from_secs(60));
        set_mtime(&self.artifact(), base);
    }

    /// A launcher source touched after the artifact was built.
    pub fn stale_artifact(&self) {
        let base = SystemTime::now() - Duration::from_secs(600);
        set_mtime(&self.artifact(), base);
        set_mtime(&self.dir.path().join("lfc/src/main.rs"), base + Duration::from_secs(5));
    }
}

pub fn set_mtime(path: &Path, at: SystemTime) {
    let f = File::create(path).unwrap();
    f.set_modified(at).unwrap();
}

/// Launcher wired to fakes, plus handles to everything it records.
pub struct Harness {
    pub launcher: Launcher,
    pub generator: RecordingGenerator,
    pub build: FakeBuild,
    pub relauncher: FakeRelauncher,
    pub out: Capture,
    pub err: Capture,
}

impl Harness {
    pub fn new(ws: &Workspace) -> Self {
        Harness::with(ws, Toolkit::default(), FakeBuild::succeeding(), FakeRelauncher::exiting(0))
    }

    pub fn with(ws: &Workspace, toolkit: Toolkit, build: FakeBuild, relauncher: FakeRelauncher) -> Self {
        Harness::with_generator(ws, toolkit, RecordingGenerator::default(), build, relauncher)
    }

    pub fn with_generator(
        ws: &Workspace,
        mut toolkit: Toolkit,
        generator: RecordingGenerator,
        build: FakeBuild,
        relauncher: FakeRelauncher,
    ) -> Self {
        let (reporter, out, err) = Reporter::captured();
        toolkit.generator = Box::new(generator.clone());
        let launcher = Launcher::new(ws.config())
            .with_toolkit(toolkit)
            .with_build_tool(Box::new(build.clone()))
            .with_relauncher(Box::new(relauncher.clone()))
            .with_reporter(reporter);
        Harness {
            launcher,
            generator,
            build,
            relauncher,
            out,
            err,
        }
    }

    pub fn run(&mut self, args: &[&str]) -> i32 {
        self.launcher.run(args.iter().copied())
    }

    pub fn generated(&self) -> Vec<GenCall> {
        self.generator.calls.lock().unwrap().clone()
    }
}
