// CLASSIFICATION: COMMUNITY
// Filename: relaunch.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Self-update: rebuild the launcher when its sources changed, then hand the
//! invocation over to the fresh binary.
//!
//! [`rebuild`] decides and performs the work but never ends the process;
//! [`maybe_rebuild_and_relaunch`] turns its outcome into a [`Handoff`] or a
//! [`LaunchError`] for the entry point.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::launcher::config::LauncherConfig;
use crate::launcher::error::LaunchError;
use crate::launcher::logging::Journal;
use crate::launcher::options::{ParsedInvocation, REBUILD, UPDATE_DEPS};
use crate::launcher::report::Reporter;
use crate::launcher::staleness::is_stale;
use crate::launcher::toolchain::BuildTool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildOutcome {
    NotRequested,
    NotNeeded,
    /// The rebuilt binary ran the invocation and exited with `exit_code`.
    Rebuilt { exit_code: i32 },
    BuildFailed { output: String },
    RelaunchFailed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Continue compiling in this process.
    Skipped,
    /// A child process already did the work; exit with its status.
    HandledByChild(i32),
}

pub trait Relauncher {
    /// Run `program` with `args` on the inherited streams and wait for it.
    /// Returns the exit code, `None` if the child was killed by a signal.
    fn relaunch(&self, program: &Path, args: &[String]) -> io::Result<Option<i32>>;
}

pub struct ChildRelauncher;

impl Relauncher for ChildRelauncher {
    fn relaunch(&self, program: &Path, args: &[String]) -> io::Result<Option<i32>> {
        log::info!("relaunching {} {}", program.display(), args.join(" "));
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.code())
    }
}

pub fn rebuild_requested(invocation: &ParsedInvocation) -> bool {
    invocation.is_present(REBUILD) || invocation.is_present(UPDATE_DEPS)
}

/// Arguments for the relaunched child: the original invocation without the
/// rebuild and update flags, so the child never rebuilds again.
pub fn relaunch_arguments(invocation: &ParsedInvocation) -> Vec<String> {
    let mut args = Vec::new();
    for (desc, value) in invocation.present() {
        if desc.long == REBUILD || desc.long == UPDATE_DEPS {
            continue;
        }
        args.push(format!("--{}", desc.long));
        if let Some(v) = value {
            args.push(v.to_string());
        }
    }
    if invocation.files().iter().any(|f| f.starts_with('-')) {
        args.push("--".to_string());
    }
    args.extend(invocation.files().iter().cloned());
    args
}

pub fn rebuild(
    invocation: &ParsedInvocation,
    cfg: &LauncherConfig,
    build_tool: &dyn BuildTool,
    relauncher: &dyn Relauncher,
    reporter: &mut Reporter,
) -> RebuildOutcome {
    if !rebuild_requested(invocation) {
        return RebuildOutcome::NotRequested;
    }
    match is_stale(&cfg.artifact, &cfg.source_root) {
        Ok(false) => return RebuildOutcome::NotNeeded,
        Ok(true) => {}
        Err(e) => {
            return RebuildOutcome::BuildFailed {
                output: e.to_string(),
            }
        }
    }

    reporter.info("Launcher binary is missing or out-of-date; running cargo.");
    let offline = !invocation.is_present(UPDATE_DEPS);
    let report = match build_tool.build(offline) {
        Ok(report) => report,
        Err(e) => {
            return RebuildOutcome::BuildFailed {
                output: e.to_string(),
            }
        }
    };
    if !report.success() {
        log::warn!("build exited with {:?}", report.exit_code);
        return RebuildOutcome::BuildFailed {
            output: report.output,
        };
    }
    reporter.info("Rebuild successful; relaunching updated version.");

    let args = relaunch_arguments(invocation);
    match relauncher.relaunch(&cfg.artifact, &args) {
        Ok(code) => RebuildOutcome::Rebuilt {
            exit_code: code.unwrap_or(1),
        },
        Err(e) => RebuildOutcome::RelaunchFailed {
            reason: e.to_string(),
        },
    }
}

pub fn maybe_rebuild_and_relaunch(
    invocation: &ParsedInvocation,
    cfg: &LauncherConfig,
    build_tool: &dyn BuildTool,
    relauncher: &dyn Relauncher,
    reporter: &mut Reporter,
    journal: &Journal,
) -> Result<Handoff, LaunchError> {
    let outcome = rebuild(invocation, cfg, build_tool, relauncher, reporter);
    log::debug!("rebuild outcome {:?}", outcome);
    match outcome {
        RebuildOutcome::NotRequested => Ok(Handoff::Skipped),
        RebuildOutcome::NotNeeded => {
            reporter.info("Not rebuilding; already up-to-date.");
            Ok(Handoff::Skipped)
        }
        RebuildOutcome::Rebuilt { exit_code } => {
            journal.record("relaunch", &[("exit", exit_code.to_string())]);
            Ok(Handoff::HandledByChild(exit_code))
        }
        RebuildOutcome::BuildFailed { output } => Err(LaunchError::BuildFailed(output)),
        RebuildOutcome::RelaunchFailed { reason } => Err(LaunchError::RelaunchFailed(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::options::{parse, OUTPUT_PATH};

    #[test]
    fn rebuild_and_update_flags_are_stripped() {
        let inv = parse(["-r", "-u", "-c", "gcc", "--threads", "-o", "out", "a.lf", "b.lf"]).unwrap();
        assert_eq!(
            relaunch_arguments(&inv),
            vec!["--target-compiler", "gcc", "--threads", "--output-path", "out", "a.lf", "b.lf"]
        );
    }

    #[test]
    fn plain_rebuild_replays_only_files() {
        let inv = parse(["--rebuild", "a.lf"]).unwrap();
        assert_eq!(relaunch_arguments(&inv), vec!["a.lf"]);
    }

    #[test]
    fn stripped_arguments_never_request_a_rebuild() {
        let inv = parse(["--update-deps", "--federated", "--no-compile", "x.lf"]).unwrap();
        let replay = parse(relaunch_arguments(&inv)).unwrap();
        assert!(!rebuild_requested(&replay));
        assert!(replay.is_present("federated"));
        assert!(replay.is_present("no-compile"));
        assert_eq!(replay.files(), inv.files());
    }

    #[test]
    fn dash_prefixed_files_replay_after_separator() {
        let inv = parse(["--rebuild", "--", "-odd.lf"]).unwrap();
        let args = relaunch_arguments(&inv);
        assert_eq!(args, vec!["--", "-odd.lf"]);
        let replay = parse(args).unwrap();
        assert_eq!(replay.files(), inv.files());
        assert!(!replay.is_present(OUTPUT_PATH));
    }
}
