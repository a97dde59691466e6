// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! The `lfc` launcher: argument handling, self-update and the compilation
//! driver.

pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod options;
pub mod paths;
pub mod relaunch;
pub mod report;
pub mod services;
pub mod staleness;
pub mod text;
pub mod toolchain;

use crate::launcher::config::LauncherConfig;
use crate::launcher::driver::Driver;
use crate::launcher::error::LaunchError;
use crate::launcher::logging::Journal;
use crate::launcher::options::HELP;
use crate::launcher::relaunch::{maybe_rebuild_and_relaunch, ChildRelauncher, Handoff, Relauncher};
use crate::launcher::report::Reporter;
use crate::launcher::services::Toolkit;
use crate::launcher::toolchain::{BuildTool, CargoBuildTool, Toolchain};

/// Print `err` as the single fatal diagnostic, followed by its details.
pub fn report_fatal(reporter: &mut Reporter, journal: &Journal, err: &LaunchError) {
    reporter.fatal(&err.to_string());
    for line in err.details() {
        reporter.detail(&line);
    }
    journal.record("fatal", &[("kind", err.kind().to_string())]);
}

/// Everything one invocation needs, with the process-level defaults
/// replaceable for tests and embedding.
pub struct Launcher {
    cfg: LauncherConfig,
    toolkit: Toolkit,
    build_tool: Box<dyn BuildTool>,
    relauncher: Box<dyn Relauncher>,
    reporter: Reporter,
    journal: Journal,
}

impl Launcher {
    pub fn new(cfg: LauncherConfig) -> Self {
        let build_tool = CargoBuildTool::new(Toolchain::from_env(), &cfg);
        let journal = Journal::new(cfg.journal.clone());
        Launcher {
            cfg,
            toolkit: Toolkit::default(),
            build_tool: Box::new(build_tool),
            relauncher: Box::new(ChildRelauncher),
            reporter: Reporter::stdio(),
            journal,
        }
    }

    pub fn with_toolkit(mut self, toolkit: Toolkit) -> Self {
        self.toolkit = toolkit;
        self
    }

    pub fn with_build_tool(mut self, build_tool: Box<dyn BuildTool>) -> Self {
        self.build_tool = build_tool;
        self
    }

    pub fn with_relauncher(mut self, relauncher: Box<dyn Relauncher>) -> Self {
        self.relauncher = relauncher;
        self
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Handle one command line (without the program name); returns the exit
    /// status for the process.
    pub fn run<I, S>(&mut self, args: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let invocation = match options::parse(args) {
            Ok(inv) => inv,
            Err(e) => {
                report_fatal(&mut self.reporter, &self.journal, &e);
                self.reporter.detail(&options::usage());
                return e.exit_code();
            }
        };
        if invocation.is_present(HELP) {
            self.reporter.plain(&options::usage());
            return 0;
        }
        self.journal.record(
            "start",
            &[
                ("files", invocation.files().len().to_string()),
                ("rebuild", relaunch::rebuild_requested(&invocation).to_string()),
            ],
        );

        let handoff = maybe_rebuild_and_relaunch(
            &invocation,
            &self.cfg,
            self.build_tool.as_ref(),
            self.relauncher.as_ref(),
            &mut self.reporter,
            &self.journal,
        );
        match handoff {
            Ok(Handoff::HandledByChild(code)) => code,
            Ok(Handoff::Skipped) => {
                let files = invocation.file_paths();
                Driver::new(&self.toolkit, &self.cfg, &mut self.reporter, &self.journal)
                    .run(&files, &invocation)
            }
            Err(e) => {
                report_fatal(&mut self.reporter, &self.journal, &e);
                e.exit_code()
            }
        }
    }
}

/// Run the launcher with the process defaults.
pub fn run_cli<I, S>(cfg: LauncherConfig, args: I) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Launcher::new(cfg).run(args)
}
