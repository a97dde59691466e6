// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Entry point for the lfc binary.

use anyhow::Context;
use lfc::launcher::{config::LauncherConfig, logging, report::Reporter};

fn main_entry() -> anyhow::Result<i32> {
    logging::init();
    let cfg = LauncherConfig::from_env().context("cannot start lfc")?;
    Ok(lfc::run_cli(cfg, std::env::args().skip(1)))
}

fn main() {
    match main_entry() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            Reporter::stdio().fatal(&format!("{e:#}"));
            std::process::exit(1);
        }
    }
}
