// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Command-line launcher for the Lingua Franca compiler.
//!
//! Parses the command line, rebuilds and relaunches itself on request, then
//! drives each input file through load, validate and generate.

/// Launcher components and the `lfc` entry point
pub mod launcher;

pub use launcher::{run_cli, Launcher};
