// CLASSIFICATION: COMMUNITY
// Filename: paths.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Output-directory convention.
//!
//! Generated code lands next to the nearest enclosing `src` directory:
//! `/project/src/pkg/a.lf` produces into `/project/src-gen`.

use std::path::{Path, PathBuf};

use crate::launcher::report::Reporter;

pub const SENTINEL_DIR: &str = "src";
pub const GENERATED_DIR: &str = "src-gen";

/// Parent of the nearest ancestor directory named [`SENTINEL_DIR`].
pub fn package_root(file: &Path) -> Option<PathBuf> {
    let mut dir = file.parent();
    while let Some(d) = dir {
        if d.file_name().map(|n| n == SENTINEL_DIR).unwrap_or(false) {
            return d.parent().map(Path::to_path_buf);
        }
        dir = d.parent();
    }
    None
}

/// Output directory for `file` (absolute), falling back to `working_dir`
/// with a warning when no sentinel ancestor exists.
pub fn resolve_output_directory(file: &Path, working_dir: &Path, reporter: &mut Reporter) -> PathBuf {
    match package_root(file) {
        Some(root) => root.join(GENERATED_DIR),
        None => {
            reporter.warning(&format!(
                "File '{}' is not located in an '{}' directory.",
                file.display(),
                SENTINEL_DIR
            ));
            reporter.info("Using the current working directory as output directory.");
            working_dir.to_path_buf()
        }
    }
}
