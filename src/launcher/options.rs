// CLASSIFICATION: COMMUNITY
// Filename: options.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Recognised command-line options and the parser that consumes them.
//!
//! The registry is plain data. The clap command is assembled from it at parse
//! time, so adding a flag means adding one row to [`OPTIONS`].

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

use crate::launcher::error::LaunchError;

const FILES: &str = "FILES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub short: char,
    pub long: &'static str,
    pub takes_argument: bool,
    pub required: bool,
    pub description: &'static str,
    /// Whether the value is handed to the generator as a property.
    pub forward_to_generator: bool,
}

pub const TARGET_COMPILER: &str = "target-compiler";
pub const HELP: &str = "help";
pub const NO_COMPILE: &str = "no-compile";
pub const REBUILD: &str = "rebuild";
pub const UPDATE_DEPS: &str = "update-deps";
pub const FEDERATED: &str = "federated";
pub const THREADS: &str = "threads";
pub const OUTPUT_PATH: &str = "output-path";

pub static OPTIONS: &[OptionDescriptor] = &[
    OptionDescriptor {
        short: 'c',
        long: TARGET_COMPILER,
        takes_argument: true,
        required: false,
        description: "Target compiler to invoke.",
        forward_to_generator: true,
    },
    OptionDescriptor {
        short: 'h',
        long: HELP,
        takes_argument: false,
        required: false,
        description: "Display this information.",
        forward_to_generator: false,
    },
    OptionDescriptor {
        short: 'n',
        long: NO_COMPILE,
        takes_argument: false,
        required: false,
        description: "Do not invoke target compiler.",
        forward_to_generator: true,
    },
    OptionDescriptor {
        short: 'r',
        long: REBUILD,
        takes_argument: false,
        required: false,
        description: "Rebuild the compiler first.",
        forward_to_generator: false,
    },
    OptionDescriptor {
        short: 'u',
        long: UPDATE_DEPS,
        takes_argument: false,
        required: false,
        description: "Update dependencies and rebuild the compiler (requires Internet connection).",
        forward_to_generator: false,
    },
    OptionDescriptor {
        short: 'f',
        long: FEDERATED,
        takes_argument: false,
        required: false,
        description: "Treat main reactor as federated.",
        forward_to_generator: false,
    },
    OptionDescriptor {
        short: 't',
        long: THREADS,
        takes_argument: false,
        required: false,
        description: "Specify the default number of threads.",
        forward_to_generator: true,
    },
    OptionDescriptor {
        short: 'o',
        long: OUTPUT_PATH,
        takes_argument: true,
        required: false,
        description: "Specify the root output directory.",
        forward_to_generator: false,
    },
];

pub fn all_options() -> &'static [OptionDescriptor] {
    OPTIONS
}

pub fn forwarded_options() -> impl Iterator<Item = &'static OptionDescriptor> {
    OPTIONS.iter().filter(|o| o.forward_to_generator)
}

pub fn descriptor(long: &str) -> Option<&'static OptionDescriptor> {
    OPTIONS.iter().find(|o| o.long == long)
}

/// Options and positional files of one process invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInvocation {
    /// Present options keyed by long name; `None` for argument-less flags.
    values: BTreeMap<&'static str, Option<String>>,
    files: Vec<String>,
}

impl ParsedInvocation {
    pub fn is_present(&self, long: &str) -> bool {
        self.values.contains_key(long)
    }

    pub fn value(&self, long: &str) -> Option<&str> {
        self.values.get(long).and_then(|v| v.as_deref())
    }

    /// Present options in registry order.
    pub fn present(&self) -> impl Iterator<Item = (&'static OptionDescriptor, Option<&str>)> + '_ {
        OPTIONS.iter().filter_map(move |desc| {
            self.values
                .get(desc.long)
                .map(|value| (desc, value.as_deref()))
        })
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(PathBuf::from).collect()
    }

    /// Properties forwarded to the generator: every present option marked
    /// `forward_to_generator`, flags without an argument mapping to `""`.
    pub fn forwarded_properties(&self) -> BTreeMap<String, String> {
        self.present()
            .filter(|(desc, _)| desc.forward_to_generator)
            .map(|(desc, value)| (desc.long.to_string(), value.unwrap_or_default().to_string()))
            .collect()
    }
}

fn command() -> Command {
    let mut cmd = Command::new("lfc")
        .about("Lingua Franca compiler")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true);
    for desc in OPTIONS {
        let arg = Arg::new(desc.long)
            .short(desc.short)
            .long(desc.long)
            .help(desc.description)
            .required(desc.required);
        let arg = if desc.takes_argument {
            arg.action(ArgAction::Set).value_name("VALUE")
        } else {
            arg.action(ArgAction::SetTrue)
        };
        cmd = cmd.arg(arg);
    }
    cmd.arg(
        Arg::new(FILES)
            .help("Source files to compile")
            .num_args(1..)
            .action(ArgAction::Append)
            .value_parser(clap::value_parser!(String)),
    )
}

/// Parse an argument vector (without the program name) against [`OPTIONS`].
pub fn parse<I, S>(args: I) -> Result<ParsedInvocation, LaunchError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let argv = std::iter::once("lfc".to_string()).chain(args.into_iter().map(Into::into));
    let matches = command()
        .try_get_matches_from(argv)
        .map_err(|e| LaunchError::Parse(e.to_string()))?;

    let mut values = BTreeMap::new();
    for desc in OPTIONS {
        if desc.takes_argument {
            if let Some(v) = matches.get_one::<String>(desc.long) {
                values.insert(desc.long, Some(v.clone()));
            }
        } else if matches.get_flag(desc.long) {
            values.insert(desc.long, None);
        }
    }
    let files: Vec<String> = matches
        .get_many::<String>(FILES)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    log::debug!("parsed options {:?} files {:?}", values, files);
    Ok(ParsedInvocation { values, files })
}

/// Help text listing every registered option.
pub fn usage() -> String {
    command().render_help().to_string()
}
