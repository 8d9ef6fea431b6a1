//! Command-line options.
//!
//! Flags follow ctags where a ctags equivalent exists (`-R`, `-a`, `-f`,
//! `--sort`, `--kinds-<lang>`, `--list-kinds`, `--list-maps`).

#![allow(
    clippy::struct_excessive_bools,
    reason = "TagsOptions has standard CLI config bool fields"
)]

use std::path::PathBuf;

use extags_scan::{IdentClass, ScanConfig, ELIXIR};

use crate::TagsError;

/// Where the tag file goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    fn parse(value: &str) -> Self {
        if value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }
}

/// Options for tag generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagsOptions {
    /// Files and directories named on the command line.
    pub inputs: Vec<PathBuf>,
    pub output: OutputTarget,
    /// Descend into directories.
    pub recurse: bool,
    /// Sort tag lines by name, file and line.
    pub sort: bool,
    /// Merge into an existing tag file instead of replacing it.
    pub append: bool,
    pub verbose: bool,
    pub scan: ScanConfig,
}

impl Default for TagsOptions {
    fn default() -> Self {
        TagsOptions {
            inputs: Vec::new(),
            output: OutputTarget::File(PathBuf::from("tags")),
            recurse: false,
            sort: true,
            append: false,
            verbose: false,
            scan: ScanConfig::default(),
        }
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate(TagsOptions),
    ListKinds(TagsOptions),
    ListMaps,
    Help,
    Version,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, TagsError> {
    let mut options = TagsOptions::default();
    let mut list_kinds = false;
    let mut list_maps = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--list-kinds" => list_kinds = true,
            "--list-maps" => list_maps = true,
            "-R" | "--recurse" => options.recurse = true,
            "-a" | "--append" => options.append = true,
            "-v" | "--verbose" => options.verbose = true,
            "--no-scope" => options.scan.scope_functions = false,
            "--all-names" => options.scan.require_ident_start = false,
            "--legacy" => {
                // Keep kind toggles given earlier on the line.
                options.scan = ScanConfig::legacy().with_kinds(options.scan.kinds);
            }
            "-o" | "-f" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| TagsError::MissingValue(arg.to_string()))?;
                options.output = OutputTarget::parse(value);
            }
            _ => parse_valued(arg, &mut options, &mut list_kinds)?,
        }
        i += 1;
    }

    if list_maps {
        return Ok(Command::ListMaps);
    }
    if list_kinds {
        return Ok(Command::ListKinds(options));
    }
    if options.inputs.is_empty() {
        return Err(TagsError::NoInputs);
    }
    Ok(Command::Generate(options))
}

/// `--name=value` options and positional inputs.
fn parse_valued(
    arg: &str,
    options: &mut TagsOptions,
    list_kinds: &mut bool,
) -> Result<(), TagsError> {
    if let Some(value) = arg.strip_prefix("--output=") {
        options.output = OutputTarget::parse(value);
    } else if let Some(value) = arg.strip_prefix("--sort=") {
        options.sort = parse_yes_no("--sort", value)?;
    } else if let Some(value) = arg.strip_prefix("--ident=") {
        options.scan.ident_class =
            IdentClass::from_name(value).ok_or_else(|| invalid("--ident", value))?;
    } else if let Some(lang) = arg.strip_prefix("--list-kinds=") {
        check_language(lang)?;
        *list_kinds = true;
    } else if let Some((lang, spec)) = kinds_option(arg) {
        check_language(lang)?;
        options.scan.kinds.apply_spec(spec)?;
    } else if arg.starts_with('-') && arg != "-" {
        return Err(TagsError::UnknownOption(arg.to_string()));
    } else {
        options.inputs.push(PathBuf::from(arg));
    }
    Ok(())
}

/// Split `--kinds-<lang>=<spec>` or `--<lang>-kinds=<spec>`.
fn kinds_option(arg: &str) -> Option<(&str, &str)> {
    if let Some(rest) = arg.strip_prefix("--kinds-") {
        return rest.split_once('=');
    }
    arg.strip_prefix("--")?.split_once("-kinds=")
}

fn check_language(lang: &str) -> Result<(), TagsError> {
    if ELIXIR.is_named(lang) {
        Ok(())
    } else {
        Err(TagsError::UnknownLanguage(lang.to_string()))
    }
}

fn parse_yes_no(option: &str, value: &str) -> Result<bool, TagsError> {
    match value {
        "yes" | "1" | "true" => Ok(true),
        "no" | "0" | "false" => Ok(false),
        _ => Err(invalid(option, value)),
    }
}

fn invalid(option: &str, value: &str) -> TagsError {
    TagsError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
    }
}
