// Command-line interface for mdjson
//
// This binary converts between Markdown documents and the simplified
// section/subsection JSON model, using pandoc as the external text engine.
//
// The direction is picked from the input file extension: .md/.markdown
// converts to simplified JSON, .json converts back to Markdown. The
// detection can be overridden with an explicit --from flag; the output path
// defaults to the input path with its extension swapped.
//
// Usage:
//  mdjson <input> [--from <format>] [-o <file>] [-i <n>] [--no-check]
//  mdjson --list-formats
//
// After each conversion, a reversibility check re-runs the opposite
// direction and prints a warning when the round trip loses information
// (unsupported markdown constructs, deep headings, irregular spacing).
// Warnings never fail the conversion; the written output stands.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdjson_config::{Loader, MdjsonConfig};
use mdjson_convert::formats::{MarkdownFormat, SimplifiedJsonFormat};
use mdjson_convert::pandoc::PandocEngine;
use mdjson_convert::verify::{check_markdown_round_trip, check_simplified_round_trip, RoundTrip};
use mdjson_convert::FormatRegistry;
use std::fs;
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("mdjson")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and the simplified JSON document model")
        .long_about(
            "mdjson converts Markdown documents into a simplified two-level\n\
            section/subsection JSON model suitable for editing and storage, and\n\
            converts that JSON back to Markdown. Pandoc does the text handling.\n\n\
            The conversion direction follows the input file extension:\n  \
            .md, .markdown  ->  simplified JSON\n  \
            .json           ->  Markdown\n\n\
            The model keeps level-1/level-2 headings, paragraphs and bullet\n\
            lists; everything else is dropped. A reversibility check reports a\n\
            warning when that loss makes the round trip inexact.\n\n\
            Examples:\n  \
            mdjson notes.md                   # Write notes.json\n  \
            mdjson notes.json -o draft.md     # Back to Markdown, explicit output\n  \
            mdjson notes.md --indent 4        # Wider JSON indentation\n  \
            mdjson notes.md --no-check        # Skip the reversibility check",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Input file (.md or .json)")
                .required_unless_present("list-formats")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .help("Source format (auto-detected from the file extension if not specified)")
                .long_help(
                    "Source format to convert from.\n\n\
                    If not specified, the format is auto-detected from the file\n\
                    extension. Use this option to override auto-detection.",
                )
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to the input path with the extension swapped)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .short('i')
                .help("JSON indent level (0 writes compact JSON)")
                .value_parser(clap::value_parser!(usize))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("no-check")
                .long("no-check")
                .help("Skip the reversibility check")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mdjson.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_cli_overrides(&mut config, &matches);

    let (registry, engine) = build_registry(&config);

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");

    // Auto-detect --from if not provided
    let from = if let Some(f) = matches.get_one::<String>("from") {
        f.to_string()
    } else {
        match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Input files must end in .md or .json; use --from to override");
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = registry.get(&from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    let to = counterpart(&from);

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(input, to));

    handle_convert(&registry, &engine, &config, input, &from, to, &output);
}

/// The opposite side of the conversion pair.
fn counterpart(from: &str) -> &'static str {
    if from == "markdown" {
        "simplified"
    } else {
        "markdown"
    }
}

/// Input path with its extension swapped for the target format's.
fn default_output_path(input: &str, to: &str) -> PathBuf {
    let extension = if to == "markdown" { "md" } else { "json" };
    Path::new(input).with_extension(extension)
}

fn handle_convert(
    registry: &FormatRegistry,
    engine: &PandocEngine,
    config: &MdjsonConfig,
    input: &str,
    from: &str,
    to: &str,
    output: &Path,
) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    let rendered = registry.serialize(&doc, to).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    fs::write(output, &rendered).unwrap_or_else(|e| {
        eprintln!("Error writing file '{}': {e}", output.display());
        std::process::exit(1);
    });

    if config.convert.check_reversibility {
        let outcome = if from == "markdown" {
            check_markdown_round_trip(engine, &source, &doc)
        } else {
            check_simplified_round_trip(engine, &rendered, &doc)
        };
        match outcome {
            Ok(RoundTrip::Stable) => {}
            Ok(RoundTrip::Diverged) => {
                eprintln!("Warning: conversion was not perfectly reversible");
            }
            Err(e) => {
                eprintln!("Warning: could not verify reversibility: {e}");
            }
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:");
    let registry = FormatRegistry::default();
    for name in registry.list_formats() {
        println!("  {name}");
    }
}

fn build_registry(config: &MdjsonConfig) -> (FormatRegistry, PandocEngine) {
    let engine = PandocEngine::from(&config.convert.pandoc);
    let mut registry = FormatRegistry::new();
    registry.register(MarkdownFormat::new(Box::new(engine.clone())));
    registry.register(SimplifiedJsonFormat::new().with_indent(config.convert.json.indent));
    (registry, engine)
}

fn load_cli_config(explicit_path: Option<&str>) -> MdjsonConfig {
    let loader = Loader::new().with_optional_file("mdjson.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_cli_overrides(config: &mut MdjsonConfig, matches: &ArgMatches) {
    if let Some(indent) = matches.get_one::<usize>("indent") {
        config.convert.json.indent = *indent;
    }
    if matches.get_flag("no-check") {
        config.convert.check_reversibility = false;
    }
}
