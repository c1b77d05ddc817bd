use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn build_cli() -> Command {
    Command::new("mdjson")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert between Markdown and the simplified JSON document model")
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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = build_cli();

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdjson", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdjson", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdjson", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
