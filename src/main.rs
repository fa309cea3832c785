// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Command-line interface for mdlite.
//!
//! This binary provides the `mdlite` command for converting Markdown files
//! to HTML fragments.

use lexopt::prelude::*;
use snafu::{OptionExt, ensure, prelude::*};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions picked up when walking an input directory.
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Where to write the rendered output.
#[derive(Clone)]
enum OutputTarget {
    /// Write each file to the specified directory.
    Directory(PathBuf),
    /// Write to stdout.
    Stdout,
}

/// A document to convert.
enum Input {
    File {
        path: PathBuf,
        /// Location under the output directory, before the extension swap.
        ///
        /// Relative to the walked root for directory inputs, the bare file
        /// name for files named on the command line.
        relative: PathBuf,
    },
    Stdin,
}

struct Cli {
    input: Vec<PathBuf>,
    output: OutputTarget,
    concat: bool,
    quiet: bool,
    dry_run: bool,
    force: bool,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to parse arguments: {source}"))]
    ParseArgs { source: lexopt::Error },

    #[snafu(display("at least one input file or directory is required"))]
    NoInputFiles,

    #[snafu(display("no Markdown files found in the given inputs"))]
    NoMarkdownFiles,

    #[snafu(display("cannot output multiple files to stdout without --concat"))]
    MultipleFilesToStdout,

    #[snafu(display("standard input can only be written to stdout or with --concat"))]
    StdinToDirectory,

    #[snafu(display("failed to create output directory: {source}"))]
    CreateOutputDir { source: std::io::Error },

    #[snafu(display("failed to read {}: {source}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to read standard input: {source}"))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("invalid input filename: {}", path.display()))]
    InvalidFilename { path: PathBuf },

    #[snafu(display(
        "{} and {} would both be written to {}",
        first.display(),
        second.display(),
        path.display()
    ))]
    DuplicateOutput {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn print_help() {
    println!(
        "\
{name} {version}
Convert a small subset of Markdown to HTML

Usage: {name} [OPTIONS] -o <OUTPUT> <INPUT>...

Arguments:
  <INPUT>...  Markdown files, directories containing them, or - for stdin

Options:
  -o, --output <OUTPUT>     Output directory (or file with --concat, or - for stdout)
      --concat              Combine all inputs into a single output
  -q, --quiet               Suppress progress messages
  -n, --dry-run             Show what would be processed without writing
  -f, --force               Overwrite existing output files
  -h, --help                Print help
  -V, --version             Print version",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
}

fn parse_args() -> Result<Cli, lexopt::Error> {
    if std::env::args().len() == 1 {
        print_help();
        std::process::exit(0);
    }

    let mut input = Vec::new();
    let mut output: Option<OutputTarget> = None;
    let mut concat = false;
    let mut quiet = false;
    let mut dry_run = false;
    let mut force = false;

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('o') | Long("output") => {
                let val: PathBuf = parser.value()?.parse()?;
                output = Some(if val == Path::new("-") {
                    OutputTarget::Stdout
                } else {
                    OutputTarget::Directory(val)
                });
            }
            Long("concat") => concat = true,
            Short('q') | Long("quiet") => quiet = true,
            Short('n') | Long("dry-run") => dry_run = true,
            Short('f') | Long("force") => force = true,
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('V') | Long("version") => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            Value(val) => input.push(val.parse()?),
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(Cli {
        input,
        output: output.ok_or("missing required option: --output")?,
        concat,
        quiet,
        dry_run,
        force,
    })
}

#[snafu::report]
fn main() -> Result<(), Error> {
    let cli = parse_args().context(ParseArgsSnafu)?;

    ensure!(!cli.input.is_empty(), NoInputFilesSnafu);

    let inputs = collect_inputs(&cli.input)?;
    ensure!(!inputs.is_empty(), NoMarkdownFilesSnafu);

    if cli.concat {
        process_concat(&inputs, &cli)?;
    } else {
        match &cli.output {
            OutputTarget::Stdout => {
                ensure!(inputs.len() == 1, MultipleFilesToStdoutSnafu);
                process_to_stdout(&inputs[0], &cli)?;
            }
            OutputTarget::Directory(dir) => {
                // Every output path is checked before anything is written
                let plan = plan_outputs(&inputs, dir)?;
                if !cli.dry_run {
                    std::fs::create_dir_all(dir).context(CreateOutputDirSnafu)?;
                }
                for (input, out_path) in plan {
                    process_file(input, &out_path, &cli)?;
                }
            }
        }
    }

    Ok(())
}

/// Collects Markdown files from the given inputs (files, directories, and `-`).
///
/// Standard input is only read once, so repeated `-` arguments collapse
/// into one entry.
fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<Input>, Error> {
    let mut collected = Vec::new();
    let mut has_stdin = false;
    for input in inputs {
        if input == Path::new("-") {
            if !has_stdin {
                collected.push(Input::Stdin);
                has_stdin = true;
            }
        } else if input.is_dir() {
            for entry in WalkDir::new(input)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file() && is_markdown(e.path()))
            {
                let path = entry.path();
                collected.push(Input::File {
                    path: path.to_path_buf(),
                    relative: path.strip_prefix(input).unwrap_or(path).to_path_buf(),
                });
            }
        } else {
            let name = input
                .file_name()
                .context(InvalidFilenameSnafu { path: input })?;
            collected.push(Input::File {
                path: input.clone(),
                relative: PathBuf::from(name),
            });
        }
    }
    Ok(collected)
}

/// Maps each input to its `.html` path under `out_dir`.
///
/// Fails on standard input, which has no name to write under, and on two
/// inputs that land on the same output path (`a.md` next to `a.markdown`).
fn plan_outputs<'a>(
    inputs: &'a [Input],
    out_dir: &Path,
) -> Result<Vec<(&'a Path, PathBuf)>, Error> {
    let mut plan = Vec::with_capacity(inputs.len());
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();

    for input in inputs {
        let Input::File { path, relative } = input else {
            return StdinToDirectorySnafu.fail();
        };
        let out_path = out_dir.join(relative).with_extension("html");
        if let Some(first) = claimed.insert(out_path.clone(), path) {
            return DuplicateOutputSnafu {
                path: out_path,
                first,
                second: path,
            }
            .fail();
        }
        plan.push((path.as_path(), out_path));
    }

    Ok(plan)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// Reads an input and converts it to HTML.
fn convert_input(input: &Input) -> Result<String, Error> {
    let markdown = match input {
        Input::File { path, .. } => read_file(path)?,
        Input::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context(ReadStdinSnafu)?;
            buf
        }
    };
    Ok(mdlite::convert(&markdown))
}

fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).context(ReadFileSnafu { path })
}

fn describe(input: &Input) -> String {
    match input {
        Input::File { path, .. } => path.display().to_string(),
        Input::Stdin => "<stdin>".to_owned(),
    }
}

/// Processes a single input and outputs to stdout.
fn process_to_stdout(input: &Input, cli: &Cli) -> Result<(), Error> {
    if cli.dry_run {
        eprintln!("Would output {}", describe(input));
        return Ok(());
    }

    let html = convert_input(input)?;
    println!("{html}");
    Ok(())
}

/// Processes multiple inputs and concatenates them into a single output.
fn process_concat(inputs: &[Input], cli: &Cli) -> Result<(), Error> {
    let mut output = String::new();

    for (i, input) in inputs.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&convert_input(input)?);
    }
    output.push('\n');

    match &cli.output {
        OutputTarget::Stdout => {
            if cli.dry_run {
                eprintln!("Would output {} files concatenated", inputs.len());
            } else {
                print!("{output}");
            }
        }
        OutputTarget::Directory(path) => {
            // In concat mode, treat path as a file, not directory
            if cli.dry_run {
                eprintln!(
                    "Would write {} ({} files concatenated)",
                    path.display(),
                    inputs.len()
                );
            } else if path.exists() && !cli.force {
                eprintln!(
                    "Skipping {} (already exists, use --force to overwrite)",
                    path.display()
                );
            } else {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent).context(CreateOutputDirSnafu)?;
                }
                std::fs::write(path, &output).context(WriteFileSnafu { path })?;
                if !cli.quiet {
                    eprintln!("Wrote {} ({} files)", path.display(), inputs.len());
                }
            }
        }
    }

    Ok(())
}

/// Converts a single file and writes it to `out_path`.
fn process_file(input: &Path, out_path: &Path, cli: &Cli) -> Result<(), Error> {
    if cli.dry_run {
        eprintln!("Would write {}", out_path.display());
        return Ok(());
    }

    if out_path.exists() && !cli.force {
        eprintln!(
            "Skipping {} (already exists, use --force to overwrite)",
            out_path.display()
        );
        return Ok(());
    }

    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).context(CreateOutputDirSnafu)?;
    }
    let html = mdlite::convert(&read_file(input)?);
    std::fs::write(out_path, format!("{html}\n")).context(WriteFileSnafu { path: out_path })?;

    if !cli.quiet {
        eprintln!("Wrote {}", out_path.display());
    }
    Ok(())
}
