//! jsonkit command-line interface.
//!
//! This is the main entry point for the jsonkit CLI. It uses clap for
//! argument parsing and wires together the library modules: formatting,
//! minification, validation, conversion, structural diff, and tree view.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jsonkit::{
    compute_diff, convert, format_diff, parse_file, parse_stdin, render_tree, to_minified,
    to_pretty, validate, OutputFormat, OutputOptions, Target, Value,
};
use std::io::Read;
use std::path::PathBuf;
use std::process;

/// jsonkit - command-line JSON utilities
#[derive(Parser)]
#[command(name = "jsonkit")]
#[command(version)]
#[command(about = "Command-line JSON utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pretty-print a JSON document
    Fmt {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Indent width in spaces (2, 3, or 4)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=4))]
        indent: u8,
    },

    /// Minify a JSON document
    Minify {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Check that the input is valid JSON, reporting the error position
    Validate {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Convert a JSON document to CSV, XML, or YAML
    Convert {
        /// Target format
        #[arg(long = "to", value_enum)]
        to: TargetArg,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Compare two JSON files structurally
    Diff {
        /// First file to compare
        #[arg(value_name = "FILE1")]
        file1: PathBuf,

        /// Second file to compare
        #[arg(value_name = "FILE2")]
        file2: PathBuf,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "terminal")]
        format: OutputFormatArg,

        /// Maximum length for displayed values
        #[arg(long, default_value = "80")]
        max_value_length: usize,
    },

    /// Print an indented tree view of a JSON document
    Tree {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

/// Conversion target argument for clap
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TargetArg {
    Csv,
    Xml,
    Yaml,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Csv => Target::Csv,
            TargetArg::Xml => Target::Xml,
            TargetArg::Yaml => Target::Yaml,
        }
    }
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormatArg {
    /// Colored terminal output
    Terminal,
    /// JSON representation
    Json,
    /// Plain text (no colors)
    Plain,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Plain => OutputFormat::Plain,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Fmt { file, indent } => {
            let value = load_value(file.as_deref())?;
            println!("{}", to_pretty(&value, indent as usize)?);
            Ok(0)
        }
        Command::Minify { file } => {
            let value = load_value(file.as_deref())?;
            println!("{}", to_minified(&value)?);
            Ok(0)
        }
        Command::Validate { file } => {
            let input = load_text(file.as_deref())?;
            let report = validate(&input);
            match report.error {
                None => {
                    println!("OK");
                    Ok(0)
                }
                Some(error) => {
                    println!(
                        "error at line {}, column {}: {}",
                        error.line, error.column, error.message
                    );
                    Ok(1)
                }
            }
        }
        Command::Convert { to, file } => {
            let value = load_value(file.as_deref())?;
            let output = convert(&value, to.into())?;
            println!("{}", output);
            Ok(0)
        }
        Command::Diff {
            file1,
            file2,
            format,
            max_value_length,
        } => {
            let old = parse_file(&file1)
                .with_context(|| format!("Failed to parse first file: {}", file1.display()))?;
            let new = parse_file(&file2)
                .with_context(|| format!("Failed to parse second file: {}", file2.display()))?;

            let entries = compute_diff(&old, &new);

            let options = OutputOptions { max_value_length };
            let output_format: OutputFormat = format.into();
            let output = format_diff(&entries, &output_format, &options)
                .context("Failed to format diff output")?;
            println!("{}", output);

            if entries.is_empty() {
                Ok(0)
            } else {
                Ok(1)
            }
        }
        Command::Tree { file } => {
            let value = load_value(file.as_deref())?;
            print!("{}", render_tree(&value));
            Ok(0)
        }
    }
}

fn load_value(file: Option<&std::path::Path>) -> Result<Value> {
    match file {
        Some(path) => parse_file(path)
            .with_context(|| format!("Failed to parse file: {}", path.display())),
        None => parse_stdin().context("Failed to parse stdin"),
    }
}

fn load_text(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}
