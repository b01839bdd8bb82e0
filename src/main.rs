//! bashdoc — index shell-script functions and the code lines they own.
//!
//! - `bashdoc index deploy.sh deploy.csv` writes one CSV row per code line,
//!   naming the enclosing function.
//! - `bashdoc functions deploy.sh` lists function declarations in order.
//! - `bashdoc docs deploy.sh` prints each function with its doc comments.
//! - `bashdoc structure deploy.sh` dumps every syntax node.
//!
//! A script argument of `-` reads stdin; an index output of `-` writes stdout.

use anyhow::{Context, Result};
use bashdoc::extract::{load_comments, load_functions};
use bashdoc::index::{index_source, ContainmentPolicy};
use bashdoc::structure::dump_structure;
use bashdoc::{documented_functions, render, SyntaxTree};
use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Path argument meaning stdin (for scripts) or stdout (for output).
const STDIO: &str = "-";

#[derive(Parser)]
#[command(
    name = "bashdoc",
    about = "Index shell-script functions, their doc comments, and the lines they own"
)]
struct Cli {
    /// Log progress to stderr (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one row per code line naming its enclosing function
    Index {
        /// Script to index
        script: String,

        /// Destination file
        output: String,

        /// Output format: csv (default), json, markdown
        #[arg(short = 'f', long, default_value = "csv")]
        format: String,

        /// Which function owns a line that nested functions both contain
        #[arg(long, value_enum, default_value_t = ContainmentPolicy::FirstMatch)]
        policy: ContainmentPolicy,

        /// Value for the filename column (defaults to SCRIPT as given)
        #[arg(long)]
        filename: Option<String>,
    },
    /// List function declarations sorted by position
    Functions {
        /// Script to inspect
        script: String,
    },
    /// Print each function with the comment block above it
    Docs {
        /// Script to document
        script: String,

        /// Output format: markdown (default), json, csv
        #[arg(short = 'f', long, default_value = "markdown")]
        format: String,
    },
    /// Dump every syntax node with its position
    Structure {
        /// Script to inspect
        script: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Index {
            script,
            output,
            format,
            policy,
            filename,
        } => index_mode(&script, &output, &format, policy, filename.as_deref()),
        Commands::Functions { script } => functions_mode(&script),
        Commands::Docs { script, format } => docs_mode(&script, &format),
        Commands::Structure { script } => structure_mode(&script),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// index mode: the whole index is built before the destination is touched,
/// so a read or parse failure never leaves a partial file behind.
fn index_mode(
    script: &str,
    output: &str,
    format: &str,
    policy: ContainmentPolicy,
    filename: Option<&str>,
) -> Result<()> {
    let renderer = render::create_renderer(format)?;
    if !extension_matches(output, renderer.file_extension()) {
        warn!(
            output,
            format,
            "output extension does not match format (expected .{})",
            renderer.file_extension()
        );
    }
    let source = read_script(script)?;

    let index = index_source(filename.unwrap_or(script), &source, policy)?;
    let rendered = renderer.render_index(&index.records);

    info!(output, records = index.records.len(), "writing index");
    write_output(output, &rendered)
}

/// True when `output` is stdout, has no extension, or ends in `ext`.
fn extension_matches(output: &str, ext: &str) -> bool {
    if output == STDIO {
        return true;
    }
    Path::new(output)
        .extension()
        .and_then(|e| e.to_str())
        .is_none_or(|e| e.eq_ignore_ascii_case(ext))
}

/// functions mode: one line per declaration, in start order.
fn functions_mode(script: &str) -> Result<()> {
    let source = read_script(script)?;
    let tree = parse(script, &source)?;

    let mut out = String::new();
    for f in load_functions(&tree) {
        out.push_str(&format!(
            "Found function {} at {}, {}\n",
            f.name, f.start.line, f.start.column
        ));
    }
    write_output(STDIO, &out)
}

/// docs mode: functions paired with their doc comment blocks.
fn docs_mode(script: &str, format: &str) -> Result<()> {
    let renderer = render::create_renderer(format)?;
    let source = read_script(script)?;
    let tree = parse(script, &source)?;

    let docs = documented_functions(&load_functions(&tree), &load_comments(&tree));
    write_output(STDIO, &renderer.render_docs(&docs))
}

/// structure mode: raw node dump.
fn structure_mode(script: &str) -> Result<()> {
    let source = read_script(script)?;
    let tree = parse(script, &source)?;
    write_output(STDIO, &dump_structure(&tree))
}

fn read_script(script: &str) -> Result<String> {
    info!(script, "analyzing script");
    if script == STDIO {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read_to_string(script).with_context(|| format!("failed to read {}", script))
}

fn parse<'src>(script: &str, source: &'src str) -> Result<SyntaxTree<'src>> {
    SyntaxTree::parse(source).with_context(|| format!("failed to parse {}", script))
}

fn write_output(output: &str, content: &str) -> Result<()> {
    if output == STDIO {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .context("failed to write stdout")?;
        return Ok(());
    }
    fs::write(output, content).with_context(|| format!("failed to write {}", output))
}
