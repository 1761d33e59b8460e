use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;

use nbmorph::render::html::HtmlMode;
use nbmorph::{Result, diagnostics, load, raw, render, serialize, transform};

#[derive(Parser)]
#[command(name = "nbmorph")]
#[command(about = "Notebook converter: py-percent text, outlines, HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a notebook as py-percent text.
    Percent {
        /// Path to the .ipynb file.
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Print a readable outline of the notebook structure.
    Outline {
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Render notebook cells as HTML.
    Html {
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,

        /// Emit a complete document instead of a bare fragment.
        #[arg(long)]
        full: bool,
    },

    /// Drop markdown cells and emit the remaining notebook as JSON.
    StripMarkdown {
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Convert code cells to fenced markdown blocks and emit JSON.
    Markdownize {
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Reset outputs and execution counts and emit the notebook as JSON.
    ClearOutputs {
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,
    },

    /// Extract stream output text from executed code cells.
    Stream {
        input: String,

        #[arg(short = 'o', long)]
        out: Option<String>,

        /// Include the stdout channel (default when no channel is given).
        #[arg(long)]
        stdout: bool,

        /// Include the stderr channel.
        #[arg(long)]
        stderr: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Percent { input, out } => {
            let record = read_record(&input)?;
            emit(out.as_deref(), &render::percent::to_percent(&record)?)
        }
        Commands::Outline { input, out } => {
            let nb = load::from_path(&input)?;
            emit(out.as_deref(), &render::outline::outline(&nb))
        }
        Commands::Html { input, out, full } => {
            let record = read_record(&input)?;
            let mode = if full {
                HtmlMode::Document
            } else {
                HtmlMode::Fragment
            };
            emit(out.as_deref(), &render::html::to_html(&record, mode)?)
        }
        Commands::StripMarkdown { input, out } => {
            let nb = transform::strip_markdown(&load::from_path(&input)?);
            emit(out.as_deref(), &serialize::to_json_string(&nb)?)
        }
        Commands::Markdownize { input, out } => {
            let nb = transform::markdownize(&load::from_path(&input)?);
            emit(out.as_deref(), &serialize::to_json_string(&nb)?)
        }
        Commands::ClearOutputs { input, out } => {
            let cleared = raw::clear_outputs(&read_record(&input)?);
            emit(out.as_deref(), &serde_json::to_string_pretty(&cleared)?)
        }
        Commands::Stream {
            input,
            out,
            stdout,
            stderr,
        } => {
            let record = read_record(&input)?;
            // No channel flags means stdout.
            let stdout = stdout || !stderr;
            emit(out.as_deref(), &raw::stream_output(&record, stdout, stderr)?)
        }
    }
}

/// Read and decode a raw notebook record. Content is UTF-8 text end to end.
fn read_record(path: &str) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| diagnostics::error_message(format!("read notebook file {}", path)))?;
    serde_json::from_str(&text)
        .with_context(|| diagnostics::error_message(format!("parse notebook JSON {}", path)))
}

fn emit(out: Option<&str>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| diagnostics::error_message(format!("write {}", path)))?;
            println!("Wrote {}", path);
        }
        None => print!("{}", text),
    }
    Ok(())
}
