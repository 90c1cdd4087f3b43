use anyhow::{Context, Result};
use clap::Parser;
use dfalex::{render, tokenize_batch, BatchConfig, OutputFormat, SourceInput};
use std::io::{self, Write};
use std::process;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tokenize sources of a small C-like language
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source files to tokenize (`-` reads stdin)
    #[arg(default_value = "source.cpp")]
    files: Vec<SourceInput>,

    /// Output format (text, verbose, json)
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Worker threads for multiple sources (0 = number of CPUs)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Only print the number of tokens per source
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut sources = Vec::with_capacity(cli.files.len());
    for input in &cli.files {
        let text = input
            .read()
            .with_context(|| format!("failed to read {}", input))?;
        debug!(source = %input, bytes = text.len(), "read source");
        sources.push(text);
    }

    let config = BatchConfig::with_parallelism(cli.jobs);
    let results = tokenize_batch(&sources, &config).context("tokenization failed")?;
    info!(sources = results.len(), "tokenized");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let multiple = cli.files.len() > 1;

    for (input, tokens) in cli.files.iter().zip(&results) {
        if multiple {
            writeln!(out, "==> {} <==", input)?;
        }
        if cli.quiet {
            writeln!(out, "{}", tokens.len())?;
            continue;
        }
        let rendered = render(tokens, cli.format)?;
        out.write_all(rendered.as_bytes())?;
        if cli.format == OutputFormat::Json {
            writeln!(out)?;
        }
    }

    Ok(())
}
