// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `nereid-gitgraph` CLI entrypoint.
//!
//! Reads commits (children first) from a file or stdin and prints the layout
//! as JSON: one object per commit with its `column` and `parentsPaths`.
//!
//! ```sh
//! git log --format='%H %P' | nereid-gitgraph --format log --pretty
//! ```

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use nereid_gitgraph::{layout_commit_graph_with, parse_log_lines, CommitNode, GraphConfig};

#[derive(Parser, Debug)]
#[command(name = "nereid-gitgraph", version, about = "Lay out a commit graph as lanes and edges")]
struct Cli {
    /// Input file; stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Input format.
    #[arg(long, value_enum, default_value_t = InputFormat::Json)]
    format: InputFormat,

    /// Comma-separated color tokens, overriding the config file.
    #[arg(long, value_delimiter = ',')]
    palette: Option<Vec<String>>,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// A JSON array of `{"id": ..., "parents": [...]}` objects.
    Json,
    /// `git log --format='%H %P'` lines.
    Log,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NEREID_GITGRAPH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn parse_nodes(source: &str, format: InputFormat) -> anyhow::Result<Vec<CommitNode>> {
    match format {
        InputFormat::Json => serde_json::from_str(source).context("input is not a JSON commit list"),
        InputFormat::Log => Ok(parse_log_lines(source)),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };
    if let Some(colors) = &cli.palette {
        config = config.with_palette(colors);
    }
    let palette = config.palette()?;

    let source = read_input(cli.input.as_ref())?;
    let nodes = parse_nodes(&source, cli.format)?;
    tracing::info!(commits = nodes.len(), "read input");

    let layout = layout_commit_graph_with(&nodes, &palette).context("layout not computable")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, layout.nodes())?;
    } else {
        serde_json::to_writer(&mut out, layout.nodes())?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!("nereid-gitgraph: {err:#}");
        std::process::exit(1);
    }
}
