// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Regviz-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Regviz and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Regviz CLI entrypoint.
//!
//! Inputs are either NFA JSON files or, with `--regex`, patterns compiled on the fly.
//! Diagrams go to stdout in input order unless `--output` names a directory.

use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use regviz::config::Config;
use regviz::diagram::{translate, TranslateError};
use regviz::format::{export, trio, ExportError, ExportOptions, Format};
use regviz::model::Nfa;
use regviz::regex::{compile_pattern, ParseError};
use regviz::store::{self, StoreError};

#[derive(Debug, Parser)]
#[command(name = "regviz", version)]
#[command(about = "Translate regular-expression NFAs into diagram descriptions")]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace); RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one diagram per input.
    Render(RenderArgs),
    /// Write the Penrose domain, style and substance files for one input.
    Trio(TrioArgs),
    /// Print the NFA compiled from a pattern as JSON.
    Compile { pattern: String },
    /// Print the JSON Schema of the NFA input format.
    Schema,
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Treat inputs as regular expressions instead of NFA JSON paths.
    #[arg(long)]
    regex: bool,

    /// Config file; defaults to ./regviz.toml when present.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Label for ε-transitions.
    #[arg(long, value_name = "SYM")]
    epsilon: Option<String>,
}

#[derive(Debug, Args)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// substance, mermaid, dot or json.
    #[arg(short, long)]
    format: Option<Format>,

    /// Write `<DIR>/<index>.<ext>` instead of printing.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<String>,
}

#[derive(Debug, Args)]
struct TrioArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    #[arg(value_name = "INPUT")]
    input: String,
}

/// Failure for a single input of a batch.
#[derive(Debug, thiserror::Error)]
enum InputError {
    #[error("pattern {input:?}: {source}")]
    Pattern {
        input: String,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{input}: {source}")]
    Translate {
        input: String,
        #[source]
        source: TranslateError,
    },
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Debug, thiserror::Error)]
#[error("{failed} of {total} inputs failed")]
struct BatchFailed {
    failed: usize,
    total: usize,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

impl SourceArgs {
    fn load(&self, input: &str) -> Result<Nfa, InputError> {
        if self.regex {
            compile_pattern(input)
                .map_err(|source| InputError::Pattern { input: input.to_owned(), source })
        } else {
            Ok(store::load_nfa(input)?)
        }
    }

    fn config(&self) -> Result<Config, Box<dyn Error>> {
        let mut config = Config::discover(self.config.as_deref())?;
        if let Some(epsilon) = &self.epsilon {
            config.epsilon = epsilon.clone();
        }
        Ok(config)
    }
}

fn render_one(
    source: &SourceArgs,
    input: &str,
    format: Format,
    options: &ExportOptions,
) -> Result<String, InputError> {
    let nfa = source.load(input)?;
    let diagram = translate(&nfa)
        .map_err(|source| InputError::Translate { input: input.to_owned(), source })?;
    Ok(export(&diagram, format, options)?)
}

fn run_render(args: &RenderArgs) -> Result<(), Box<dyn Error>> {
    let mut config = args.source.config()?;
    if let Some(format) = args.format {
        config.format = format;
    }
    config.validate()?;
    let options = config.export_options();
    let format = config.format;

    let results: Vec<_> = args
        .inputs
        .par_iter()
        .map(|input| render_one(&args.source, input, format, &options))
        .collect();

    let mut failed = 0;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(text) => match &args.output {
                Some(dir) => store::write_output(output_path(dir, index, format), &text)?,
                None => out.write_all(text.as_bytes())?,
            },
            Err(err) => {
                tracing::warn!(input = %args.inputs[index], "{err}");
                failed += 1;
            }
        }
    }
    out.flush()?;

    if failed > 0 {
        return Err(BatchFailed { failed, total: args.inputs.len() }.into());
    }
    Ok(())
}

fn output_path(dir: &Path, index: usize, format: Format) -> PathBuf {
    dir.join(format!("{index}.{}", format.extension()))
}

fn run_trio(args: &TrioArgs) -> Result<(), Box<dyn Error>> {
    let config = args.source.config()?;
    config.validate()?;
    let options = config.export_options();

    let nfa = args.source.load(&args.input)?;
    let diagram = translate(&nfa)?;
    store::write_trio(&args.output, "nfa", &trio(&diagram, &options))?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Command::Render(args) => run_render(&args),
        Command::Trio(args) => run_trio(&args),
        Command::Compile { pattern } => {
            let nfa = compile_pattern(&pattern)?;
            println!("{}", serde_json::to_string_pretty(&nfa)?);
            Ok(())
        }
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&store::nfa_schema())?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("regviz: {err}");
        std::process::exit(1);
    }
}
