//! `rodia-tokens` command line entry point.
//!
//! Run with no arguments from the design-tokens package to regenerate
//! `dist/` from `src/rodia.tokens.json`.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use rodia_tokens::diagnostic::{format_error, DiagnosticOptions};
use rodia_tokens::{ConfigBuilder, TokenBuilder};

/// Validate design tokens and generate CSS/JS artifacts.
#[derive(Debug, Parser)]
#[command(name = "rodia-tokens", version, about)]
struct Cli {
    /// Package root that relative paths resolve against
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Token source file
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Log every pipeline stage
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = ConfigBuilder::new();
    if let Some(root) = &cli.root {
        builder = builder.root(root);
    }
    if let Some(source) = &cli.source {
        builder = builder.source(source);
    }
    if let Some(out_dir) = &cli.out_dir {
        builder = builder.out_dir(out_dir);
    }

    match TokenBuilder::new(builder.build()).build() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let colored = !cli.no_color && std::io::stderr().is_terminal();
            let options = DiagnosticOptions::default().with_colored(colored);
            eprint!("{}", format_error(&err, &options));
            ExitCode::FAILURE
        }
    }
}
