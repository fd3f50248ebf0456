//! # sarto
//!
//! Command-line front end: resolve variant classes, render a definition to
//! HTML, lint schemas and print the config schema.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sarto")]
#[command(about = "Styled-components-like class composition in Rust", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path (defaults to ./sarto.config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the class string a definition yields for some props
    Resolve(commands::resolve::ResolveArgs),

    /// Render a definition to HTML
    #[command(visible_alias = "atelier")]
    Render(commands::render::RenderArgs),

    /// Lint variant definitions
    #[command(visible_alias = "patina")]
    Check(commands::check::CheckArgs),

    /// Print the JSON Schema for sarto.config.json
    Schema,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Schema = cli.command {
        println!("{}", sarto::SARTO_CONFIG_SCHEMA);
        return ExitCode::SUCCESS;
    }

    let result = sarto::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args, &config),
        Commands::Render(args) => commands::render::run(args, &config),
        Commands::Check(args) => commands::check::run(args, &config),
        Commands::Schema => Ok(ExitCode::SUCCESS),
    });

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
