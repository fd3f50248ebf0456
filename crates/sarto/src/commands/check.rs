//! Check command - lint variant definitions

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use sarto::{SartoConfig, SartoError};
use sarto_patina::{format_results, format_summary, Linter, OutputFormat, Preset};

use super::Format;

#[derive(Args)]
pub struct CheckArgs {
    /// JSON variant definitions
    #[arg(required = true)]
    pub schemas: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,

    /// Enable every rule, not only the recommended ones
    #[arg(long)]
    pub all: bool,

    /// Quiet mode - only show summary
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: CheckArgs, config: &SartoConfig) -> Result<ExitCode, SartoError> {
    let preset = if args.all { Preset::All } else { config.lint.preset };
    let linter = Linter::with_preset(preset);

    let mut results = Vec::with_capacity(args.schemas.len());
    let mut failed = 0usize;
    for path in &args.schemas {
        let filename = path.to_string_lossy();
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}", SartoError::io(path, e));
                failed += 1;
                continue;
            }
        };
        match linter.lint_source(&source, &filename) {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("{filename}: {e}");
                failed += 1;
            }
        }
    }

    let total_errors = results.iter().map(|r| r.error_count).sum::<usize>() + failed;
    let total_warnings = results.iter().map(|r| r.warning_count).sum::<usize>();

    let format = match args.format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
    };

    if format == OutputFormat::Json || !args.quiet {
        let output = format_results(&results, format);
        match format {
            OutputFormat::Json => println!("{output}"),
            OutputFormat::Text if !output.trim().is_empty() => print!("{output}"),
            OutputFormat::Text => {}
        }
    }
    if format == OutputFormat::Text {
        println!(
            "{}",
            format_summary(total_errors, total_warnings, args.schemas.len())
        );
    }

    if total_errors > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
