//! Resolve command - print the class string for a set of props

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use sarto::{parse_props, read_definition, SartoConfig, SartoError};
use sarto_atelier_core::{Selection, Variance};
use serde::Serialize;

use super::Format;

#[derive(Args)]
pub struct ResolveArgs {
    /// JSON variant definition
    pub schema: PathBuf,

    /// Props as a JSON object (e.g. '{"$size":"sm"}')
    #[arg(short, long)]
    pub props: Option<String>,

    /// Fail on options the schema does not declare
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    class: String,
    selections: Vec<Selection<'a>>,
    compounds: Vec<&'a str>,
}

pub fn run(args: ResolveArgs, config: &SartoConfig) -> Result<ExitCode, SartoError> {
    let definition = read_definition(&args.schema)?;
    let props = parse_props(args.props.as_deref())?;
    let variance = Variance::from_definition(definition).with_merger(config.merge.merger());

    let class = if args.strict {
        variance.resolve_strict(&props)?
    } else {
        variance.resolve(&props)
    };

    match args.format {
        Format::Text => println!("{class}"),
        Format::Json => {
            let report = ResolveReport {
                class,
                selections: variance.selections(&props),
                compounds: variance
                    .matching_compounds(&props)
                    .map(|rule| rule.class.as_str())
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
