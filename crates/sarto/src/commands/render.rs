//! Render command - render a definition to HTML

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use sarto::{parse_props, read_definition, SartoConfig, SartoError};
use sarto_atelier_core::VNode;
use sarto_atelier_ssr::{render_with_options, SsrOptions};
use sarto_carton::is_renderable_tag;
use sarto_vitrine::Framework;

#[derive(Args)]
pub struct RenderArgs {
    /// JSON variant definition
    pub schema: PathBuf,

    /// Element to render
    #[arg(short, long)]
    pub tag: String,

    /// Props as a JSON object
    #[arg(short, long)]
    pub props: Option<String>,

    /// Host conventions to render with (overrides the config)
    #[arg(long)]
    pub framework: Option<String>,

    /// Text child
    #[arg(long)]
    pub text: Option<String>,
}

pub fn run(args: RenderArgs, config: &SartoConfig) -> Result<ExitCode, SartoError> {
    if !is_renderable_tag(&args.tag) {
        return Err(SartoError::BadTag(args.tag));
    }
    let definition = read_definition(&args.schema)?;
    let props = parse_props(args.props.as_deref())?;

    let framework = match args.framework.as_deref() {
        Some(name) => name.parse::<Framework>()?,
        None => config.framework,
    };
    let tw = config.tw_for(framework);

    let component = tw.styled(args.tag.as_str()).cva_definition(definition);
    let children = args.text.map(VNode::text).into_iter().collect();
    let node = component.render(props, children);

    let result = render_with_options(&node, &SsrOptions::default());
    for error in &result.errors {
        tracing::warn!(name = %error.name, "{}", error.code.message());
    }
    println!("{}", result.html);

    Ok(ExitCode::SUCCESS)
}
