//! Cross-host adapter tests.
//!
//! The same declaration rendered under every host must produce the same
//! HTML; only the prop names the caller uses differ.

use sarto_atelier_core::{props, style, Props, VariantSchema};
use sarto_atelier_ssr::render_to_string;
use sarto_vitrine::Framework;

fn render(framework: Framework, props: Props) -> String {
    let tw = framework.tw();
    let alert = tw
        .div()
        .cva(
            "alert",
            VariantSchema::new()
                .variant("$tone", [("info", "alert-info"), ("error", "alert-error")])
                .default_variant("$tone", "info"),
        )
        .with_props(props! { "role" => "alert" });
    render_to_string(&alert.render(props, vec!["Saved".into()]))
}

#[test]
fn react_uses_class_name() {
    insta::assert_snapshot!(
        render(Framework::React, props! { "$tone" => "error", "className" => "mt-2" }),
        @r#"<div class="alert alert-error mt-2" role="alert">Saved</div>"#
    );
}

#[test]
fn solid_uses_class() {
    insta::assert_snapshot!(
        render(Framework::Solid, props! { "class" => "mt-2" }),
        @r#"<div class="alert alert-info mt-2" role="alert">Saved</div>"#
    );
}

#[test]
fn vue_merges_style_and_class_defaults() {
    let tw = Framework::Vue.tw();
    let panel = tw
        .section()
        .classes("panel")
        .with_props(props! { "class" => "panel-default", "style" => style! { "padding" => "8px", "color" => "black" } });
    let node = panel.render(
        props! { "class" => "panel-wide", "style" => style! { "color" => "white" } },
        vec![],
    );
    insta::assert_snapshot!(
        render_to_string(&node),
        @r#"<section class="panel panel-default panel-wide" style="padding:8px;color:white;"></section>"#
    );
}

#[test]
fn same_output_across_hosts() {
    let neutral = render(Framework::Neutral, props! { "class" => "x" });
    let solid = render(Framework::Solid, props! { "class" => "x" });
    let react = render(Framework::React, props! { "className" => "x" });
    let vue = render(Framework::Vue, props! { "class" => "x" });
    assert_eq!(neutral, solid);
    assert_eq!(neutral, react);
    assert_eq!(neutral, vue);
}
