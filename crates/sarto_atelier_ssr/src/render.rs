//! HTML serialization of rendered node trees.

use std::borrow::Cow;

use htmlize::{escape_attribute, escape_text};
use sarto_atelier_core::{ElementNode, PropValue, Style, VNode};
use sarto_carton::{format_number, hyphenate, is_void_tag, CompactString};

use crate::errors::{SsrError, SsrErrorCode};
use crate::options::SsrOptions;

/// SSR render result
#[derive(Debug, Default)]
pub struct SsrRenderResult {
    pub html: String,
    pub errors: Vec<SsrError>,
}

/// Serialize a node tree with default options, dropping diagnostics.
pub fn render_to_string(node: &VNode) -> String {
    render_with_options(node, &SsrOptions::default()).html
}

/// Serialize a node tree.
pub fn render_with_options(node: &VNode, options: &SsrOptions) -> SsrRenderResult {
    let mut ctx = SsrRenderContext {
        options,
        out: String::with_capacity(256),
        errors: Vec::new(),
    };
    ctx.node(node);
    SsrRenderResult {
        html: ctx.out,
        errors: ctx.errors,
    }
}

struct SsrRenderContext<'a> {
    options: &'a SsrOptions,
    out: String,
    errors: Vec<SsrError>,
}

impl SsrRenderContext<'_> {
    fn node(&mut self, node: &VNode) {
        match node {
            VNode::Text(text) => self.out.push_str(&escape_text(text.as_str())),
            VNode::Fragment(children) => self.children(children),
            VNode::Element(element) => self.element(element),
        }
    }

    fn children(&mut self, children: &[VNode]) {
        for child in children {
            self.node(child);
        }
    }

    fn element(&mut self, el: &ElementNode) {
        let tag = el.tag.as_str();
        if !is_safe_tag_name(tag) {
            self.error(SsrErrorCode::UnsafeTagName, tag);
            self.children(&el.children);
            return;
        }

        self.out.push('<');
        self.out.push_str(tag);

        if !el.class.is_empty() {
            self.attr("class", &el.class);
        }
        for (name, value) in el.attrs.iter() {
            self.prop(name, value);
        }
        if !el.style.is_empty() {
            let style = self.stringify_style(&el.style);
            self.attr("style", &style);
        }
        if let Some(scope_id) = &self.options.scope_id {
            self.out.push(' ');
            self.out.push_str(scope_id);
        }

        self.out.push('>');
        if is_void_tag(tag) {
            return;
        }

        self.children(&el.children);
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Render one forwarded prop. Values without an HTML form are skipped.
    fn prop(&mut self, name: &str, value: &PropValue) {
        if !is_safe_attr_name(name) {
            self.error(SsrErrorCode::UnsafeAttrName, name);
            return;
        }
        let name = match name {
            "htmlFor" => "for",
            "className" | "class" | "style" => return,
            other => other,
        };
        match value {
            PropValue::Str(s) => self.attr(name, s),
            PropValue::Number(n) => self.attr(name, &format_number(*n)),
            PropValue::Bool(true) => {
                self.out.push(' ');
                self.out.push_str(name);
            }
            PropValue::Bool(false)
            | PropValue::Null
            | PropValue::Style(_)
            | PropValue::Target(_)
            | PropValue::Ref(_) => {}
        }
    }

    fn attr(&mut self, name: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&escape_attribute(value));
        self.out.push('"');
    }

    fn stringify_style(&self, style: &Style) -> String {
        let mut out = String::new();
        for (key, value) in style.iter() {
            if value.trim().is_empty() {
                continue;
            }
            let key: Cow<'_, str> = if self.options.raw_style_keys {
                Cow::Borrowed(key)
            } else {
                Cow::Owned(hyphenate(key))
            };
            out.push_str(&key);
            out.push(':');
            out.push_str(value.trim());
            out.push(';');
        }
        out
    }

    fn error(&mut self, code: SsrErrorCode, name: &str) {
        self.errors.push(SsrError {
            code,
            name: CompactString::from(name),
        });
    }
}

/// Attribute names may not contain whitespace, quotes, `>`, `/` or `=`.
fn is_safe_attr_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '>' | '/' | '=' | '"' | '\'' | '<'))
}

fn is_safe_tag_name(tag: &str) -> bool {
    tag.starts_with(|c: char| c.is_ascii_alphabetic())
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.' | '_'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarto_atelier_core::{props, style};

    fn el(tag: &str) -> ElementNode {
        ElementNode::new(tag)
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_to_string(&VNode::text("a < b & c"));
        assert_eq!(html, "a &lt; b &amp; c");
    }

    #[test]
    fn test_attribute_kinds() {
        let mut input = el("input");
        input.attrs = props! {
            "type" => "checkbox",
            "checked" => true,
            "disabled" => false,
            "tabIndex" => 2,
            "value" => PropValue::Null,
        };
        assert_eq!(
            render_to_string(&VNode::Element(input)),
            r#"<input type="checkbox" checked tabIndex="2">"#
        );
    }

    #[test]
    fn test_style_hyphenated() {
        let mut div = el("div");
        div.style = style! { "fontSize" => "12px", "--brand" => "red", "margin" => " " };
        assert_eq!(
            render_to_string(&VNode::Element(div)),
            r#"<div style="font-size:12px;--brand:red;"></div>"#
        );
    }

    #[test]
    fn test_unsafe_names_reported() {
        let mut div = el("div");
        div.attrs = props! { "onclick=\"x\"" => "y", "ok" => "1" };
        div.children = vec![VNode::Element(el("bad tag"))];
        let result = render_with_options(&VNode::Element(div), &SsrOptions::default());

        assert_eq!(result.html, r#"<div ok="1"></div>"#);
        let codes: Vec<_> = result.errors.iter().map(|e| e.code).collect();
        assert_eq!(codes, [SsrErrorCode::UnsafeAttrName, SsrErrorCode::UnsafeTagName]);
    }

    #[test]
    fn test_scope_id() {
        let options = SsrOptions {
            scope_id: Some("data-v-7a1".into()),
            ..Default::default()
        };
        let result = render_with_options(&VNode::Element(el("p")), &options);
        assert_eq!(result.html, "<p data-v-7a1></p>");
    }
}
