//! DOM tag tables.
//!
//! Compile-time perfect hash sets of the element names the factories know
//! about, plus the HTML void elements the SSR renderer must not close.

use phf::phf_set;

/// HTML and SVG element names with a dedicated factory.
pub static DOM_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base",
    "bdi", "bdo", "big", "blockquote", "body", "br", "button", "canvas",
    "caption", "cite", "code", "col", "colgroup", "data", "datalist", "dd",
    "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3",
    "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe",
    "img", "input", "ins", "kbd", "keygen", "label", "legend", "li", "link",
    "main", "map", "mark", "menu", "menuitem", "meta", "meter", "nav",
    "noscript", "object", "ol", "optgroup", "option", "output", "p", "param",
    "picture", "pre", "progress", "q", "rp", "rt", "ruby", "s", "samp",
    "script", "section", "select", "small", "source", "span", "strong",
    "style", "sub", "summary", "sup", "table", "tbody", "td", "template",
    "textarea", "tfoot", "th", "thead", "time", "title", "tr", "track", "u",
    "ul", "var", "video", "wbr",
    // SVG
    "circle", "clipPath", "defs", "ellipse", "foreignObject", "g", "image",
    "line", "linearGradient", "mask", "path", "pattern", "polygon",
    "polyline", "radialGradient", "rect", "stop", "svg", "text", "tspan",
};

/// Elements that never have children or a closing tag.
pub static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen",
    "link", "meta", "param", "source", "track", "wbr",
};

/// Whether `tag` is a known HTML/SVG element.
#[inline]
pub fn is_dom_element(tag: &str) -> bool {
    DOM_ELEMENTS.contains(tag)
}

/// Whether `tag` is a void element (`<br>`, `<input>`, ...).
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

/// Whether `tag` is a valid custom element name (lowercase, contains a dash).
pub fn is_custom_element(tag: &str) -> bool {
    tag.contains('-')
        && tag.starts_with(|c: char| c.is_ascii_lowercase())
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_'))
}

/// Whether `tag` can be rendered as an intrinsic element.
#[inline]
pub fn is_renderable_tag(tag: &str) -> bool {
    is_dom_element(tag) || is_custom_element(tag)
}
