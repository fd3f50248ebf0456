//! Class templates.
//!
//! A [`Template`] is the Rust rendition of a tagged class template: literal
//! segments interleaved with per-render interpolations. Rendering it is a
//! two-step affair:
//!
//! 1. [`merge_arrays`] interleaves the literal segments with the evaluated
//!    interpolations, dropping interpolations that produced nothing.
//! 2. [`clean_template`] normalizes whitespace, appends the inherited classes
//!    and hands the token list to the configured [`ClassMerge`].

use std::fmt;
use std::sync::Arc;

use sarto_carton::{CompactString, SmallVec};

use crate::merge::ClassMerge;
use crate::value::Props;

/// A per-render class interpolation.
pub type Interpolation = Arc<dyn Fn(&Props) -> Option<String> + Send + Sync>;

/// Literal class segments with interpolations between them.
///
/// There is always one more segment than interpolations.
///
/// ```
/// use sarto_atelier_core::{props, DedupMerge, PropsExt, Template};
///
/// let template = Template::new()
///     .lit("px-2 py-1")
///     .interp(|props| props.is_truthy("$active").then(|| "ring-2".to_string()))
///     .lit("rounded");
///
/// let active = props! { "$active" => true };
/// assert_eq!(template.render(&active, "", &DedupMerge), "px-2 py-1 ring-2 rounded");
/// assert_eq!(template.render(&props! {}, "", &DedupMerge), "px-2 py-1 rounded");
/// ```
#[derive(Clone)]
pub struct Template {
    segments: SmallVec<[CompactString; 2]>,
    interpolations: Vec<Interpolation>,
}

impl Template {
    /// An empty template.
    pub fn new() -> Self {
        let mut segments = SmallVec::new();
        segments.push(CompactString::default());
        Self {
            segments,
            interpolations: Vec::new(),
        }
    }

    /// Append literal classes to the current segment.
    pub fn lit(mut self, classes: &str) -> Self {
        if let Some(last) = self.segments.last_mut() {
            if !last.is_empty() && !classes.is_empty() {
                last.push(' ');
            }
            last.push_str(classes);
        }
        self
    }

    /// Append an interpolation and open a new literal segment.
    pub fn interp<F>(mut self, f: F) -> Self
    where
        F: Fn(&Props) -> Option<String> + Send + Sync + 'static,
    {
        self.interpolations.push(Arc::new(f));
        self.segments.push(CompactString::default());
        self
    }

    #[inline]
    pub fn segments(&self) -> &[CompactString] {
        &self.segments
    }

    #[inline]
    pub fn has_interpolations(&self) -> bool {
        !self.interpolations.is_empty()
    }

    /// Run every interpolation against `props`.
    pub fn evaluate(&self, props: &Props) -> Vec<Option<String>> {
        self.interpolations.iter().map(|f| f(props)).collect()
    }

    /// Evaluate, interleave and clean in one go.
    pub fn render(&self, props: &Props, inherited: &str, merger: &dyn ClassMerge) -> String {
        let elements = self.evaluate(props);
        let fragments = merge_arrays(&self.segments, &elements);
        clean_template(&fragments, inherited, merger)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Template {
    fn from(classes: &str) -> Self {
        Self::new().lit(classes)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("segments", &self.segments)
            .field("interpolations", &self.interpolations.len())
            .finish()
    }
}

/// Interleave literal segments with evaluated interpolations.
///
/// Element `i` follows segment `i`. Empty segments and interpolations that
/// yielded `None` or an empty string contribute nothing.
pub fn merge_arrays<'a, S: AsRef<str>>(
    template: &'a [S],
    elements: &'a [Option<String>],
) -> Vec<&'a str> {
    let mut merged = Vec::with_capacity(template.len() + elements.len());
    for (index, segment) in template.iter().enumerate() {
        let segment = segment.as_ref();
        if !segment.is_empty() {
            merged.push(segment);
        }
        if let Some(Some(element)) = elements.get(index) {
            if !element.is_empty() {
                merged.push(element.as_str());
            }
        }
    }
    merged
}

/// Normalize class fragments and merge them with inherited classes.
///
/// Whitespace (including newlines) is collapsed, stray `,` tokens are
/// dropped, the inherited tokens are appended last and the whole list is
/// handed to `merger`. The result never has leading, trailing or doubled
/// whitespace.
pub fn clean_template<S: AsRef<str>>(
    fragments: &[S],
    inherited: &str,
    merger: &dyn ClassMerge,
) -> String {
    let tokens: Vec<&str> = fragments
        .iter()
        .flat_map(|fragment| fragment.as_ref().split_whitespace())
        .filter(|token| *token != ",")
        .chain(inherited.split_whitespace())
        .collect();
    merger.merge(&tokens)
}
