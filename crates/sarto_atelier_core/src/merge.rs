//! Class-name merge strategies.
//!
//! Every class string Sarto produces goes through a [`ClassMerge`] as its last
//! step. The merger owns all knowledge about which utility classes conflict;
//! the rest of the engine only guarantees the order of the tokens it hands
//! over, so that "last occurrence wins" picks the most specific source.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use sarto_carton::{CompactString, Lazy, SmallVec};

use crate::tailwind::TAILWIND_GROUPS;

/// Merges an ordered token list into a class string.
///
/// Implementations must keep the *last* occurrence of conflicting tokens.
pub trait ClassMerge: Send + Sync + fmt::Debug {
    fn merge(&self, tokens: &[&str]) -> String;
}

/// Removes exact duplicates, keeping the last occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupMerge;

impl ClassMerge for DedupMerge {
    fn merge(&self, tokens: &[&str]) -> String {
        let mut seen = FxHashSet::default();
        let mut kept: SmallVec<[&str; 16]> = tokens
            .iter()
            .rev()
            .copied()
            .filter(|token| !token.trim().is_empty() && seen.insert(*token))
            .collect();
        kept.reverse();
        kept.join(" ")
    }
}

static TAILWIND: Lazy<Arc<GroupMerge>> = Lazy::new(|| Arc::new(GroupMerge::tailwind()));

/// The merger factories and `cva` use unless told otherwise: the shared
/// [`GroupMerge::tailwind`] table.
pub fn default_merger() -> Arc<dyn ClassMerge> {
    TAILWIND.clone()
}

/// A named set of class prefixes that style the same property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    pub name: CompactString,
    pub prefixes: Vec<CompactString>,
}

/// Resolves conflicts between utilities of the same group.
///
/// Two tokens conflict when they carry the same variant modifiers
/// (`hover:`, `md:`...), the same important flag, and their utility belongs
/// to the same group. The last one wins. Tokens outside every group are
/// deduplicated exactly.
///
/// A prefix ending in `-` claims every utility starting with it plus the
/// bare name (`rounded-` claims `rounded`). Any other prefix claims only the
/// utility it spells, so `flex` does not swallow `flex-row`. The longest
/// match wins; ties go to the group added first.
///
/// ```
/// use sarto_atelier_core::{ClassMerge, GroupMerge};
///
/// let merge = GroupMerge::new().group("bg-color", ["bg-"]);
/// assert_eq!(
///     merge.merge(&["bg-red-500", "p-2", "hover:bg-red-700", "bg-blue-500"]),
///     "p-2 hover:bg-red-700 bg-blue-500"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupMerge {
    groups: Vec<ConflictGroup>,
}

#[derive(PartialEq, Eq, Hash)]
enum ConflictKey<'a> {
    Group {
        modifiers: &'a str,
        important: bool,
        group: usize,
    },
    Exact(&'a str),
}

impl GroupMerge {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a conflict group.
    pub fn group<I, S>(mut self, name: impl Into<CompactString>, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.groups.push(ConflictGroup {
            name: name.into(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// The built-in Tailwind table: spacing and sizing axes, colors, font
    /// size and weight, borders, layout and the other common utilities.
    pub fn tailwind() -> Self {
        TAILWIND_GROUPS
            .iter()
            .fold(Self::new(), |merge, (name, prefixes)| {
                merge.group(*name, prefixes.iter().copied())
            })
    }

    #[inline]
    pub fn groups(&self) -> &[ConflictGroup] {
        &self.groups
    }

    /// The group whose prefix matches `utility` the longest.
    fn group_of(&self, utility: &str) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, group) in self.groups.iter().enumerate() {
            for prefix in &group.prefixes {
                let matched = match prefix.strip_suffix('-') {
                    Some(bare) if utility == bare => Some(bare.len()),
                    Some(_) if utility.starts_with(prefix.as_str()) => Some(prefix.len()),
                    Some(_) => None,
                    None => (utility == prefix.as_str()).then_some(prefix.len()),
                };
                if let Some(len) = matched {
                    if best.map_or(true, |(_, best_len)| len > best_len) {
                        best = Some((index, len));
                    }
                }
            }
        }
        best.map(|(index, _)| index)
    }

    fn key<'a>(&self, token: &'a str) -> ConflictKey<'a> {
        let (modifiers, utility) = split_modifiers(token);
        let important = utility.starts_with('!') || utility.ends_with('!');
        let utility = utility.trim_matches('!');
        let utility = utility.strip_prefix('-').unwrap_or(utility);
        match self.group_of(utility) {
            Some(group) => ConflictKey::Group {
                modifiers,
                important,
                group,
            },
            None => ConflictKey::Exact(token),
        }
    }
}

impl ClassMerge for GroupMerge {
    fn merge(&self, tokens: &[&str]) -> String {
        let mut seen = FxHashSet::default();
        let mut kept: SmallVec<[&str; 16]> = tokens
            .iter()
            .rev()
            .copied()
            .filter(|token| !token.trim().is_empty() && seen.insert(self.key(token)))
            .collect();
        kept.reverse();
        kept.join(" ")
    }
}

/// Split `hover:md:bg-red-500` into (`hover:md`, `bg-red-500`).
///
/// Colons inside arbitrary values (`bg-[url(a:b)]`) do not split.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = None;
    for (index, byte) in token.bytes().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => split = Some(index),
            _ => {}
        }
    }
    match split {
        Some(index) => (&token[..index], &token[index + 1..]),
        None => ("", token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_last_occurrence() {
        assert_eq!(DedupMerge.merge(&["a", "b", "a"]), "b a");
        assert_eq!(DedupMerge.merge(&["extra", "extra"]), "extra");
        assert_eq!(DedupMerge.merge(&[]), "");
    }

    #[test]
    fn test_dedup_skips_blank_tokens() {
        assert_eq!(DedupMerge.merge(&["a", " ", "", "b"]), "a b");
    }

    #[test]
    fn test_group_conflicts() {
        let merge = GroupMerge::new()
            .group("padding", ["p-"])
            .group("padding-x", ["px-"])
            .group("bg-color", ["bg-"]);

        assert_eq!(merge.merge(&["p-2", "px-4", "p-3"]), "px-4 p-3");
        assert_eq!(merge.merge(&["bg-red-500", "bg-blue-500"]), "bg-blue-500");
        assert_eq!(
            merge.merge(&["bg-red-500", "md:bg-red-600", "md:bg-blue-600"]),
            "bg-red-500 md:bg-blue-600"
        );
    }

    #[test]
    fn test_group_important_is_separate() {
        let merge = GroupMerge::new().group("text-size", ["text-base", "text-lg"]);
        assert_eq!(merge.merge(&["text-base!", "text-lg"]), "text-base! text-lg");
        assert_eq!(merge.merge(&["text-base", "text-lg"]), "text-lg");
    }

    #[test]
    fn test_group_negative_values() {
        let merge = GroupMerge::new().group("margin-top", ["mt-"]);
        assert_eq!(merge.merge(&["mt-2", "-mt-1"]), "-mt-1");
    }

    #[test]
    fn test_exact_prefix_claims_only_itself() {
        let merge = GroupMerge::new()
            .group("display", ["flex", "block"])
            .group("flex-direction", ["flex-row", "flex-col"]);
        assert_eq!(merge.merge(&["flex", "flex-row", "block"]), "flex-row block");
        assert_eq!(merge.merge(&["flex-flow"]), "flex-flow");
    }

    #[test]
    fn test_tailwind_resolves_common_conflicts() {
        let merge = GroupMerge::tailwind();

        assert_eq!(merge.merge(&["px-2", "py-1", "px-4"]), "py-1 px-4");
        assert_eq!(merge.merge(&["p-2", "px-4"]), "p-2 px-4");
        assert_eq!(merge.merge(&["bg-gray-100", "bg-red-500"]), "bg-red-500");
        assert_eq!(
            merge.merge(&["text-sm", "text-gray-700", "text-lg", "text-red-600"]),
            "text-lg text-red-600"
        );
        assert_eq!(merge.merge(&["font-medium", "font-mono", "font-bold"]), "font-mono font-bold");
        assert_eq!(merge.merge(&["rounded", "rounded-lg", "rounded-t-none"]), "rounded-lg rounded-t-none");
        assert_eq!(
            merge.merge(&["border", "border-gray-200", "border-2", "border-red-500"]),
            "border-2 border-red-500"
        );
        assert_eq!(merge.merge(&["shadow", "shadow-md", "ring-2", "ring-offset-2", "ring-4"]), "shadow-md ring-offset-2 ring-4");
        assert_eq!(merge.merge(&["block", "hidden", "md:flex"]), "hidden md:flex");
        assert_eq!(merge.merge(&["relative", "absolute", "inset-0"]), "absolute inset-0");
    }

    #[test]
    fn test_tailwind_keeps_unknown_utilities() {
        let merge = GroupMerge::tailwind();
        assert_eq!(merge.merge(&["btn", "btn-primary", "btn"]), "btn-primary btn");
        assert_eq!(merge.merge(&["sr-only", "truncate"]), "sr-only truncate");
    }

    #[test]
    fn test_split_modifiers() {
        assert_eq!(split_modifiers("hover:bg-red"), ("hover", "bg-red"));
        assert_eq!(split_modifiers("md:hover:p-2"), ("md:hover", "p-2"));
        assert_eq!(split_modifiers("bg-[url(a:b)]"), ("", "bg-[url(a:b)]"));
        assert_eq!(split_modifiers("flex"), ("", "flex"));
    }
}
