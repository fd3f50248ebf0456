//! Vue conventions.
//!
//! Classes travel in `class` and refs are left to Vue itself (a `ref`
//! attribute is forwarded untouched). Bound defaults merge like Vue's
//! `mergeProps(defaults, props)`:
//!
//! - `class` values concatenate, defaults first
//! - `style` records merge, the caller winning per property
//! - every other key is taken from the caller when present

use sarto_atelier_core::{HostConvention, PropValue, Props, Tw};
use sarto_carton::Lazy;

#[derive(Debug, Clone, Copy, Default)]
pub struct VueHost;

impl HostConvention for VueHost {
    fn name(&self) -> &str {
        "vue"
    }

    fn forwards_ref(&self) -> bool {
        false
    }

    fn merge_defaults(&self, defaults: &Props, props: &Props) -> Props {
        let mut merged = defaults.clone();
        for (key, value) in props.iter() {
            let combined = match (key, merged.get(key), value) {
                ("class", Some(PropValue::Str(base)), PropValue::Str(extra)) => {
                    PropValue::from(join_classes(base, extra))
                }
                ("style", Some(PropValue::Style(base)), PropValue::Style(extra)) => {
                    let mut style = base.clone();
                    style.overlay(extra.clone());
                    PropValue::Style(style)
                }
                _ => value.clone(),
            };
            merged.insert(key, combined);
        }
        merged
    }
}

fn join_classes(base: &str, extra: &str) -> String {
    match (base.trim(), extra.trim()) {
        ("", extra) => extra.to_string(),
        (base, "") => base.to_string(),
        (base, extra) => format!("{base} {extra}"),
    }
}

static TW: Lazy<Tw> = Lazy::new(|| Tw::new().with_host(VueHost));

/// The shared Vue factory.
#[inline]
pub fn tw() -> &'static Tw {
    &TW
}
