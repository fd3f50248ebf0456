//! Built-in lint rules.

pub mod schema;

use crate::rule::Rule;

/// Every built-in rule, in reporting order.
pub fn builtin() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(schema::NoUnknownDefault),
        Box::new(schema::NoUnknownCompoundGroup),
        Box::new(schema::NoUnknownCompoundOption),
        Box::new(schema::NoEmptyCompound),
        Box::new(schema::PreferTransientGroup),
        Box::new(schema::NoDuplicateClass),
    ]
}
