//! Server-side HTML rendering for Sarto.
//!
//! Serializes the neutral node tree produced by a styled component's render
//! call into an HTML string:
//! - escaped text and attribute values
//! - void elements without a closing tag
//! - boolean attributes (`true` renders the bare name, `false` is omitted)
//! - inline styles with camelCase keys converted to CSS property names
//!
//! Prop values with no HTML form (targets, refs, nulls) are skipped.
//!
//! ## Name Origin
//!
//! **Atelier** (/ˌætəlˈjeɪ/) is an artist's workshop or studio. The "ssr" atelier
//! finishes the garment for display, producing HTML strings instead of node
//! trees.

pub mod errors;
pub mod options;
pub mod render;

pub use errors::*;
pub use options::*;
pub use render::*;
