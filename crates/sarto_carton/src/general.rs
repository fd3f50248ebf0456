//! General string helpers.

/// Uppercase the first character: `"button"` -> `"Button"`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a camelCase style key to its CSS property name:
/// `"fontSize"` -> `"font-size"`.
///
/// Already-hyphenated keys and custom properties (`--brand`) pass through.
pub fn hyphenate(s: &str) -> String {
    if s.starts_with("--") {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Format a number the way JavaScript stringifies it for the common cases:
/// integral values print without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
