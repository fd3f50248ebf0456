//! Plain terminal output.

use std::fmt::Write;

use crate::linter::LintResult;

/// Format lint results as one block per file
pub fn format_text(results: &[LintResult]) -> String {
    let mut output = String::new();

    for result in results {
        if result.diagnostics.is_empty() {
            continue;
        }

        let _ = writeln!(output, "{}", result.filename);
        for diagnostic in &result.diagnostics {
            let _ = writeln!(
                output,
                "  {:<7} {}  {}  ({})",
                diagnostic.severity.as_str(),
                diagnostic.path,
                diagnostic.message,
                diagnostic.rule_name,
            );
            if let Some(help) = &diagnostic.help {
                let _ = writeln!(output, "          help: {help}");
            }
        }
        output.push('\n');
    }

    output
}

/// Format a summary line
pub fn format_summary(error_count: usize, warning_count: usize, file_count: usize) -> String {
    let mut parts = Vec::new();

    if error_count > 0 {
        parts.push(format!(
            "{} error{}",
            error_count,
            if error_count == 1 { "" } else { "s" }
        ));
    }

    if warning_count > 0 {
        parts.push(format!(
            "{} warning{}",
            warning_count,
            if warning_count == 1 { "" } else { "s" }
        ));
    }

    if parts.is_empty() {
        format!("No problems found in {} file(s)", file_count)
    } else {
        format!(
            "{} in {} file{}",
            parts.join(", "),
            file_count,
            if file_count == 1 { "" } else { "s" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Linter;

    #[test]
    fn test_summary() {
        assert_eq!(format_summary(0, 0, 3), "No problems found in 3 file(s)");
        assert_eq!(format_summary(1, 0, 1), "1 error in 1 file");
        assert_eq!(format_summary(2, 1, 2), "2 errors, 1 warning in 2 files");
    }

    #[test]
    fn test_text_output() {
        let result = Linter::new()
            .lint_source(
                r#"{"variants":{"$size":{"sm":"a"}},"defaultVariants":{"$size":"xl"}}"#,
                "size.json",
            )
            .unwrap();
        insta::assert_snapshot!(format_text(&[result]).trim_end(), @r###"
        size.json
          error   defaultVariants.$size  Default `xl` is not an option of `$size`  (schema/no-unknown-default)
                  help: Declared options: sm
        "###);
    }
}
