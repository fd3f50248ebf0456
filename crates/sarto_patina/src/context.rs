//! Lint context passed to every rule.

use crate::diagnostic::LintDiagnostic;

/// Collects the diagnostics reported while checking one definition
#[derive(Debug, Default)]
pub struct LintContext {
    diagnostics: Vec<LintDiagnostic>,
}

impl LintContext {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }
}
