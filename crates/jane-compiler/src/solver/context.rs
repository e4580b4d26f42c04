use crate::diagnostics::{DiagnosticBuilder, DiagnosticKind, Diagnostics};
use crate::source_map::Span;
use crate::{Error, Result};

/// Accumulates what solving a pass of expressions reports.
///
/// `has_error` is sticky: once a failing diagnostic is reported it stays set
/// for the rest of the pass.
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    diagnostics: Diagnostics,
    has_error: bool,
}

impl Evaluation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Report a diagnostic, marking the evaluation failed when the kind
    /// demands it.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) -> DiagnosticBuilder<'_> {
        if kind.marks_failure() {
            self.has_error = true;
        }
        self.diagnostics.report(kind, span)
    }

    /// Diagnostics of a pass that did not fail, or the failure.
    pub fn into_result(self) -> Result<Diagnostics> {
        if self.has_error {
            return Err(Error::EvaluationFailed(self.diagnostics));
        }
        Ok(self.diagnostics)
    }
}
