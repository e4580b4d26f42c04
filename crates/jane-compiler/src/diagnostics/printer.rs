//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};
use crate::source_map::SourceMap;

/// Renders diagnostics against the sources their spans point into.
///
/// Diagnostics with a detached span, or a span into an unknown source, fall
/// back to their one-line `Display` form.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    sources: &'s SourceMap,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics, sources: &'s SourceMap) -> Self {
        Self {
            diagnostics,
            sources,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            self.format_one(w, &renderer, diag)?;
        }
        Ok(())
    }

    fn format_one(
        &self,
        w: &mut impl Write,
        renderer: &Renderer,
        diag: &DiagnosticMessage,
    ) -> std::fmt::Result {
        let Some(source) = diag.span.source.and_then(|id| self.sources.get(id)) else {
            return write!(w, "{}", diag);
        };
        let content = source.content;

        let mut snippet = Snippet::source(content)
            .line_start(1)
            .path(source.kind.display_name())
            .annotation(
                AnnotationKind::Primary
                    .span(adjust_range(diag.span.range, content.len()))
                    .label(&diag.message),
            );

        // Related spans into other sources cannot share this snippet.
        for related in diag
            .related
            .iter()
            .filter(|r| r.span.source == Some(source.id))
        {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.span.range, content.len()))
                    .label(&related.message),
            );
        }

        let level = severity_to_level(diag.severity());
        let mut group: Group = level.primary_title(&diag.message).element(snippet);
        for hint in &diag.hints {
            group = group.element(Level::HELP.message(hint));
        }

        write!(w, "{}", renderer.render(&[group]))
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = usize::from(range.start()).min(limit);
    let end: usize = usize::from(range.end()).min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
