//! Source storage and positions.
//!
//! Spans point into a `SourceMap` entry. Types and values synthesized by the
//! compiler itself carry a detached span with no source.

use rowan::TextRange;

/// Lightweight handle to a source in a compilation session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SourceId(u32);

/// Describes the origin of a source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SourceKind {
    /// A one-liner passed directly (CLI argument, tests).
    OneLiner,
    /// A file with its path.
    File(String),
}

impl SourceKind {
    /// Returns the display name for diagnostics.
    pub fn display_name(&self) -> &str {
        match self {
            SourceKind::OneLiner => "<expr>",
            SourceKind::File(path) => path,
        }
    }
}

/// A borrowed view of a source.
#[derive(Clone, Debug)]
pub struct Source<'a> {
    pub id: SourceId,
    pub kind: &'a SourceKind,
    pub content: &'a str,
}

#[derive(Clone, Debug)]
struct SourceEntry {
    kind: SourceKind,
    content: String,
}

/// Registry of all sources of a compilation session.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    entries: Vec<SourceEntry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single one-liner source.
    pub fn one_liner(content: &str) -> (Self, SourceId) {
        let mut map = Self::new();
        let id = map.add_one_liner(content);
        (map, id)
    }

    pub fn add_one_liner(&mut self, content: &str) -> SourceId {
        self.push_entry(SourceKind::OneLiner, content)
    }

    pub fn add_file(&mut self, path: &str, content: &str) -> SourceId {
        self.push_entry(SourceKind::File(path.to_owned()), content)
    }

    fn push_entry(&mut self, kind: SourceKind, content: &str) -> SourceId {
        let id = SourceId(self.entries.len() as u32);
        self.entries.push(SourceEntry {
            kind,
            content: content.to_owned(),
        });
        id
    }

    pub fn get(&self, id: SourceId) -> Option<Source<'_>> {
        self.entries.get(id.0 as usize).map(|entry| Source {
            id,
            kind: &entry.kind,
            content: &entry.content,
        })
    }

    pub fn content(&self, id: SourceId) -> Option<&str> {
        self.get(id).map(|s| s.content)
    }

    /// Path of a file source; `None` for one-liners and unknown ids.
    pub fn path(&self, id: SourceId) -> Option<&str> {
        match &self.entries.get(id.0 as usize)?.kind {
            SourceKind::File(path) => Some(path),
            SourceKind::OneLiner => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Source<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Source {
                id: SourceId(i as u32),
                kind: &entry.kind,
                content: &entry.content,
            })
    }
}

/// A range inside a source.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Span {
    pub source: Option<SourceId>,
    pub range: TextRange,
}

impl Span {
    pub fn new(source: SourceId, range: TextRange) -> Self {
        Self {
            source: Some(source),
            range,
        }
    }

    /// Span of something the compiler made up; it has no source text.
    pub fn detached() -> Self {
        Self {
            source: None,
            range: TextRange::empty(0.into()),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.source.is_none()
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::detached()
    }
}
