use crate::source_map::Span;

/// Diagnostic kinds raised while solving binary operations.
///
/// Each kind maps to a key of the transpiler's error catalog and to a message
/// template with positional `{0}`, `{1}` placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    IncompatibleTypes,
    OperatorNotForType,
    LogicalNotBool,
    DivideByZero,
    BitshiftMustUnsigned,
}

impl DiagnosticKind {
    /// Division by zero and signed shift amounts still produce a usable
    /// value, so they only warn.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DivideByZero | Self::BitshiftMustUnsigned => Severity::Warning,
            Self::IncompatibleTypes | Self::OperatorNotForType | Self::LogicalNotBool => {
                Severity::Error
            }
        }
    }

    /// Catalog key of this kind.
    pub fn key(&self) -> &'static str {
        match self {
            Self::IncompatibleTypes => "incompatible_types",
            Self::OperatorNotForType => "operator_not_for_jntype",
            Self::LogicalNotBool => "logical_not_bool",
            Self::DivideByZero => "divide_by_zero",
            Self::BitshiftMustUnsigned => "bitshift_must_unsigned",
        }
    }

    /// Whether reporting this kind marks the whole evaluation as failed.
    pub fn marks_failure(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::BitshiftMustUnsigned => Some("cast the shift amount to an unsigned type"),
            Self::LogicalNotBool => Some("compare against a value to get a `bool`"),
            _ => None,
        }
    }

    /// Message used when the call site provides no arguments.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::IncompatibleTypes => "incompatible types",
            Self::OperatorNotForType => "operator is not defined for this type",
            Self::LogicalNotBool => "logical operands must be `bool`",
            Self::DivideByZero => "division by zero",
            Self::BitshiftMustUnsigned => "shift amount must be unsigned",
        }
    }

    /// Template for messages with arguments.
    pub fn template(&self) -> &'static str {
        match self {
            Self::IncompatibleTypes => "incompatible types: `{0}` and `{1}`",
            Self::OperatorNotForType => "operator `{0}` is not defined for `{1}`",
            Self::LogicalNotBool => "operator `{0}` requires `bool` operands",
            Self::DivideByZero => "division by zero in `{0}`",
            Self::BitshiftMustUnsigned => "shift amount `{0}` must be unsigned",
        }
    }

    /// Render the final message.
    ///
    /// - no arguments → `fallback_message()`
    /// - arguments → `template()` with `{i}` replaced by the i-th argument
    pub fn message(&self, args: &[&str]) -> String {
        if args.is_empty() {
            return self.fallback_message().to_string();
        }
        args.iter()
            .enumerate()
            .fold(self.template().to_string(), |msg, (i, arg)| {
                msg.replace(&format!("{{{i}}}"), arg)
            })
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Where the problem is, usually the operator.
    pub(crate) span: Span,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        let hints = kind.default_hint().map(str::to_string).into_iter().collect();
        Self {
            kind,
            span,
            message: message.into(),
            related: Vec::new(),
            hints,
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Span) -> Self {
        Self::new(kind, span, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}] at {}..{}: {}",
            self.severity(),
            self.kind,
            u32::from(self.span.range.start()),
            u32::from(self.span.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.span.range.start()),
                u32::from(related.span.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
