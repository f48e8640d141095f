use std::fmt;

/// Error kind for codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErrorKind {
    /// Value shape does not match what the codec handles.
    Type,
    /// Value does not fit the target representation (e.g. int32 overflow).
    Range,
    /// Name or discriminant not part of the enum declaration.
    UnknownVariant,
}

/// Codec error — returned by all codec encode/decode methods.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct CodecError {
    pub kind: CodecErrorKind,
    pub message: String,
}

impl CodecError {
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self { kind: CodecErrorKind::Type, message: msg.into() }
    }

    pub fn range(msg: impl Into<String>) -> Self {
        Self { kind: CodecErrorKind::Range, message: msg.into() }
    }

    pub fn unknown_variant(msg: impl Into<String>) -> Self {
        Self { kind: CodecErrorKind::UnknownVariant, message: msg.into() }
    }

    /// Add context to the error, preserving the original kind.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
        }
    }
}
