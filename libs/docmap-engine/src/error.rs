use docmap_api::error::CodecError;
use docmap_api::value::ValueKind;

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("invalid enum representation: {0:?} (expected string, int32 or int64)")]
    InvalidConfiguration(ValueKind),

    #[error("config error: {0}")]
    Config(String),

    #[error("codec error: {0}")]
    Codec(#[from] CodecError),
}

impl MappingError {
    /// Add context to the error.
    ///
    /// For `Codec`, context is added to the inner `CodecError`.
    /// For `Config`, context is prepended to the message.
    pub fn with_context(self, ctx: impl std::fmt::Display) -> Self {
        match self {
            MappingError::Codec(e) => MappingError::Codec(e.with_context(ctx)),
            MappingError::Config(msg) => MappingError::Config(format!("{ctx}: {msg}")),
            other => other,
        }
    }
}
