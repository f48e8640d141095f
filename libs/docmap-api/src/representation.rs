use crate::value::ValueKind;

/// Wire representation chosen for an enum-typed member.
///
/// `Unspecified` defers the choice to the enum's own declaration (its
/// underlying integer width) — codecs resolve it, conventions pass it
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Representation {
    Unspecified,
    AsString,
    AsInt32,
    AsInt64,
}

impl Representation {
    /// Map a document scalar kind to a representation.
    ///
    /// Returns `None` for kinds an enum cannot be stored as (double, bool,
    /// document, ...). The engine turns that `None` into an
    /// `InvalidConfiguration` error at convention-construction time.
    pub fn from_kind(kind: ValueKind) -> Option<Representation> {
        match kind {
            ValueKind::String => Some(Representation::AsString),
            ValueKind::Int32 => Some(Representation::AsInt32),
            ValueKind::Int64 => Some(Representation::AsInt64),
            _ => None,
        }
    }

    /// The document scalar kind this representation stores values as.
    /// `None` for `Unspecified` (kind depends on the enum declaration).
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Representation::Unspecified => None,
            Representation::AsString => Some(ValueKind::String),
            Representation::AsInt32 => Some(ValueKind::Int32),
            Representation::AsInt64 => Some(ValueKind::Int64),
        }
    }
}
