/// Document-native scalar kind. This is the closed set of kinds a value can
/// have on the wire; config files name enum representations with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Int32,
    Int64,
    Double,
    String,
    Bytes,
    Document,
    Array,
}

/// In-memory value passed through codecs.
///
/// All variants except `Enum` are document-native and appear on both sides of
/// a codec. `Enum` exists only on the object side: it is a named constant the
/// enum codec encodes away into a string or integer, per its configured
/// representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    Document(Vec<(String, Value)>),
    Array(Vec<Value>),
    /// Named constant of a closed-set (enum) type, not yet encoded.
    Enum { name: String, discriminant: i64 },
}

impl Value {
    /// Variant name for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Document(_) => "document",
            Value::Array(_) => "array",
            Value::Enum { .. } => "enum",
        }
    }
}
