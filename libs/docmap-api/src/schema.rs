use std::collections::HashMap;
use std::sync::Arc;

/// Underlying integer width of an enum declaration. Decides what
/// `Representation::Unspecified` resolves to for that enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    I32,
    I64,
}

/// One named constant of an enum declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    pub name: String,
    pub discriminant: i64,
}

/// Static descriptor of an enum (closed-set) type.
///
/// Built once per type during mapping construction and shared (`Arc`) between
/// the declared-type descriptor and the enum codec — there is no runtime
/// reflection anywhere downstream.
#[derive(Debug, Clone)]
pub struct EnumShape {
    pub name: String,
    pub variants: Vec<EnumVariant>,
    pub underlying: IntWidth,
    /// Type-level attributes — arbitrary mapping metadata, not interpreted
    /// by the engine.
    pub attrs: HashMap<String, serde_json::Value>,
}

impl EnumShape {
    pub fn new(name: impl Into<String>, underlying: IntWidth) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            underlying,
            attrs: HashMap::new(),
        }
    }

    /// Add a variant, builder-style.
    pub fn variant(mut self, name: impl Into<String>, discriminant: i64) -> Self {
        self.variants.push(EnumVariant {
            name: name.into(),
            discriminant,
        });
        self
    }

    pub fn variant_by_name(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn variant_by_discriminant(&self, discriminant: i64) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.discriminant == discriminant)
    }
}

/// Declared type of a mapped member.
///
/// This is the static type-descriptor the conventions classify against:
/// built once per field at mapping-construction time, never queried per
/// encode/decode call.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Bool,
    Int32,
    Int64,
    Double,
    Str,
    Bytes,
    Document,
    Enum(Arc<EnumShape>),
    /// Optional-of-T ("absent or a value of T").
    Optional(Box<FieldKind>),
}

impl FieldKind {
    pub fn as_enum(&self) -> Option<&Arc<EnumShape>> {
        match self {
            FieldKind::Enum(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn as_optional(&self) -> Option<&FieldKind> {
        match self {
            FieldKind::Optional(inner) => Some(inner),
            _ => None,
        }
    }
}
