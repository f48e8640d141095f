use std::sync::Arc;

use docmap_api::codec::{ChildCodecConfigurable, Codec, RepresentationConfigurable};
use docmap_api::error::CodecError;
use docmap_api::representation::Representation;
use docmap_api::schema::{EnumShape, EnumVariant, FieldKind, IntWidth};
use docmap_api::value::Value;

/// Codec for enum (closed-set) members.
///
/// Encodes strictly per its configured representation; decodes leniently from
/// any of the three legal wire forms (a document written with one
/// representation stays readable after the convention changes).
pub struct EnumCodec {
    shape: Arc<EnumShape>,
    representation: Representation,
}

impl EnumCodec {
    /// Defaults to `Unspecified` — resolved against the enum's underlying
    /// integer width at encode time.
    pub fn new(shape: Arc<EnumShape>) -> Self {
        Self {
            shape,
            representation: Representation::Unspecified,
        }
    }

    /// Configured representation with `Unspecified` resolved.
    fn effective_representation(&self) -> Representation {
        match self.representation {
            Representation::Unspecified => match self.shape.underlying {
                IntWidth::I32 => Representation::AsInt32,
                IntWidth::I64 => Representation::AsInt64,
            },
            other => other,
        }
    }
}

impl Codec for EnumCodec {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn encode(&self, value: &Value) -> Result<Value, CodecError> {
        let name = match value {
            Value::Enum { name, .. } => name,
            other => {
                return Err(CodecError::type_mismatch(format!(
                    "enum {}: cannot encode {} value",
                    self.shape.name,
                    other.kind_name()
                )));
            }
        };

        // The shape is the source of truth for discriminants.
        let variant = self.shape.variant_by_name(name).ok_or_else(|| {
            CodecError::unknown_variant(format!("enum {}: no variant '{name}'", self.shape.name))
        })?;

        match self.effective_representation() {
            Representation::AsString => Ok(Value::String(variant.name.clone())),
            Representation::AsInt32 => i32::try_from(variant.discriminant)
                .map(Value::Int32)
                .map_err(|_| {
                    CodecError::range(format!(
                        "enum {}: discriminant {} of '{name}' does not fit int32",
                        self.shape.name, variant.discriminant
                    ))
                }),
            // effective_representation() never yields Unspecified.
            Representation::AsInt64 | Representation::Unspecified => {
                Ok(Value::Int64(variant.discriminant))
            }
        }
    }

    fn decode(&self, value: &Value) -> Result<Value, CodecError> {
        let variant = match value {
            Value::String(s) => self.shape.variant_by_name(s).ok_or_else(|| {
                CodecError::unknown_variant(format!("enum {}: no variant '{s}'", self.shape.name))
            })?,
            Value::Int32(i) => lookup_discriminant(&self.shape, i64::from(*i))?,
            Value::Int64(i) => lookup_discriminant(&self.shape, *i)?,
            other => {
                return Err(CodecError::type_mismatch(format!(
                    "enum {}: cannot decode {} value",
                    self.shape.name,
                    other.kind_name()
                )));
            }
        };
        Ok(Value::Enum {
            name: variant.name.clone(),
            discriminant: variant.discriminant,
        })
    }

    fn as_representation_configurable(&self) -> Option<&dyn RepresentationConfigurable> {
        Some(self)
    }
}

fn lookup_discriminant(shape: &EnumShape, discriminant: i64) -> Result<&EnumVariant, CodecError> {
    shape.variant_by_discriminant(discriminant).ok_or_else(|| {
        CodecError::unknown_variant(format!(
            "enum {}: no variant with discriminant {discriminant}",
            shape.name
        ))
    })
}

impl RepresentationConfigurable for EnumCodec {
    fn representation(&self) -> Representation {
        self.representation
    }

    fn with_representation(&self, representation: Representation) -> Arc<dyn Codec> {
        Arc::new(EnumCodec {
            shape: Arc::clone(&self.shape),
            representation,
        })
    }
}

/// Wrapper codec for optional-of-T members. Passes `Null` through and
/// delegates present values to the child codec.
pub struct OptionCodec {
    child: Arc<dyn Codec>,
}

impl OptionCodec {
    pub fn new(child: Arc<dyn Codec>) -> Self {
        Self { child }
    }
}

impl Codec for OptionCodec {
    fn name(&self) -> &'static str {
        "option"
    }

    fn encode(&self, value: &Value) -> Result<Value, CodecError> {
        match value {
            Value::Null => Ok(Value::Null),
            present => self.child.encode(present),
        }
    }

    fn decode(&self, value: &Value) -> Result<Value, CodecError> {
        match value {
            Value::Null => Ok(Value::Null),
            present => self.child.decode(present),
        }
    }

    fn as_child_configurable(&self) -> Option<&dyn ChildCodecConfigurable> {
        Some(self)
    }
}

impl ChildCodecConfigurable for OptionCodec {
    fn child_codec(&self) -> Arc<dyn Codec> {
        Arc::clone(&self.child)
    }

    fn with_child_codec(&self, child: Arc<dyn Codec>) -> Arc<dyn Codec> {
        Arc::new(OptionCodec { child })
    }
}

/// Fixed scalar codec: accepts exactly one value shape and passes it through.
/// Exposes no reconfiguration capability — its representation is the type.
macro_rules! scalar_codec {
    ($codec:ident, $name:literal, $variant:ident) => {
        pub struct $codec;

        impl Codec for $codec {
            fn name(&self) -> &'static str {
                $name
            }

            fn encode(&self, value: &Value) -> Result<Value, CodecError> {
                match value {
                    Value::$variant(_) => Ok(value.clone()),
                    other => Err(CodecError::type_mismatch(format!(
                        concat!($name, " codec: cannot encode {} value"),
                        other.kind_name()
                    ))),
                }
            }

            fn decode(&self, value: &Value) -> Result<Value, CodecError> {
                match value {
                    Value::$variant(_) => Ok(value.clone()),
                    other => Err(CodecError::type_mismatch(format!(
                        concat!($name, " codec: cannot decode {} value"),
                        other.kind_name()
                    ))),
                }
            }
        }
    };
}

scalar_codec!(BoolCodec, "bool", Bool);
scalar_codec!(Int32Codec, "int32", Int32);
scalar_codec!(Int64Codec, "int64", Int64);
scalar_codec!(StringCodec, "string", String);

/// Value as-is, no conversion needed. Installed for kinds without a dedicated
/// codec (double, bytes, document).
pub struct PassthroughCodec;

impl Codec for PassthroughCodec {
    fn name(&self) -> &'static str {
        "passthrough"
    }

    fn encode(&self, value: &Value) -> Result<Value, CodecError> {
        Ok(value.clone())
    }

    fn decode(&self, value: &Value) -> Result<Value, CodecError> {
        Ok(value.clone())
    }
}

/// Default codec installed when a member map is created, before any
/// convention runs.
pub fn default_codec_for(kind: &FieldKind) -> Arc<dyn Codec> {
    match kind {
        FieldKind::Bool => Arc::new(BoolCodec),
        FieldKind::Int32 => Arc::new(Int32Codec),
        FieldKind::Int64 => Arc::new(Int64Codec),
        FieldKind::Str => Arc::new(StringCodec),
        FieldKind::Enum(shape) => Arc::new(EnumCodec::new(Arc::clone(shape))),
        FieldKind::Optional(inner) => Arc::new(OptionCodec::new(default_codec_for(inner))),
        FieldKind::Double | FieldKind::Bytes | FieldKind::Document => Arc::new(PassthroughCodec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> Arc<EnumShape> {
        Arc::new(
            EnumShape::new("Color", IntWidth::I32)
                .variant("Red", 0)
                .variant("Green", 1)
                .variant("Blue", 2),
        )
    }

    fn green() -> Value {
        Value::Enum {
            name: "Green".into(),
            discriminant: 1,
        }
    }

    #[test]
    fn enum_encodes_per_representation() {
        let codec = EnumCodec::new(color());

        // Unspecified resolves to the underlying width (i32 here).
        assert_eq!(codec.encode(&green()).unwrap(), Value::Int32(1));

        let as_string = codec.with_representation(Representation::AsString);
        assert_eq!(as_string.encode(&green()).unwrap(), Value::String("Green".into()));

        let as_int64 = codec.with_representation(Representation::AsInt64);
        assert_eq!(as_int64.encode(&green()).unwrap(), Value::Int64(1));
    }

    #[test]
    fn enum_decodes_any_legal_wire_form() {
        let codec = EnumCodec::new(color());
        for wire in [
            Value::String("Green".into()),
            Value::Int32(1),
            Value::Int64(1),
        ] {
            assert_eq!(codec.decode(&wire).unwrap(), green());
        }
    }

    #[test]
    fn enum_rejects_unknown_variants() {
        let codec = EnumCodec::new(color());
        let err = codec
            .encode(&Value::Enum {
                name: "Purple".into(),
                discriminant: 9,
            })
            .unwrap_err();
        assert_eq!(err.kind, docmap_api::error::CodecErrorKind::UnknownVariant);

        let err = codec.decode(&Value::Int64(9)).unwrap_err();
        assert_eq!(err.kind, docmap_api::error::CodecErrorKind::UnknownVariant);
    }

    #[test]
    fn enum_int32_overflow_is_a_range_error() {
        let shape = Arc::new(
            EnumShape::new("Big", IntWidth::I64).variant("Huge", i64::from(i32::MAX) + 1),
        );
        let codec = EnumCodec::new(shape);
        let as_int32 = codec.with_representation(Representation::AsInt32);
        let err = as_int32
            .encode(&Value::Enum {
                name: "Huge".into(),
                discriminant: i64::from(i32::MAX) + 1,
            })
            .unwrap_err();
        assert_eq!(err.kind, docmap_api::error::CodecErrorKind::Range);
    }

    #[test]
    fn with_representation_does_not_mutate_receiver() {
        let codec = EnumCodec::new(color());
        let _ = codec.with_representation(Representation::AsString);
        assert_eq!(codec.representation(), Representation::Unspecified);
        assert_eq!(codec.encode(&green()).unwrap(), Value::Int32(1));
    }

    #[test]
    fn option_passes_null_through() {
        let codec = OptionCodec::new(Arc::new(EnumCodec::new(color())));
        assert_eq!(codec.encode(&Value::Null).unwrap(), Value::Null);
        assert_eq!(codec.decode(&Value::Null).unwrap(), Value::Null);
        assert_eq!(codec.encode(&green()).unwrap(), Value::Int32(1));
    }

    #[test]
    fn scalar_codecs_are_shape_strict() {
        let codec = StringCodec;
        assert_eq!(
            codec.encode(&Value::String("ok".into())).unwrap(),
            Value::String("ok".into())
        );
        assert!(codec.encode(&Value::Int32(1)).is_err());
        assert!(codec.as_representation_configurable().is_none());
        assert!(codec.as_child_configurable().is_none());
    }
}
