use std::sync::Arc;

use docmap_api::representation::Representation;
use docmap_api::schema::FieldKind;
use docmap_api::value::ValueKind;

use crate::conventions::Convention;
use crate::error::MappingError;
use crate::member::MemberMap;

/// Convention that sets the wire representation for enum-typed members.
///
/// Applies to members declared as an enum or as optional-of-enum. In both
/// cases the installed codec (or, for optionals, its child) is asked for a
/// reconfigured copy via the representation-configurable capability; a codec
/// without the capability is left alone. The convention never fails and
/// never touches other member settings.
#[derive(Debug)]
pub struct EnumRepresentationConvention {
    representation: Representation,
}

impl EnumRepresentationConvention {
    /// The enum type itself makes every representation legal, so this
    /// constructor is total; validation of untyped input lives in
    /// [`from_kind`](Self::from_kind).
    pub fn new(representation: Representation) -> Self {
        Self { representation }
    }

    /// Construct from a document scalar kind (the form config files use).
    ///
    /// Fails with `InvalidConfiguration` unless the kind is string, int32 or
    /// int64 — validated here, once, never at apply time.
    pub fn from_kind(kind: ValueKind) -> Result<Self, MappingError> {
        match Representation::from_kind(kind) {
            Some(representation) => Ok(Self::new(representation)),
            None => Err(MappingError::InvalidConfiguration(kind)),
        }
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }
}

/// Exactly one level of unwrapping: optional-of-optional-of-enum does not
/// qualify.
fn is_optional_enum(kind: &FieldKind) -> bool {
    matches!(kind, FieldKind::Optional(inner) if matches!(inner.as_ref(), FieldKind::Enum(_)))
}

impl Convention for EnumRepresentationConvention {
    fn name(&self) -> &str {
        "enum_representation"
    }

    fn apply(&self, member: &mut MemberMap) {
        if member.kind().as_enum().is_some() {
            let codec = Arc::clone(member.codec());
            if let Some(configurable) = codec.as_representation_configurable() {
                member.set_codec(configurable.with_representation(self.representation));
            }
            return;
        }

        if is_optional_enum(member.kind()) {
            let codec = Arc::clone(member.codec());
            if let Some(wrapper) = codec.as_child_configurable() {
                let child = wrapper.child_codec();
                if let Some(configurable) = child.as_representation_configurable() {
                    let child = configurable.with_representation(self.representation);
                    member.set_codec(wrapper.with_child_codec(child));
                }
            }
        }
    }
}
