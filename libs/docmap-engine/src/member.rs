use std::sync::Arc;

use docmap_api::codec::Codec;
use docmap_api::schema::FieldKind;

use crate::codecs::default_codec_for;

/// Per-member mapping descriptor: declared type, document element name and
/// the codec currently installed for the member.
///
/// Owned exclusively by the mapping-construction pass; conventions receive a
/// transient `&mut` while running and must not retain references past the
/// call.
pub struct MemberMap {
    member_name: String,
    element_name: String,
    kind: FieldKind,
    codec: Arc<dyn Codec>,
}

impl std::fmt::Debug for MemberMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemberMap")
            .field("member_name", &self.member_name)
            .field("element_name", &self.element_name)
            .field("kind", &self.kind)
            .field("codec", &self.codec.name())
            .finish()
    }
}

impl MemberMap {
    /// Create a member map with the default codec for its declared type.
    /// The element name starts out equal to the member name; conventions may
    /// rewrite it.
    pub fn new(member_name: impl Into<String>, kind: FieldKind) -> Self {
        let member_name = member_name.into();
        let codec = default_codec_for(&kind);
        Self {
            element_name: member_name.clone(),
            member_name,
            kind,
            codec,
        }
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    pub fn element_name(&self) -> &str {
        &self.element_name
    }

    pub fn set_element_name(&mut self, element_name: impl Into<String>) {
        self.element_name = element_name.into();
    }

    /// Declared type of the member, as classified at mapping-construction
    /// time.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn codec(&self) -> &Arc<dyn Codec> {
        &self.codec
    }

    pub fn set_codec(&mut self, codec: Arc<dyn Codec>) {
        self.codec = codec;
    }
}
