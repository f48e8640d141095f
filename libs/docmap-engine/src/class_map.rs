use docmap_api::schema::FieldKind;

use crate::conventions::ConventionSet;
use crate::member::MemberMap;

/// Finished mapping of one object type to its document form.
#[derive(Debug)]
pub struct ClassMap {
    name: String,
    members: Vec<MemberMap>,
}

impl ClassMap {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[MemberMap] {
        &self.members
    }

    pub fn member(&self, member_name: &str) -> Option<&MemberMap> {
        self.members.iter().find(|m| m.member_name() == member_name)
    }
}

/// Builds a [`ClassMap`]: declares members with default codecs, then runs the
/// convention set over each one.
pub struct ClassMapBuilder {
    name: String,
    members: Vec<MemberMap>,
    conventions: ConventionSet,
}

impl ClassMapBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            conventions: ConventionSet::new(),
        }
    }

    pub fn conventions(mut self, conventions: ConventionSet) -> Self {
        self.conventions = conventions;
        self
    }

    /// Declare a member. Order of declaration is preserved in the class map.
    pub fn member(mut self, member_name: impl Into<String>, kind: FieldKind) -> Self {
        self.members.push(MemberMap::new(member_name, kind));
        self
    }

    pub fn build(mut self) -> ClassMap {
        for member in &mut self.members {
            self.conventions.apply(member);
            tracing::debug!(
                class = %self.name,
                member = %member.member_name(),
                codec = %member.codec().name(),
                "mapped member"
            );
        }
        ClassMap {
            name: self.name,
            members: self.members,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use docmap_api::representation::Representation;
    use docmap_api::schema::{EnumShape, IntWidth};

    use super::*;
    use crate::conventions::CamelCaseElementNameConvention;
    use crate::enum_representation::EnumRepresentationConvention;

    fn mode() -> Arc<EnumShape> {
        Arc::new(
            EnumShape::new("Mode", IntWidth::I32)
                .variant("Primary", 0)
                .variant("Secondary", 1)
                .variant("Nearest", 2),
        )
    }

    #[test]
    fn builder_runs_conventions_per_member() {
        let conventions = ConventionSet::new()
            .with(Arc::new(CamelCaseElementNameConvention))
            .with(Arc::new(EnumRepresentationConvention::new(
                Representation::AsString,
            )));

        let map = ClassMapBuilder::new("Settings")
            .conventions(conventions)
            .member("read_mode", FieldKind::Enum(mode()))
            .member("fallback_mode", FieldKind::Optional(Box::new(FieldKind::Enum(mode()))))
            .member("display_name", FieldKind::Str)
            .build();

        let read_mode = map.member("read_mode").unwrap();
        assert_eq!(read_mode.element_name(), "readMode");
        assert_eq!(
            read_mode
                .codec()
                .as_representation_configurable()
                .unwrap()
                .representation(),
            Representation::AsString
        );

        let fallback = map.member("fallback_mode").unwrap();
        let child = fallback
            .codec()
            .as_child_configurable()
            .unwrap()
            .child_codec();
        assert_eq!(
            child
                .as_representation_configurable()
                .unwrap()
                .representation(),
            Representation::AsString
        );

        let display = map.member("display_name").unwrap();
        assert_eq!(display.element_name(), "displayName");
        assert!(display.codec().as_representation_configurable().is_none());
    }

    #[test]
    fn members_keep_declaration_order() {
        let map = ClassMapBuilder::new("Doc")
            .member("a", FieldKind::Str)
            .member("b", FieldKind::Int64)
            .build();
        let names: Vec<&str> = map.members().iter().map(|m| m.member_name()).collect();
        assert_eq!(names, ["a", "b"]);
        assert!(map.member("c").is_none());
    }
}
