use std::sync::Arc;

use crate::member::MemberMap;

/// A reusable, stateless rule applied to every member map while a class map
/// is being built.
///
/// Conventions are best-effort refinements: one that does not apply to a
/// member leaves it untouched and never fails. Implementations must be
/// immutable after construction so a single instance can be applied across
/// members and threads.
pub trait Convention: Send + Sync {
    /// Convention name (for observability — logs).
    fn name(&self) -> &str;

    fn apply(&self, member: &mut MemberMap);
}

/// Ordered set of conventions, applied in registration order.
#[derive(Default, Clone)]
pub struct ConventionSet {
    conventions: Vec<Arc<dyn Convention>>,
}

impl std::fmt::Debug for ConventionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.conventions.iter().map(|c| c.name()).collect();
        f.debug_struct("ConventionSet").field("conventions", &names).finish()
    }
}

impl ConventionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, convention: Arc<dyn Convention>) {
        self.conventions.push(convention);
    }

    /// Add a convention, builder-style.
    pub fn with(mut self, convention: Arc<dyn Convention>) -> Self {
        self.push(convention);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    /// Run every convention over the member, in order.
    pub fn apply(&self, member: &mut MemberMap) {
        for convention in &self.conventions {
            convention.apply(member);
            tracing::trace!(
                convention = %convention.name(),
                member = %member.member_name(),
                "applied convention"
            );
        }
    }
}

/// Rewrites element names from snake_case member names to lowerCamelCase.
pub struct CamelCaseElementNameConvention;

impl Convention for CamelCaseElementNameConvention {
    fn name(&self) -> &str {
        "camel_case_element_name"
    }

    fn apply(&self, member: &mut MemberMap) {
        member.set_element_name(lower_camel_case(member.member_name()));
    }
}

fn lower_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for (i, ch) in name.chars().enumerate() {
        if ch == '_' {
            upper_next = true;
        } else if i == 0 {
            out.extend(ch.to_lowercase());
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docmap_api::schema::FieldKind;

    #[test]
    fn camel_cases_element_names() {
        for (member_name, expected) in [
            ("created_at_utc", "createdAtUtc"),
            ("title", "title"),
            ("Title", "title"),
            ("a_b_c", "aBC"),
        ] {
            let mut member = MemberMap::new(member_name, FieldKind::Str);
            CamelCaseElementNameConvention.apply(&mut member);
            assert_eq!(member.element_name(), expected, "{member_name}");
        }
    }

    #[test]
    fn set_applies_in_registration_order() {
        struct Suffix(&'static str);
        impl Convention for Suffix {
            fn name(&self) -> &str {
                "suffix"
            }
            fn apply(&self, member: &mut MemberMap) {
                let name = format!("{}{}", member.element_name(), self.0);
                member.set_element_name(name);
            }
        }

        let set = ConventionSet::new()
            .with(Arc::new(Suffix("_a")))
            .with(Arc::new(Suffix("_b")));
        let mut member = MemberMap::new("x", FieldKind::Str);
        set.apply(&mut member);
        assert_eq!(member.element_name(), "x_a_b");
    }
}
