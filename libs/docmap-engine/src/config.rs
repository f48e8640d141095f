use std::sync::Arc;

use serde::Deserialize;

use docmap_api::value::ValueKind;

use crate::conventions::{CamelCaseElementNameConvention, ConventionSet};
use crate::enum_representation::EnumRepresentationConvention;
use crate::error::MappingError;

/// Mapping configuration — parsed from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MappingConfig {
    /// Wire kind for enum-typed members (`"string"`, `"int32"`, `"int64"`).
    /// Absent means each enum codec keeps its own default.
    #[serde(default)]
    pub enum_representation: Option<ValueKind>,

    /// Rewrite element names to lowerCamelCase.
    #[serde(default = "default_camel_case_elements")]
    pub camel_case_elements: bool,
}

fn default_camel_case_elements() -> bool {
    true
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            enum_representation: None,
            camel_case_elements: true,
        }
    }
}

impl MappingConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, MappingError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| MappingError::Config(format!("{path}: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, MappingError> {
        toml::from_str(toml_str).map_err(|e| MappingError::Config(e.to_string()))
    }

    /// Build the convention set this configuration describes.
    ///
    /// This is where an illegal `enum_representation` kind surfaces as
    /// `InvalidConfiguration` — before any class map is built.
    pub fn conventions(&self) -> Result<ConventionSet, MappingError> {
        let mut set = ConventionSet::new();
        if self.camel_case_elements {
            set.push(Arc::new(CamelCaseElementNameConvention));
        }
        if let Some(kind) = self.enum_representation {
            set.push(Arc::new(EnumRepresentationConvention::from_kind(kind)?));
        }
        Ok(set)
    }
}
