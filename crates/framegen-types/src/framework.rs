use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::{FrameworkTypeInfo, TypeCatalog};
use crate::error::{Error, Result};
use crate::normalize;

/// One structured sub-unit of a generated framework (step, pillar, tier, quadrant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default = "defaults::element_name", deserialize_with = "normalize::text")]
    pub name: String,
    #[serde(
        default = "defaults::element_description",
        deserialize_with = "normalize::text"
    )]
    pub description: String,
    #[serde(
        default = "defaults::activities",
        deserialize_with = "normalize::one_or_many"
    )]
    pub activities: Vec<String>,
    #[serde(
        default = "defaults::success_criteria",
        deserialize_with = "normalize::text"
    )]
    pub success_criteria: String,
}

/// A framework as returned by the generation endpoint, already normalized.
///
/// Fields the client does not know about are kept in `extra` so that the JSON
/// export carries everything the backend produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFramework {
    #[serde(deserialize_with = "normalize::text")]
    pub name: String,
    #[serde(rename = "type")]
    pub framework_type: String,
    #[serde(default, deserialize_with = "normalize::text")]
    pub description: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default = "defaults::when_to_use", deserialize_with = "normalize::text")]
    pub when_to_use: String,
    #[serde(
        default = "defaults::best_practices",
        deserialize_with = "normalize::one_or_many"
    )]
    pub best_practices: Vec<String>,
    #[serde(
        default = "defaults::pitfalls",
        deserialize_with = "normalize::one_or_many"
    )]
    pub pitfalls: Vec<String>,
    #[serde(
        default = "defaults::psychology_principle",
        deserialize_with = "normalize::text"
    )]
    pub psychology_principle: String,
    #[serde(
        default = "defaults::visual_concept",
        deserialize_with = "normalize::text"
    )]
    pub visual_concept: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GeneratedFramework {
    /// Decode a generation response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Resolve this framework's type against the catalog.
    pub fn type_info<'a>(&self, catalog: &'a TypeCatalog) -> Result<&'a FrameworkTypeInfo> {
        catalog
            .get(&self.framework_type)
            .ok_or_else(|| Error::UnknownType(self.framework_type.clone()))
    }
}

mod defaults {
    pub fn element_name() -> String {
        "Framework Element".to_string()
    }

    pub fn element_description() -> String {
        "Element description".to_string()
    }

    pub fn activities() -> Vec<String> {
        vec!["Key activity".to_string()]
    }

    pub fn success_criteria() -> String {
        "Success measure".to_string()
    }

    pub fn when_to_use() -> String {
        "General use cases".to_string()
    }

    pub fn best_practices() -> Vec<String> {
        vec!["Follow best practices".to_string()]
    }

    pub fn pitfalls() -> Vec<String> {
        vec!["Avoid common mistakes".to_string()]
    }

    pub fn psychology_principle() -> String {
        "Psychological foundation".to_string()
    }

    pub fn visual_concept() -> String {
        "Standard visual representation".to_string()
    }
}
