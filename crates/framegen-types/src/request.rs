use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPLEXITY: &str = "medium";

/// The free-text fields of the generation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub industry: String,
    pub purpose: String,
    pub target_audience: String,
    pub complexity: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            industry: String::new(),
            purpose: String::new(),
            target_audience: String::new(),
            complexity: DEFAULT_COMPLEXITY.to_string(),
        }
    }
}

impl FormInput {
    pub fn into_request(self, framework_type: impl Into<String>) -> GenerateRequest {
        GenerateRequest {
            framework_type: framework_type.into(),
            industry: self.industry,
            purpose: self.purpose,
            target_audience: self.target_audience,
            complexity: self.complexity,
        }
    }
}

/// Body of `POST /api/generate-framework`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub framework_type: String,
    pub industry: String,
    pub purpose: String,
    pub target_audience: String,
    pub complexity: String,
}
