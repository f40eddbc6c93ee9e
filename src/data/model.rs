use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs;

/// The live preview payload the editor renders a step against.
///
/// Subscriber and context variables have no formal schema; the catalog
/// accepts whatever is present here. The optional `payload` section feeds
/// payload autocompletion when no schema is set or enforcement is off.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PreviewData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriber: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl PreviewData {
    /// Load preview data from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Creates default mock data when no file is provided.
    pub fn sample() -> Self {
        Self {
            subscriber: Some(json!({
                "subscriberId": "sub-1",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "data": { "plan": "pro" },
            })),
            context: Some(json!({
                "environment": "development",
            })),
            payload: None,
        }
    }

    pub fn subscriber(&self) -> Option<&Value> {
        self.subscriber.as_ref()
    }

    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }
}
