use crate::error::ConfigError;
use crate::utils::CheckLogger;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

pub const MALFORMED_TAGS_WARNING: &str =
    "The tags list in the lighthouse check is not configured properly";

// One entry of `instances:` exactly as the host hands it over
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawInstance {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Option<Value>,
}

/// A validated instance. `tags` holds only the user supplied base tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceConfig {
    pub url: String,
    pub name: String,
    pub tags: Vec<String>,
}

impl InstanceConfig {
    pub fn new(url: impl Into<String>, name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            tags,
        }
    }

    /// Validates a raw instance. A malformed `tags` value is not fatal: it is
    /// reported through `logger` and replaced by an empty list.
    pub fn from_raw(raw: &RawInstance, logger: &dyn CheckLogger) -> Result<Self, ConfigError> {
        let url = match raw.url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => return Err(ConfigError::MissingUrl),
        };
        let name = match raw.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Err(ConfigError::MissingName),
        };

        let tags = match &raw.tags {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => parse_tags(value).unwrap_or_else(|| {
                logger.warn(MALFORMED_TAGS_WARNING);
                Vec::new()
            }),
        };

        Ok(Self { url, name, tags })
    }

    /// Base tags followed by `lighthouse_url:<url>` and `lighthouse_name:<name>`.
    pub fn metric_tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(self.tags.len() + 2);
        tags.extend(self.tags.iter().cloned());
        tags.push(format!("lighthouse_url:{}", self.url));
        tags.push(format!("lighthouse_name:{}", self.name));
        tags
    }
}

fn parse_tags(value: &Value) -> Option<Vec<String>> {
    value
        .as_sequence()?
        .iter()
        .map(|tag| tag.as_str().map(str::to_string))
        .collect()
}
