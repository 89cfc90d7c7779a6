use serde::{Deserialize, Serialize};

// A single gauge emission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub name: String,
    pub value: f64,
    pub tags: Vec<String>,
}

impl Gauge {
    pub fn new(name: impl Into<String>, value: f64, tags: &[String]) -> Self {
        Self {
            name: name.into(),
            value,
            tags: tags.to_vec(),
        }
    }

    /// DogStatsD wire form: `<name>:<value>|g|#tag1,tag2`.
    pub fn to_dogstatsd(&self) -> String {
        if self.tags.is_empty() {
            format!("{}:{}|g", self.name, self.value)
        } else {
            let tags: Vec<String> = self.tags.iter().map(|t| escape_tag(t)).collect();
            format!("{}:{}|g|#{}", self.name, self.value, tags.join(","))
        }
    }
}

// `,` separates tags and `|` separates datagram sections
fn escape_tag(tag: &str) -> String {
    tag.replace([',', '|', '\n', '\r'], "_")
}
