use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One catalog entry returned by the search API.
///
/// The record is kept as the raw JSON object so that fields the harvester
/// does not interpret survive a write back to disk untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Chart title, or `""` when absent or not a string.
    pub fn title(&self) -> &str {
        self.str_field("title")
    }

    /// Chart slug, or `""` when absent or not a string.
    pub fn slug(&self) -> &str {
        self.str_field("slug")
    }

    /// Raw value of any field, including ones the harvester ignores.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn str_field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// One page of a paginated search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "nbHits", default)]
    pub total_hits: Option<u64>,

    /// Page count as reported by the server, when it bothers to.
    #[serde(rename = "nbPages", default)]
    pub total_pages: Option<u64>,

    #[serde(default)]
    pub results: Vec<Record>,
}

impl Page {
    pub fn total_hits(&self) -> u64 {
        self.total_hits.unwrap_or(0)
    }
}

/// Reduced export shape for a single chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLink {
    pub title: String,
    pub slug: String,
    pub url: String,
}
