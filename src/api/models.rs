use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials and target zone for the provider API.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub email: String,
    pub zone: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<REDACTED>")
            .field("email", &self.email)
            .field("zone", &self.zone)
            .finish()
    }
}

/// A record as returned by `rec_load_all`, reduced to the fields we act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,
    pub rec_id: Option<String>,
    pub content: Option<String>,
}

impl DnsRecord {
    /// Lenient extraction from one entry of `response.recs.objs`.
    ///
    /// Returns `None` when the entry has no string `name`. An empty, zero or
    /// non-scalar `rec_id` is treated as missing.
    pub fn from_value(value: &Value) -> Option<Self> {
        let name = value.get("name")?.as_str()?.to_string();
        let rec_id = match value.get("rec_id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) if id.as_f64() != Some(0.0) => Some(id.to_string()),
            _ => None,
        };
        let content = value
            .get("content")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            name,
            rec_id,
            content,
        })
    }
}

/// Parameters for a single `rec_edit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEdit {
    pub name: String,
    pub id: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EditResponse {
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub err_code: Option<String>,
}

impl EditResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}
