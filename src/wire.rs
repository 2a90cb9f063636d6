use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Response envelope used by every FitClub endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub data: Option<JsonValue>,
}

#[derive(Debug, Deserialize)]
pub struct ClassEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub trainer: Option<String>,
    pub weekday: String,
    pub start: String,
    #[serde(default)]
    pub duration_min: Option<u32>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub spots_left: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TrainerEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlanEntry {
    pub id: i64,
    pub name: String,
    /// Decimal string, e.g. `"29.99"`.
    pub price: String,
    /// `"week"`, `"month"` or `"year"`.
    pub period: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LeadReceiptEntry {
    #[serde(default)]
    pub received: bool,
    #[serde(default)]
    pub ticket_id: Option<String>,
}
