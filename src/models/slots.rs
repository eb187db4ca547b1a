use serde::{Deserialize, Serialize};

/// A concrete, dated availability instance generated from an allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSlot {
    #[serde(rename = "gameDate")]
    pub game_date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "fieldKey")]
    pub field_key: String,
    #[serde(default)]
    pub division: String,
}

/// An existing commitment overlapping a would-be generated slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConflict {
    #[serde(rename = "gameDate")]
    pub game_date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "fieldKey")]
    pub field_key: String,
    #[serde(default)]
    pub division: String,
}

/// Dry-run generation result. Transient: discarded after a successful apply.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SlotPreview {
    #[serde(default)]
    pub slots: Vec<GeneratedSlot>,
    #[serde(default)]
    pub conflicts: Vec<SlotConflict>,
}

/// Result of committing slot generation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApplyOutcome {
    #[serde(default)]
    pub created: Vec<GeneratedSlot>,
}

/// Body shared by the preview and apply endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub division: String,
    #[serde(rename = "dateFrom")]
    pub date_from: String,
    #[serde(rename = "dateTo")]
    pub date_to: String,
    #[serde(rename = "fieldKey", skip_serializing_if = "Option::is_none")]
    pub field_key: Option<String>,
}
