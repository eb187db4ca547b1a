use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Review state of a coach-submitted practice-time request. Transitions are
/// server-authoritative; this client only asks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    /// Whether review actions are still offered for a request in this state.
    /// Approved and Rejected are terminal.
    pub fn is_reviewable(self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" | "pending" => Ok(RequestStatus::Pending),
            "Approved" | "approved" => Ok(RequestStatus::Approved),
            "Rejected" | "rejected" => Ok(RequestStatus::Rejected),
            other => Err(AppError::missing_input(format!(
                "unknown request status '{other}' (expected Pending, Approved, or Rejected)"
            ))),
        }
    }
}

/// The concrete slot a practice request is asking for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSlot {
    #[serde(rename = "gameDate")]
    pub game_date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "fieldKey", default)]
    pub field_key: String,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A coach-submitted request for a practice slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeRequest {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "teamId")]
    pub team_id: String,
    pub division: String,
    pub status: RequestStatus,
    pub slot: RequestSlot,
    #[serde(default)]
    pub reason: String,
    #[serde(rename = "requestedUtc")]
    pub requested_utc: String,
    #[serde(rename = "reviewedUtc", default, skip_serializing_if = "Option::is_none")]
    pub reviewed_utc: Option<String>,
    #[serde(rename = "reviewedBy", default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

/// Body for the approve/reject endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewRequest {
    pub reason: String,
}
