use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::LEAGUE_SCOPE;

/// Applicability of an allocation: the whole league, or one division.
/// On the wire this is the literal `LEAGUE` or a division code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    League,
    Division(String),
}

impl From<String> for Scope {
    fn from(value: String) -> Self {
        if value == LEAGUE_SCOPE {
            Scope::League
        } else {
            Scope::Division(value)
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.to_string()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::League => f.write_str(LEAGUE_SCOPE),
            Scope::Division(code) => f.write_str(code),
        }
    }
}

/// A recurring availability rule describing when and where practice or game
/// availability exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    #[serde(rename = "allocationId")]
    pub allocation_id: String,
    pub scope: Scope,
    #[serde(rename = "fieldKey")]
    pub field_key: String,
    #[serde(rename = "startsOn")]
    pub starts_on: String,
    #[serde(rename = "endsOn")]
    pub ends_on: String,
    #[serde(rename = "daysOfWeek", default)]
    pub days_of_week: Vec<String>,
    #[serde(rename = "startTimeLocal")]
    pub start_time_local: String,
    #[serde(rename = "endTimeLocal")]
    pub end_time_local: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Result of a bulk CSV import, as reported by the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImportSummary {
    #[serde(default)]
    pub upserted: u32,
    #[serde(default)]
    pub rejected: u32,
    #[serde(default)]
    pub skipped: u32,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Body for the bulk-delete endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ClearRequest {
    pub scope: Scope,
    #[serde(rename = "dateFrom")]
    pub date_from: String,
    #[serde(rename = "dateTo")]
    pub date_to: String,
    #[serde(rename = "fieldKey", skip_serializing_if = "Option::is_none")]
    pub field_key: Option<String>,
}

/// Result of a bulk delete.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClearOutcome {
    #[serde(default)]
    pub deleted: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_roundtrips_league_literal() {
        let scope: Scope = serde_json::from_str("\"LEAGUE\"").unwrap();
        assert_eq!(scope, Scope::League);
        assert_eq!(serde_json::to_string(&scope).unwrap(), "\"LEAGUE\"");
    }

    #[test]
    fn test_scope_roundtrips_division_code() {
        let scope: Scope = serde_json::from_str("\"10U\"").unwrap();
        assert_eq!(scope, Scope::Division("10U".to_string()));
        assert_eq!(serde_json::to_string(&scope).unwrap(), "\"10U\"");
    }

    #[test]
    fn test_scope_league_literal_is_case_sensitive() {
        // `League` (mixed case) is a valid division code, not the league scope
        let scope: Scope = serde_json::from_str("\"League\"").unwrap();
        assert_eq!(scope, Scope::Division("League".to_string()));
    }

    #[test]
    fn test_allocation_deserializes_wire_names() {
        let allocation: Allocation = serde_json::from_str(
            r#"{
                "allocationId": "a-17",
                "scope": "12U",
                "fieldKey": "riverside-1",
                "startsOn": "2026-03-01",
                "endsOn": "2026-07-31",
                "daysOfWeek": ["Tue", "Thu"],
                "startTimeLocal": "17:30",
                "endTimeLocal": "19:00",
                "isActive": true,
                "notes": "lights until 21:00"
            }"#,
        )
        .unwrap();
        assert_eq!(allocation.allocation_id, "a-17");
        assert_eq!(allocation.scope, Scope::Division("12U".to_string()));
        assert_eq!(allocation.days_of_week, vec!["Tue", "Thu"]);
        assert!(allocation.is_active);
        assert_eq!(allocation.notes.as_deref(), Some("lights until 21:00"));
    }

    #[test]
    fn test_import_summary_defaults() {
        let summary: ImportSummary = serde_json::from_str(r#"{"upserted": 3}"#).unwrap();
        assert_eq!(summary.upserted, 3);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.skipped, 0);
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_clear_request_omits_missing_field_key() {
        let body = ClearRequest {
            scope: Scope::League,
            date_from: "2026-03-01".to_string(),
            date_to: "2026-07-31".to_string(),
            field_key: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("fieldKey"));
        assert!(json.contains("\"scope\":\"LEAGUE\""));
    }
}
