use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Division record as the API sends it when the full object shape is used.
/// The identifier may arrive under either `code` or `division`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DivisionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
}

/// A division reference as received on the wire: either a bare code string
/// or a full record. Resolved into a canonical code string once, here at
/// the boundary, so callers never branch on shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DivisionRef {
    Code(String),
    Record(DivisionRecord),
}

impl DivisionRef {
    /// Canonical division code. Record shapes prefer `code` over `division`.
    /// Returns `None` when neither field carries a non-empty value.
    pub fn code(&self) -> Option<&str> {
        match self {
            DivisionRef::Code(code) => {
                let trimmed = code.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            DivisionRef::Record(record) => record
                .code
                .as_deref()
                .or(record.division.as_deref())
                .map(str::trim)
                .filter(|c| !c.is_empty()),
        }
    }

    /// Bare string references are always considered active.
    pub fn is_active(&self) -> bool {
        match self {
            DivisionRef::Code(_) => true,
            DivisionRef::Record(record) => record.is_active,
        }
    }
}

/// Playing field record. `field_key` is the stable identifier; the rest is
/// descriptive and copied verbatim into CSV templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FieldInfo {
    #[serde(rename = "fieldKey", default)]
    pub field_key: String,
    #[serde(rename = "parkName", default, skip_serializing_if = "Option::is_none")]
    pub park_name: Option<String>,
    #[serde(rename = "fieldName", default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// League metadata; only the season identifier is consumed here, to derive
/// default date ranges.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeagueInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_ref_from_bare_string() {
        let division: DivisionRef = serde_json::from_str("\"10U\"").unwrap();
        assert_eq!(division.code(), Some("10U"));
        assert!(division.is_active());
    }

    #[test]
    fn test_division_ref_from_code_object() {
        let division: DivisionRef =
            serde_json::from_str(r#"{"code":"12U","displayName":"12 & Under","isActive":true}"#)
                .unwrap();
        assert_eq!(division.code(), Some("12U"));
        assert!(division.is_active());
    }

    #[test]
    fn test_division_ref_from_division_field_object() {
        let division: DivisionRef =
            serde_json::from_str(r#"{"division":"14U","isActive":false}"#).unwrap();
        assert_eq!(division.code(), Some("14U"));
        assert!(!division.is_active());
    }

    #[test]
    fn test_division_ref_prefers_code_over_division() {
        let division: DivisionRef =
            serde_json::from_str(r#"{"code":"8U","division":"other"}"#).unwrap();
        assert_eq!(division.code(), Some("8U"));
    }

    #[test]
    fn test_division_ref_missing_identifier() {
        let division: DivisionRef = serde_json::from_str(r#"{"displayName":"???"}"#).unwrap();
        assert_eq!(division.code(), None);
    }

    #[test]
    fn test_division_record_active_defaults_true() {
        let division: DivisionRef = serde_json::from_str(r#"{"code":"6U"}"#).unwrap();
        assert!(division.is_active());
    }

    #[test]
    fn test_field_info_deserializes_wire_names() {
        let field: FieldInfo = serde_json::from_str(
            r#"{"fieldKey":"riverside-1","parkName":"Riverside Park","fieldName":"Field 1","displayName":"Riverside 1"}"#,
        )
        .unwrap();
        assert_eq!(field.field_key, "riverside-1");
        assert_eq!(field.park_name.as_deref(), Some("Riverside Park"));
        assert_eq!(field.field_name.as_deref(), Some("Field 1"));
        assert_eq!(field.display_name.as_deref(), Some("Riverside 1"));
    }

    #[test]
    fn test_league_info_tolerates_missing_season() {
        let league: LeagueInfo = serde_json::from_str("{}").unwrap();
        assert!(league.season.is_none());
    }
}
