//! CSV template generation for availability allocation imports
//!
//! Builds the blank CSV a commissioner fills in and feeds back through the
//! import endpoint. The builder is a pure function: same divisions and
//! fields in, byte-identical document out. Row order is scope-major
//! (`LEAGUE` first, then division codes sorted case-insensitively), fields
//! in their original order within each scope.

use std::path::{Path, PathBuf};

use crate::constants::LEAGUE_SCOPE;
use crate::error::AppError;
use crate::models::{DivisionRef, FieldInfo};

/// Column order of the template document. Date, time, daysOfWeek and notes
/// columns are emitted as empty placeholders for the user to fill in; the
/// trailing descriptive columns are read-only context copied from the field
/// record.
pub const TEMPLATE_HEADER: &[&str] = &[
    "scope",
    "fieldKey",
    "startsOn",
    "endsOn",
    "daysOfWeek",
    "startTimeLocal",
    "endTimeLocal",
    "isActive",
    "notes",
    "parkName",
    "fieldName",
    "displayName",
];

/// Quotes a CSV value only when it needs it: values containing a comma,
/// double quote, or newline are wrapped in double quotes with internal
/// quotes doubled; everything else passes through verbatim.
pub fn csv_escape(value: Option<&str>) -> String {
    let value = value.unwrap_or("");
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_league_id(league_id: &str) -> String {
    league_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Download filename for a league's template.
pub fn template_filename(league_id: &str) -> String {
    format!(
        "availability_allocations_{}.csv",
        sanitize_league_id(league_id)
    )
}

/// Builds the template document: one header row, then one data row per
/// (scope, field) pair. Inactive divisions are excluded; fields with an
/// empty key are skipped. Duplicate division codes are NOT deduplicated;
/// they pass through and produce duplicate row groups.
pub fn build_template_csv(divisions: &[DivisionRef], fields: &[FieldInfo]) -> String {
    let mut codes: Vec<&str> = divisions
        .iter()
        .filter(|d| d.is_active())
        .filter_map(DivisionRef::code)
        .collect();
    // Stable sort on a case-insensitive key; ties keep source order
    codes.sort_by_key(|code| code.to_lowercase());

    let mut scopes: Vec<&str> = Vec::with_capacity(codes.len() + 1);
    scopes.push(LEAGUE_SCOPE);
    scopes.extend(codes);

    let mut lines: Vec<String> = Vec::new();
    lines.push(TEMPLATE_HEADER.join(","));

    for scope in &scopes {
        for field in fields {
            if field.field_key.trim().is_empty() {
                continue;
            }
            let row = [
                csv_escape(Some(scope)),
                csv_escape(Some(&field.field_key)),
                String::new(), // startsOn
                String::new(), // endsOn
                String::new(), // daysOfWeek
                String::new(), // startTimeLocal
                String::new(), // endTimeLocal
                "true".to_string(),
                String::new(), // notes
                csv_escape(field.park_name.as_deref()),
                csv_escape(field.field_name.as_deref()),
                csv_escape(field.display_name.as_deref()),
            ];
            lines.push(row.join(","));
        }
    }

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

/// Writes a template document as UTF-8 into `dir`, named after the league.
/// Returns the written path.
pub async fn write_template(
    dir: &Path,
    league_id: &str,
    document: &str,
) -> Result<PathBuf, AppError> {
    let path = dir.join(template_filename(league_id));
    tokio::fs::write(&path, document.as_bytes()).await?;
    Ok(path)
}
