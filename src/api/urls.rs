//! URL building utilities for scheduling API endpoints

/// Builds the divisions list URL.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_divisions_url;
///
/// let url = build_divisions_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/divisions");
/// ```
pub fn build_divisions_url(api_domain: &str) -> String {
    format!("{api_domain}/divisions")
}

/// Builds the fields list URL.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_fields_url;
///
/// let url = build_fields_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/fields");
/// ```
pub fn build_fields_url(api_domain: &str) -> String {
    format!("{api_domain}/fields")
}

/// Builds the league info URL (source of season bounds).
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_league_url;
///
/// let url = build_league_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/league");
/// ```
pub fn build_league_url(api_domain: &str) -> String {
    format!("{api_domain}/league")
}

/// Builds the multipart CSV import URL.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_import_allocations_url;
///
/// let url = build_import_allocations_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/allocations/import");
/// ```
pub fn build_import_allocations_url(api_domain: &str) -> String {
    format!("{api_domain}/allocations/import")
}

/// Builds the filtered allocations list URL. Both filters are optional;
/// absent filters are omitted from the query string entirely.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_list_allocations_url;
///
/// let url = build_list_allocations_url("https://api.example.com", Some("10U"), None);
/// assert_eq!(url, "https://api.example.com/allocations?division=10U");
///
/// let url = build_list_allocations_url("https://api.example.com", None, None);
/// assert_eq!(url, "https://api.example.com/allocations");
/// ```
pub fn build_list_allocations_url(
    api_domain: &str,
    division: Option<&str>,
    field_key: Option<&str>,
) -> String {
    let mut url = format!("{api_domain}/allocations");
    let mut separator = '?';
    if let Some(division) = division {
        url.push(separator);
        url.push_str(&format!("division={division}"));
        separator = '&';
    }
    if let Some(field_key) = field_key {
        url.push(separator);
        url.push_str(&format!("fieldKey={field_key}"));
    }
    url
}

/// Builds the bulk-delete URL.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_clear_allocations_url;
///
/// let url = build_clear_allocations_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/allocations/clear");
/// ```
pub fn build_clear_allocations_url(api_domain: &str) -> String {
    format!("{api_domain}/allocations/clear")
}

/// Builds the dry-run slot generation URL.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_preview_slots_url;
///
/// let url = build_preview_slots_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/slots/preview");
/// ```
pub fn build_preview_slots_url(api_domain: &str) -> String {
    format!("{api_domain}/slots/preview")
}

/// Builds the committing slot generation URL.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_apply_slots_url;
///
/// let url = build_apply_slots_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/slots/apply");
/// ```
pub fn build_apply_slots_url(api_domain: &str) -> String {
    format!("{api_domain}/slots/apply")
}

/// Builds the filtered practice-requests list URL. An absent status filter
/// means all statuses.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_practice_requests_url;
///
/// let url = build_practice_requests_url("https://api.example.com", Some("Pending"));
/// assert_eq!(url, "https://api.example.com/practice-requests?status=Pending");
///
/// let url = build_practice_requests_url("https://api.example.com", None);
/// assert_eq!(url, "https://api.example.com/practice-requests");
/// ```
pub fn build_practice_requests_url(api_domain: &str, status: Option<&str>) -> String {
    match status {
        Some(status) => format!("{api_domain}/practice-requests?status={status}"),
        None => format!("{api_domain}/practice-requests"),
    }
}

/// Builds the approve URL for a single practice request.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_approve_request_url;
///
/// let url = build_approve_request_url("https://api.example.com", "pr-42");
/// assert_eq!(url, "https://api.example.com/practice-requests/pr-42/approve");
/// ```
pub fn build_approve_request_url(api_domain: &str, request_id: &str) -> String {
    format!("{api_domain}/practice-requests/{request_id}/approve")
}

/// Builds the reject URL for a single practice request.
///
/// # Example
/// ```
/// use fieldtime_admin::api::build_reject_request_url;
///
/// let url = build_reject_request_url("https://api.example.com", "pr-42");
/// assert_eq!(url, "https://api.example.com/practice-requests/pr-42/reject");
/// ```
pub fn build_reject_request_url(api_domain: &str, request_id: &str) -> String {
    format!("{api_domain}/practice-requests/{request_id}/reject")
}
