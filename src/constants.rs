//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and fixed strings so the rest of
//! the codebase stays free of inline literals.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Scope token denoting league-wide applicability, as opposed to a
/// specific division code.
pub const LEAGUE_SCOPE: &str = "LEAGUE";

/// Exact phrase the user must type to confirm a bulk allocation delete.
/// Match is case-sensitive; anything else aborts with no call made.
pub const CLEAR_CONFIRMATION_PHRASE: &str = "DELETE ALLOCATIONS";

/// Display caps for long server-reported lists
pub mod display {
    /// Maximum import row errors rendered before the overflow indicator
    pub const IMPORT_ERROR_LIMIT: usize = 50;

    /// Maximum generation conflicts rendered before the overflow indicator
    pub const CONFLICT_LIMIT: usize = 20;
}

/// Season window constants for deriving default date ranges
pub mod season {
    /// Spring season start (March)
    pub const SPRING_START_MONTH: u32 = 3;

    /// Spring season end (July)
    pub const SPRING_END_MONTH: u32 = 7;

    /// Last day of the spring season end month
    pub const SPRING_END_DAY: u32 = 31;

    /// Fall season start (August)
    pub const FALL_START_MONTH: u32 = 8;

    /// Fall season end (November)
    pub const FALL_END_MONTH: u32 = 11;

    /// Last day of the fall season end month
    pub const FALL_END_DAY: u32 = 30;
}

/// Fixed review reasons sent with practice-request transitions.
/// Not user-editable in this version.
pub mod review_reasons {
    /// Reason attached to an approval
    pub const APPROVE: &str = "Approved by commissioner";

    /// Reason attached to a rejection
    pub const REJECT: &str = "Slot no longer available";
}
