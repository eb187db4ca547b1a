//! Allocation workflow controller
//!
//! Orchestrates the four allocation operations (import, list, clear, slot
//! generation) against the scheduling API and mirrors each response into
//! local display state. Operations are independent: each has its own busy
//! flag and its own error slot, cleared on the next attempt of that same
//! operation. Display state always reflects the last successful read; a
//! failed list clears the rows rather than presenting stale data as current.

use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::api::ScheduleApi;
use crate::confirm::Confirm;
use crate::constants::CLEAR_CONFIRMATION_PHRASE;
use crate::models::{
    Allocation, ClearRequest, DivisionRef, FieldInfo, GenerateRequest, ImportSummary, LeagueInfo,
    Scope, SlotPreview,
};
use crate::season;

/// Per-operation busy flags. A set flag makes re-entrant submission of the
/// same operation a no-op; cross-operation overlap is accepted.
#[derive(Debug, Default, Clone)]
pub struct BusyFlags {
    pub loading: bool,
    pub importing: bool,
    pub listing: bool,
    pub clearing: bool,
    pub previewing: bool,
    pub applying: bool,
}

/// Per-operation error slots, 1:1 with remote call sites.
#[derive(Debug, Default, Clone)]
pub struct OperationErrors {
    pub load: Option<String>,
    pub import: Option<String>,
    pub list: Option<String>,
    pub clear: Option<String>,
    pub preview: Option<String>,
    pub apply: Option<String>,
}

/// Disposition of a clear attempt. A phrase mismatch is a deliberate
/// user-abort path, not a failure: no call made, no error shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearResult {
    Cleared(u32),
    Aborted,
    MissingScope,
    Busy,
    Failed,
}

#[derive(Debug)]
pub struct AllocationConsole {
    api: ScheduleApi,

    // Reference data loaded once per session
    pub divisions: Vec<DivisionRef>,
    pub fields: Vec<FieldInfo>,
    pub league: Option<LeagueInfo>,

    // Filter and form state
    pub scope_filter: String,
    pub field_filter: String,
    pub date_from: String,
    pub date_to: String,
    pub generator_division: String,
    pub selected_file: Option<PathBuf>,

    // Mirrors of the last successful responses
    pub allocations: Vec<Allocation>,
    pub last_import: Option<ImportSummary>,
    pub preview: Option<SlotPreview>,
    pub last_apply_created: Option<usize>,

    pub busy: BusyFlags,
    pub errors: OperationErrors,
    pub info: Option<String>,
}

impl AllocationConsole {
    pub fn new(api: ScheduleApi) -> Self {
        Self {
            api,
            divisions: Vec::new(),
            fields: Vec::new(),
            league: None,
            scope_filter: String::new(),
            field_filter: String::new(),
            date_from: String::new(),
            date_to: String::new(),
            generator_division: String::new(),
            selected_file: None,
            allocations: Vec::new(),
            last_import: None,
            preview: None,
            last_apply_created: None,
            busy: BusyFlags::default(),
            errors: OperationErrors::default(),
            info: None,
        }
    }

    /// Fetches divisions, fields, and league info. Any failure lands in the
    /// load-dependencies error slot.
    pub async fn load_dependencies(&mut self) -> bool {
        if self.busy.loading {
            return false;
        }
        self.busy.loading = true;
        self.errors.load = None;

        let result = futures::future::try_join3(
            self.api.divisions(),
            self.api.fields(),
            self.api.league(),
        )
        .await;

        self.busy.loading = false;
        match result {
            Ok((divisions, fields, league)) => {
                info!(
                    "Loaded {} divisions and {} fields",
                    divisions.len(),
                    fields.len()
                );
                self.divisions = divisions;
                self.fields = fields;
                self.league = Some(league);
                true
            }
            Err(e) => {
                warn!("Failed to load workflow dependencies: {e}");
                self.errors.load = Some(format!("Failed to load divisions and fields: {e}"));
                false
            }
        }
    }

    /// Fills the date range only where the user has not already typed a
    /// value. Applied once per range computation; never overwrites.
    pub fn ensure_default_range(&mut self, today: NaiveDate) {
        let (from, to) = season::default_range(self.league.as_ref(), today);
        if self.date_from.is_empty() {
            self.date_from = from.format("%Y-%m-%d").to_string();
        }
        if self.date_to.is_empty() {
            self.date_to = to.format("%Y-%m-%d").to_string();
        }
    }

    pub fn select_file(&mut self, path: PathBuf) {
        self.selected_file = Some(path);
    }

    /// Uploads the selected CSV. Failure keeps the selected file so the
    /// user can retry without re-choosing it.
    pub async fn import(&mut self) -> bool {
        if self.busy.importing {
            return false;
        }
        self.errors.import = None;

        let Some(file) = self.selected_file.clone() else {
            self.errors.import = Some("Choose a CSV file before importing".to_string());
            return false;
        };

        self.busy.importing = true;
        let result = self.api.import_allocations(&file).await;
        self.busy.importing = false;

        match result {
            Ok(summary) => {
                info!(
                    "Import finished: {} upserted, {} rejected, {} skipped",
                    summary.upserted, summary.rejected, summary.skipped
                );
                self.last_import = Some(summary);
                true
            }
            Err(e) => {
                warn!("Import failed: {e}");
                self.errors.import = Some(format!("Import failed: {e}"));
                false
            }
        }
    }

    /// Runs the filtered query. An empty result is informational, not an
    /// error. A failed read clears the rows.
    pub async fn list(&mut self) -> bool {
        if self.busy.listing {
            return false;
        }
        self.busy.listing = true;
        self.errors.list = None;
        self.info = None;

        let division = non_empty(&self.scope_filter);
        let field_key = non_empty(&self.field_filter);
        let result = self.api.list_allocations(division, field_key).await;
        self.busy.listing = false;

        match result {
            Ok(allocations) => {
                if allocations.is_empty() {
                    self.info = Some("No allocations matched the current filters".to_string());
                }
                self.allocations = allocations;
                true
            }
            Err(e) => {
                warn!("Allocation list failed: {e}");
                self.allocations.clear();
                self.errors.list = Some(format!("Failed to list allocations: {e}"));
                false
            }
        }
    }

    /// Bulk delete, gated behind the typed confirmation phrase. Requires a
    /// non-empty scope filter. On success the deleted count is reported and
    /// the list refreshed.
    pub async fn clear(&mut self, confirmer: &impl Confirm) -> ClearResult {
        if self.busy.clearing {
            return ClearResult::Busy;
        }
        self.errors.clear = None;

        if self.scope_filter.trim().is_empty() {
            self.errors.clear =
                Some("A scope filter is required before clearing allocations".to_string());
            return ClearResult::MissingScope;
        }

        let prompt = format!(
            "This permanently deletes all '{}' allocations between {} and {}.",
            self.scope_filter, self.date_from, self.date_to
        );
        let confirmed = match confirmer
            .confirm_phrase(&prompt, CLEAR_CONFIRMATION_PHRASE)
            .await
        {
            Ok(confirmed) => confirmed,
            Err(e) => {
                self.errors.clear = Some(format!("Failed to clear allocations: {e}"));
                return ClearResult::Failed;
            }
        };
        if !confirmed {
            // Deliberate user-abort path: zero calls made, nothing shown
            info!("Clear aborted at confirmation prompt");
            return ClearResult::Aborted;
        }

        let body = ClearRequest {
            scope: Scope::from(self.scope_filter.trim().to_string()),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            field_key: non_empty(&self.field_filter).map(str::to_string),
        };

        self.busy.clearing = true;
        let result = self.api.clear_allocations(&body).await;
        self.busy.clearing = false;

        match result {
            Ok(outcome) => {
                info!("Cleared {} allocations", outcome.deleted);
                self.info = Some(format!("Deleted {} allocations", outcome.deleted));
                // Refresh so the rows reflect the delete
                self.list().await;
                ClearResult::Cleared(outcome.deleted)
            }
            Err(e) => {
                warn!("Clear failed: {e}");
                self.errors.clear = Some(format!("Failed to clear allocations: {e}"));
                ClearResult::Failed
            }
        }
    }

    /// Dry-run slot generation. Stores the full response for display
    /// without committing anything.
    pub async fn preview(&mut self) -> bool {
        if self.busy.previewing {
            return false;
        }
        self.errors.preview = None;

        let Some(body) = self.generate_request() else {
            self.errors.preview = Some("Select a division before previewing slots".to_string());
            return false;
        };

        self.busy.previewing = true;
        let result = self.api.preview_slots(&body).await;
        self.busy.previewing = false;

        match result {
            Ok(preview) => {
                info!(
                    "Preview returned {} slots and {} conflicts",
                    preview.slots.len(),
                    preview.conflicts.len()
                );
                self.preview = Some(preview);
                true
            }
            Err(e) => {
                warn!("Preview failed: {e}");
                self.errors.preview = Some(format!("Failed to preview slots: {e}"));
                false
            }
        }
    }

    /// Commits slot generation. On success the stored preview is discarded,
    /// forcing a fresh preview next time.
    pub async fn apply(&mut self) -> bool {
        if self.busy.applying {
            return false;
        }
        self.errors.apply = None;

        let Some(body) = self.generate_request() else {
            self.errors.apply = Some("Select a division before applying slots".to_string());
            return false;
        };

        self.busy.applying = true;
        let result = self.api.apply_slots(&body).await;
        self.busy.applying = false;

        match result {
            Ok(outcome) => {
                let created = outcome.created.len();
                info!("Applied slot generation: {created} slots created");
                self.last_apply_created = Some(created);
                self.preview = None;
                self.info = Some(format!("Created {created} slots"));
                true
            }
            Err(e) => {
                warn!("Apply failed: {e}");
                self.errors.apply = Some(format!("Failed to apply slots: {e}"));
                false
            }
        }
    }

    fn generate_request(&self) -> Option<GenerateRequest> {
        let division = self.generator_division.trim();
        if division.is_empty() {
            return None;
        }
        Some(GenerateRequest {
            division: division.to_string(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            field_key: non_empty(&self.field_filter).map(str::to_string),
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::create_test_http_client;

    fn console(domain: &str) -> AllocationConsole {
        AllocationConsole::new(ScheduleApi::with_client(create_test_http_client(), domain))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_ensure_default_range_fills_empty_fields() {
        let mut console = console("http://localhost:9");
        console.ensure_default_range(date(2026, 5, 1));
        assert_eq!(console.date_from, "2026-03-01");
        assert_eq!(console.date_to, "2026-07-31");
    }

    #[test]
    fn test_ensure_default_range_never_overwrites_user_values() {
        let mut console = console("http://localhost:9");
        console.date_from = "2026-04-15".to_string();
        console.ensure_default_range(date(2026, 5, 1));
        assert_eq!(console.date_from, "2026-04-15");
        assert_eq!(console.date_to, "2026-07-31");
    }

    #[test]
    fn test_ensure_default_range_uses_season_bounds() {
        let mut console = console("http://localhost:9");
        console.league = Some(LeagueInfo {
            season: Some("2027-fall".to_string()),
        });
        console.ensure_default_range(date(2026, 5, 1));
        assert_eq!(console.date_from, "2027-08-01");
        assert_eq!(console.date_to, "2027-11-30");
    }

    #[tokio::test]
    async fn test_import_without_file_sets_error_and_makes_no_call() {
        let mut console = console("http://localhost:9");
        assert!(!console.import().await);
        assert!(console.errors.import.is_some());
    }

    #[tokio::test]
    async fn test_clear_requires_scope_filter() {
        let mut console = console("http://localhost:9");
        let result = console
            .clear(&crate::confirm::ScriptedConfirm::with_phrase(
                CLEAR_CONFIRMATION_PHRASE,
            ))
            .await;
        assert_eq!(result, ClearResult::MissingScope);
        assert!(console.errors.clear.is_some());
    }

    #[tokio::test]
    async fn test_preview_requires_division() {
        let mut console = console("http://localhost:9");
        assert!(!console.preview().await);
        assert!(console.errors.preview.is_some());
    }

    #[tokio::test]
    async fn test_busy_flag_makes_reentrant_import_a_noop() {
        let mut console = console("http://localhost:9");
        console.selected_file = Some(PathBuf::from("/tmp/whatever.csv"));
        console.busy.importing = true;
        assert!(!console.import().await);
        // The busy path returns before touching the error slot
        assert!(console.errors.import.is_none());
    }
}
