//! Practice-request review controller
//!
//! Lists coach-submitted practice-time requests filtered by status and
//! drives the approve/reject transitions. Both mutations are confirmation
//! gated and carry fixed reason strings. There is no optimistic local
//! mutation: a request's status is only trusted after the list is reloaded.

use tracing::{info, warn};

use crate::api::ScheduleApi;
use crate::confirm::Confirm;
use crate::constants::review_reasons;
use crate::models::{PracticeRequest, RequestStatus};

/// Derived counters over the currently loaded (filtered) list. Not a
/// separate count endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
}

/// Disposition of a review attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewResult {
    /// Transition requested and list reloaded
    Completed,
    /// User declined the confirmation; zero calls made, no state change
    Declined,
    /// Request is not Pending; transitions are terminal
    NotReviewable,
    /// No loaded request with that id
    NotFound,
    /// That request already has a mutation in flight
    Busy,
    Failed,
}

#[derive(Debug, Clone, Copy)]
enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    fn reason(self) -> &'static str {
        match self {
            ReviewAction::Approve => review_reasons::APPROVE,
            ReviewAction::Reject => review_reasons::REJECT,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            ReviewAction::Approve => "Approve",
            ReviewAction::Reject => "Reject",
        }
    }
}

#[derive(Debug)]
pub struct RequestConsole {
    api: ScheduleApi,
    pub status_filter: Option<RequestStatus>,
    pub requests: Vec<PracticeRequest>,
    /// Single loading flag for the list operation
    pub loading: bool,
    /// Request id of the one in-flight mutation; only that row's actions
    /// are disabled, other rows stay interactive
    pub processing: Option<String>,
    pub last_error: Option<String>,
    pub info: Option<String>,
}

impl RequestConsole {
    pub fn new(api: ScheduleApi) -> Self {
        Self {
            api,
            status_filter: None,
            requests: Vec::new(),
            loading: false,
            processing: None,
            last_error: None,
            info: None,
        }
    }

    /// Changing the filter invalidates the loaded list; callers refetch.
    pub fn set_filter(&mut self, filter: Option<RequestStatus>) {
        self.status_filter = filter;
    }

    /// Fetches the filtered list. A failed read clears the rows so stale
    /// data is never presented as current.
    pub async fn list(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.last_error = None;

        let result = self.api.list_practice_requests(self.status_filter).await;
        self.loading = false;

        match result {
            Ok(requests) => {
                info!("Loaded {} practice requests", requests.len());
                self.requests = requests;
                true
            }
            Err(e) => {
                warn!("Practice request list failed: {e}");
                self.requests.clear();
                self.last_error = Some(format!("Failed to load practice requests: {e}"));
                false
            }
        }
    }

    pub async fn approve(&mut self, request_id: &str, confirmer: &impl Confirm) -> ReviewResult {
        self.review(request_id, ReviewAction::Approve, confirmer).await
    }

    pub async fn reject(&mut self, request_id: &str, confirmer: &impl Confirm) -> ReviewResult {
        self.review(request_id, ReviewAction::Reject, confirmer).await
    }

    async fn review(
        &mut self,
        request_id: &str,
        action: ReviewAction,
        confirmer: &impl Confirm,
    ) -> ReviewResult {
        if self.processing.as_deref() == Some(request_id) {
            return ReviewResult::Busy;
        }
        self.last_error = None;

        let Some(request) = self.requests.iter().find(|r| r.request_id == request_id) else {
            self.last_error = Some(format!("No loaded request with id '{request_id}'"));
            return ReviewResult::NotFound;
        };
        if !request.status.is_reviewable() {
            self.last_error = Some(format!(
                "Request '{request_id}' is already {}",
                request.status
            ));
            return ReviewResult::NotReviewable;
        }

        let prompt = format!(
            "{} practice request '{}' for team {} ({} {}-{})?",
            action.verb(),
            request_id,
            request.team_id,
            request.slot.game_date,
            request.slot.start_time,
            request.slot.end_time
        );
        match confirmer.confirm(&prompt).await {
            Ok(true) => {}
            Ok(false) => {
                info!("{} declined at confirmation prompt", action.verb());
                return ReviewResult::Declined;
            }
            Err(e) => {
                self.last_error = Some(format!("{} failed: {e}", action.verb()));
                return ReviewResult::Failed;
            }
        }

        self.processing = Some(request_id.to_string());
        let result = match action {
            ReviewAction::Approve => self.api.approve_request(request_id, action.reason()).await,
            ReviewAction::Reject => self.api.reject_request(request_id, action.reason()).await,
        };
        self.processing = None;

        match result {
            Ok(_updated) => {
                // Response body is discarded; status is only trusted after reload
                self.info = Some(format!("Request '{request_id}' {}d", action.verb().to_lowercase()));
                self.list().await;
                ReviewResult::Completed
            }
            Err(e) => {
                warn!("{} failed for '{request_id}': {e}", action.verb());
                self.last_error = Some(format!("{} failed: {e}", action.verb()));
                ReviewResult::Failed
            }
        }
    }

    /// Counts derived from the currently loaded list.
    pub fn counts(&self) -> RequestCounts {
        let mut counts = RequestCounts {
            pending: 0,
            approved: 0,
            rejected: 0,
            total: self.requests.len(),
        };
        for request in &self.requests {
            match request.status {
                RequestStatus::Pending => counts.pending += 1,
                RequestStatus::Approved => counts.approved += 1,
                RequestStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }
}
