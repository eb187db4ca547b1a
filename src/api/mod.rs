pub mod client;
pub mod http;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
#[allow(unused_imports)]
pub use client::*;

use reqwest::Client;
use std::path::Path;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{
    Allocation, ApplyOutcome, ClearOutcome, ClearRequest, DivisionRef, FieldInfo, GenerateRequest,
    ImportSummary, LeagueInfo, PracticeRequest, RequestStatus, ReviewRequest, SlotPreview,
};

/// Handle to the remote scheduling API: a configured client plus the base
/// domain. One async method per endpoint; all business rules (validation,
/// conflict detection, persistence) live on the other side of these calls.
#[derive(Debug, Clone)]
pub struct ScheduleApi {
    client: Client,
    api_domain: String,
}

impl ScheduleApi {
    /// Builds an API handle from loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = client::create_http_client_with_timeout(config.http_timeout_seconds)
            .map_err(AppError::ApiFetch)?;
        Ok(Self {
            client,
            api_domain: config.api_domain.clone(),
        })
    }

    /// Builds an API handle around an existing client. Used by tests to
    /// point at a mock server.
    pub fn with_client(client: Client, api_domain: impl Into<String>) -> Self {
        Self {
            client,
            api_domain: api_domain.into(),
        }
    }

    pub async fn divisions(&self) -> Result<Vec<DivisionRef>, AppError> {
        http::get_json(&self.client, &build_divisions_url(&self.api_domain)).await
    }

    pub async fn fields(&self) -> Result<Vec<FieldInfo>, AppError> {
        http::get_json(&self.client, &build_fields_url(&self.api_domain)).await
    }

    pub async fn league(&self) -> Result<LeagueInfo, AppError> {
        http::get_json(&self.client, &build_league_url(&self.api_domain)).await
    }

    /// Uploads a local CSV for bulk upsert.
    pub async fn import_allocations(&self, file: &Path) -> Result<ImportSummary, AppError> {
        http::post_multipart_file(
            &self.client,
            &build_import_allocations_url(&self.api_domain),
            file,
        )
        .await
    }

    pub async fn list_allocations(
        &self,
        division: Option<&str>,
        field_key: Option<&str>,
    ) -> Result<Vec<Allocation>, AppError> {
        let url = build_list_allocations_url(&self.api_domain, division, field_key);
        http::get_json(&self.client, &url).await
    }

    pub async fn clear_allocations(&self, body: &ClearRequest) -> Result<ClearOutcome, AppError> {
        http::post_json(
            &self.client,
            &build_clear_allocations_url(&self.api_domain),
            body,
        )
        .await
    }

    /// Dry-run slot generation; commits nothing.
    pub async fn preview_slots(&self, body: &GenerateRequest) -> Result<SlotPreview, AppError> {
        http::post_json(&self.client, &build_preview_slots_url(&self.api_domain), body).await
    }

    pub async fn apply_slots(&self, body: &GenerateRequest) -> Result<ApplyOutcome, AppError> {
        http::post_json(&self.client, &build_apply_slots_url(&self.api_domain), body).await
    }

    pub async fn list_practice_requests(
        &self,
        status: Option<RequestStatus>,
    ) -> Result<Vec<PracticeRequest>, AppError> {
        let url =
            build_practice_requests_url(&self.api_domain, status.map(RequestStatus::as_str));
        http::get_json(&self.client, &url).await
    }

    /// Requests the Pending → Approved transition. The updated request in
    /// the response is returned but callers reload the list rather than
    /// trusting it.
    pub async fn approve_request(
        &self,
        request_id: &str,
        reason: &str,
    ) -> Result<PracticeRequest, AppError> {
        let body = ReviewRequest {
            reason: reason.to_string(),
        };
        http::patch_json(
            &self.client,
            &build_approve_request_url(&self.api_domain, request_id),
            &body,
        )
        .await
    }

    /// Requests the Pending → Rejected transition.
    pub async fn reject_request(
        &self,
        request_id: &str,
        reason: &str,
    ) -> Result<PracticeRequest, AppError> {
        let body = ReviewRequest {
            reason: reason.to_string(),
        };
        http::patch_json(
            &self.client,
            &build_reject_request_url(&self.api_domain, request_id),
            &body,
        )
        .await
    }
}
