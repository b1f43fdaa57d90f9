use axum::{extract::State, Extension, Json};
use laundro_core::{ContactForm, FranchiseForm, JobApplication, Submission};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{extract::ApiJson, ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct SubmissionAccepted {
    pub kind: &'static str,
    pub status: &'static str,
}

pub(super) async fn submit_contact(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<Json<ApiResponse<SubmissionAccepted>>, ApiError> {
    forward(&state, req_id, Submission::Contact(form)).await
}

pub(super) async fn submit_franchise(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(form): ApiJson<FranchiseForm>,
) -> Result<Json<ApiResponse<SubmissionAccepted>>, ApiError> {
    forward(&state, req_id, Submission::Franchise(form)).await
}

pub(super) async fn submit_job_application(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(form): ApiJson<JobApplication>,
) -> Result<Json<ApiResponse<SubmissionAccepted>>, ApiError> {
    forward(&state, req_id, Submission::JobApplication(form)).await
}

/// Validate, then hand the submission to the mail service exactly once.
async fn forward(
    state: &AppState,
    req_id: RequestId,
    submission: Submission,
) -> Result<Json<ApiResponse<SubmissionAccepted>>, ApiError> {
    let kind = submission.kind();

    if let Err(errors) = submission.validate() {
        tracing::info!(kind, invalid = errors.fields.len(), "rejected form submission");
        return Err(
            ApiError::new(req_id.0, "validation_error", errors.to_string())
                .with_fields(errors.fields),
        );
    }

    let Some(mailer) = state.mailer.as_ref() else {
        tracing::error!(kind, "form submitted but no mail endpoint is configured");
        return Err(ApiError::new(
            req_id.0,
            "mail_unavailable",
            "form delivery is not configured",
        ));
    };

    if let Err(e) = mailer.send(&submission).await {
        tracing::error!(kind, error = %e, "form delivery failed");
        return Err(ApiError::new(
            req_id.0,
            "mail_failed",
            "form could not be delivered",
        ));
    }

    Ok(ApiResponse::new(
        SubmissionAccepted { kind, status: "sent" },
        req_id.0,
    ))
}
