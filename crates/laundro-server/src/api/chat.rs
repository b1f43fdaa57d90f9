use axum::{Extension, Json};
use laundro_core::{ChatTurn, ReplyAction};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{extract::ApiJson, ApiResponse};

#[derive(Debug, Deserialize)]
pub(super) struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub text: String,
}

pub(super) async fn chat_reply(
    Extension(req_id): Extension<RequestId>,
    ApiJson(request): ApiJson<ChatRequest>,
) -> Json<ApiResponse<ReplyAction>> {
    let action = laundro_core::reply(&request.history, &request.text);
    tracing::debug!(
        history = request.history.len(),
        redirect = action.redirect_delay().is_some(),
        "chat reply"
    );
    ApiResponse::new(action, req_id.0)
}
