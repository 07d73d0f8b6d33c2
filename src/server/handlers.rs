use super::types::{ApiError, ChatRequest, ChatResponse, ImageQuery, ImageRequest, PngImage};
use crate::inference::{ChatPayload, ImagePayload, InferenceClient};
use axum::{
    extract::{Query, State, rejection::JsonRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn InferenceClient>,
}

/// Chat mode: forward `{messages}` to the named model and wrap the raw
/// result. Parse failures land in the same 500 bucket as upstream errors.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::upstream(rejection.body_text()))?;

    let (model, messages) = match (request.model, request.messages) {
        (Some(model), Some(messages)) if !model.is_empty() => (model, messages),
        _ => return Err(ApiError::validation("Model and messages are required")),
    };

    let request_id = Uuid::new_v4();
    info!(%request_id, model = %model, turns = messages.len(), "Forwarding chat request");

    match state.client.run_chat(&model, ChatPayload { messages }).await {
        Ok(result) => Ok(Json(ChatResponse { response: result })),
        Err(e) => {
            error!(%request_id, "Chat request failed: {}", e);
            Err(ApiError::upstream(e.to_string()))
        }
    }
}

pub async fn image_get(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Result<PngImage, ApiError> {
    let (model, prompt) = require_image_params(
        query.model,
        query.prompt,
        "Model and prompt are required in query parameters",
    )?;

    run_image(&state, model, prompt).await
}

pub async fn image_post(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> Result<PngImage, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::image_failure(rejection.body_text()))?;

    let (model, prompt) = require_image_params(
        request.model,
        request.prompt,
        "Model and prompt are required in the request body",
    )?;

    run_image(&state, model, prompt).await
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

fn require_image_params(
    model: Option<String>,
    prompt: Option<String>,
    message: &str,
) -> Result<(String, String), ApiError> {
    match (model, prompt) {
        (Some(model), Some(prompt)) if !model.is_empty() && !prompt.is_empty() => {
            Ok((model, prompt))
        }
        _ => Err(ApiError::validation(message)),
    }
}

async fn run_image(state: &AppState, model: String, prompt: String) -> Result<PngImage, ApiError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, model = %model, "Forwarding image request");

    match state.client.run_image(&model, ImagePayload { prompt }).await {
        Ok(image) => Ok(PngImage(image)),
        Err(e) => {
            error!(%request_id, "Image request failed: {}", e);
            Err(ApiError::image_failure(e.to_string()))
        }
    }
}
