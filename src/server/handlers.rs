use super::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::{Error, proxy::GenerationProxy};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub proxy: GenerationProxy,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ErrorReply> {
    let request_id = Uuid::new_v4();

    let Json(body) = payload.map_err(|rejection| {
        error!(%request_id, "Failed to read request body: {}", rejection);
        let message = rejection.body_text();
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                details: Some(format!("RequestBodyError: {}", message)),
                error: message,
            }),
        )
    })?;

    let (input, mode) = GenerateRequest::from_body(body).into_generation().map_err(|e| {
        warn!(%request_id, "Rejected request: {}", e);
        error_reply(&e)
    })?;

    info!(%request_id, ?mode, "Received generation request");

    match state.proxy.generate(mode, input).await {
        Ok(result) => {
            info!(%request_id, "Generation succeeded");
            Ok(Json(GenerateResponse { result }))
        }
        Err(e) => {
            error!(%request_id, "Generation failed: {}", e.details());
            Err(error_reply(&e))
        }
    }
}

fn error_reply(error: &Error) -> ErrorReply {
    let status = match error {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::from_error(error)))
}
