use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use dsm_sentiment::{score_batch, SentimentLabel};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

pub(super) const EMPTY_BATCH_MESSAGE: &str = "texts array cannot be empty";

#[derive(Debug, Deserialize)]
pub(super) struct PredictRequest {
    pub texts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct PredictResponse {
    pub scores: Vec<f64>,
}

pub(super) async fn predict_batch(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;

    if request.texts.is_empty() {
        return Err(ApiError::new(req_id.0, "bad_request", EMPTY_BATCH_MESSAGE));
    }

    let analyzer = Arc::clone(&state.analyzer);
    let texts = request.texts;
    let scores = tokio::task::spawn_blocking(move || score_batch(&*analyzer, texts.as_slice()))
        .await
        .map_err(|e| prediction_failed(req_id.0.clone(), &e))?
        .map_err(|e| prediction_failed(req_id.0.clone(), &e))?;

    let (negative, neutral, positive) = scores.iter().fold(
        (0_usize, 0_usize, 0_usize),
        |(n, u, p), &score| match SentimentLabel::from_score(score) {
            SentimentLabel::Negative => (n + 1, u, p),
            SentimentLabel::Neutral => (n, u + 1, p),
            SentimentLabel::Positive => (n, u, p + 1),
        },
    );
    tracing::debug!(
        request_id = %req_id.0,
        batch_size = scores.len(),
        negative,
        neutral,
        positive,
        "scored batch"
    );

    Ok(Json(PredictResponse { scores }))
}

/// Schema failures keep the extractor's message; the code follows its status.
fn map_json_rejection(request_id: String, rejection: &JsonRejection) -> ApiError {
    let code = match rejection.status() {
        StatusCode::UNPROCESSABLE_ENTITY => "validation_error",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "unsupported_media_type",
        StatusCode::PAYLOAD_TOO_LARGE => "payload_too_large",
        status if status.is_client_error() => "bad_request",
        _ => "internal_error",
    };
    ApiError::new(request_id, code, rejection.body_text())
}

fn prediction_failed(request_id: String, error: &dyn std::fmt::Display) -> ApiError {
    ApiError::new(
        request_id,
        "internal_error",
        format!("Prediction failed: {error}"),
    )
}
