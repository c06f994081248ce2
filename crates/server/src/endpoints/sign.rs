//! # POST /sign
//!
//! リクエスト本文のJSON文字列をUTF-8バイト列として署名し、Base64で返す。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use base64::Engine;
use kryptos_types::SignResponse;

use super::b64;
use crate::config::AppState;
use crate::error::ServerError;

/// POST /sign — 入力文字列への署名。
///
/// `null` または空文字列は署名サービスを呼ばずに400を返す。
pub async fn handle_sign(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Option<String>>,
) -> Result<Json<SignResponse>, ServerError> {
    let input = body
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ServerError::BadRequest("input must not be empty".into()))?;

    let signature = state.service.sign(input.as_bytes())?;
    tracing::debug!(input_len = input.len(), "署名しました");

    Ok(Json(SignResponse {
        signature: b64().encode(signature),
    }))
}
