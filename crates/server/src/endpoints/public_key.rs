//! # GET /publickey

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use base64::Engine;
use kryptos_types::PublicKeyResponse;

use super::b64;
use crate::config::AppState;
use crate::error::ServerError;

/// GET /publickey — PKCS#1 RSAPublicKey DERをBase64で返す。
pub async fn handle_public_key(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PublicKeyResponse>, ServerError> {
    let der = state.service.export_public_key()?;
    Ok(Json(PublicKeyResponse {
        public_key: b64().encode(der),
    }))
}
