//! # POST /verify
//!
//! 入力文字列とBase64署名を受け取り、検証結果を真偽値で返す。
//! 署名の不正は `isValid: false`、フィールド欠落とBase64デコード失敗は400。

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use base64::Engine;
use kryptos_types::{VerifyRequest, VerifyResponse};

use super::b64;
use crate::config::AppState;
use crate::error::ServerError;

/// POST /verify — 署名の検証。
pub async fn handle_verify(
    State(state): State<Arc<AppState>>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ServerError> {
    let (input, signature_b64) = match (body.input, body.signature) {
        (Some(input), Some(signature)) if !input.is_empty() && !signature.is_empty() => {
            (input, signature)
        }
        _ => {
            return Err(ServerError::BadRequest(
                "input and signature must not be empty".into(),
            ))
        }
    };

    let signature = b64()
        .decode(signature_b64.as_bytes())
        .map_err(|e| ServerError::BadRequest(format!("signatureのBase64デコードに失敗: {e}")))?;

    let is_valid = state.service.verify(input.as_bytes(), &signature)?;
    tracing::debug!(is_valid, "署名を検証しました");

    Ok(Json(VerifyResponse { is_valid }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_helpers::test_state;

    fn request(input: Option<&str>, signature: Option<&str>) -> Json<VerifyRequest> {
        Json(VerifyRequest {
            input: input.map(str::to_string),
            signature: signature.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_verify_valid_signature_returns_true() {
        let state = test_state();
        let signature = b64().encode(state.service.sign(b"Test string").unwrap());

        let response = handle_verify(State(state), request(Some("Test string"), Some(&signature)))
            .await
            .unwrap()
            .0;
        assert!(response.is_valid);
    }

    /// 不正な署名はエラーではなくfalse
    #[tokio::test]
    async fn test_verify_invalid_signature_returns_false() {
        let garbage = b64().encode([0x00u8, 0x01, 0x02]);
        let response = handle_verify(State(test_state()), request(Some("Test string"), Some(&garbage)))
            .await
            .unwrap()
            .0;
        assert!(!response.is_valid);
    }

    #[tokio::test]
    async fn test_verify_signature_for_other_input_returns_false() {
        let state = test_state();
        let signature = b64().encode(state.service.sign(b"other").unwrap());

        let response = handle_verify(State(state), request(Some("Test string"), Some(&signature)))
            .await
            .unwrap()
            .0;
        assert!(!response.is_valid);
    }

    #[tokio::test]
    async fn test_verify_missing_fields_rejected() {
        for (input, signature) in [
            (None, None),
            (Some("Test string"), None),
            (None, Some("AAEC")),
            (Some(""), Some("AAEC")),
            (Some("Test string"), Some("")),
        ] {
            let result = handle_verify(State(test_state()), request(input, signature)).await;
            assert!(
                matches!(result, Err(ServerError::BadRequest(_))),
                "input={input:?} signature={signature:?}"
            );
        }
    }

    /// Base64として不正な署名は400
    #[tokio::test]
    async fn test_verify_malformed_base64_rejected() {
        let result = handle_verify(
            State(test_state()),
            request(Some("Test string"), Some("not base64!")),
        )
        .await;
        assert!(matches!(result, Err(ServerError::BadRequest(_))));
    }
}
