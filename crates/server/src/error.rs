//! # サーバー エラー型
//!
//! 全エンドポイントで共通のエラー型。
//! 呼び出し側の誤り（400）とサーバー内部の障害（500）を区別する。

use axum::http::StatusCode;
use kryptos_crypto::CryptoError;

/// 500応答の本文。内部の詳細はログにのみ出力する。
const INTERNAL_ERROR_BODY: &str = "internal server error";

/// サーバーエラー型。
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// 不正なリクエスト（空入力、フィールド欠落、Base64デコード失敗）
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),
    /// 内部エラー（署名失敗、公開鍵エクスポート失敗）
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<CryptoError> for ServerError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidArgument(msg) => ServerError::BadRequest(msg),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl axum::response::IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ServerError::BadRequest(_) => {
                tracing::warn!(error = %self, "リクエストを拒否しました");
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ServerError::Internal(_) => {
                tracing::error!(error = %self, "リクエスト処理中に内部エラーが発生しました");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}
