//! # Kryptos 署名サーバー
//!
//! プロセス起動時に生成したRSA鍵ペアで、入力文字列への署名・検証と公開鍵の公開を行う。
//!
//! ## 起動シーケンス
//! 1. 環境変数から設定を読み込む
//! 2. RSA鍵ペアを生成（失敗した場合は起動しない）
//! 3. エンドポイントの受付開始
//!
//! ## API エンドポイント
//! - `POST /sign` — 入力文字列（JSON文字列）への署名
//! - `GET /publickey` — 公開鍵（Base64 PKCS#1 DER）
//! - `POST /verify` — 署名の検証

mod config;
mod endpoints;
mod error;

use std::sync::Arc;

use kryptos_crypto::SigningService;
use tracing_subscriber::EnvFilter;

use crate::config::{AppState, ServerConfig};
use crate::endpoints::{handle_public_key, handle_sign, handle_verify};

/// axumルーターを構築する。
fn build_router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/sign", axum::routing::post(handle_sign))
        .route("/publickey", axum::routing::get(handle_public_key))
        .route("/verify", axum::routing::post(handle_verify))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    // 鍵生成はCPUを占有するため、ブロッキングスレッドで行う
    tracing::info!(bits = config.key_params.bits, "RSA鍵ペアを生成中...");
    let params = config.key_params;
    let service = tokio::task::spawn_blocking(move || SigningService::generate(params)).await??;
    tracing::info!(fingerprint = %service.key_fingerprint()?, "鍵生成完了");

    let state = Arc::new(AppState {
        service: Arc::new(service),
    });
    let app = build_router(state);

    tracing::info!("署名サーバーを {} で起動します", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---------------------------------------------------------------------------
// テスト
// ---------------------------------------------------------------------------
