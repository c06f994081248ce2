//! # エンドポイントテスト用共通ヘルパー

use std::sync::{Arc, OnceLock};

use kryptos_crypto::SigningService;

use crate::config::AppState;

/// テスト全体で共有する署名サービス。RSA鍵生成は重いため1度だけ行う。
pub fn shared_service() -> Arc<SigningService> {
    static SERVICE: OnceLock<Arc<SigningService>> = OnceLock::new();
    SERVICE
        .get_or_init(|| Arc::new(SigningService::new().expect("鍵生成に失敗")))
        .clone()
}

/// 共有サービスを持つテスト用AppStateを構築する。
pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState {
        service: shared_service(),
    })
}
