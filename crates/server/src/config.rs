//! # サーバー設定・共有状態
//!
//! 環境変数からの設定読み込みとサーバーの共有状態の定義。

use std::sync::Arc;

use anyhow::Context;
use kryptos_crypto::{KeyParams, SigningService, DEFAULT_KEY_BITS};

/// 待ち受けアドレスのデフォルト
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// サーバー設定。起動時に1度だけ読み込む。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// 待ち受けアドレス（`KRYPTOS_BIND_ADDR`）
    pub bind_addr: String,
    /// RSA鍵生成パラメータ（`KRYPTOS_RSA_KEY_BITS`）
    pub key_params: KeyParams,
}

impl ServerConfig {
    /// 環境変数から構築する。
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から構築する。未設定の項目はデフォルト値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr =
            lookup("KRYPTOS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let bits = match lookup("KRYPTOS_RSA_KEY_BITS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("KRYPTOS_RSA_KEY_BITSが数値ではありません: {raw}"))?,
            None => DEFAULT_KEY_BITS,
        };

        Ok(Self {
            bind_addr,
            key_params: KeyParams { bits },
        })
    }
}

/// サーバーの共有状態。
///
/// 署名サービスは起動時に1度だけ構築し、全ハンドラで共有する。
pub struct AppState {
    /// RSA署名サービス
    pub service: Arc<SigningService>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.key_params.bits, 2048);
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("KRYPTOS_BIND_ADDR", "127.0.0.1:9000"),
            ("KRYPTOS_RSA_KEY_BITS", "3072"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.key_params.bits, 3072);
    }

    #[test]
    fn test_non_numeric_key_bits_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[("KRYPTOS_RSA_KEY_BITS", "big")]));
        assert!(result.is_err());
    }
}
