//! # Kryptos 暗号処理
//!
//! プロセス単位で1つのRSA鍵ペアを保持し、署名・検証・公開鍵エクスポートを提供する。
//!
//! ## 暗号アルゴリズム
//! | 用途 | アルゴリズム |
//! |------|------------|
//! | 署名 | RSA PKCS#1 v1.5 (2048bit) |
//! | ハッシュ | SHA-256 |
//! | 公開鍵形式 | PKCS#1 RSAPublicKey DER |

mod signing;

use sha2::{Digest, Sha256};

pub use signing::{verify_with_public_key, SigningService};

/// デフォルトの鍵長（ビット）
pub const DEFAULT_KEY_BITS: usize = 2048;

/// 受け付ける最小の鍵長（ビット）
pub const MIN_KEY_BITS: usize = 2048;

/// 暗号処理のエラー型
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// 呼び出し側の入力が前提条件を満たさない
    #[error("{0}")]
    InvalidArgument(String),
    /// RSA鍵ペアの生成に失敗（起動不能）
    #[error("RSA鍵ペアの生成に失敗しました: {0}")]
    KeyGeneration(String),
    /// 署名・エクスポート中の予期しない失敗
    #[error("内部エラー: {0}")]
    Internal(String),
}

/// 鍵生成パラメータ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyParams {
    /// RSAモジュラスのビット長
    pub bits: usize,
}

impl Default for KeyParams {
    fn default() -> Self {
        Self {
            bits: DEFAULT_KEY_BITS,
        }
    }
}

/// SHA-256ハッシュ計算。
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_default_key_params() {
        assert_eq!(KeyParams::default().bits, 2048);
    }
}
