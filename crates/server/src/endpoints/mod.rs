//! # エンドポイント
//!
//! - `POST /sign` — 入力文字列への署名
//! - `GET /publickey` — 公開鍵（PKCS#1 DER）の取得
//! - `POST /verify` — 署名の検証

pub mod public_key;
pub mod sign;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use public_key::handle_public_key;
pub use sign::handle_sign;
pub use verify::handle_verify;

/// Base64エンジン（Standard）
pub(crate) fn b64() -> base64::engine::GeneralPurpose {
    base64::engine::general_purpose::STANDARD
}
