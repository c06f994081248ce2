//! # Kryptos 共有型定義
//!
//! HTTP層とクライアントの間でやり取りするJSON構造体を提供する。
//!
//! ## エンコーディング規則
//! - Base64 (Standard): 署名、公開鍵DER
//! - フィールド名: camelCase

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// POST /sign
// ---------------------------------------------------------------------------

/// /sign のレスポンス。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    /// Base64エンコードされたPKCS#1 v1.5署名
    pub signature: String,
}

// ---------------------------------------------------------------------------
// GET /publickey
// ---------------------------------------------------------------------------

/// /publickey のレスポンス。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    /// Base64エンコードされたPKCS#1 RSAPublicKey DER
    pub public_key: String,
}

// ---------------------------------------------------------------------------
// POST /verify
// ---------------------------------------------------------------------------

/// /verify のリクエスト。
///
/// 欠落フィールドをハンドラで400として扱うため、両フィールドともOption。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// 検証対象の入力文字列（UTF-8）
    #[serde(default)]
    pub input: Option<String>,
    /// Base64エンコードされた署名
    #[serde(default)]
    pub signature: Option<String>,
}

/// /verify のレスポンス。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    /// 署名が有効かどうか
    pub is_valid: bool,
}
