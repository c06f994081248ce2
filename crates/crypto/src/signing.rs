//! # 署名サービス
//!
//! RSA鍵ペアを構築時に1度だけ生成し、以後は不変のまま保持する。
//! 全操作は鍵の読み取りのみで、`Arc`で共有して並行に呼び出せる。

use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPublicKey, EncodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::{sha256, CryptoError, KeyParams, MIN_KEY_BITS};

/// 空入力に対するエラーメッセージ（sign）
const EMPTY_INPUT: &str = "input must not be empty";

/// 空入力に対するエラーメッセージ（verify）
const EMPTY_INPUT_OR_SIGNATURE: &str = "input and signature must not be empty";

/// RSA鍵ペアを保持する署名サービス。
///
/// 署名は SHA-256 ダイジェストに対する PKCS#1 v1.5 で、同じ入力には常に同じ署名を返す。
pub struct SigningService {
    /// PKCS#1 v1.5署名用の秘密鍵（DigestInfoプレフィックス付き）
    signing_key: SigningKey<Sha256>,
    /// 検証用の公開鍵
    verifying_key: VerifyingKey<Sha256>,
    /// エクスポート用の公開鍵
    public_key: RsaPublicKey,
}

impl SigningService {
    /// デフォルト鍵長（2048bit）で鍵ペアを生成する。
    pub fn new() -> Result<Self, CryptoError> {
        Self::generate(KeyParams::default())
    }

    /// 指定パラメータでOS乱数源から鍵ペアを生成する。
    ///
    /// `MIN_KEY_BITS` 未満の鍵長、または生成失敗は `KeyGeneration` を返す。
    pub fn generate(params: KeyParams) -> Result<Self, CryptoError> {
        if params.bits < MIN_KEY_BITS {
            return Err(CryptoError::KeyGeneration(format!(
                "鍵長は{MIN_KEY_BITS}bit以上である必要があります（指定: {}bit）",
                params.bits
            )));
        }

        let private_key = RsaPrivateKey::new(&mut OsRng, params.bits)
            .map_err(|e| CryptoError::KeyGeneration(e.to_string()))?;
        Ok(Self::from_private_key(private_key))
    }

    /// 既存の秘密鍵からサービスを構築する。
    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        let public_key = private_key.to_public_key();
        let verifying_key = VerifyingKey::<Sha256>::new(public_key.clone());
        let signing_key = SigningKey::<Sha256>::new(private_key);

        Self {
            signing_key,
            verifying_key,
            public_key,
        }
    }

    /// 入力のSHA-256ダイジェストにPKCS#1 v1.5で署名し、生の署名バイト列を返す。
    pub fn sign(&self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if input.is_empty() {
            return Err(CryptoError::InvalidArgument(EMPTY_INPUT.into()));
        }

        let signature = self
            .signing_key
            .try_sign(input)
            .map_err(|e| CryptoError::Internal(format!("署名に失敗: {e}")))?;
        Ok(signature.to_vec())
    }

    /// 署名を検証する。
    ///
    /// 長さ不正・パディング不正を含め、不正な署名はすべて `Ok(false)` になる。
    /// 入力または署名が空の場合のみ `InvalidArgument` を返す。
    pub fn verify(&self, input: &[u8], signature: &[u8]) -> Result<bool, CryptoError> {
        if input.is_empty() || signature.is_empty() {
            return Err(CryptoError::InvalidArgument(EMPTY_INPUT_OR_SIGNATURE.into()));
        }
        Ok(verify_bytes(&self.verifying_key, input, signature))
    }

    /// 公開鍵をPKCS#1 RSAPublicKey DER（`SEQUENCE { modulus, publicExponent }`）で返す。
    pub fn export_public_key(&self) -> Result<Vec<u8>, CryptoError> {
        let der = self
            .public_key
            .to_pkcs1_der()
            .map_err(|e| CryptoError::Internal(format!("公開鍵のエクスポートに失敗: {e}")))?;
        Ok(der.as_bytes().to_vec())
    }

    /// 署名長（モジュラスのバイト長）
    pub fn signature_len(&self) -> usize {
        self.public_key.size()
    }

    /// エクスポートした公開鍵DERのSHA-256（hex）。起動ログでの鍵識別用。
    pub fn key_fingerprint(&self) -> Result<String, CryptoError> {
        let der = self.export_public_key()?;
        Ok(hex::encode(sha256(&der)))
    }
}

/// エクスポート済みのPKCS#1 DER公開鍵で署名を検証する。
///
/// DERが解釈できない場合は `InvalidArgument`、署名の不正は `Ok(false)`。
pub fn verify_with_public_key(
    public_key_der: &[u8],
    input: &[u8],
    signature: &[u8],
) -> Result<bool, CryptoError> {
    if input.is_empty() || signature.is_empty() {
        return Err(CryptoError::InvalidArgument(EMPTY_INPUT_OR_SIGNATURE.into()));
    }

    let public_key = RsaPublicKey::from_pkcs1_der(public_key_der)
        .map_err(|e| CryptoError::InvalidArgument(format!("公開鍵DERの解析に失敗: {e}")))?;
    let verifying_key = VerifyingKey::<Sha256>::new(public_key);
    Ok(verify_bytes(&verifying_key, input, signature))
}

fn verify_bytes(verifying_key: &VerifyingKey<Sha256>, input: &[u8], signature: &[u8]) -> bool {
    let Ok(signature) = Signature::try_from(signature) else {
        return false;
    };
    verifying_key.verify(input, &signature).is_ok()
}
