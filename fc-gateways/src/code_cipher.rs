//! Authenticated encryption of redemption codes.
//!
//! A sealed code is the URL-safe base64 encoding (without padding) of
//!
//! ```text
//! version (1 byte) || nonce (12 bytes) || ciphertext || tag (16 bytes)
//! ```
//!
//! The plaintext is the JSON encoded payload. A fixed associated data
//! string binds the ciphertext to its purpose and format version.

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use fc_core::{
    entities::{CodePayload, OfferId, Timestamp},
    gateways::code_cipher::{CodeCipher, CodeCipherError},
};
use rand::RngCore as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const FORMAT_VERSION: u8 = 1;
const ASSOCIATED_DATA: &[u8] = b"foodies-circle/redemption-code/v1";

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum KeyError {
    #[error("The code key is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("The code key must be 32 bytes long, but got {0} bytes")]
    Length(usize),
}

/// Seals codes with AES-256-GCM.
///
/// Changing the key invalidates all codes that have been
/// sealed before.
#[derive(Clone)]
pub struct AesGcmCodeCipher {
    cipher: Aes256Gcm,
}

impl AesGcmCodeCipher {
    pub fn new(key: [u8; KEY_LEN]) -> Self {
        let key = Key::<Aes256Gcm>::from_slice(&key);
        Self {
            cipher: Aes256Gcm::new(key),
        }
    }

    /// Creates a cipher from a base64 encoded key.
    ///
    /// Both the standard and the URL-safe alphabet are accepted.
    pub fn from_base64_key(encoded: &str) -> Result<Self, KeyError> {
        let encoded = encoded.trim();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .or_else(|_| URL_SAFE_NO_PAD.decode(encoded.trim_end_matches('=')))?;
        let key: [u8; KEY_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyError::Length(bytes.len()))?;
        Ok(Self::new(key))
    }

    /// Creates a cipher with a random key.
    pub fn generate() -> Self {
        let mut key = [0; KEY_LEN];
        rand::thread_rng().fill_bytes(&mut key);
        Self::new(key)
    }
}

impl std::fmt::Debug for AesGcmCodeCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key
        f.debug_struct("AesGcmCodeCipher").finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SealedPayload {
    code_id: String,
    offer_id: String,
    restaurant_id: String,
    reviewer_id: String,
    review_id: String,
    issued_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expires_at: Option<i64>,
}

impl From<&CodePayload> for SealedPayload {
    fn from(from: &CodePayload) -> Self {
        let CodePayload {
            code_id,
            offer_id,
            restaurant_id,
            reviewer_id,
            review_id,
            issued_at,
            expires_at,
        } = from;
        Self {
            code_id: code_id.to_string(),
            offer_id: offer_id.to_string(),
            restaurant_id: restaurant_id.to_string(),
            reviewer_id: reviewer_id.to_string(),
            review_id: review_id.to_string(),
            issued_at: issued_at.as_millis(),
            expires_at: expires_at.map(Timestamp::as_millis),
        }
    }
}

impl TryFrom<SealedPayload> for CodePayload {
    type Error = CodeCipherError;
    fn try_from(from: SealedPayload) -> Result<Self, Self::Error> {
        let SealedPayload {
            code_id,
            offer_id,
            restaurant_id,
            reviewer_id,
            review_id,
            issued_at,
            expires_at,
        } = from;
        let offer_id = offer_id
            .parse::<OfferId>()
            .map_err(|_| CodeCipherError::Malformed)?;
        let payload = CodePayload {
            code_id: code_id.into(),
            offer_id,
            restaurant_id: restaurant_id.into(),
            reviewer_id: reviewer_id.into(),
            review_id: review_id.into(),
            issued_at: Timestamp::from_millis(issued_at),
            expires_at: expires_at.map(Timestamp::from_millis),
        };
        let ids = [
            &payload.code_id,
            &payload.restaurant_id,
            &payload.reviewer_id,
            &payload.review_id,
        ];
        if !ids.iter().all(|id| id.is_valid()) {
            return Err(CodeCipherError::Malformed);
        }
        Ok(payload)
    }
}

impl CodeCipher for AesGcmCodeCipher {
    fn seal(&self, payload: &CodePayload) -> Result<String, CodeCipherError> {
        let plaintext = serde_json::to_vec(&SealedPayload::from(payload))
            .map_err(|err| CodeCipherError::Seal(err.to_string()))?;
        let mut nonce = [0; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce);
        let ciphertext = self
            .cipher
            .encrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: &plaintext,
                    aad: ASSOCIATED_DATA,
                },
            )
            .map_err(|err| CodeCipherError::Seal(err.to_string()))?;
        let mut sealed = Vec::with_capacity(1 + NONCE_LEN + ciphertext.len());
        sealed.push(FORMAT_VERSION);
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);
        Ok(URL_SAFE_NO_PAD.encode(sealed))
    }

    fn open(&self, sealed: &str) -> Result<CodePayload, CodeCipherError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(sealed.trim())
            .map_err(|_| CodeCipherError::Malformed)?;
        if bytes.len() < 1 + NONCE_LEN + TAG_LEN {
            return Err(CodeCipherError::Malformed);
        }
        let (version, rest) = bytes.split_at(1);
        if version[0] != FORMAT_VERSION {
            return Err(CodeCipherError::Malformed);
        }
        let (nonce, ciphertext) = rest.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(
                Nonce::from_slice(nonce),
                Payload {
                    msg: ciphertext,
                    aad: ASSOCIATED_DATA,
                },
            )
            .map_err(|_| CodeCipherError::Unauthentic)?;
        let payload: SealedPayload =
            serde_json::from_slice(&plaintext).map_err(|_| CodeCipherError::Malformed)?;
        payload.try_into()
    }
}
