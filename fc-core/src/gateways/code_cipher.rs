use fc_entities::redemption::CodePayload;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeCipherError {
    #[error("Malformed code")]
    Malformed,
    #[error("The code could not be authenticated")]
    Unauthentic,
    #[error("Unable to seal code: {0}")]
    Seal(String),
}

/// Seals redemption code payloads into opaque, URL-safe strings
/// and opens them again.
///
/// Opening must reject every string that has not been sealed
/// with the same key.
pub trait CodeCipher {
    fn seal(&self, payload: &CodePayload) -> Result<String, CodeCipherError>;
    fn open(&self, sealed: &str) -> Result<CodePayload, CodeCipherError>;
}
