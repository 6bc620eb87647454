//! Session cookie signing (HMAC-SHA256 keyed by `SECRET_KEY`)

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Malformed session token")]
    Malformed,
    #[error("Invalid session signature")]
    BadSignature,
}

/// Signs session ids as `{session_id}.{hex(hmac)}`.
#[derive(Clone)]
pub struct SessionSigner {
    secret: Vec<u8>,
}

impl SessionSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
        }
    }

    pub fn sign(&self, session_id: &Uuid) -> String {
        let id = session_id.to_string();
        let signature = hex::encode(self.mac(&id).finalize().into_bytes());
        format!("{}.{}", id, signature)
    }

    pub fn verify(&self, token: &str) -> Result<Uuid, SignatureError> {
        let (id, signature) = token.split_once('.').ok_or(SignatureError::Malformed)?;
        let signature = hex::decode(signature).map_err(|_| SignatureError::Malformed)?;

        self.mac(id)
            .verify_slice(&signature)
            .map_err(|_| SignatureError::BadSignature)?;

        Uuid::parse_str(id).map_err(|_| SignatureError::Malformed)
    }

    fn mac(&self, message: &str) -> HmacSha256 {
        // HMAC accepts keys of any length.
        let mut mac = <HmacSha256 as Mac>::new_from_slice(&self.secret)
            .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts any key length"));
        mac.update(message.as_bytes());
        mac
    }
}
