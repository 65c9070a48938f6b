use super::error::{TtsError, TtsResult};
use secrecy::{ExposeSecret, SecretString};

/// AWS access key pair used to sign the synthesis request
pub struct Credentials {
    access_key_id: String,
    secret_access_key: SecretString,
}

impl Credentials {
    /// Validate the key pair locally. Nothing here touches the network,
    /// so malformed keys are reported before any request is attempted.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> TtsResult<Self> {
        let access_key_id = access_key_id.trim();
        let secret_access_key = secret_access_key.trim();

        if access_key_id.is_empty() {
            return Err(TtsError::Configuration(
                "AWS access key is missing".to_string(),
            ));
        }
        if secret_access_key.is_empty() {
            return Err(TtsError::Configuration(
                "AWS secret access key is missing".to_string(),
            ));
        }
        if !access_key_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TtsError::Configuration(
                "AWS access key must be alphanumeric".to_string(),
            ));
        }
        if secret_access_key.chars().any(char::is_whitespace) {
            return Err(TtsError::Configuration(
                "AWS secret access key must not contain whitespace".to_string(),
            ));
        }

        Ok(Self {
            access_key_id: access_key_id.to_string(),
            secret_access_key: SecretString::from(secret_access_key.to_string()),
        })
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        self.secret_access_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .finish()
    }
}
