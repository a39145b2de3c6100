/*
[INPUT]:  Access key and secret key strings
[OUTPUT]: Credential pair with a redacted, zeroized secret
[POS]:    Auth layer - credential holder for private endpoints
[UPDATE]: When credential sources or validation rules change
*/

use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

/// API credentials for private endpoints.
///
/// The secret key is held in a `SecretString`, so it never shows up in
/// `Debug` output and is zeroed on drop.
pub struct Credentials {
    access_key: String,
    secret_key: SecretString,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Build credentials only when both halves are present.
    ///
    /// A lone access key or secret key yields `None`, so the client falls
    /// back to public-only mode.
    pub fn from_pair(access_key: Option<String>, secret_key: Option<String>) -> Option<Self> {
        match (access_key, secret_key) {
            (Some(access_key), Some(secret_key)) => Some(Self::new(access_key, secret_key)),
            (None, None) => None,
            (access_key, _) => {
                warn!(
                    has_access_key = access_key.is_some(),
                    "partial credentials supplied; private endpoints disabled"
                );
                None
            }
        }
    }

    /// The access key (sent in clear on every private request)
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Expose the secret key for signing only
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = Credentials::new("my_access_key", "my_secret");
        assert_eq!(creds.access_key(), "my_access_key");
        assert_eq!(creds.expose_secret(), "my_secret");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("my_access_key", "super_secret_key");
        let debug_str = format!("{:?}", creds);

        assert!(debug_str.contains("my_access_key"));
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_from_pair_requires_both_keys() {
        assert!(Credentials::from_pair(Some("a".into()), Some("s".into())).is_some());
        assert!(Credentials::from_pair(None, None).is_none());
        assert!(Credentials::from_pair(Some("a".into()), None).is_none());
        assert!(Credentials::from_pair(None, Some("s".into())).is_none());
    }
}
