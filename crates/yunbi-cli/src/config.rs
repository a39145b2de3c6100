/*
[INPUT]:  Optional YAML settings file and YUNBI_* environment variables
[OUTPUT]: Client settings and a configured YunbiClient
[POS]:    Configuration layer - CLI settings
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use yunbi_adapter::{ClientConfig, Credentials, DEFAULT_BASE_URL, YunbiClient};

/// Environment variable prefix, e.g. `YUNBI_ACCESS_KEY`
pub const ENV_PREFIX: &str = "YUNBI";

/// Settings for the command-line client
#[derive(Clone, Deserialize, Serialize)]
pub struct CliSettings {
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    /// API root, defaults to production
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; unset waits indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl CliSettings {
    /// Load settings from an optional file, then overlay `YUNBI_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("read settings")?;
        settings.try_deserialize().context("parse settings")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            ..ClientConfig::default()
        }
    }

    pub fn build_client(&self) -> Result<YunbiClient> {
        let credentials = Credentials::from_pair(self.access_key.clone(), self.secret_key.clone());
        YunbiClient::with_config(self.client_config(), credentials).context("build yunbi client")
    }
}

impl std::fmt::Debug for CliSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliSettings")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const ENV_KEYS: [&str; 4] = [
        "YUNBI_ACCESS_KEY",
        "YUNBI_SECRET_KEY",
        "YUNBI_BASE_URL",
        "YUNBI_TIMEOUT_SECS",
    ];

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_load_yaml_settings() {
        let settings = temp_env::with_vars_unset(ENV_KEYS, || {
            CliSettings::load(Some(fixture("settings.yaml").as_path())).unwrap()
        });
        assert_eq!(settings.access_key.as_deref(), Some("fixture-access"));
        assert_eq!(settings.secret_key.as_deref(), Some("fixture-secret"));
        assert_eq!(settings.base_url, "http://127.0.0.1:9/api/v2/");
        assert_eq!(settings.timeout_secs, Some(15));
    }

    #[test]
    fn test_environment_overlay_without_file() {
        let settings = temp_env::with_vars(
            [
                ("YUNBI_ACCESS_KEY", Some("env-access")),
                ("YUNBI_SECRET_KEY", Some("env-secret")),
                ("YUNBI_BASE_URL", None),
                ("YUNBI_TIMEOUT_SECS", Some("7")),
            ],
            || CliSettings::load(None).unwrap(),
        );
        assert_eq!(settings.access_key.as_deref(), Some("env-access"));
        assert_eq!(settings.secret_key.as_deref(), Some("env-secret"));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_secs, Some(7));
        assert_eq!(settings.client_config().timeout, Some(Duration::from_secs(7)));
        assert!(settings.build_client().unwrap().is_authenticated());
    }

    #[test]
    fn test_environment_overrides_file() {
        let settings = temp_env::with_vars(
            [
                ("YUNBI_ACCESS_KEY", None),
                ("YUNBI_SECRET_KEY", None),
                ("YUNBI_BASE_URL", None),
                ("YUNBI_TIMEOUT_SECS", Some("3")),
            ],
            || CliSettings::load(Some(fixture("settings.yaml").as_path())).unwrap(),
        );
        assert_eq!(settings.access_key.as_deref(), Some("fixture-access"));
        assert_eq!(settings.timeout_secs, Some(3));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(CliSettings::load(Some(fixture("missing.yaml").as_path())).is_err());
    }

    #[test]
    fn test_defaults_build_public_client() {
        let settings = CliSettings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        let config = settings.client_config();
        assert!(config.timeout.is_none());
        let client = settings.build_client().unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = CliSettings {
            access_key: Some("visible".to_string()),
            secret_key: Some("hidden-secret".to_string()),
            ..CliSettings::default()
        };
        let debug_str = format!("{settings:?}");
        assert!(debug_str.contains("visible"));
        assert!(!debug_str.contains("hidden-secret"));
    }
}
