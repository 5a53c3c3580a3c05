//! Credential sources for the text-generation service.
//!
//! Credentials are resolved on every report request, never cached, so a key
//! exported after startup is picked up by the next attempt.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "API_KEY";

/// Where the API key comes from.
pub trait CredentialSource: Send + Sync {
    /// Current API key, or `None` when not configured. Blank values count as missing.
    fn api_key(&self) -> Option<SecretString>;

    /// Human-readable description used in configuration error messages.
    fn describe(&self) -> String;
}

/// Reads the key from an environment variable at call time.
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_ENV)
    }
}

impl CredentialSource for EnvCredential {
    fn api_key(&self) -> Option<SecretString> {
        std::env::var(&self.var).ok().and_then(non_blank)
    }

    fn describe(&self) -> String {
        format!("the {} environment variable", self.var())
    }
}

/// A fixed key, or a fixed absence of one.
pub struct StaticCredential {
    key: Option<SecretString>,
}

impl StaticCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: non_blank(key.into()),
        }
    }

    pub fn missing() -> Self {
        Self { key: None }
    }
}

impl CredentialSource for StaticCredential {
    fn api_key(&self) -> Option<SecretString> {
        self.key
            .as_ref()
            .map(|k| SecretString::from(k.expose_secret().to_string()))
    }

    fn describe(&self) -> String {
        "a static API key".to_string()
    }
}

impl std::fmt::Debug for StaticCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredential")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Inline key from the config file if present, otherwise the environment.
pub struct ConfiguredCredential {
    inline: StaticCredential,
    env: EnvCredential,
}

impl ConfiguredCredential {
    pub fn new(inline: Option<String>, env_var: impl Into<String>) -> Self {
        Self {
            inline: inline.map(StaticCredential::new).unwrap_or_else(StaticCredential::missing),
            env: EnvCredential::new(env_var),
        }
    }
}

impl CredentialSource for ConfiguredCredential {
    fn api_key(&self) -> Option<SecretString> {
        self.inline.api_key().or_else(|| self.env.api_key())
    }

    fn describe(&self) -> String {
        format!("llm.api_key in the config file or {}", self.env.describe())
    }
}

impl std::fmt::Debug for ConfiguredCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredCredential")
            .field("inline", &self.inline)
            .field("env", &self.env.var())
            .finish()
    }
}

fn non_blank(value: String) -> Option<SecretString> {
    if value.trim().is_empty() {
        None
    } else {
        Some(SecretString::from(value))
    }
}
