//! API credentials

use std::fmt;

use super::ConfigError;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "API_KEY";
/// Environment variable holding the application key
pub const APP_KEY_ENV: &str = "APP_KEY";

/// Key pair sent with every monitoring API request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    app_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            app_key: app_key.into(),
        }
    }

    /// Read both keys from `API_KEY` and `APP_KEY`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read both keys through `lookup`
    ///
    /// A missing or empty value is an error; an empty key is never sent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, API_KEY_ENV)?;
        let app_key = required(&lookup, APP_KEY_ENV)?;
        Ok(Self { api_key, app_key })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("app_key", &"<redacted>")
            .finish()
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name)),
    }
}
