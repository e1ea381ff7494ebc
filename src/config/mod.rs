//! Configuration
//!
//! Credentials come from the environment; everything else has a default
//! and may be overridden by an optional YAML file.
//!
//! ## Environment
//!
//! - `API_KEY` - account API key (required)
//! - `APP_KEY` - application key (required)
//!
//! ## Configuration Format
//!
//! ```yaml
//! api_url: https://api.datadoghq.eu
//! timeout: 30s
//! ```

mod credentials;
mod settings;

pub use credentials::{API_KEY_ENV, APP_KEY_ENV, Credentials};
pub use settings::{Config, ConfigError, DEFAULT_API_URL};
