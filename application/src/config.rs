//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{command::oauth, infra::api::http};
use smart_default::SmartDefault;
use url::Url;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API configuration.
    pub api: Api,

    /// Durable storage configuration.
    pub storage: Storage,

    /// Shareable links configuration.
    pub share: Share,

    /// OAuth configuration.
    pub oauth: OAuth,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Backend API configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Api {
    /// Base URL of the backend API.
    #[default(Url::parse("http://127.0.0.1:8000/api/").expect("valid URL"))]
    pub base_url: Url,

    /// Timeout of every request to the backend.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Api> for http::Config {
    fn from(value: Api) -> Self {
        let Api { base_url, timeout } = value;
        Self { base_url, timeout }
    }
}

/// Durable storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Directory to persist the session in.
    #[default(PathBuf::from(".storefront"))]
    pub path: PathBuf,
}

/// Shareable links configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Share {
    /// Public origin of the storefront.
    #[default(Url::parse("http://localhost:5173/").expect("valid URL"))]
    pub origin: Url,
}

/// OAuth configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct OAuth {
    /// Application ID on the WeChat open platform.
    pub wechat_app_id: String,

    /// Client key on the Douyin open platform.
    pub douyin_app_id: String,

    /// Origin the OAuth platforms redirect back to.
    #[default(Url::parse("http://localhost:5173/").expect("valid URL"))]
    pub redirect_origin: Url,
}

impl From<OAuth> for oauth::Config {
    fn from(value: OAuth) -> Self {
        let OAuth {
            wechat_app_id,
            douyin_app_id,
            redirect_origin,
        } = value;
        Self {
            wechat_app_id,
            douyin_app_id,
            redirect_origin,
        }
    }
}

impl Config {
    /// Returns the [`service::Config`] described by this [`Config`].
    #[must_use]
    pub fn service(&self) -> service::Config {
        service::Config {
            share_origin: self.share.origin.clone(),
            oauth: self.oauth.clone().into(),
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
