//! Configuration loading and resolution.
//!
//! Each setting resolves as explicit flag, then environment variable, then
//! built-in default.

use std::time::Duration;

use dataportal::{Endpoints, DEFAULT_TIMEOUT};

use crate::types::{McpError, McpResult};

pub const ENV_RIKSDAGEN_URL: &str = "DATAPORTAL_RIKSDAGEN_URL";
pub const ENV_TYPKOD_URL: &str = "DATAPORTAL_TYPKOD_URL";
pub const ENV_FASTIGHETSSKATT_URL: &str = "DATAPORTAL_FASTIGHETSSKATT_URL";
pub const ENV_TIMEOUT_SECS: &str = "DATAPORTAL_TIMEOUT_SECS";

/// A group of tools mounted together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolGroup {
    Riksdagen,
    Fastigheter,
}

/// Which tool groups the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Service {
    Riksdagen,
    Fastigheter,
    #[default]
    All,
}

impl Service {
    pub fn includes(self, group: ToolGroup) -> bool {
        matches!(
            (self, group),
            (Service::All, _)
                | (Service::Riksdagen, ToolGroup::Riksdagen)
                | (Service::Fastigheter, ToolGroup::Fastigheter)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Service::Riksdagen => "riksdagen",
            Service::Fastigheter => "fastigheter",
            Service::All => "all",
        }
    }
}

/// Values given on the command line. `None` falls through to the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub riksdagen_url: Option<String>,
    pub typkod_url: Option<String>,
    pub fastighetsskatt_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub service: Option<Service>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoints: Endpoints,
    pub timeout: Duration,
    pub service: Service,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: DEFAULT_TIMEOUT,
            service: Service::default(),
        }
    }
}

impl Config {
    /// Resolve against the process environment.
    pub fn resolve(overrides: &ConfigOverrides) -> McpResult<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve with a custom environment lookup.
    pub fn resolve_with(
        overrides: &ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> McpResult<Self> {
        let defaults = Endpoints::default();

        let pick = |flag: &Option<String>, key: &str, default: String| -> McpResult<String> {
            let value = flag
                .clone()
                .or_else(|| env(key).filter(|v| !v.trim().is_empty()))
                .unwrap_or(default);
            check_url(key, value.trim())
        };

        let endpoints = Endpoints {
            riksdagen: pick(&overrides.riksdagen_url, ENV_RIKSDAGEN_URL, defaults.riksdagen)?,
            typkod: pick(&overrides.typkod_url, ENV_TYPKOD_URL, defaults.typkod)?,
            fastighetsskatt: pick(
                &overrides.fastighetsskatt_url,
                ENV_FASTIGHETSSKATT_URL,
                defaults.fastighetsskatt,
            )?,
        };

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => Some(secs),
            None => env(ENV_TIMEOUT_SECS)
                .map(|raw| {
                    raw.trim().parse::<u64>().map_err(|_| {
                        McpError::Config(format!("{ENV_TIMEOUT_SECS} must be an integer, got '{raw}'"))
                    })
                })
                .transpose()?,
        };
        let timeout = match timeout_secs {
            Some(0) => return Err(McpError::Config("timeout must be at least 1 second".into())),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            endpoints,
            timeout,
            service: overrides.service.unwrap_or_default(),
        })
    }
}

fn check_url(key: &str, value: &str) -> McpResult<String> {
    let parsed = url::Url::parse(value)
        .map_err(|e| McpError::Config(format!("{key}: invalid URL '{value}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(value.to_string()),
        other => Err(McpError::Config(format!(
            "{key}: unsupported scheme '{other}' in '{value}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::resolve_with(&ConfigOverrides::default(), env_of(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flag_beats_env() {
        let overrides = ConfigOverrides {
            riksdagen_url: Some("http://flag.test".into()),
            ..Default::default()
        };
        let env = env_of(&[
            (ENV_RIKSDAGEN_URL, "http://env.test"),
            (ENV_TYPKOD_URL, "http://typkod.test/rows"),
            (ENV_TIMEOUT_SECS, "5"),
        ]);
        let config = Config::resolve_with(&overrides, env).unwrap();
        assert_eq!(config.endpoints.riksdagen, "http://flag.test");
        assert_eq!(config.endpoints.typkod, "http://typkod.test/rows");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_values_rejected() {
        let env = env_of(&[(ENV_TIMEOUT_SECS, "soon")]);
        assert!(Config::resolve_with(&ConfigOverrides::default(), env).is_err());

        let overrides = ConfigOverrides {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(Config::resolve_with(&overrides, env_of(&[])).is_err());

        let env = env_of(&[(ENV_FASTIGHETSSKATT_URL, "ftp://skatt.test")]);
        assert!(Config::resolve_with(&ConfigOverrides::default(), env).is_err());
    }

    #[test]
    fn test_service_groups() {
        assert!(Service::All.includes(ToolGroup::Fastigheter));
        assert!(Service::Riksdagen.includes(ToolGroup::Riksdagen));
        assert!(!Service::Riksdagen.includes(ToolGroup::Fastigheter));
    }
}
