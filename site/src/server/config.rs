//! Site settings loaded via OrthoConfig, and the server configuration
//! derived from them.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Raw settings from CLI flags, `SITE_*` environment variables and the
/// optional config file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SITE")]
pub struct SiteSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// Port to listen on.
    pub port: Option<u16>,
    /// Report render diagnostics through the tracing observer.
    #[ortho_config(default = false)]
    pub render_diagnostics: bool,
    /// Log output format: `json` or `pretty`.
    pub log_format: Option<String>,
}

/// Invalid setting values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `host` is not an IP address.
    #[error("invalid host `{0}`: expected an IP address")]
    InvalidHost(String),
    /// `log_format` is not recognised.
    #[error("invalid log format `{0}`: expected `json` or `pretty`")]
    InvalidLogFormat(String),
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

impl SiteSettings {
    /// Socket address to bind, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidHost`] when `host` does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        let ip: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.to_owned()))?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Configured log format, defaulting to JSON.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLogFormat`] for unknown values.
    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        match self.log_format.as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("json") => Ok(LogFormat::Json),
            Some("pretty") => Ok(LogFormat::Pretty),
            Some(_) => Err(ConfigError::InvalidLogFormat(
                self.log_format.clone().unwrap_or_default(),
            )),
        }
    }
}

/// Validated configuration for [`create_server`](super::create_server).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) render_diagnostics: bool,
}

impl ServerConfig {
    /// Validate `settings` into a server configuration.
    ///
    /// # Errors
    /// Propagates [`ConfigError`] from the individual settings.
    pub fn from_settings(settings: &SiteSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            render_diagnostics: settings.render_diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "SITE_HOST",
        "SITE_PORT",
        "SITE_RENDER_DIAGNOSTICS",
        "SITE_LOG_FORMAT",
    ];

    fn load_from_empty_args() -> SiteSettings {
        SiteSettings::load_from_iter([OsString::from("site")]).expect("config should load")
    }

    fn settings(host: Option<&str>, log_format: Option<&str>) -> SiteSettings {
        SiteSettings {
            host: host.map(str::to_owned),
            port: None,
            render_diagnostics: false,
            log_format: log_format.map(str::to_owned),
        }
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert!(!settings.render_diagnostics);
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], 8080)))
        );
        assert_eq!(settings.log_format(), Ok(LogFormat::Json));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SITE_HOST", Some("127.0.0.1".to_owned())),
            ("SITE_PORT", Some("3000".to_owned())),
            ("SITE_RENDER_DIAGNOSTICS", Some("true".to_owned())),
            ("SITE_LOG_FORMAT", Some("pretty".to_owned())),
        ]);

        let settings = load_from_empty_args();
        let config = ServerConfig::from_settings(&settings).expect("valid settings");
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert!(config.render_diagnostics);
        assert_eq!(settings.log_format(), Ok(LogFormat::Pretty));
    }

    #[rstest]
    #[case("localhost")]
    #[case("")]
    fn rejects_non_ip_hosts(#[case] host: &str) {
        assert_eq!(
            settings(Some(host), None).bind_addr(),
            Err(ConfigError::InvalidHost(host.to_owned()))
        );
    }

    #[rstest]
    #[case("JSON", LogFormat::Json)]
    #[case("Pretty", LogFormat::Pretty)]
    fn log_format_is_case_insensitive(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(settings(None, Some(raw)).log_format(), Ok(expected));
    }

    #[rstest]
    fn unknown_log_format_is_rejected() {
        assert_eq!(
            settings(None, Some("xml")).log_format(),
            Err(ConfigError::InvalidLogFormat("xml".to_owned()))
        );
    }
}
