use crate::error::ConfigError;
use std::env;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/index.html";
pub const DEFAULT_FAILURE_TRIGGER_VERSION: &str = "2.0.0-broken";

/// Immutable service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub version: String,
    pub template_path: String,
    pub simulate_health_failure: bool,
    pub failure_trigger_version: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(env::var("PORT").ok())?,
            version: env::var("VERSION").unwrap_or_else(|_| DEFAULT_VERSION.to_string()),
            template_path: env::var("TEMPLATE_PATH")
                .unwrap_or_else(|_| DEFAULT_TEMPLATE_PATH.to_string()),
            simulate_health_failure: parse_bool(
                "SIMULATE_HEALTH_FAILURE",
                env::var("SIMULATE_HEALTH_FAILURE").ok(),
            )?,
            failure_trigger_version: env::var("FAILURE_TRIGGER_VERSION")
                .unwrap_or_else(|_| DEFAULT_FAILURE_TRIGGER_VERSION.to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// True when `/health` should report a simulated failure.
    ///
    /// Used to exercise rollback automation: deploy a build whose version
    /// matches the trigger sentinel with the toggle on, and the health
    /// check starts returning 500.
    pub fn health_failure_active(&self) -> bool {
        self.simulate_health_failure && self.version == self.failure_trigger_version
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value, source }),
        None => Ok(DEFAULT_PORT),
    }
}

fn parse_bool(var: &str, raw: Option<String>) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(false),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidBool {
                var: var.to_string(),
                value,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: &[&str] = &[
        "PORT",
        "VERSION",
        "TEMPLATE_PATH",
        "SIMULATE_HEALTH_FAILURE",
        "FAILURE_TRIGGER_VERSION",
        "RUST_LOG",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.template_path, "templates/index.html");
        assert!(!config.simulate_health_failure);
        assert_eq!(config.failure_trigger_version, "2.0.0-broken");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom() {
        clear_env();
        env::set_var("PORT", "9090");
        env::set_var("VERSION", "2.3.1");
        env::set_var("TEMPLATE_PATH", "/srv/assets/index.html");
        env::set_var("SIMULATE_HEALTH_FAILURE", "true");
        env::set_var("FAILURE_TRIGGER_VERSION", "9.9.9-bad");
        env::set_var("RUST_LOG", "debug");

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.version, "2.3.1");
        assert_eq!(config.template_path, "/srv/assets/index.html");
        assert!(config.simulate_health_failure);
        assert_eq!(config.failure_trigger_version, "9.9.9-bad");
        assert_eq!(config.log_level, "debug");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_invalid_port() {
        clear_env();
        env::set_var("PORT", "invalid");

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_invalid_failure_toggle() {
        clear_env();
        env::set_var("SIMULATE_HEALTH_FAILURE", "maybe");

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env();
    }

    #[test]
    fn test_parse_bool_accepts_numeric_forms() {
        assert!(parse_bool("X", Some("1".to_string())).unwrap());
        assert!(!parse_bool("X", Some("0".to_string())).unwrap());
        assert!(parse_bool("X", Some("TRUE".to_string())).unwrap());
        assert!(!parse_bool("X", Some("False".to_string())).unwrap());
        assert!(!parse_bool("X", None).unwrap());
    }

    #[test]
    fn test_health_failure_requires_toggle_and_sentinel() {
        let mut config = Config {
            port: DEFAULT_PORT,
            version: "2.0.0-broken".to_string(),
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            simulate_health_failure: false,
            failure_trigger_version: DEFAULT_FAILURE_TRIGGER_VERSION.to_string(),
            log_level: "info".to_string(),
        };

        // Sentinel version alone does nothing while the toggle is off
        assert!(!config.health_failure_active());

        config.simulate_health_failure = true;
        assert!(config.health_failure_active());

        config.version = "1.0.0".to_string();
        assert!(!config.health_failure_active());
    }
}
