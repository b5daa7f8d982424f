//! Application configuration
//!
//! Values are layered with the `config` crate: built-in defaults, then
//! values baked in at compile time (the wasm bundle has no process
//! environment), then `PRESCRIPTO_*` variables from the environment.

use crate::error::{CoreError, CoreResult};
use crate::role::Role;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
const DEFAULT_CURRENCY: &str = "$";
const DEFAULT_ADMIN_LOGIN_PATH: &str = "/api/admin/login";
const DEFAULT_DOCTOR_LOGIN_PATH: &str = "/api/doctor/login";

/// Read-only settings shared by every view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend origin, without a trailing slash
    pub backend_url: String,
    /// Currency symbol or code printed in front of fees
    pub currency: String,
    /// Path of the admin login endpoint
    pub admin_login_path: String,
    /// Path of the doctor login endpoint
    pub doctor_login_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: option_env!("PRESCRIPTO_BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            currency: option_env!("PRESCRIPTO_CURRENCY")
                .unwrap_or(DEFAULT_CURRENCY)
                .to_string(),
            admin_login_path: DEFAULT_ADMIN_LOGIN_PATH.to_string(),
            doctor_login_path: DEFAULT_DOCTOR_LOGIN_PATH.to_string(),
        }
    }
}

impl AppConfig {
    /// Prefix of the environment variables read by [`AppConfig::load`]
    pub const ENV_PREFIX: &'static str = "PRESCRIPTO";

    /// Build a validated configuration from explicit values
    pub fn new(backend_url: impl Into<String>, currency: impl Into<String>) -> CoreResult<Self> {
        Self {
            backend_url: backend_url.into(),
            currency: currency.into(),
            ..Self::default()
        }
        .validate()
    }

    /// Load from defaults and the process environment
    pub fn load() -> CoreResult<Self> {
        Self::load_from(Environment::with_prefix(Self::ENV_PREFIX))
    }

    /// Load from defaults and the given environment source
    pub fn load_from(environment: Environment) -> CoreResult<Self> {
        let defaults = Self::default();

        let config: Self = Config::builder()
            .set_default("backend_url", defaults.backend_url)?
            .set_default("currency", defaults.currency)?
            .set_default("admin_login_path", defaults.admin_login_path)?
            .set_default("doctor_login_path", defaults.doctor_login_path)?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()
    }

    fn validate(mut self) -> CoreResult<Self> {
        let url = Url::parse(&self.backend_url).map_err(|err| {
            CoreError::invalid_config(format!("backend_url {:?}: {err}", self.backend_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::invalid_config(format!(
                "backend_url must use http or https, got {:?}",
                url.scheme()
            )));
        }
        self.backend_url = self.backend_url.trim_end_matches('/').to_string();

        for (name, path) in [
            ("admin_login_path", &self.admin_login_path),
            ("doctor_login_path", &self.doctor_login_path),
        ] {
            if !path.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "{name} must start with '/', got {path:?}"
                )));
            }
        }

        if self.currency.trim().is_empty() {
            return Err(CoreError::invalid_config("currency must not be empty"));
        }

        Ok(self)
    }

    /// Path of the login endpoint for `role`
    #[must_use]
    pub fn login_path(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_login_path,
            Role::Doctor => &self.doctor_login_path,
        }
    }

    /// Absolute login URL for `role`
    #[must_use]
    pub fn login_endpoint(&self, role: Role) -> String {
        format!("{}{}", self.backend_url, self.login_path(role))
    }

    /// Prefix an amount with the configured currency
    #[must_use]
    pub fn format_fee(&self, amount: impl Display) -> String {
        format!("{}{amount}", self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert((*key).to_string(), (*value).to_string());
        }
        Environment::with_prefix(AppConfig::ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::load_from(environment(&[])).unwrap();
        assert_eq!(config.admin_login_path, "/api/admin/login");
        assert_eq!(config.doctor_login_path, "/api/doctor/login");
        assert!(!config.currency.is_empty());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::load_from(environment(&[
            ("PRESCRIPTO_BACKEND_URL", "https://api.prescripto.test/"),
            ("PRESCRIPTO_CURRENCY", "EUR "),
        ]))
        .unwrap();

        assert_eq!(config.backend_url, "https://api.prescripto.test");
        assert_eq!(config.format_fee(40), "EUR 40");
    }

    #[test]
    fn both_roles_use_the_configured_backend() {
        let config = AppConfig::new("https://api.prescripto.test", "$").unwrap();
        assert_eq!(
            config.login_endpoint(Role::Admin),
            "https://api.prescripto.test/api/admin/login"
        );
        assert_eq!(
            config.login_endpoint(Role::Doctor),
            "https://api.prescripto.test/api/doctor/login"
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            AppConfig::new("localhost:4000", "$"),
            Err(CoreError::InvalidConfig { .. })
        ));
        assert!(matches!(
            AppConfig::new("not a url", "$"),
            Err(CoreError::InvalidConfig { .. })
        ));
        assert!(matches!(
            AppConfig::new("http://localhost:4000", "  "),
            Err(CoreError::InvalidConfig { .. })
        ));
        assert!(matches!(
            AppConfig::load_from(environment(&[(
                "PRESCRIPTO_DOCTOR_LOGIN_PATH",
                "api/doctor/login"
            )])),
            Err(CoreError::InvalidConfig { .. })
        ));
    }
}
