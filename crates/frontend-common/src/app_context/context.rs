//! Application context definition

use prescripto_core::{AppConfig, dates};
use prescripto_http::client::AdminClient;
use std::fmt::Display;
use std::rc::Rc;

/// Read-only values shared with every view
#[derive(Clone)]
pub struct AppContext {
    config: Rc<AppConfig>,
    client: Option<AdminClient>,
}

impl AppContext {
    /// Build the context and the backend client for `config`
    pub fn new(config: AppConfig) -> Self {
        let client = match AdminClient::new(config.clone()) {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::error!(%err, "Failed to build backend client");
                None
            }
        };

        Self {
            config: Rc::new(config),
            client,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn backend_url(&self) -> &str {
        &self.config.backend_url
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Backend client, absent when it could not be built
    pub const fn client(&self) -> Option<&AdminClient> {
        self.client.as_ref()
    }

    /// `20_01_2000` -> `20 Jan 2000`
    pub fn slot_date_format(&self, slot_date: &str) -> String {
        dates::format_slot_date(Some(slot_date))
    }

    /// Age in whole years as of today, or `Invalid date`
    pub fn calculate_age(&self, date_of_birth: &str) -> String {
        dates::age_today(Some(date_of_birth))
    }

    pub fn format_fee(&self, amount: impl Display) -> String {
        self.config.format_fee(amount)
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AppContext {
        AppContext::new(AppConfig::new("http://localhost:4000/", "₹").unwrap())
    }

    #[test]
    fn exposes_config_values() {
        let app = context();

        assert_eq!(app.backend_url(), "http://localhost:4000");
        assert_eq!(app.currency(), "₹");
        assert!(app.client().is_some());
    }

    #[test]
    fn helpers_delegate_to_shared_utilities() {
        let app = context();

        assert_eq!(app.slot_date_format("20_01_2000"), "20 Jan 2000");
        assert_eq!(app.slot_date_format("1_2"), dates::INVALID_DATE);
        assert_eq!(
            app.calculate_age("2000-01-20"),
            dates::age_today(Some("2000-01-20"))
        );
        assert_eq!(app.calculate_age("not-a-date"), dates::INVALID_DATE);
        assert_eq!(app.format_fee(50), "₹50");
        assert_eq!(app.format_fee(50), app.config().format_fee(50));
    }
}
