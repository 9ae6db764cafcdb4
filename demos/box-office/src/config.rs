//! Configuration for the box office demo.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use ticket_service_core::AccountId;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "box_office=info,ticket_service_core=debug";

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter directives (trace, debug, info, warn, error)
    pub log_level: String,
    /// Account used for every demo purchase
    pub account_id: AccountId,
    /// Swap in a payment service that declines every charge
    pub decline_payments: bool,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            account_id: lookup("BOX_OFFICE_ACCOUNT_ID")
                .and_then(|s| s.parse::<i64>().ok())
                .map_or(AccountId::new(1), AccountId::new),
            decline_payments: lookup("BOX_OFFICE_DECLINE_PAYMENTS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
        }
    }
}
