//! Storefront configuration.
//!
//! Defaults match the live shop. Each field can be overridden with a
//! `STOREFRONT_*` environment variable.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not a valid number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Capacity of each store actor's request channel.
    pub channel_buffer: usize,
    /// Rows per page on the admin product screen.
    pub default_page_size: usize,
    /// Orders at or above this total ship for free.
    pub shipping_free_threshold: u64,
    /// Charged when an order does not qualify for free shipping.
    pub shipping_fee: u64,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            default_page_size: 10,
            shipping_free_threshold: 30000,
            shipping_fee: 3000,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any key/value source. Missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            channel_buffer: parse(&lookup, "STOREFRONT_CHANNEL_BUFFER")?.unwrap_or(defaults.channel_buffer),
            default_page_size: parse(&lookup, "STOREFRONT_PAGE_SIZE")?.unwrap_or(defaults.default_page_size),
            shipping_free_threshold: parse(&lookup, "STOREFRONT_FREE_SHIPPING_THRESHOLD")?
                .unwrap_or(defaults.shipping_free_threshold),
            shipping_fee: parse(&lookup, "STOREFRONT_SHIPPING_FEE")?.unwrap_or(defaults.shipping_fee),
        })
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.shipping_free_threshold, 30000);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("STOREFRONT_PAGE_SIZE", "20"),
            ("STOREFRONT_FREE_SHIPPING_THRESHOLD", " 50000 "),
        ]))
        .unwrap();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.shipping_free_threshold, 50000);
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_unparsable_value_is_an_error() {
        let result = StorefrontConfig::from_lookup(lookup(&[("STOREFRONT_SHIPPING_FEE", "free")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                name: "STOREFRONT_SHIPPING_FEE",
                value: "free".to_string(),
            })
        );
    }
}
