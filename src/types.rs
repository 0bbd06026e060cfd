use crate::modules::payout::provider::{self, stripe::StripeClient, PayoutProvider};
use std::{env, sync::Arc, time::Duration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("failed to build payment provider client: {0}")]
    Provider(#[from] provider::Error),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub api_endpoint: String,
    pub secret_key: String,
    pub webhook_secret: Option<String>,
    pub webhook_tolerance: Duration,
    pub timeout: Duration,
    pub max_network_retries: u32,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub payment: PaymentConfig,
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT", 4242u16)?;

        let secret_key = lookup("STRIPE_SECRET_KEY").unwrap_or_else(|| {
            tracing::warn!("STRIPE_SECRET_KEY not set, provider calls will be rejected");
            String::new()
        });
        let webhook_secret = lookup("STRIPE_WEBHOOK_SECRET");
        let api_endpoint = lookup("STRIPE_API_ENDPOINT")
            .unwrap_or_else(|| "https://api.stripe.com".to_string())
            .trim_end_matches('/')
            .to_string();
        let webhook_tolerance = parse_var(&lookup, "STRIPE_WEBHOOK_TOLERANCE_SECS", 300u64)?;
        let timeout = parse_var(&lookup, "STRIPE_TIMEOUT_SECS", 80u64)?;
        let max_network_retries = parse_var(&lookup, "STRIPE_MAX_NETWORK_RETRIES", 1u32)?;

        Ok(Self {
            app: AppConfig { host, port },
            payment: PaymentConfig {
                api_endpoint,
                secret_key,
                webhook_secret,
                webhook_tolerance: Duration::from_secs(webhook_tolerance),
                timeout: Duration::from_secs(timeout),
                max_network_retries,
            },
        })
    }
}

#[derive(Clone, Debug)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct PaymentContext {
    pub webhook_secret: Option<String>,
    pub webhook_tolerance: Duration,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub payment: PaymentContext,
    pub provider: Arc<dyn PayoutProvider>,
}

pub trait ToContext {
    fn to_context(self) -> Result<Context, ConfigError>;
}

impl ToContext for Config {
    fn to_context(self) -> Result<Context, ConfigError> {
        let client = StripeClient::new(
            self.payment.api_endpoint,
            self.payment.secret_key,
            self.payment.timeout,
            self.payment.max_network_retries,
        )?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                port: self.app.port,
            },
            payment: PaymentContext {
                webhook_secret: self.payment.webhook_secret,
                webhook_tolerance: self.payment.webhook_tolerance,
            },
            provider: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(move |name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let Ok(config) = config_from(&[]) else {
            panic!("expected defaults to load");
        };

        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 4242);
        assert_eq!(config.payment.api_endpoint, "https://api.stripe.com");
        assert_eq!(config.payment.secret_key, "");
        assert!(config.payment.webhook_secret.is_none());
        assert_eq!(config.payment.webhook_tolerance, Duration::from_secs(300));
        assert_eq!(config.payment.timeout, Duration::from_secs(80));
        assert_eq!(config.payment.max_network_retries, 1);
    }

    #[test]
    fn reads_values_from_the_environment() {
        let Ok(config) = config_from(&[
            ("PORT", "8080"),
            ("STRIPE_SECRET_KEY", "sk_test_123"),
            ("STRIPE_WEBHOOK_SECRET", "whsec_abc"),
            ("STRIPE_API_ENDPOINT", "http://localhost:12111/"),
            ("STRIPE_MAX_NETWORK_RETRIES", "0"),
        ]) else {
            panic!("expected config to load");
        };

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.payment.secret_key, "sk_test_123");
        assert_eq!(config.payment.webhook_secret.as_deref(), Some("whsec_abc"));
        assert_eq!(config.payment.api_endpoint, "http://localhost:12111");
        assert_eq!(config.payment.max_network_retries, 0);
    }

    #[test]
    fn empty_webhook_secret_counts_as_unset() {
        let Ok(config) = config_from(&[("STRIPE_WEBHOOK_SECRET", "")]) else {
            panic!("expected config to load");
        };
        assert!(config.payment.webhook_secret.is_none());
    }

    #[test]
    fn rejects_invalid_port() {
        let Err(err) = config_from(&[("PORT", "not-a-port")]) else {
            panic!("expected an invalid PORT to be rejected");
        };
        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
    }
}
