use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub tracker: TrackerConfig,
    pub checkout: CheckoutConfig,
    pub ui: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            tracker: TrackerConfig::default(),
            checkout: CheckoutConfig::default(),
            ui: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Cadencia del avance de etapas
    pub tick_interval_ms: u32,
    pub eta_label: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 4000,
            eta_label: "10-15 min".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    pub delivery_fee: f64,
    /// Espera antes de ir a la página de seguimiento (para ver el toast)
    pub redirect_delay_ms: u32,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            delivery_fee: 4.99,
            redirect_delay_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub toast_duration_ms: u32,
    pub max_cuisine_badges: usize,
    pub max_delivery_cost_filter: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            max_cuisine_badges: 3,
            max_delivery_cost_filter: 10,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "TRACKER_TICK_INTERVAL_MS" => option_env!("TRACKER_TICK_INTERVAL_MS"),
            "TRACKER_ETA_LABEL" => option_env!("TRACKER_ETA_LABEL"),
            "DELIVERY_FEE" => option_env!("DELIVERY_FEE"),
            "CHECKOUT_REDIRECT_DELAY_MS" => option_env!("CHECKOUT_REDIRECT_DELAY_MS"),
            "TOAST_DURATION_MS" => option_env!("TOAST_DURATION_MS"),
            "MAX_CUISINE_BADGES" => option_env!("MAX_CUISINE_BADGES"),
            "MAX_DELIVERY_COST_FILTER" => option_env!("MAX_DELIVERY_COST_FILTER"),
            _ => None,
        })
    }

    /// Valores ausentes o inválidos caen al default
    fn from_lookup(lookup: impl Fn(&str) -> Option<&'static str>) -> Self {
        let defaults = Self::default();

        Self {
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_env(lookup("ENABLE_LOGGING")).unwrap_or(defaults.enable_logging),
            tracker: TrackerConfig {
                tick_interval_ms: parse_env(lookup("TRACKER_TICK_INTERVAL_MS"))
                    .filter(|ms: &u32| *ms > 0)
                    .unwrap_or(defaults.tracker.tick_interval_ms),
                eta_label: lookup("TRACKER_ETA_LABEL")
                    .map(str::to_string)
                    .unwrap_or(defaults.tracker.eta_label),
            },
            checkout: CheckoutConfig {
                delivery_fee: parse_env(lookup("DELIVERY_FEE"))
                    .filter(|fee: &f64| *fee >= 0.0)
                    .unwrap_or(defaults.checkout.delivery_fee),
                redirect_delay_ms: parse_env(lookup("CHECKOUT_REDIRECT_DELAY_MS"))
                    .unwrap_or(defaults.checkout.redirect_delay_ms),
            },
            ui: UIConfig {
                toast_duration_ms: parse_env(lookup("TOAST_DURATION_MS")).unwrap_or(defaults.ui.toast_duration_ms),
                max_cuisine_badges: parse_env(lookup("MAX_CUISINE_BADGES")).unwrap_or(defaults.ui.max_cuisine_badges),
                max_delivery_cost_filter: parse_env(lookup("MAX_DELIVERY_COST_FILTER"))
                    .unwrap_or(defaults.ui.max_delivery_cost_filter),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

/// Valor de entorno tipado; None si falta o no parsea
fn parse_env<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tracker.tick_interval_ms, 4000);
        assert_eq!(config.checkout.delivery_fee, 4.99);
        assert_eq!(config.ui.max_cuisine_badges, 3);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_lookup_overrides_and_fallbacks() {
        let config = AppConfig::from_lookup(|key| match key {
            "ENVIRONMENT" => Some("production"),
            "TRACKER_TICK_INTERVAL_MS" => Some("1500"),
            "DELIVERY_FEE" => Some("not-a-number"),
            "ENABLE_LOGGING" => Some("false"),
            _ => None,
        });

        assert_eq!(config.environment, "production");
        assert_eq!(config.tracker.tick_interval_ms, 1500);
        assert_eq!(config.checkout.delivery_fee, 4.99);
        assert!(!config.is_logging_enabled());
    }

    #[test]
    fn test_each_field_parses_its_own_type() {
        let config = AppConfig::from_lookup(|key| match key {
            "ENABLE_LOGGING" => Some("true"),
            "TRACKER_TICK_INTERVAL_MS" => Some(" 2500 "),
            "DELIVERY_FEE" => Some("2.5"),
            "CHECKOUT_REDIRECT_DELAY_MS" => Some("750"),
            "TOAST_DURATION_MS" => Some("5000"),
            "MAX_CUISINE_BADGES" => Some("5"),
            "MAX_DELIVERY_COST_FILTER" => Some("20"),
            _ => None,
        });

        assert!(config.is_logging_enabled());
        assert_eq!(config.tracker.tick_interval_ms, 2500);
        assert_eq!(config.checkout.delivery_fee, 2.5);
        assert_eq!(config.checkout.redirect_delay_ms, 750);
        assert_eq!(config.ui.toast_duration_ms, 5000);
        assert_eq!(config.ui.max_cuisine_badges, 5);
        assert_eq!(config.ui.max_delivery_cost_filter, 20);
    }

    #[test]
    fn test_negative_fee_is_rejected() {
        let config = AppConfig::from_lookup(|key| (key == "DELIVERY_FEE").then_some("-1"));
        assert_eq!(config.checkout.delivery_fee, 4.99);
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        let config = AppConfig::from_lookup(|key| (key == "TRACKER_TICK_INTERVAL_MS").then_some("0"));
        assert_eq!(config.tracker.tick_interval_ms, 4000);
    }
}
