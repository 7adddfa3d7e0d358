//! # Configuration State
//!
//! Stores shop configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PARADISE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use paradise_core::validation::{validate_price, validate_rate};
use paradise_core::{Money, PricingPolicy, Rate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Shop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in help and on receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Shipping threshold, flat shipping and tax rate
    pub pricing: PricingPolicy,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Paradise Nursery"
    /// - Currency: $
    /// - Pricing: free shipping over $50.00, else $9.99; 10% tax
    fn default() -> Self {
        ConfigState {
            store_name: "Paradise Nursery".to_string(),
            currency_symbol: "$".to_string(),
            pricing: PricingPolicy::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PARADISE_STORE_NAME`: Override store name
    /// - `PARADISE_TAX_RATE`: Tax rate in percent (e.g., "8.25")
    /// - `PARADISE_FREE_SHIPPING_OVER`: Free-shipping threshold (e.g., "75.00")
    /// - `PARADISE_FLAT_SHIPPING`: Flat shipping charge (e.g., "4.99")
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("PARADISE_STORE_NAME") {
            let store_name = store_name.trim();
            if !store_name.is_empty() {
                config.store_name = store_name.to_string();
            }
        }

        if let Some(raw) = lookup("PARADISE_TAX_RATE") {
            match parse_percentage(&raw) {
                Some(rate) => config.pricing.tax_rate = rate,
                None => warn!(value = %raw, "ignoring invalid PARADISE_TAX_RATE"),
            }
        }

        if let Some(raw) = lookup("PARADISE_FREE_SHIPPING_OVER") {
            match parse_amount(&raw) {
                Some(amount) => config.pricing.free_shipping_over = amount,
                None => warn!(value = %raw, "ignoring invalid PARADISE_FREE_SHIPPING_OVER"),
            }
        }

        if let Some(raw) = lookup("PARADISE_FLAT_SHIPPING") {
            match parse_amount(&raw) {
                Some(amount) => config.pricing.flat_shipping = amount,
                None => warn!(value = %raw, "ignoring invalid PARADISE_FLAT_SHIPPING"),
            }
        }

        config
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::Money;
    /// use paradise_shop::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            Money::from_cents(amount.cents().abs()).to_decimal_string()
        )
    }
}

/// Non-negative decimal amount.
fn parse_amount(raw: &str) -> Option<Money> {
    let amount: Money = raw.parse().ok()?;
    validate_price(amount).ok()?;
    Some(amount)
}

/// Percentage between 0 and 100.
fn parse_percentage(raw: &str) -> Option<Rate> {
    let pct: f64 = raw.trim().parse().ok()?;
    if !pct.is_finite() || pct < 0.0 {
        return None;
    }
    let rate = Rate::from_percentage(pct);
    validate_rate(rate).ok()?;
    Some(rate)
}
