//! # Pricing Engine
//!
//! Turns a cart subtotal and an optional coupon into the checkout breakdown.
//!
//! ## Checkout Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal            = CartState.total_price                            │
//! │  discount            = round(subtotal × coupon rate)      (0 if none)   │
//! │  shipping            = 0 if subtotal > $50.00 else $9.99                │
//! │                        (threshold checked BEFORE the discount)          │
//! │  tax                 = round((subtotal − discount) × 10%)               │
//! │  grand total         = subtotal − discount + shipping + tax             │
//! │                                                                         │
//! │  round = half-up to the cent (see Money::percentage)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine holds no state besides its policy, so quoting the same inputs
//! twice always gives the same breakdown.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Rate;
use crate::{DEFAULT_FLAT_SHIPPING_CENTS, DEFAULT_FREE_SHIPPING_OVER_CENTS, DEFAULT_TAX_RATE_BPS};

// =============================================================================
// Pricing Policy
// =============================================================================

/// Shipping and tax parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Orders with a subtotal strictly above this ship free.
    pub free_shipping_over: Money,

    /// Shipping charged at or below the threshold.
    pub flat_shipping: Money,

    /// Sales tax on the discounted subtotal.
    pub tax_rate: Rate,
}

impl Default for PricingPolicy {
    /// $50.00 free-shipping threshold, $9.99 flat shipping, 10% tax.
    fn default() -> Self {
        PricingPolicy {
            free_shipping_over: Money::from_cents(DEFAULT_FREE_SHIPPING_OVER_CENTS),
            flat_shipping: Money::from_cents(DEFAULT_FLAT_SHIPPING_CENTS),
            tax_rate: Rate::from_bps(DEFAULT_TAX_RATE_BPS),
        }
    }
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// Everything the order summary shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub discount: Money,
    pub shipping: Money,
    pub tax: Money,
    pub grand_total: Money,
}

impl PriceBreakdown {
    /// True when the order qualified for free shipping.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// Pure checkout calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    pub fn new(policy: PricingPolicy) -> Self {
        PricingEngine { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Prices a subtotal with an optional coupon rate.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::money::Money;
    /// use paradise_core::pricing::PricingEngine;
    /// use paradise_core::types::Rate;
    ///
    /// let engine = PricingEngine::default();
    /// let quote = engine
    ///     .quote(Money::from_cents(10_000), Some(Rate::from_bps(2000)))
    ///     .unwrap();
    ///
    /// assert_eq!(quote.discount.cents(), 2000);   // $20.00
    /// assert_eq!(quote.shipping.cents(), 0);      // over $50
    /// assert_eq!(quote.tax.cents(), 800);         // 10% of $80.00
    /// assert_eq!(quote.grand_total.cents(), 8800);
    /// ```
    ///
    /// ## Errors
    /// [`CoreError::DiscountExceedsSubtotal`] if the rate would discount
    /// more than the subtotal (impossible for registry coupons, which are
    /// all below 100%).
    pub fn quote(&self, subtotal: Money, discount_rate: Option<Rate>) -> CoreResult<PriceBreakdown> {
        let subtotal = subtotal.clamp_non_negative();

        let discount = discount_rate.map_or(Money::zero(), |rate| subtotal.percentage(rate));
        if discount > subtotal {
            return Err(CoreError::DiscountExceedsSubtotal { discount, subtotal });
        }

        let shipping = if subtotal > self.policy.free_shipping_over {
            Money::zero()
        } else {
            self.policy.flat_shipping
        };

        let discounted = subtotal - discount;
        let tax = discounted.percentage(self.policy.tax_rate);
        let grand_total = discounted + shipping + tax;

        let breakdown = PriceBreakdown {
            subtotal,
            discount,
            shipping,
            tax,
            grand_total,
        };
        debug!(?breakdown, "quote");
        Ok(breakdown)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
