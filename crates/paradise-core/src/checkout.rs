//! # Checkout Session
//!
//! One shopper's cart, coupon slot and pricing policy, owned together.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Quote   │────►│ Receipt  │       │
//! │  │  Cart    │     │ (+coupon)│     │          │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           cart ops                                │             │
//! │       │           apply_coupon                            │             │
//! │       │                                                   │             │
//! │       └────────────── checkout() resets cart + coupon ◄───┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is a plain owned value. Whoever holds it passes `&mut` to the
//! code that needs to change it; there is no global cart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{CartLine, CartStore};
use crate::coupon::{AppliedCoupon, CouponRegistry, CouponSlot};
use crate::error::{CoreError, CoreResult};
use crate::pricing::{PriceBreakdown, PricingEngine, PricingPolicy};

// =============================================================================
// Receipt
// =============================================================================

/// Record of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Order identifier (UUID v4).
    pub order_id: String,

    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    /// Cart lines at the moment of checkout.
    pub lines: Vec<CartLine>,

    /// Coupon that was applied, if any.
    pub coupon: Option<AppliedCoupon>,

    pub breakdown: PriceBreakdown,
}

// =============================================================================
// Checkout Session
// =============================================================================

/// A shopper's session.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    id: Uuid,
    cart: CartStore,
    coupon: CouponSlot,
    pricing: PricingEngine,
}

impl CheckoutSession {
    /// Creates a session with an empty cart and the given policy.
    pub fn new(policy: PricingPolicy) -> Self {
        CheckoutSession {
            id: Uuid::new_v4(),
            cart: CartStore::new(),
            coupon: CouponSlot::default(),
            pricing: PricingEngine::new(policy),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access to the cart; mutation still goes through the store's
    /// operations.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn coupon(&self) -> Option<&AppliedCoupon> {
        self.coupon.applied()
    }

    pub fn policy(&self) -> &PricingPolicy {
        self.pricing.policy()
    }

    /// Applies a coupon code. See [`CouponSlot::apply`].
    pub fn apply_coupon(&mut self, registry: &CouponRegistry, raw: &str) -> CoreResult<AppliedCoupon> {
        self.coupon.apply(registry, raw)
    }

    /// Removes the applied coupon, returning it.
    pub fn remove_coupon(&mut self) -> Option<AppliedCoupon> {
        self.coupon.remove()
    }

    /// Prices the current cart with the current coupon.
    pub fn quote(&self) -> CoreResult<PriceBreakdown> {
        self.pricing.quote(self.cart.total_price(), self.coupon.rate())
    }

    /// Completes the order.
    ///
    /// ## Behavior
    /// - Empty cart: [`CoreError::EmptyCart`], nothing changes
    /// - Otherwise: returns a [`Receipt`] and resets cart and coupon
    ///
    /// No payment is taken; the receipt is what a payment step would charge.
    pub fn checkout(&mut self) -> CoreResult<Receipt> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let breakdown = self.quote()?;
        let receipt = Receipt {
            order_id: Uuid::new_v4().to_string(),
            placed_at: Utc::now(),
            lines: self.cart.lines().to_vec(),
            coupon: self.coupon.remove(),
            breakdown,
        };
        self.cart.clear_cart();

        info!(
            session_id = %self.id,
            order_id = %receipt.order_id,
            grand_total = %receipt.breakdown.grand_total,
            "checkout complete"
        );
        Ok(receipt)
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{Product, ProductId};

    fn plant(id: u32, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Plant {}", id),
            price: Money::from_cents(price_cents),
            category: "Outdoor".to_string(),
            description: String::new(),
            details: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_quote_follows_cart_and_coupon() {
        let registry = CouponRegistry::standard();
        let mut session = CheckoutSession::default();
        session.cart_mut().add_item(&plant(1, 2000));
        session.cart_mut().add_item(&plant(1, 2000));

        let quote = session.quote().unwrap();
        assert_eq!(quote.subtotal.cents(), 4000);
        assert_eq!(quote.discount, Money::zero());

        session.apply_coupon(&registry, "PARADISE10").unwrap();
        let quote = session.quote().unwrap();
        assert_eq!(quote.discount.cents(), 400);
        assert_eq!(quote.grand_total.cents(), 4959);
    }

    #[test]
    fn test_invalid_coupon_leaves_cart_and_zeroes_discount() {
        let registry = CouponRegistry::standard();
        let mut session = CheckoutSession::default();
        session.cart_mut().add_item(&plant(1, 10_000));
        session.apply_coupon(&registry, "SAVE20").unwrap();
        let cart_before = session.cart().state().clone();

        let err = session.apply_coupon(&registry, "FOO").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidCoupon {
                code: "FOO".to_string()
            }
        );
        assert_eq!(session.cart().state(), &cart_before);
        assert!(session.coupon().is_none());
        assert_eq!(session.quote().unwrap().discount, Money::zero());
    }

    #[test]
    fn test_checkout_produces_receipt_and_resets() {
        let registry = CouponRegistry::standard();
        let mut session = CheckoutSession::default();
        session.cart_mut().add_item(&plant(1, 6000));
        session.cart_mut().add_item(&plant(2, 4000));
        session.apply_coupon(&registry, "save20").unwrap();

        let receipt = session.checkout().unwrap();
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.coupon.as_ref().unwrap().code, "SAVE20");
        assert_eq!(receipt.breakdown.grand_total.cents(), 8800);
        assert!(Uuid::parse_str(&receipt.order_id).is_ok());

        assert!(session.cart().is_empty());
        assert_eq!(session.cart().total_price(), Money::zero());
        assert!(session.coupon().is_none());
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let mut session = CheckoutSession::default();
        assert_eq!(session.checkout(), Err(CoreError::EmptyCart));
    }

    #[test]
    fn test_remove_coupon() {
        let registry = CouponRegistry::standard();
        let mut session = CheckoutSession::default();
        session.apply_coupon(&registry, "PARADISE10").unwrap();
        assert_eq!(session.remove_coupon().unwrap().code, "PARADISE10");
        assert!(session.remove_coupon().is_none());
    }
}
