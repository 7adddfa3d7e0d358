//! # Session State
//!
//! The shopper's checkout session plus the coupon registry it validates
//! against.
//!
//! The shop is single-threaded and owns its session outright, so there is no
//! lock around it; commands borrow it mutably.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State                                        │
//! │                                                                         │
//! │  Command                 Session call                Effect             │
//! │  ───────                 ────────────                ──────             │
//! │  add <id> ─────────────► cart_mut().add_item ──────► line +1           │
//! │  set <id> <qty> ───────► update_quantity_from_input► line = qty        │
//! │  coupon <code> ────────► apply_coupon ─────────────► slot replaced     │
//! │  quote ────────────────► quote ────────────────────► (read only)       │
//! │  checkout ─────────────► checkout ─────────────────► cart + slot reset │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use paradise_core::{AppliedCoupon, CheckoutSession, CoreResult, CouponRegistry, PricingPolicy};

/// One shopper's session.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: CheckoutSession,
    coupons: CouponRegistry,
    orders_placed: u32,
}

impl SessionState {
    /// Creates an empty session priced with `policy`.
    pub fn new(policy: PricingPolicy) -> Self {
        SessionState {
            session: CheckoutSession::new(policy),
            coupons: CouponRegistry::standard(),
            orders_placed: 0,
        }
    }

    pub fn session(&self) -> &CheckoutSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut CheckoutSession {
        &mut self.session
    }

    /// Coupons this session accepts.
    pub fn coupons(&self) -> &CouponRegistry {
        &self.coupons
    }

    /// Applies coupon text against the standard registry.
    pub fn apply_coupon(&mut self, raw: &str) -> CoreResult<AppliedCoupon> {
        self.session.apply_coupon(&self.coupons, raw)
    }

    /// Orders checked out in this process.
    pub fn orders_placed(&self) -> u32 {
        self.orders_placed
    }

    pub(crate) fn record_order(&mut self) {
        self.orders_placed += 1;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}
