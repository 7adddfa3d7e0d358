//! # Coupons
//!
//! The fixed coupon catalog and the per-session "applied coupon" slot.
//!
//! ## Coupon State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            apply(valid)                      apply(valid)               │
//! │   ┌──────────┐ ─────────────► ┌───────────────┐ ◄──────┐               │
//! │   │ NoCoupon │                │ CouponApplied │ ───────┘ (replaces)    │
//! │   └──────────┘ ◄───────────── └───────────────┘                        │
//! │        ▲       remove() or apply(invalid)                              │
//! │        │                                                               │
//! │        └── apply(invalid) on NoCoupon: stays, error surfaced           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An invalid code always clears the slot, even when a valid coupon was
//! applied before. A shopper who mistypes a second code loses the first one
//! and sees the discount drop back to zero.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Rate;
use crate::validation::normalize_coupon_code;

/// The storefront's coupon catalog: `(code, basis points)`.
pub const STANDARD_COUPONS: &[(&str, u32)] = &[("PARADISE10", 1000), ("SAVE20", 2000)];

// =============================================================================
// Applied Coupon
// =============================================================================

/// A coupon that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AppliedCoupon {
    /// Normalized (uppercase) code.
    pub code: String,

    /// Discount rate, strictly between 0% and 100%.
    pub rate: Rate,
}

// =============================================================================
// Coupon Registry
// =============================================================================

/// Read-only lookup table from coupon code to discount rate.
#[derive(Debug, Clone)]
pub struct CouponRegistry {
    coupons: BTreeMap<String, Rate>,
}

impl CouponRegistry {
    /// The storefront's fixed catalog: `PARADISE10` (10%), `SAVE20` (20%).
    pub fn standard() -> Self {
        CouponRegistry {
            coupons: STANDARD_COUPONS
                .iter()
                .map(|&(code, bps)| (code.to_string(), Rate::from_bps(bps)))
                .collect(),
        }
    }

    /// Looks up a raw code as typed by the shopper.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::coupon::CouponRegistry;
    ///
    /// let registry = CouponRegistry::standard();
    /// let coupon = registry.validate(" paradise10 ").unwrap();
    /// assert_eq!(coupon.code, "PARADISE10");
    /// assert_eq!(coupon.rate.bps(), 1000);
    ///
    /// assert!(registry.validate("FOO").is_err());
    /// ```
    pub fn validate(&self, raw: &str) -> CoreResult<AppliedCoupon> {
        let invalid = || CoreError::InvalidCoupon {
            code: raw.trim().to_string(),
        };

        // Blank or oversized input can never match a catalog entry
        let code = normalize_coupon_code(raw).map_err(|_| invalid())?;

        self.coupons
            .get(&code)
            .map(|&rate| AppliedCoupon { code, rate })
            .ok_or_else(invalid)
    }

    /// Codes in the registry, sorted.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.coupons.keys().map(String::as_str)
    }
}

impl Default for CouponRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// Coupon Slot
// =============================================================================

/// The session's single coupon slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CouponSlot {
    /// No coupon is applied.
    #[default]
    NoCoupon,

    /// One coupon is applied.
    CouponApplied { coupon: AppliedCoupon },
}

impl CouponSlot {
    /// Validates `raw` and applies it, replacing any earlier coupon.
    ///
    /// On an invalid code the slot is cleared and the error returned.
    pub fn apply(&mut self, registry: &CouponRegistry, raw: &str) -> CoreResult<AppliedCoupon> {
        match registry.validate(raw) {
            Ok(coupon) => {
                debug!(code = %coupon.code, rate = %coupon.rate, "coupon applied");
                *self = CouponSlot::CouponApplied {
                    coupon: coupon.clone(),
                };
                Ok(coupon)
            }
            Err(err) => {
                warn!(input = raw, had_coupon = self.is_applied(), "coupon rejected");
                *self = CouponSlot::NoCoupon;
                Err(err)
            }
        }
    }

    /// Removes the applied coupon, if any.
    pub fn remove(&mut self) -> Option<AppliedCoupon> {
        match std::mem::take(self) {
            CouponSlot::CouponApplied { coupon } => Some(coupon),
            CouponSlot::NoCoupon => None,
        }
    }

    pub fn applied(&self) -> Option<&AppliedCoupon> {
        match self {
            CouponSlot::CouponApplied { coupon } => Some(coupon),
            CouponSlot::NoCoupon => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        self.applied().is_some()
    }

    /// Discount rate to price with (None when no coupon is applied).
    pub fn rate(&self) -> Option<Rate> {
        self.applied().map(|c| c.rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
