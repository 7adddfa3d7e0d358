//! # Checkout Commands
//!
//! Coupon box, order summary and checkout.
//!
//! ## Order Summary
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  ORDER SUMMARY                                                 │
//! ├────────────────────────────────────────────────────────────────┤
//! │  Subtotal                                $40.00                │
//! │  Discount (PARADISE10)                   -$4.00                │
//! │  Shipping                                $9.99                 │
//! │  Tax                                     $3.60                 │
//! │  ──────────────────────────────────────────────────            │
//! │  TOTAL                                   $49.59                │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use paradise_core::{AppliedCoupon, PriceBreakdown, Receipt};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Display strings for the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub subtotal: String,
    pub discount: String,
    pub shipping: String,
    pub tax: String,
    pub grand_total: String,
    pub free_shipping: bool,
}

impl OrderSummary {
    fn new(breakdown: &PriceBreakdown, config: &ConfigState) -> Self {
        OrderSummary {
            subtotal: config.format_currency(breakdown.subtotal),
            discount: config.format_currency(breakdown.discount),
            shipping: config.format_currency(breakdown.shipping),
            tax: config.format_currency(breakdown.tax),
            grand_total: config.format_currency(breakdown.grand_total),
            free_shipping: breakdown.ships_free(),
        }
    }
}

/// Quote response: exact amounts, the coupon in effect and display strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub breakdown: PriceBreakdown,
    pub coupon: Option<AppliedCoupon>,
    pub summary: OrderSummary,
}

/// Checkout response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptResponse {
    pub store_name: String,
    pub receipt: Receipt,
    pub summary: OrderSummary,
}

/// Prices the current cart.
pub fn get_quote(session: &SessionState, config: &ConfigState) -> Result<QuoteResponse, ApiError> {
    debug!("get_quote command");

    let checkout = session.session();
    let breakdown = checkout.quote()?;
    Ok(QuoteResponse {
        summary: OrderSummary::new(&breakdown, config),
        coupon: checkout.coupon().cloned(),
        breakdown,
    })
}

/// Applies a coupon code.
///
/// ## Behavior
/// - Valid: replaces any coupon already applied, returns the new quote
/// - Invalid: `INVALID_COUPON`; the previously applied coupon is removed
pub fn apply_coupon(
    session: &mut SessionState,
    config: &ConfigState,
    code: &str,
) -> Result<QuoteResponse, ApiError> {
    debug!(code, "apply_coupon command");

    session.apply_coupon(code)?;
    get_quote(session, config)
}

/// Removes the applied coupon, if any.
pub fn remove_coupon(
    session: &mut SessionState,
    config: &ConfigState,
) -> Result<QuoteResponse, ApiError> {
    debug!("remove_coupon command");

    session.session_mut().remove_coupon();
    get_quote(session, config)
}

/// Places the order and starts a fresh cart.
pub fn checkout(session: &mut SessionState, config: &ConfigState) -> Result<ReceiptResponse, ApiError> {
    debug!("checkout command");

    let receipt = session.session_mut().checkout()?;
    session.record_order();
    info!(
        order_id = %receipt.order_id,
        orders_placed = session.orders_placed(),
        "order placed"
    );

    Ok(ReceiptResponse {
        store_name: config.store_name.clone(),
        summary: OrderSummary::new(&receipt.breakdown, config),
        receipt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use paradise_catalog::Catalog;
    use paradise_core::ProductId;

    /// Session holding the given products, one unit each.
    fn session_with(ids: &[u32]) -> SessionState {
        let catalog = Catalog::nursery();
        let mut session = SessionState::default();
        for &id in ids {
            let product = catalog.get(ProductId::new(id)).unwrap();
            session.session_mut().cart_mut().add_item(product);
        }
        session
    }

    #[test]
    fn test_quote_below_threshold_with_coupon() {
        let config = ConfigState::default();
        // Boston Fern $20.00 + Lavender $20.00 = $40.00
        let mut session = session_with(&[4, 5]);

        let quote = apply_coupon(&mut session, &config, " paradise10 ").unwrap();
        assert_eq!(quote.coupon.as_ref().unwrap().code, "PARADISE10");
        assert_eq!(quote.breakdown.discount.cents(), 400);
        assert_eq!(quote.summary.shipping, "$9.99");
        assert_eq!(quote.summary.tax, "$3.60");
        assert_eq!(quote.summary.grand_total, "$49.59");
        assert!(!quote.summary.free_shipping);
    }

    #[test]
    fn test_invalid_coupon_clears_previous() {
        let config = ConfigState::default();
        let mut session = session_with(&[4, 5]);
        apply_coupon(&mut session, &config, "SAVE20").unwrap();

        let err = apply_coupon(&mut session, &config, "FOO").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCoupon);

        let quote = get_quote(&session, &config).unwrap();
        assert!(quote.coupon.is_none());
        assert!(quote.breakdown.discount.is_zero());
    }

    #[test]
    fn test_remove_coupon() {
        let config = ConfigState::default();
        let mut session = session_with(&[4]);
        apply_coupon(&mut session, &config, "SAVE20").unwrap();

        let quote = remove_coupon(&mut session, &config).unwrap();
        assert!(quote.coupon.is_none());
        assert_eq!(quote.summary.discount, "$0.00");
    }

    #[test]
    fn test_checkout() {
        let config = ConfigState::default();
        // $25.00 + $20.00 + $18.00 = $63.00, ships free
        let mut session = session_with(&[12, 5, 6]);

        let response = checkout(&mut session, &config).unwrap();
        assert_eq!(response.store_name, "Paradise Nursery");
        assert_eq!(response.receipt.lines.len(), 3);
        assert_eq!(response.summary.shipping, "$0.00");
        assert_eq!(response.summary.grand_total, "$69.30");
        assert_eq!(session.orders_placed(), 1);
        assert!(session.session().cart().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let config = ConfigState::default();
        let mut session = SessionState::default();

        let err = checkout(&mut session, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(session.orders_placed(), 0);
    }
}
