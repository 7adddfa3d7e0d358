//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Quote   │────►│ Checkout │       │
//! │  │  Cart    │     │          │     │          │     │ (receipt)│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                  │             │
//! │                   add / set                               │             │
//! │                   inc / dec                               │             │
//! │                   remove                                  │             │
//! │                        │                                  ▼             │
//! │                   clear ──────────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations on a product that is not in the cart succeed with a
//! `notInCart` outcome; only `add` checks the catalog.

use paradise_catalog::Catalog;
use paradise_core::{CartLine, CartOutcome, CartStore, CartTotals, ProductId};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// What the command did (absent for `cart`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<CartOutcome>,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn new(cart: &CartStore, outcome: Option<CartOutcome>) -> Self {
        CartResponse {
            outcome,
            lines: cart.lines().to_vec(),
            totals: cart.totals(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    CartResponse::new(session.session().cart(), None)
}

/// Adds one unit of a catalog product.
///
/// ## Behavior
/// - Already in cart: quantity increases by one
/// - Not in cart: new line at the end, price frozen at today's price
pub fn add_to_cart(
    catalog: &Catalog,
    session: &mut SessionState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(%product_id, "add_to_cart command");

    let product = catalog.get(product_id)?;
    let cart = session.session_mut().cart_mut();
    let outcome = cart.add_item(product);
    Ok(CartResponse::new(cart, Some(outcome)))
}

/// Removes a line.
pub fn remove_from_cart(session: &mut SessionState, product_id: ProductId) -> CartResponse {
    debug!(%product_id, "remove_from_cart command");

    let cart = session.session_mut().cart_mut();
    let outcome = cart.remove_item(product_id);
    CartResponse::new(cart, Some(outcome))
}

/// Sets a line's quantity from raw text.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Not a whole number, or above 9999: `INVALID_QUANTITY`, cart unchanged
pub fn update_cart_item(
    session: &mut SessionState,
    product_id: ProductId,
    quantity: &str,
) -> Result<CartResponse, ApiError> {
    debug!(%product_id, quantity, "update_cart_item command");

    let cart = session.session_mut().cart_mut();
    let outcome = cart.update_quantity_from_input(product_id, quantity)?;
    Ok(CartResponse::new(cart, Some(outcome)))
}

/// Adds one unit to a line; a full line reports `limitReached`.
pub fn increase_quantity(session: &mut SessionState, product_id: ProductId) -> CartResponse {
    debug!(%product_id, "increase_quantity command");

    let cart = session.session_mut().cart_mut();
    let outcome = cart.increase_quantity(product_id);
    CartResponse::new(cart, Some(outcome))
}

/// Takes one unit off a line; a line at 1 is removed.
pub fn decrease_quantity(session: &mut SessionState, product_id: ProductId) -> CartResponse {
    debug!(%product_id, "decrease_quantity command");

    let cart = session.session_mut().cart_mut();
    let outcome = cart.decrease_quantity(product_id);
    CartResponse::new(cart, Some(outcome))
}

/// Clears all lines. The applied coupon is kept.
pub fn clear_cart(session: &mut SessionState) -> CartResponse {
    debug!("clear_cart command");

    let cart = session.session_mut().cart_mut();
    let outcome = cart.clear_cart();
    CartResponse::new(cart, Some(outcome))
}
