//! # Cart Store
//!
//! The authoritative in-memory cart and every operation that may change it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action               Store Operation          State Change          │
//! │  ─────────               ───────────────          ────────────          │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add_item() ───────────► qty+1 or new line    │
//! │                                                                         │
//! │  "+" / "-" ─────────────► increase/decrease() ──► qty±1 (1→0 removes)  │
//! │                                                                         │
//! │  Quantity box ──────────► update_quantity() ────► qty=n (≤0 removes)   │
//! │                                                                         │
//! │  "✕" ───────────────────► remove_item() ────────► line deleted         │
//! │                                                                         │
//! │  "Clear Cart" ──────────► clear_cart() ─────────► empty                │
//! │                                                                         │
//! │  Every operation adjusts total_quantity / total_price by its DELTA.    │
//! │  The delta always equals what a full recomputation would give.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by `product_id`, kept in insertion order
//! - Every line has `quantity >= 1` and `line_total == unit_price * quantity`
//! - `total_quantity == Σ quantity`, `total_price == Σ line_total`
//!
//! None of the fields are public: the only way to change a cart is through
//! [`CartStore`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::{parse_quantity, validate_line_quantity, validate_price};
use crate::{MAX_LINE_QUANTITY, MAX_UNIT_PRICE_CENTS};

// =============================================================================
// Cart Line
// =============================================================================

/// One product's presence in the cart.
///
/// ## Design Notes
/// - `title`, `image`, `unit_price` are a frozen copy of the product taken
///   when it was first added. A later catalog price change does not touch
///   lines already in the cart.
/// - `line_total` is kept in step with `quantity` by the store; there is no
///   setter for it, and lines are serialize-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    product_id: ProductId,
    title: String,
    image: String,
    unit_price: Money,
    quantity: i64,
    line_total: Money,
}

impl CartLine {
    /// Creates a line with quantity 1 from a product.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. A catalog price outside
    /// `0..=MAX_UNIT_PRICE_CENTS` is clamped into that range.
    fn from_product(product: &Product) -> Self {
        let unit_price = match validate_price(product.price) {
            Ok(()) => product.price,
            Err(_) => {
                let clamped =
                    Money::from_cents(product.price.cents().clamp(0, MAX_UNIT_PRICE_CENTS));
                warn!(
                    product_id = %product.id,
                    price = %product.price,
                    clamped = %clamped,
                    "product price out of range, clamped"
                );
                clamped
            }
        };

        CartLine {
            product_id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            unit_price,
            quantity: 1,
            line_total: unit_price,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Price per unit, frozen at add-time.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart aggregate: lines plus cached running totals.
///
/// Two states compare equal when their lines and totals match; this is what
/// the inverse-operation guarantees (add then remove, + then -) are stated in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    lines: Vec<CartLine>,
    total_quantity: i64,
    total_price: Money,
}

impl CartState {
    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Cached sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Cached sum of all line totals.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recomputes `(total_quantity, total_price)` from the lines alone.
    pub fn recomputed_totals(&self) -> (i64, Money) {
        let quantity = self.lines.iter().map(CartLine::quantity).sum();
        let price = self.lines.iter().map(CartLine::line_total).sum();
        (quantity, price)
    }

    /// True when the cached totals and every line total agree with a full
    /// recomputation.
    pub fn is_consistent(&self) -> bool {
        let lines_ok = self
            .lines
            .iter()
            .all(|l| l.quantity >= 1 && l.line_total == l.unit_price.multiply_quantity(l.quantity));
        lines_ok && self.recomputed_totals() == (self.total_quantity, self.total_price)
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id == product_id)
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub total_price: Money,
}

impl From<&CartState> for CartTotals {
    fn from(state: &CartState) -> Self {
        CartTotals {
            line_count: state.lines.len(),
            total_quantity: state.total_quantity,
            total_price: state.total_price,
        }
    }
}

// =============================================================================
// Cart Outcome
// =============================================================================

/// What a cart operation did.
///
/// Referencing a product that is not in the cart is not an error; it is
/// reported as [`CartOutcome::NotInCart`] and the cart is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CartOutcome {
    /// A new line was created with quantity 1.
    Added { product_id: ProductId },
    /// An existing line now has `quantity` units.
    QuantityChanged { product_id: ProductId, quantity: i64 },
    /// The line was deleted.
    Removed { product_id: ProductId },
    /// All lines were deleted.
    Cleared,
    /// No line for this product; nothing changed.
    NotInCart { product_id: ProductId },
    /// The line already holds [`MAX_LINE_QUANTITY`] units; nothing changed.
    LimitReached { product_id: ProductId, quantity: i64 },
}

impl CartOutcome {
    /// True if the operation changed the cart.
    pub fn changed(&self) -> bool {
        !matches!(
            self,
            CartOutcome::NotInCart { .. } | CartOutcome::LimitReached { .. }
        )
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Owner of one session's [`CartState`].
///
/// ## Usage
/// ```rust
/// use paradise_core::cart::{CartOutcome, CartStore};
/// use paradise_core::money::Money;
/// use paradise_core::types::{Product, ProductId};
///
/// let fern = Product {
///     id: ProductId::new(3),
///     title: "Boston Fern".to_string(),
///     price: Money::from_cents(1850),
///     category: "Ferns".to_string(),
///     description: String::new(),
///     details: String::new(),
///     image: "fern.jpg".to_string(),
/// };
///
/// let mut cart = CartStore::new();
/// cart.add_item(&fern);
/// cart.add_item(&fern);
/// assert_eq!(cart.total_quantity(), 2);
/// assert_eq!(cart.total_price().cents(), 3700);
///
/// assert_eq!(
///     cart.decrease_quantity(fern.id),
///     CartOutcome::QuantityChanged { product_id: fern.id, quantity: 1 }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CartStore {
    state: CartState,
    created_at: DateTime<Utc>,
}

impl CartStore {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartStore {
            state: CartState::default(),
            created_at: Utc::now(),
        }
    }

    /// Read-only view of the cart.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    pub fn total_quantity(&self) -> i64 {
        self.state.total_quantity
    }

    pub fn total_price(&self) -> Money {
        self.state.total_price
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.state)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// When the cart was created or last cleared.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Units of `product_id` in the cart (0 if absent).
    pub fn quantity_of(&self, product_id: ProductId) -> i64 {
        self.state
            .position(product_id)
            .map_or(0, |i| self.state.lines[i].quantity)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.state.position(product_id).is_some()
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1 at the FROZEN unit price
    /// - Product not in cart: new line with quantity 1 at the current price
    /// - Line already at [`MAX_LINE_QUANTITY`]: [`CartOutcome::LimitReached`]
    pub fn add_item(&mut self, product: &Product) -> CartOutcome {
        let outcome = match self.state.position(product.id) {
            Some(index) => self.step_up(index),
            None => {
                let line = CartLine::from_product(product);
                self.state.total_quantity += 1;
                self.state.total_price += line.unit_price;
                self.state.lines.push(line);
                CartOutcome::Added {
                    product_id: product.id,
                }
            }
        };

        debug!(product_id = %product.id, ?outcome, "add_item");
        self.check_consistency();
        outcome
    }

    /// Deletes the line for `product_id`, whatever its quantity.
    ///
    /// Calling it again for the same id is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) -> CartOutcome {
        let outcome = match self.state.position(product_id) {
            Some(index) => self.remove_at(index),
            None => CartOutcome::NotInCart { product_id },
        };

        debug!(product_id = %product_id, ?outcome, "remove_item");
        self.check_consistency();
        outcome
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity > MAX_LINE_QUANTITY`: [`CoreError::InvalidQuantity`], cart
    ///   untouched
    /// - `quantity <= 0`: same as [`CartStore::remove_item`]
    /// - otherwise the line total is recomputed and the cart totals move by
    ///   the difference
    ///
    /// [`CoreError::InvalidQuantity`]: crate::error::CoreError::InvalidQuantity
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> CoreResult<CartOutcome> {
        let quantity = validate_line_quantity(quantity)?;
        let outcome = match self.state.position(product_id) {
            None => CartOutcome::NotInCart { product_id },
            Some(index) if quantity <= 0 => self.remove_at(index),
            Some(index) => {
                let delta = quantity - self.state.lines[index].quantity;
                self.step_line(index, delta)
            }
        };

        debug!(product_id = %product_id, quantity, ?outcome, "update_quantity");
        self.check_consistency();
        Ok(outcome)
    }

    /// Sets a line's quantity from raw quantity-box text.
    ///
    /// Text that is not a whole number, or is above [`MAX_LINE_QUANTITY`],
    /// is rejected with
    /// [`CoreError::InvalidQuantity`](crate::error::CoreError::InvalidQuantity)
    /// and the cart is left untouched.
    pub fn update_quantity_from_input(
        &mut self,
        product_id: ProductId,
        input: &str,
    ) -> CoreResult<CartOutcome> {
        let quantity = parse_quantity(input)?;
        self.update_quantity(product_id, quantity)
    }

    /// Adds one unit to an existing line.
    ///
    /// A line already at [`MAX_LINE_QUANTITY`] is left alone and reported as
    /// [`CartOutcome::LimitReached`].
    pub fn increase_quantity(&mut self, product_id: ProductId) -> CartOutcome {
        let outcome = match self.state.position(product_id) {
            Some(index) => self.step_up(index),
            None => CartOutcome::NotInCart { product_id },
        };

        debug!(product_id = %product_id, ?outcome, "increase_quantity");
        self.check_consistency();
        outcome
    }

    /// Takes one unit off an existing line; the last unit removes the line.
    pub fn decrease_quantity(&mut self, product_id: ProductId) -> CartOutcome {
        let outcome = match self.state.position(product_id) {
            Some(index) if self.state.lines[index].quantity == 1 => self.remove_at(index),
            Some(index) => self.step_line(index, -1),
            None => CartOutcome::NotInCart { product_id },
        };

        debug!(product_id = %product_id, ?outcome, "decrease_quantity");
        self.check_consistency();
        outcome
    }

    /// Empties the cart.
    ///
    /// ## When Used
    /// - User clicks "Clear Cart"
    /// - After a successful checkout
    pub fn clear_cart(&mut self) -> CartOutcome {
        self.state = CartState::default();
        self.created_at = Utc::now();
        debug!("clear_cart");
        CartOutcome::Cleared
    }

    /// One more unit on the line at `index`, unless it is already full.
    fn step_up(&mut self, index: usize) -> CartOutcome {
        let line = &self.state.lines[index];
        if line.quantity >= MAX_LINE_QUANTITY {
            return CartOutcome::LimitReached {
                product_id: line.product_id,
                quantity: line.quantity,
            };
        }
        self.step_line(index, 1)
    }

    /// Moves the line at `index` by `delta` units. The caller guarantees
    /// the resulting quantity stays within `1..=MAX_LINE_QUANTITY`.
    fn step_line(&mut self, index: usize, delta: i64) -> CartOutcome {
        let line = &mut self.state.lines[index];
        let price_delta = line.unit_price.multiply_quantity(delta);

        line.quantity += delta;
        line.line_total += price_delta;
        self.state.total_quantity += delta;
        self.state.total_price += price_delta;

        CartOutcome::QuantityChanged {
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }

    fn remove_at(&mut self, index: usize) -> CartOutcome {
        let line = self.state.lines.remove(index);
        self.state.total_quantity -= line.quantity;
        self.state.total_price -= line.line_total;

        CartOutcome::Removed {
            product_id: line.product_id,
        }
    }

    #[inline]
    fn check_consistency(&self) {
        debug_assert!(
            self.state.is_consistent(),
            "cart totals diverged from lines: {:?}",
            self.state
        );
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
