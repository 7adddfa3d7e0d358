//! # paradise-core: Cart State Engine for Paradise Nursery
//!
//! This crate is the **heart** of the storefront. It owns what is in the
//! cart, keeps the running totals honest, and prices the order at checkout.
//! It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Paradise Nursery Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (apps/shop)                        │   │
//! │  │    Product list ──► Cart ──► Coupon box ──► Order summary       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ paradise-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │  coupon   │  │  pricing  │  │   │
//! │  │   │   Money   │  │ CartStore │  │ Registry  │  │  Engine   │  │   │
//! │  │   │   Rate    │  │ CartLine  │  │ CouponSlot│  │ Breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                  ┌───────────────────────────┐                 │   │
//! │  │                  │ checkout: CheckoutSession │                 │   │
//! │  │                  └───────────────────────────┘                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO GLOBAL STATE                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │             paradise-catalog (read-only plant list)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductId, Rate
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - CartStore and its six mutation operations
//! - [`coupon`] - Coupon registry and the session coupon slot
//! - [`pricing`] - Discount, shipping, tax and grand total
//! - [`checkout`] - Session that ties the above together
//! - [`error`] - Domain error types
//! - [`validation`] - Raw input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use paradise_core::{CheckoutSession, CouponRegistry, Money, Product, ProductId};
//!
//! let monstera = Product {
//!     id: ProductId::new(1),
//!     title: "Monstera Deliciosa".to_string(),
//!     price: Money::from_cents(2000),
//!     category: "Tropical".to_string(),
//!     description: String::new(),
//!     details: String::new(),
//!     image: "monstera.jpg".to_string(),
//! };
//!
//! let mut session = CheckoutSession::default();
//! session.cart_mut().add_item(&monstera);
//! session.cart_mut().increase_quantity(monstera.id);
//! session.apply_coupon(&CouponRegistry::standard(), "paradise10").unwrap();
//!
//! let quote = session.quote().unwrap();
//! assert_eq!(quote.subtotal.cents(), 4000);
//! assert_eq!(quote.grand_total.cents(), 4959); // $40 − $4 + $9.99 + $3.60
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod coupon;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, CartOutcome, CartState, CartStore, CartTotals};
pub use checkout::{CheckoutSession, Receipt};
pub use coupon::{AppliedCoupon, CouponRegistry, CouponSlot};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{PriceBreakdown, PricingEngine, PricingPolicy};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Orders above $50.00 ship free.
pub const DEFAULT_FREE_SHIPPING_OVER_CENTS: i64 = 5_000;

/// Flat shipping charge at or below the threshold: $9.99.
pub const DEFAULT_FLAT_SHIPPING_CENTS: i64 = 999;

/// Sales tax on the discounted subtotal: 10%.
pub const DEFAULT_TAX_RATE_BPS: u32 = 1_000;

/// Most units one cart line may hold.
pub const MAX_LINE_QUANTITY: i64 = 9_999;

/// Highest unit price a line will freeze: $1,000,000.00.
///
/// With [`MAX_LINE_QUANTITY`] this keeps every line total far inside `i64`.
pub const MAX_UNIT_PRICE_CENTS: i64 = 100_000_000;
