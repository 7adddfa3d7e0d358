//! # Paradise Shop Library
//!
//! Line-oriented front-end for the Paradise Nursery storefront: one command
//! per line on stdin, one JSON response per line on stdout, logs on stderr.
//!
//! ## Module Organization
//! ```text
//! paradise_shop/
//! ├── lib.rs          ◄─── You are here (Shop dispatch & run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Checkout session + coupon registry
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & help
//! │   ├── catalog.rs  ◄─── Product list commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── checkout.rs ◄─── Coupon, quote & checkout commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use paradise_catalog::Catalog;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::cart::CartResponse;
use commands::catalog::{CategoriesResponse, ProductsResponse};
use commands::checkout::{QuoteResponse, ReceiptResponse};
use commands::{Command, HelpResponse};
use error::ApiError;
use state::{ConfigState, SessionState};

/// Successful command output.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Products(ProductsResponse),
    Categories(CategoriesResponse),
    Cart(CartResponse),
    Quote(QuoteResponse),
    Receipt(ReceiptResponse),
    Help(HelpResponse),
}

/// Error output: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Serialize)]
struct ErrorReply<'a> {
    error: &'a ApiError,
}

/// The shop's state and command dispatch.
#[derive(Debug, Clone)]
pub struct Shop {
    catalog: Catalog,
    session: SessionState,
    config: ConfigState,
}

impl Shop {
    /// Creates a shop selling the nursery catalog.
    pub fn new(config: ConfigState) -> Self {
        Shop {
            catalog: Catalog::nursery(),
            session: SessionState::new(config.pricing),
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }

    /// Runs one parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Reply, ApiError> {
        use commands::{cart, catalog, checkout};

        let reply = match command {
            Command::Products {
                category,
                sort,
                search,
            } => Reply::Products(catalog::list_products(
                &self.catalog,
                self.session.session().cart(),
                category.as_deref(),
                sort,
                &search,
            )?),
            Command::Categories => Reply::Categories(catalog::list_categories(&self.catalog)),
            Command::Add(id) => Reply::Cart(cart::add_to_cart(&self.catalog, &mut self.session, id)?),
            Command::Remove(id) => Reply::Cart(cart::remove_from_cart(&mut self.session, id)),
            Command::SetQuantity {
                product_id,
                quantity,
            } => Reply::Cart(cart::update_cart_item(
                &mut self.session,
                product_id,
                &quantity,
            )?),
            Command::Increase(id) => Reply::Cart(cart::increase_quantity(&mut self.session, id)),
            Command::Decrease(id) => Reply::Cart(cart::decrease_quantity(&mut self.session, id)),
            Command::Clear => Reply::Cart(cart::clear_cart(&mut self.session)),
            Command::Cart => Reply::Cart(cart::get_cart(&self.session)),
            Command::Coupon(code) => {
                Reply::Quote(checkout::apply_coupon(&mut self.session, &self.config, &code)?)
            }
            Command::Uncoupon => {
                Reply::Quote(checkout::remove_coupon(&mut self.session, &self.config)?)
            }
            Command::Quote => Reply::Quote(checkout::get_quote(&self.session, &self.config)?),
            Command::Checkout => {
                Reply::Receipt(checkout::checkout(&mut self.session, &self.config)?)
            }
            Command::Help => Reply::Help(commands::help(
                &self.config.store_name,
                self.session.coupons(),
            )),
        };
        Ok(reply)
    }

    /// Parses and runs one input line, returning the JSON response line.
    ///
    /// Blank lines produce no response.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let result = match Command::parse(line) {
            Ok(None) => return None,
            Ok(Some(command)) => self.execute(command),
            Err(err) => Err(err),
        };

        let json = match &result {
            Ok(reply) => serde_json::to_string(reply),
            Err(error) => {
                debug!(code = ?error.code, message = %error.message, "command failed");
                serde_json::to_string(&ErrorReply { error })
            }
        };

        Some(json.unwrap_or_else(|e| {
            let error = ApiError::internal(format!("Could not serialize response: {}", e));
            serde_json::to_string(&ErrorReply { error: &error })
                .unwrap_or_else(|_| String::from(r#"{"error":{"code":"INTERNAL","message":""}}"#))
        }))
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::new(ConfigState::default())
    }
}

/// Runs the shop against stdin and stdout until end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Shop Startup                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,paradise=debug; override with RUST_LOG              │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • PARADISE_* environment variables over defaults                    │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • Catalog: built-in nursery stock                                   │
/// │     • SessionState: empty cart, no coupon                               │
/// │                                                                         │
/// │  4. Command Loop ─────────────────────────────────────────────────────► │
/// │     • One line in, one JSON line out                                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(
        store_name = %config.store_name,
        tax_rate = %config.pricing.tax_rate,
        free_shipping_over = %config.pricing.free_shipping_over,
        flat_shipping = %config.pricing.flat_shipping,
        "Starting Paradise Nursery shop"
    );

    let mut shop = Shop::new(config);
    info!(products = shop.catalog().len(), "Catalog loaded");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if let Some(response) = shop.handle_line(&line) {
            writeln!(stdout, "{}", response)?;
            stdout.flush()?;
        }
    }

    info!(
        orders_placed = shop.session().orders_placed(),
        "End of input, shutting down"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=paradise_core=trace` - Trace for the core crate only
/// - Default: `info,paradise=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,paradise=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn send(shop: &mut Shop, line: &str) -> Value {
        let response = shop.handle_line(line).unwrap();
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn test_blank_line_has_no_response() {
        let mut shop = Shop::default();
        assert!(shop.handle_line("").is_none());
    }

    #[test]
    fn test_shopping_session() {
        let mut shop = Shop::default();

        let cart = send(&mut shop, "add 4");
        assert_eq!(cart["outcome"]["kind"], "added");
        send(&mut shop, "add 5");

        let quote = send(&mut shop, "coupon paradise10");
        assert_eq!(quote["coupon"]["code"], "PARADISE10");
        assert_eq!(quote["breakdown"]["grandTotal"], 4959);
        assert_eq!(quote["summary"]["grandTotal"], "$49.59");

        let receipt = send(&mut shop, "checkout");
        assert_eq!(receipt["storeName"], "Paradise Nursery");
        assert_eq!(receipt["receipt"]["lines"].as_array().unwrap().len(), 2);

        let cart = send(&mut shop, "cart");
        assert_eq!(cart["totals"]["totalQuantity"], 0);
        assert!(cart.get("outcome").is_none());
    }

    #[test]
    fn test_errors_keep_the_session_going() {
        let mut shop = Shop::default();

        let error = send(&mut shop, "coupon FOO");
        assert_eq!(error["error"]["code"], "INVALID_COUPON");

        let error = send(&mut shop, "checkout");
        assert_eq!(error["error"]["code"], "EMPTY_CART");

        let error = send(&mut shop, "fly away");
        assert_eq!(error["error"]["code"], "UNKNOWN_COMMAND");

        let cart = send(&mut shop, "add 1");
        assert_eq!(cart["totals"]["totalQuantity"], 1);
    }

    #[test]
    fn test_oversized_quantity_is_rejected() {
        let mut shop = Shop::default();
        send(&mut shop, "add 1");

        let error = send(&mut shop, "set 1 9999999999999999");
        assert_eq!(error["error"]["code"], "INVALID_QUANTITY");

        let cart = send(&mut shop, "cart");
        assert_eq!(cart["totals"]["totalQuantity"], 1);
        assert_eq!(cart["totals"]["totalPrice"], 1500);

        let cart = send(&mut shop, "set 1 9999");
        assert_eq!(cart["totals"]["totalQuantity"], 9999);
        let cart = send(&mut shop, "inc 1");
        assert_eq!(cart["outcome"]["kind"], "limitReached");
        assert_eq!(cart["totals"]["totalQuantity"], 9999);
    }

    #[test]
    fn test_help_and_listing_reflect_session() {
        let mut shop = Shop::default();
        send(&mut shop, "add 1");

        let help = send(&mut shop, "help");
        assert_eq!(help["coupons"][0], "PARADISE10");

        let products = send(&mut shop, "products");
        let snake = &products["products"][0];
        assert_eq!(snake["id"], 1);
        assert_eq!(snake["inCart"], true);
        assert_eq!(products["products"][1]["quantityInCart"], 0);
    }

    #[test]
    fn test_products_and_categories() {
        let mut shop = Shop::default();

        let products = send(&mut shop, "products medicinal name-desc");
        assert_eq!(products["category"], "Medicinal");
        assert_eq!(products["products"][0]["title"], "Echinacea");

        let categories = send(&mut shop, "categories");
        assert_eq!(categories["categories"][0], "All");
    }

    #[test]
    fn test_configured_pricing() {
        let config = ConfigState::from_lookup(|key| match key {
            "PARADISE_FLAT_SHIPPING" => Some("4.99".to_string()),
            _ => None,
        });
        let mut shop = Shop::new(config);
        send(&mut shop, "add 1");

        let quote = send(&mut shop, "quote");
        assert_eq!(quote["summary"]["shipping"], "$4.99");
    }
}
