//! # Shop Commands Module
//!
//! Every command the front-end understands.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing)
//! ├── catalog.rs  ◄─── Product list, categories
//! ├── cart.rs     ◄─── Cart manipulation
//! └── checkout.rs ◄─── Coupon, quote, checkout
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shop Command Flow                                    │
//! │                                                                         │
//! │  stdin: "set 3 2"                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Command::parse ──► Command::SetQuantity { product_id: 3, quantity: "2" }│
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::update_cart_item(session, id, "2")                               │
//! │      -> Result<CartResponse, ApiError>                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  stdout: {"outcome":{...},"lines":[...],"totals":{...}}                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command function takes only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_categories(catalog: &Catalog)
//!
//! // Only needs the session
//! fn get_cart(session: &SessionState)
//!
//! // Needs both
//! fn add_to_cart(catalog: &Catalog, session: &mut SessionState, id: ProductId)
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;

use paradise_catalog::SortOrder;
use paradise_core::{CouponRegistry, ProductId};
use serde::Serialize;

use crate::error::ApiError;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `products [category] [sort] [search…]`
    Products {
        category: Option<String>,
        sort: SortOrder,
        search: String,
    },
    Categories,
    Add(ProductId),
    Remove(ProductId),
    /// `set <id> <qty>`; the quantity stays raw text for the cart to parse.
    SetQuantity {
        product_id: ProductId,
        quantity: String,
    },
    Increase(ProductId),
    Decrease(ProductId),
    Clear,
    Cart,
    Coupon(String),
    Uncoupon,
    Quote,
    Checkout,
    Help,
}

impl Command {
    /// Parses one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, ApiError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match verb.to_lowercase().as_str() {
            "products" => {
                let category = args.first().map(|c| c.to_string());
                let sort = match args.get(1) {
                    Some(sort) => sort.parse::<SortOrder>()?,
                    None => SortOrder::Default,
                };
                let search = args.get(2..).unwrap_or_default().join(" ");
                Command::Products {
                    category,
                    sort,
                    search,
                }
            }
            "categories" => no_args(verb, &args, Command::Categories)?,
            "add" => Command::Add(single_id(verb, &args)?),
            "remove" => Command::Remove(single_id(verb, &args)?),
            "set" => match args.as_slice() {
                [id, quantity] => Command::SetQuantity {
                    product_id: parse_id(id)?,
                    quantity: quantity.to_string(),
                },
                _ => return Err(ApiError::usage("Usage: set <id> <quantity>")),
            },
            "inc" => Command::Increase(single_id(verb, &args)?),
            "dec" => Command::Decrease(single_id(verb, &args)?),
            "clear" => no_args(verb, &args, Command::Clear)?,
            "cart" => no_args(verb, &args, Command::Cart)?,
            "coupon" => {
                if args.is_empty() {
                    return Err(ApiError::usage("Usage: coupon <code>"));
                }
                Command::Coupon(args.join(" "))
            }
            "uncoupon" => no_args(verb, &args, Command::Uncoupon)?,
            "quote" => no_args(verb, &args, Command::Quote)?,
            "checkout" => no_args(verb, &args, Command::Checkout)?,
            "help" => Command::Help,
            other => {
                return Err(ApiError::usage(format!(
                    "Unknown command: '{}'. Type 'help' for the command list",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<ProductId>()
        .map_err(|e| ApiError::validation(e.to_string()))
}

fn single_id(verb: &str, args: &[&str]) -> Result<ProductId, ApiError> {
    match args {
        [id] => parse_id(id),
        _ => Err(ApiError::usage(format!("Usage: {} <id>", verb))),
    }
}

fn no_args(verb: &str, args: &[&str], command: Command) -> Result<Command, ApiError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ApiError::usage(format!("'{}' takes no arguments", verb)))
    }
}

// =============================================================================
// Help
// =============================================================================

/// `(usage, description)` for each command.
const COMMANDS: &[(&str, &str)] = &[
    ("products [category] [sort] [search…]", "List plants (category 'all' or e.g. 'air-purifying'; sort default, price-asc, price-desc, name-asc, name-desc)"),
    ("categories", "List categories"),
    ("add <id>", "Add one unit of a plant to the cart"),
    ("remove <id>", "Remove a plant from the cart"),
    ("set <id> <qty>", "Set a line's quantity, up to 9999 (0 or less removes it)"),
    ("inc <id>", "Add one unit to a line"),
    ("dec <id>", "Take one unit off a line"),
    ("clear", "Empty the cart"),
    ("cart", "Show the cart"),
    ("coupon <code>", "Apply a coupon code"),
    ("uncoupon", "Remove the applied coupon"),
    ("quote", "Show the order summary"),
    ("checkout", "Place the order"),
    ("help", "Show this list"),
];

/// Response for `help`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpResponse {
    pub store_name: String,
    pub commands: Vec<CommandHelp>,
    /// Codes the `coupon` command accepts
    pub coupons: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

pub fn help(store_name: &str, coupons: &CouponRegistry) -> HelpResponse {
    HelpResponse {
        store_name: store_name.to_string(),
        commands: COMMANDS
            .iter()
            .map(|&(usage, description)| CommandHelp { usage, description })
            .collect(),
        coupons: coupons.codes().map(String::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_cart_commands() {
        assert_eq!(parse("add 3"), Command::Add(ProductId::new(3)));
        assert_eq!(parse("ADD 3"), Command::Add(ProductId::new(3)));
        assert_eq!(parse("remove 3"), Command::Remove(ProductId::new(3)));
        assert_eq!(parse("inc 1"), Command::Increase(ProductId::new(1)));
        assert_eq!(parse("dec 1"), Command::Decrease(ProductId::new(1)));
        assert_eq!(
            parse("set 2 abc"),
            Command::SetQuantity {
                product_id: ProductId::new(2),
                quantity: "abc".to_string()
            }
        );
        assert_eq!(parse("clear"), Command::Clear);
        assert_eq!(parse("cart"), Command::Cart);
    }

    #[test]
    fn test_products_arguments() {
        assert_eq!(
            parse("products"),
            Command::Products {
                category: None,
                sort: SortOrder::Default,
                search: String::new()
            }
        );
        assert_eq!(
            parse("products all price-desc peace lily"),
            Command::Products {
                category: Some("all".to_string()),
                sort: SortOrder::PriceHighToLow,
                search: "peace lily".to_string()
            }
        );
    }

    #[test]
    fn test_coupon_keeps_raw_text() {
        assert_eq!(parse("coupon  save20 "), Command::Coupon("save20".to_string()));
        assert_eq!(
            Command::parse("coupon").unwrap_err().code,
            ErrorCode::UnknownCommand
        );
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(
            Command::parse("dance").unwrap_err().code,
            ErrorCode::UnknownCommand
        );
        assert_eq!(
            Command::parse("add").unwrap_err().code,
            ErrorCode::UnknownCommand
        );
        assert_eq!(
            Command::parse("add fern").unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            Command::parse("cart please").unwrap_err().code,
            ErrorCode::UnknownCommand
        );
        assert_eq!(
            Command::parse("products all cheapest").unwrap_err().code,
            ErrorCode::ValidationError
        );
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help("Paradise Nursery", &CouponRegistry::standard());
        assert_eq!(help.commands.len(), 14);
        assert!(help.commands.iter().any(|c| c.usage.starts_with("checkout")));
        assert_eq!(help.coupons, vec!["PARADISE10", "SAVE20"]);
    }
}
