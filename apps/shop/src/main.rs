//! # Paradise Shop Entry Point
//!
//! ```text
//! $ echo -e "add 1\nadd 1\ncoupon SAVE20\nquote" | paradise-shop
//! {"outcome":{"kind":"added","productId":1},"lines":[...],"totals":{...}}
//! ...
//! ```
//!
//! The actual setup is in lib.rs for testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match paradise_shop::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("paradise-shop: {}", err);
            ExitCode::FAILURE
        }
    }
}
