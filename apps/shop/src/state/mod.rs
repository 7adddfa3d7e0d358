//! # State Module
//!
//! State owned by the shop process.
//!
//! Instead of one `AppState` struct, the shop keeps separate state types so
//! each command declares exactly what it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │   Catalog    │  │  SessionState    │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  plant list  │  │  CheckoutSession │  │  store_name      │          │
//! │  │  (read-only) │  │  CouponRegistry  │  │  pricing policy  │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  Catalog and ConfigState are read-only after startup; SessionState     │
//! │  is borrowed mutably by one command at a time.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
