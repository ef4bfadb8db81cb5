//! # qkart-core: Pure Business Logic for QKart
//!
//! This crate is the **heart** of the QKart storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        QKart Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Product Grid ──► Cart Sidebar ──► Checkout ──► Thanks       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ qkart-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ reconcile │  │   rules   │  │   │
//! │  │   │ CartEntry │  │  totals   │  │  totals   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Remote REST API                              │   │
//! │  │         /products, /cart, /auth (out of scope here)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartEntry, CartLineItem, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart reconciliation and order totals
//! - [`error`] - Typed validation errors
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, storage, and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use qkart_core::cart;
//! use qkart_core::types::{CartEntry, Product, Rating};
//!
//! let catalog = vec![Product {
//!     id: "KCRwjF7lN97HnEaY".to_string(),
//!     name: "Tan Leatherette Weekender Duffle".to_string(),
//!     category: "Fashion".to_string(),
//!     cost_cents: 15_000,
//!     rating: Rating::new(4).unwrap(),
//!     image: "https://crio-directus-assets.s3.amazonaws.com/duffle.png".to_string(),
//! }];
//! let entries = vec![CartEntry {
//!     product_id: "KCRwjF7lN97HnEaY".to_string(),
//!     quantity: 2,
//! }];
//!
//! let items = cart::reconcile(Some(&entries), Some(&catalog)).unwrap();
//! assert_eq!(cart::total_value(&items).cents(), 30_000);
//! assert_eq!(cart::total_quantity(&items), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use qkart_core::Money` instead of
// `use qkart_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct products allowed in a single cart
///
/// ## Business Reason
/// Prevents runaway carts and keeps the cart sidebar renderable.
/// Can be made configurable per-store in future versions.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single product in cart
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Minimum length for registration credentials (username and password)
///
/// Matches the rule shown on the registration form: "Password must be at
/// least 6 characters length". The backend enforces the same bound.
pub const MIN_CREDENTIAL_LEN: usize = 6;
