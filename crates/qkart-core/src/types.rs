//! # Domain Types
//!
//! Core domain types used throughout QKart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   CartEntry     │   │  CartLineItem   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (_id)       │   │  product_id     │   │  Product fields │       │
//! │  │  name, category │   │  quantity       │   │  + quantity     │       │
//! │  │  cost_cents     │   │                 │   │  (snapshot)     │       │
//! │  │  rating, image  │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Rating      │   │  OrderSummary   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  u8 in [0, 5]   │   │  count/subtotal │                             │
//! │  │                 │   │  shipping/total │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! - `Product` is owned by the remote catalog service - read-only here
//! - `CartEntry` is owned by whatever maintains the user's selection
//! - `CartLineItem` and `OrderSummary` are derived fresh on every call,
//!   never stored

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Rating
// =============================================================================

/// Aggregate product rating, an integer number of stars out of five.
///
/// Constructed fallibly so an out-of-range value coming from the API is a
/// typed error rather than a silently wrong number of stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(try_from = "u8")]
#[ts(export)]
pub struct Rating(u8);

/// Maximum number of stars a product can have.
pub const MAX_RATING: u8 = 5;

impl Rating {
    /// Creates a rating, rejecting values above [`MAX_RATING`].
    ///
    /// ## Example
    /// ```rust
    /// use qkart_core::types::Rating;
    ///
    /// assert!(Rating::new(4).is_ok());
    /// assert!(Rating::new(6).is_err());
    /// ```
    pub fn new(stars: u8) -> Result<Self, ValidationError> {
        if stars > MAX_RATING {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: 0,
                max: MAX_RATING as i64,
            });
        }
        Ok(Rating(stars))
    }

    /// Returns the number of stars (0-5).
    #[inline]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Rating::new(stars)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available to buy, as served by the catalog endpoint.
///
/// The catalog service owns these records; this crate never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier. The catalog service serializes Mongo-style ids
    /// under `_id`.
    #[serde(rename = "_id")]
    pub id: String,

    /// The name or title of the product.
    pub name: String,

    /// The category that the product belongs to.
    pub category: String,

    /// The price to buy the product, in cents (smallest currency unit).
    /// Serialized as `cost`; the API carries minor units end to end.
    #[serde(rename = "cost")]
    pub cost_cents: i64,

    /// The aggregate rating of the product (integer out of five).
    pub rating: Rating,

    /// URL for the product image.
    pub image: String,
}

impl Product {
    /// Returns the cost as a Money type.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A (product id, quantity) pair representing a user's selection,
/// independent of catalog details.
///
/// The referenced product id may not exist in the current catalog snapshot -
/// carts and catalogs refresh at different times. Reconciliation filters
/// such entries out rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    /// Id of the selected product. Serialized as `productId` to match the
    /// cart endpoint.
    #[serde(rename = "productId")]
    pub product_id: String,

    /// How many of the product the user selected. Integer, never negative.
    #[serde(rename = "qty")]
    pub quantity: i64,
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// A cart entry enriched with full product details, used for display and
/// pricing.
///
/// Uses the snapshot pattern: product fields are frozen at reconciliation
/// time, so a line item stays self-contained even if the catalog snapshot
/// is refreshed underneath it. Derived fresh on every reconciliation call -
/// no persistent identity beyond the product id it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    /// Id of the product this line was derived from.
    #[serde(rename = "productId")]
    pub product_id: String,

    /// Product name at reconciliation time.
    pub name: String,

    /// Product category at reconciliation time.
    pub category: String,

    /// Unit cost in cents at reconciliation time.
    #[serde(rename = "cost")]
    pub cost_cents: i64,

    /// Product rating at reconciliation time.
    pub rating: Rating,

    /// Product image URL at reconciliation time.
    pub image: String,

    /// Quantity carried over from the matching cart entry.
    #[serde(rename = "qty")]
    pub quantity: i64,
}

impl CartLineItem {
    /// Builds a line item by snapshotting a catalog product at a quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            cost_cents: product.cost_cents,
            rating: product.rating,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Returns the unit cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Returns the line total (unit cost × quantity) as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.cost().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// The "Order Details" block shown on the checkout page.
///
/// Derived from the reconciled line items, never stored. QKart ships free,
/// so `shipping` is always zero today; it is still a field so the checkout
/// view has one shape when that changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    /// Total number of product units across all line items.
    pub product_count: i64,

    /// Sum of line totals before shipping.
    pub subtotal: Money,

    /// Shipping charges (currently always zero).
    pub shipping: Money,

    /// Grand total: subtotal + shipping.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(0).unwrap().stars(), 0);
        assert_eq!(Rating::new(5).unwrap().stars(), 5);
        assert!(Rating::new(6).is_err());
    }

    #[test]
    fn test_product_deserializes_catalog_wire_shape() {
        // Exactly what GET /products serves for one record
        let json = r#"{
            "_id": "KCRwjF7lN97HnEaY",
            "name": "Tan Leatherette Weekender Duffle",
            "category": "Fashion",
            "cost": 15000,
            "rating": 4,
            "image": "https://crio-directus-assets.s3.amazonaws.com/duffle.png"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "KCRwjF7lN97HnEaY");
        assert_eq!(product.cost().cents(), 15000);
        assert_eq!(product.rating.stars(), 4);
    }

    #[test]
    fn test_product_rejects_out_of_range_rating() {
        let json = r#"{
            "_id": "x",
            "name": "n",
            "category": "c",
            "cost": 100,
            "rating": 9,
            "image": "u"
        }"#;

        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn test_cart_entry_deserializes_cart_wire_shape() {
        let json = r#"{ "productId": "KCRwjF7lN97HnEaY", "qty": 3 }"#;
        let entry: CartEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.product_id, "KCRwjF7lN97HnEaY");
        assert_eq!(entry.quantity, 3);
    }

    #[test]
    fn test_line_item_snapshot_and_total() {
        let product = Product {
            id: "p1".to_string(),
            name: "The minimalist slim leather watch".to_string(),
            category: "Fashion".to_string(),
            cost_cents: 5999,
            rating: Rating::new(5).unwrap(),
            image: "https://example.com/watch.png".to_string(),
        };

        let item = CartLineItem::from_product(&product, 2);
        assert_eq!(item.product_id, "p1");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.line_total().cents(), 11998);
    }

    #[test]
    fn test_line_item_serializes_frontend_shape() {
        let item = CartLineItem {
            product_id: "p1".to_string(),
            name: "n".to_string(),
            category: "c".to_string(),
            cost_cents: 100,
            rating: Rating::new(3).unwrap(),
            image: "u".to_string(),
            quantity: 2,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["productId"], "p1");
        assert_eq!(value["cost"], 100);
        assert_eq!(value["qty"], 2);
    }
}
