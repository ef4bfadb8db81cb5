//! # Cart Module
//!
//! Cart reconciliation and order totals.
//!
//! ## What Reconciliation Means
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cart Reconciliation                                │
//! │                                                                         │
//! │  GET /cart            GET /products                                     │
//! │       │                    │                                            │
//! │       ▼                    ▼                                            │
//! │  CartEntry[]          Product[]                                         │
//! │  (productId, qty)     (full catalog snapshot)                           │
//! │       │                    │                                            │
//! │       └────────┬───────────┘                                            │
//! │                ▼                                                        │
//! │         reconcile() ── join by product id ──► CartLineItem[]            │
//! │                │                                                        │
//! │                ├──► total_value()    ──► cart sidebar "Order total"     │
//! │                ├──► total_quantity() ──► checkout "Products" count      │
//! │                └──► order_summary()  ──► checkout "Order Details"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart endpoint stores only sparse (product id, quantity) pairs; the
//! catalog holds everything needed for display and pricing. Reconciliation
//! is the join that turns the two snapshots into renderable line items.
//!
//! Everything in this module is a stateless pure function: same inputs,
//! same output, no shared state, no ordering dependency between calls.

use std::collections::HashMap;

use crate::money::Money;
use crate::types::{CartEntry, CartLineItem, OrderSummary, Product};

/// Joins cart entries with a catalog snapshot to produce priced line items.
///
/// Returns `None` when either input is structurally missing - typically
/// because the corresponding API call has not resolved yet. Callers treat
/// `None` as "nothing to display yet", not as an error. Present-but-empty
/// inputs yield `Some` of an empty vector.
///
/// ## Semantics
/// - Duplicate cart entries for the same product id: last write wins.
/// - Cart entries referencing a product id absent from the catalog are
///   silently dropped (carts and catalogs refresh at different times).
/// - Output follows catalog iteration order, not cart order, so the grid
///   and the sidebar list products consistently.
/// - Every returned line item's id appears in the catalog; nothing is
///   fabricated.
///
/// ## Example
/// ```rust
/// use qkart_core::cart::reconcile;
/// use qkart_core::types::{CartEntry, Product, Rating};
///
/// let catalog = vec![Product {
///     id: "A".to_string(),
///     name: "Tan Leatherette Weekender Duffle".to_string(),
///     category: "Fashion".to_string(),
///     cost_cents: 1000,
///     rating: Rating::new(4).unwrap(),
///     image: "https://example.com/duffle.png".to_string(),
/// }];
/// let entries = vec![CartEntry { product_id: "A".to_string(), quantity: 2 }];
///
/// // Catalog still loading: nothing to display yet
/// assert!(reconcile(Some(&entries), None).is_none());
///
/// let items = reconcile(Some(&entries), Some(&catalog)).unwrap();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].quantity, 2);
/// ```
pub fn reconcile(
    cart: Option<&[CartEntry]>,
    catalog: Option<&[Product]>,
) -> Option<Vec<CartLineItem>> {
    let (cart, catalog) = (cart?, catalog?);

    // Fold entries into id → quantity; a later duplicate overwrites an
    // earlier one (last write wins).
    let quantities: HashMap<&str, i64> = cart
        .iter()
        .map(|entry| (entry.product_id.as_str(), entry.quantity))
        .collect();

    Some(
        catalog
            .iter()
            .filter_map(|product| {
                quantities
                    .get(product.id.as_str())
                    .map(|&qty| CartLineItem::from_product(product, qty))
            })
            .collect(),
    )
}

/// Total value of all products added to the cart: Σ cost × quantity.
///
/// Zero for an empty slice. Callers guarantee a reconciled, non-missing
/// sequence before invoking - there is no `Option` here by contract.
///
/// ## Example
/// ```rust
/// use qkart_core::cart::total_value;
///
/// assert!(total_value(&[]).is_zero());
/// ```
pub fn total_value(items: &[CartLineItem]) -> Money {
    items.iter().map(CartLineItem::line_total).sum()
}

/// Total number of product units in the cart: Σ quantity.
///
/// Zero for an empty slice.
pub fn total_quantity(items: &[CartLineItem]) -> i64 {
    items.iter().map(|item| item.quantity).sum()
}

/// Computes the checkout "Order Details" block from reconciled line items.
///
/// ## User Workflow
/// ```text
/// Checkout page
///      │
///      ▼
/// order_summary(items) ← THIS FUNCTION
///      │
///      ▼
/// Products:          3
/// Subtotal:     $25.00
/// Shipping:      $0.00
/// Total:        $25.00
/// ```
pub fn order_summary(items: &[CartLineItem]) -> OrderSummary {
    let subtotal = total_value(items);
    // QKart ships free today
    let shipping = Money::zero();

    OrderSummary {
        product_count: total_quantity(items),
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn product(id: &str, cost_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("product {id}"),
            category: "Fashion".to_string(),
            cost_cents,
            rating: Rating::new(4).unwrap(),
            image: format!("https://example.com/{id}.png"),
        }
    }

    fn entry(product_id: &str, quantity: i64) -> CartEntry {
        CartEntry {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_missing_input_yields_none() {
        let catalog = vec![product("A", 1000)];
        let entries = vec![entry("A", 1)];

        assert!(reconcile(None, Some(&catalog)).is_none());
        assert!(reconcile(Some(&entries), None).is_none());
        assert!(reconcile(None, None).is_none());
    }

    #[test]
    fn test_empty_inputs_yield_empty_not_none() {
        let items = reconcile(Some(&[]), Some(&[])).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_output_is_subset_of_catalog() {
        let catalog = vec![product("A", 1000), product("B", 500)];
        let entries = vec![entry("B", 1), entry("Z", 4)];

        let items = reconcile(Some(&entries), Some(&catalog)).unwrap();
        for item in &items {
            assert!(catalog.iter().any(|p| p.id == item.product_id));
        }
        // One distinct known id in the cart, so at most one line item
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_unknown_reference_silently_dropped() {
        let catalog = vec![product("A", 1000)];
        let entries = vec![entry("Z", 2)];

        let items = reconcile(Some(&entries), Some(&catalog)).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_duplicate_entries_last_quantity_wins() {
        let catalog = vec![product("A", 1000)];
        let entries = vec![entry("A", 1), entry("A", 3)];

        let items = reconcile(Some(&entries), Some(&catalog)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 3);
        assert_eq!(total_value(&items).cents(), 3000);
    }

    #[test]
    fn test_output_follows_catalog_order() {
        let catalog = vec![product("A", 100), product("B", 200), product("C", 300)];
        // Cart order is deliberately reversed
        let entries = vec![entry("C", 1), entry("A", 1)];

        let items = reconcile(Some(&entries), Some(&catalog)).unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["A", "C"]);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let catalog = vec![product("A", 1000), product("B", 500)];
        let entries = vec![entry("A", 2), entry("B", 1)];

        let first = reconcile(Some(&entries), Some(&catalog));
        let second = reconcile(Some(&entries), Some(&catalog));
        assert_eq!(first, second);
    }

    #[test]
    fn test_totals() {
        let catalog = vec![product("A", 1000), product("B", 500)];
        let entries = vec![entry("A", 2), entry("B", 1)];
        let items = reconcile(Some(&entries), Some(&catalog)).unwrap();

        assert_eq!(total_value(&items).cents(), 2500);
        assert_eq!(total_quantity(&items), 3);
    }

    #[test]
    fn test_totals_on_empty() {
        assert!(total_value(&[]).is_zero());
        assert_eq!(total_quantity(&[]), 0);
    }

    #[test]
    fn test_zero_quantity_entry_is_kept_at_zero() {
        // A reconciled quantity of 0 is representable; it contributes
        // nothing to either total
        let catalog = vec![product("A", 1000)];
        let entries = vec![entry("A", 0)];

        let items = reconcile(Some(&entries), Some(&catalog)).unwrap();
        assert_eq!(items.len(), 1);
        assert!(total_value(&items).is_zero());
        assert_eq!(total_quantity(&items), 0);
    }

    #[test]
    fn test_order_summary() {
        let catalog = vec![product("A", 1000), product("B", 500)];
        let entries = vec![entry("A", 2), entry("B", 1)];
        let items = reconcile(Some(&entries), Some(&catalog)).unwrap();

        let summary = order_summary(&items);
        assert_eq!(summary.product_count, 3);
        assert_eq!(summary.subtotal.cents(), 2500);
        assert!(summary.shipping.is_zero());
        assert_eq!(summary.total.cents(), 2500);
    }

    #[test]
    fn test_order_summary_on_empty() {
        let summary = order_summary(&[]);
        assert_eq!(summary.product_count, 0);
        assert!(summary.subtotal.is_zero());
        assert!(summary.total.is_zero());
    }
}
