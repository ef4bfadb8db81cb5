//! # Validation Module
//!
//! Input validation utilities for QKart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form components (React)                                      │
//! │  ├── Basic format checks before submitting                             │
//! │  └── Immediate user feedback (snackbar)                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── The single source of truth for the rules                          │
//! │  └── Typed errors whose messages are shown verbatim to the user        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend API                                                  │
//! │  └── Re-validates on /auth/register, /cart                             │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use qkart_core::validation::{validate_quantity, validate_registration};
//!
//! // Validate the registration form before POSTing
//! validate_registration("crio-user", "learnbydoing", "learnbydoing").unwrap();
//!
//! // Validate quantity before a cart update
//! validate_quantity(5).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Rating;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY, MIN_CREDENTIAL_LEN};

// =============================================================================
// Credential Validators
// =============================================================================

/// Validates a registration username.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at least 6 characters
/// - Must be at most 32 characters
///
/// ## Example
/// ```rust
/// use qkart_core::validation::validate_username;
///
/// assert!(validate_username("crio-user").is_ok());
/// assert!(validate_username("").is_err());
/// assert!(validate_username("short").is_err());
/// ```
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }

    if username.len() < MIN_CREDENTIAL_LEN {
        return Err(ValidationError::TooShort {
            field: "username".to_string(),
            min: MIN_CREDENTIAL_LEN,
        });
    }

    if username.len() > 32 {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: 32,
        });
    }

    Ok(())
}

/// Validates a registration password.
///
/// ## Rules
/// - Must not be empty
/// - Must be at least 6 characters
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if password.len() < MIN_CREDENTIAL_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_CREDENTIAL_LEN,
        });
    }

    Ok(())
}

/// Validates the whole registration form.
///
/// Rule precedence follows the registration page: all fields present first,
/// then length checks, then the password/confirmation match.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Register: "Register Now" clicked                                       │
/// │                                                                         │
/// │  validate_registration(username, password, confirm) ← THIS FUNCTION     │
/// │       │                                                                 │
/// │       ├── any field empty?    → Error: "... is required"               │
/// │       │                                                                 │
/// │       ├── username/password   → Error: "... must be at least 6         │
/// │       │   under 6 chars?               characters"                     │
/// │       │                                                                 │
/// │       ├── passwords differ?   → Error: "confirm password does not      │
/// │       │                                 match password"                 │
/// │       │                                                                 │
/// │       └── OK → POST /auth/register                                     │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> ValidationResult<()> {
    // Presence of every field is checked before any other rule, matching
    // the form's "All fields are required" precedence
    for (field, value) in [
        ("username", username.trim()),
        ("password", password),
        ("confirm password", confirm_password),
    ] {
        if value.is_empty() {
            return Err(ValidationError::Required {
                field: field.to_string(),
            });
        }
    }

    validate_username(username)?;
    validate_password(password)?;

    if password != confirm_password {
        return Err(ValidationError::Mismatch {
            field: "confirm password".to_string(),
            other: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity for a cart add/update.
///
/// ## Rules
/// - Must be positive (> 0) - removing an item is a delete, not a zero
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// Note this guards the *update* path. A reconciled line item can still
/// carry quantity 0 if the cart service says so.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a product cost in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use qkart_core::validation::validate_cost_cents;
///
/// assert!(validate_cost_cents(1099).is_ok());  // $10.99
/// assert!(validate_cost_cents(0).is_ok());     // Free item
/// assert!(validate_cost_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_cost_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a product rating.
///
/// ## Rules
/// - Must be an integer between 0 and 5 stars
pub fn validate_rating(stars: u8) -> ValidationResult<Rating> {
    Rating::new(stars)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query from the header search box.
///
/// ## Rules
/// - Can be empty (empty query means "show everything")
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

/// Validates a product id before a cart operation.
///
/// ## Rules
/// - Must not be empty or blank
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of distinct products) before adding another.
///
/// ## Rules
/// - Must not exceed MAX_CART_ITEMS (100)
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::OutOfRange {
            field: "cart items".to_string(),
            min: 0,
            max: MAX_CART_ITEMS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
