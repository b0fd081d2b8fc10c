// web_app/error.rs - Error types for the fallible edges of the storefront
//
// The query pipeline itself never fails: an empty result is a normal
// outcome. Errors only come from parsing user-facing keys, validating a
// catalog, and reading configuration.

use rust_decimal::Decimal;
use thiserror::Error;

/// A UI key that does not name any known option
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),

    #[error("unknown admin tab '{0}'")]
    UnknownAdminTab(String),
}

/// A catalog that violates the item invariants
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog item at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("duplicate catalog id '{0}'")]
    DuplicateId(String),

    #[error("item '{id}' has a negative price {price}")]
    NegativePrice { id: String, price: Decimal },

    #[error("item '{id}' has original price {original} below its price {price}")]
    OriginalBelowPrice {
        id: String,
        price: Decimal,
        original: Decimal,
    },

    #[error("item '{id}' has rating {rating} outside 0..=5")]
    RatingOutOfRange { id: String, rating: Decimal },

    #[error("item '{id}' has tag '{tag}' that is not lowercase")]
    TagNotLowercase { id: String, tag: String },

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// An environment variable with a value the storefront cannot use
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}
