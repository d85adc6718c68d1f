//! Domain errors raised while turning raw book data into metrics.

use thiserror::Error;

/// Errors that occur when raw book data violates domain rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A price level carried text that is not a decimal number.
    #[error("failed to parse price '{price}': {reason}")]
    MalformedPrice {
        /// The raw price text as received.
        price: String,
        /// Why the parser rejected it.
        reason: String,
    },
}
