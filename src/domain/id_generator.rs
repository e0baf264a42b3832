//! Identifier generation contract.

use crate::error::AppError;

/// Produces candidate short identifiers.
///
/// Implementations are pure generators that never consult storage, so they
/// do not guarantee uniqueness. The store checks every candidate against its
/// index and asks for another one on collision.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns a new candidate identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the entropy source is unavailable.
    fn generate(&self) -> Result<String, AppError>;
}
