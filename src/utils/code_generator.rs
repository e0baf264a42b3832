//! Short identifier generation.
//!
//! Identifiers are random bytes from the operating system RNG, encoded as
//! URL-safe base64 without padding.

use crate::domain::id_generator::IdGenerator;
use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Default number of random bytes per identifier (8 characters once encoded).
pub const DEFAULT_ID_LENGTH_BYTES: usize = 6;

/// Smallest accepted byte length.
pub const MIN_ID_LENGTH_BYTES: usize = 3;

/// Largest accepted byte length.
pub const MAX_ID_LENGTH_BYTES: usize = 32;

/// Generates an identifier from `length_bytes` random bytes.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let id = generate_code(6)?;
/// assert_eq!(id.len(), 8);
/// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code(length_bytes: usize) -> Result<String, AppError> {
    let mut buffer = vec![0u8; length_bytes];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random bytes",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// [`IdGenerator`] backed by the operating system RNG.
#[derive(Debug, Clone, Copy)]
pub struct RandomIdGenerator {
    length_bytes: usize,
}

impl RandomIdGenerator {
    /// Creates a generator producing ids from `length_bytes` random bytes.
    ///
    /// The length is clamped to the supported range.
    pub fn new(length_bytes: usize) -> Self {
        Self {
            length_bytes: length_bytes.clamp(MIN_ID_LENGTH_BYTES, MAX_ID_LENGTH_BYTES),
        }
    }

    pub fn length_bytes(&self) -> usize {
        self.length_bytes
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH_BYTES)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> Result<String, AppError> {
        generate_code(self.length_bytes)
    }
}
