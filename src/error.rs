//! Error types for field construction

use thiserror::Error;

/// Errors raised while building field metadata.
///
/// Construction of concrete field values never fails; the only guarded
/// path is hydrating enum members from a dynamic payload.
#[derive(Debug, Error)]
pub enum FieldError {
	/// The dynamic enum payload was not an enumeration of members.
	#[error("expected an enumeration as an array of {{name, value}} objects, got {found}")]
	NotAnEnum { found: String },

	/// A member inside the enum payload was malformed.
	#[error("enum member at index {index} is missing a string \"{missing}\" key")]
	InvalidEnumMember { index: usize, missing: &'static str },
}

/// Result type for field operations
pub type FieldResult<T> = Result<T, FieldError>;
