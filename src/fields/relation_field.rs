//! Relation fields pointing at other admin model views
//!
//! `identity` names the foreign model view the relation resolves through.
//! Both variants share the `relation` kind tag; the serialized `many` flag
//! distinguishes them.

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};

const KIND: &str = "relation";

/// Single-valued relation to another model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasOne {
	#[serde(flatten)]
	pub base: BaseField,
	/// Identity of the foreign model view
	pub identity: Option<String>,
}

impl HasOne {
	/// Create a new HasOne relation with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::{AdminField, HasOne};
	///
	/// let field = HasOne::new("owner").with_identity("User");
	/// assert_eq!(field.identity.as_deref(), Some("User"));
	/// assert!(!field.base().is_array);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			base: BaseField::new(name, KIND),
			identity: None,
		}
	}

	pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
		self.identity = Some(identity.into());
		self
	}
}

impl AdminField for HasOne {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

/// Multi-valued relation to another model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasMany {
	#[serde(flatten)]
	pub base: BaseField,
	pub identity: Option<String>,
	/// Always true; serialized so clients need not special-case the kind
	pub many: bool,
}

impl HasMany {
	/// Create a new HasMany relation with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::{AdminField, HasMany};
	///
	/// let field = HasMany::new("posts").with_identity("Post");
	/// assert!(field.many);
	/// assert!(field.base().is_array);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, KIND);
		base.is_array = true;
		Self {
			base,
			identity: None,
			many: true,
		}
	}

	pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
		self.identity = Some(identity.into());
		self
	}
}

impl AdminField for HasMany {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_has_one_defaults() {
		let field = HasOne::new("owner").with_identity("User");

		assert_eq!(field.kind(), "relation");
		assert_eq!(field.identity.as_deref(), Some("User"));
		assert!(!field.base.is_array);
	}

	#[test]
	fn test_has_many_is_array_and_many() {
		let field = HasMany::new("tags").with_identity("Tag");

		assert_eq!(field.kind(), "relation");
		assert!(field.many);
		assert!(field.base.is_array);
	}

	#[test]
	fn test_identity_defaults_to_none() {
		assert_eq!(HasOne::new("owner").identity, None);
		assert_eq!(HasMany::new("posts").identity, None);
	}
}
