//! Array-of-strings field backed by a tag-input widget

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};

/// Field holding an array of free-form string tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsField {
	#[serde(flatten)]
	pub base: BaseField,
}

impl TagsField {
	/// Create a new TagsField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::{AdminField, TagsField};
	///
	/// let field = TagsField::new("keywords");
	/// assert!(field.base().is_array);
	/// assert_eq!(field.kind(), "tags");
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "tags");
		base.is_array = true;
		Self { base }
	}
}

impl AdminField for TagsField {
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
	fn test_tags_field_is_array() {
		let field = TagsField::new("keywords");

		assert_eq!(field.kind(), "tags");
		assert!(field.base.is_array);
	}
}
