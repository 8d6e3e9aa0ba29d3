//! File and image upload fields

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};

/// Field for file-upload attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileField {
	#[serde(flatten)]
	pub base: BaseField,
}

impl FileField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			base: BaseField::new(name, "file"),
		}
	}
}

impl AdminField for FileField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

/// File field whose content is an image; detail pages show a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageField {
	#[serde(flatten)]
	pub base: BaseField,
}

impl ImageField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			base: BaseField::new(name, "image"),
		}
	}
}

impl AdminField for ImageField {
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
	fn test_file_field_kind() {
		let field = FileField::new("attachment");
		assert_eq!(field.kind(), "file");
	}

	#[test]
	fn test_image_field_kind() {
		let field = ImageField::new("avatar");
		assert_eq!(field.kind(), "image");
	}
}
