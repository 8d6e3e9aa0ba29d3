//! Field for raw JSON attributes

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};

/// Field displaying a model attribute as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JSONField {
	#[serde(flatten)]
	pub base: BaseField,
}

impl JSONField {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			base: BaseField::new(name, "json"),
		}
	}
}

impl AdminField for JSONField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}
