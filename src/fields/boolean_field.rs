//! Boolean field rendered as a checkbox/toggle

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};
use crate::search::SearchBuilderType;

const KIND: &str = "BooleanField";
const RENDER_JS: &str = "js/bool.js";
const FORM_TEMPLATE: &str = "forms/boolean.html";
const DISPLAY_TEMPLATE: &str = "displays/boolean.html";

/// Field for true/false model attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanField {
	#[serde(flatten)]
	pub base: BaseField,
}

impl BooleanField {
	/// Create a new BooleanField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::{AdminField, BooleanField};
	///
	/// let field = BooleanField::new("is_active");
	/// assert_eq!(field.label(), "Is active");
	/// assert_eq!(field.kind(), "BooleanField");
	/// assert_eq!(field.search_builder_type().as_tag(), "bool");
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, KIND);
		base.search_builder_type = SearchBuilderType::Bool;
		base.render_js = RENDER_JS.to_string();
		base.form_template = FORM_TEMPLATE.to_string();
		base.display_template = DISPLAY_TEMPLATE.to_string();
		Self { base }
	}
}

impl AdminField for BooleanField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}
