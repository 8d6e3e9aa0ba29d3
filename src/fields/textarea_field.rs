//! Multi-line text field rendered as `<textarea>`

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};
use crate::params::html_params;
use crate::search::SearchBuilderType;

const FORM_TEMPLATE: &str = "forms/textarea.html";

/// Field for long-form text attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAreaField {
	#[serde(flatten)]
	pub base: BaseField,
	pub help_text: Option<String>,
	pub maxlength: Option<u32>,
	pub minlength: Option<u32>,
}

impl TextAreaField {
	pub const CLASS: &'static str = "field-textarea form-control";
	pub const ERROR_CLASS: &'static str = "is-invalid";

	/// Create a new TextAreaField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::TextAreaField;
	///
	/// let field = TextAreaField::new("bio").with_maxlength(500);
	/// assert_eq!(field.input_params(), r#"maxlength="500""#);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "TextAreaField");
		base.search_builder_type = SearchBuilderType::String;
		base.form_template = FORM_TEMPLATE.to_string();
		Self {
			base,
			help_text: None,
			maxlength: None,
			minlength: None,
		}
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Set the maximum character count (descriptive only, not enforced)
	pub fn with_maxlength(mut self, maxlength: u32) -> Self {
		self.maxlength = Some(maxlength);
		self
	}

	/// Set the minimum character count (descriptive only, not enforced)
	pub fn with_minlength(mut self, minlength: u32) -> Self {
		self.minlength = Some(minlength);
		self
	}

	/// Attribute string for the textarea element: only `minlength` and
	/// `maxlength`, each when set.
	pub fn input_params(&self) -> String {
		html_params([
			("minlength", self.minlength.map(|v| v.to_string())),
			("maxlength", self.maxlength.map(|v| v.to_string())),
		])
	}
}

impl AdminField for TextAreaField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}
