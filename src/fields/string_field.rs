//! Single-line text fields and their email/phone variants

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};
use crate::params::html_params;
use crate::search::SearchBuilderType;

/// Field for free-text model attributes rendered as `<input type="text">`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringField {
	#[serde(flatten)]
	pub base: BaseField,
	/// Hint shown under the form input
	pub help_text: Option<String>,
}

impl StringField {
	/// `type` attribute of the rendered input element
	pub const INPUT_TYPE: &'static str = "text";
	/// CSS class applied by the form template
	pub const CLASS: &'static str = "field-string form-control";
	/// CSS class applied when server-side validation rejected the value
	pub const ERROR_CLASS: &'static str = "is-invalid";

	/// Create a new StringField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::{AdminField, StringField};
	///
	/// let field = StringField::new("first_name");
	/// assert_eq!(field.label(), "First name");
	/// assert_eq!(field.input_params(), r#"type="text""#);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "StringField");
		base.search_builder_type = SearchBuilderType::String;
		Self {
			base,
			help_text: None,
		}
	}

	/// Set the hint shown under the form input
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Attribute string for the native input element.
	pub fn input_params(&self) -> String {
		html_params([("type", Some(Self::INPUT_TYPE.to_string()))])
	}
}

impl AdminField for StringField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

/// String field carrying the `email` tag so displays can highlight the value.
///
/// The field itself does not validate addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailField {
	#[serde(flatten)]
	pub base: BaseField,
	pub help_text: Option<String>,
}

impl EmailField {
	pub const INPUT_TYPE: &'static str = "text";
	pub const CLASS: &'static str = "field-string form-control";
	pub const ERROR_CLASS: &'static str = "is-invalid";

	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "email");
		base.search_builder_type = SearchBuilderType::String;
		Self {
			base,
			help_text: None,
		}
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn input_params(&self) -> String {
		html_params([("type", Some(Self::INPUT_TYPE.to_string()))])
	}
}

impl AdminField for EmailField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

/// String field rendered as `<input type="phone">`.
///
/// Keeps the `StringField` kind tag; only the input type differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneField {
	#[serde(flatten)]
	pub base: BaseField,
	pub help_text: Option<String>,
}

impl PhoneField {
	pub const INPUT_TYPE: &'static str = "phone";
	pub const CLASS: &'static str = "field-string form-control";
	pub const ERROR_CLASS: &'static str = "is-invalid";

	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "StringField");
		base.search_builder_type = SearchBuilderType::String;
		Self {
			base,
			help_text: None,
		}
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn input_params(&self) -> String {
		html_params([("type", Some(Self::INPUT_TYPE.to_string()))])
	}
}

impl AdminField for PhoneField {
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
	fn test_string_field_defaults() {
		let field = StringField::new("title");

		assert_eq!(field.kind(), "StringField");
		assert_eq!(field.base.search_builder_type, SearchBuilderType::String);
		assert_eq!(field.help_text, None);
		assert_eq!(field.base.form_template, "forms/input.html");
	}

	#[test]
	fn test_string_field_input_params() {
		let field = StringField::new("title");
		assert_eq!(field.input_params(), r#"type="text""#);
	}

	#[test]
	fn test_string_field_help_text() {
		let field = StringField::new("title").with_help_text("Shown in page headers");
		assert_eq!(field.help_text.as_deref(), Some("Shown in page headers"));
	}

	#[test]
	fn test_email_field_kind() {
		let field = EmailField::new("email_address");

		assert_eq!(field.kind(), "email");
		assert_eq!(field.label(), "Email address");
		// Behaves as a plain string input
		assert_eq!(field.input_params(), r#"type="text""#);
	}

	#[test]
	fn test_phone_field_keeps_string_kind() {
		let field = PhoneField::new("mobile");

		assert_eq!(field.kind(), "StringField");
		assert_eq!(field.input_params(), r#"type="phone""#);
	}

	#[test]
	fn test_class_constants() {
		assert_eq!(StringField::CLASS, "field-string form-control");
		assert_eq!(StringField::ERROR_CLASS, "is-invalid");
		assert_eq!(PhoneField::INPUT_TYPE, "phone");
	}
}
