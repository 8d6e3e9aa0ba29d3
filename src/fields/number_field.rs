//! Numeric fields rendered as `<input type="number">`

use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};
use crate::params::html_params;
use crate::search::SearchBuilderType;

const INPUT_TYPE: &str = "number";

/// Shared attribute string for numeric inputs: `type`, then `min`, `max`
/// and `step` when set.
fn number_input_params(min: Option<String>, max: Option<String>, step: Option<String>) -> String {
	html_params([
		("type", Some(INPUT_TYPE.to_string())),
		("min", min),
		("max", max),
		("step", step),
	])
}

/// Field for integer model attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegerField {
	#[serde(flatten)]
	pub base: BaseField,
	pub help_text: Option<String>,
	pub min: Option<i64>,
	pub max: Option<i64>,
	pub step: Option<String>,
}

impl IntegerField {
	pub const INPUT_TYPE: &'static str = INPUT_TYPE;
	pub const CLASS: &'static str = "field-integer form-control";
	pub const ERROR_CLASS: &'static str = "is-invalid";

	/// Create a new IntegerField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::IntegerField;
	///
	/// let field = IntegerField::new("age").with_min(0).with_max(120);
	/// assert_eq!(field.input_params(), r#"type="number" min="0" max="120""#);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "IntegerField");
		base.search_builder_type = SearchBuilderType::Num;
		Self {
			base,
			help_text: None,
			min: None,
			max: None,
			step: None,
		}
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Set the minimum accepted value (descriptive only, not enforced)
	pub fn with_min(mut self, min: i64) -> Self {
		self.min = Some(min);
		self
	}

	/// Set the maximum accepted value (descriptive only, not enforced)
	pub fn with_max(mut self, max: i64) -> Self {
		self.max = Some(max);
		self
	}

	/// Set the input step increment
	pub fn with_step(mut self, step: impl Into<String>) -> Self {
		self.step = Some(step.into());
		self
	}

	/// Attribute string for the native input element.
	pub fn input_params(&self) -> String {
		number_input_params(
			self.min.map(|v| v.to_string()),
			self.max.map(|v| v.to_string()),
			self.step.clone(),
		)
	}
}

impl AdminField for IntegerField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

/// Field for decimal model attributes; the input steps freely (`step="any"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecimalField {
	#[serde(flatten)]
	pub base: BaseField,
	pub help_text: Option<String>,
	pub min: Option<f64>,
	pub max: Option<f64>,
	pub step: Option<String>,
}

impl DecimalField {
	pub const INPUT_TYPE: &'static str = INPUT_TYPE;
	pub const CLASS: &'static str = "field-decimal form-control";
	pub const ERROR_CLASS: &'static str = "is-invalid";

	/// Create a new DecimalField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::DecimalField;
	///
	/// let field = DecimalField::new("price");
	/// assert_eq!(field.step.as_deref(), Some("any"));
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "DecimalField");
		base.search_builder_type = SearchBuilderType::Num;
		Self {
			base,
			help_text: None,
			min: None,
			max: None,
			step: Some("any".to_string()),
		}
	}

	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	pub fn with_min(mut self, min: f64) -> Self {
		self.min = Some(min);
		self
	}

	pub fn with_max(mut self, max: f64) -> Self {
		self.max = Some(max);
		self
	}

	pub fn with_step(mut self, step: impl Into<String>) -> Self {
		self.step = Some(step.into());
		self
	}

	/// Attribute string for the native input element.
	pub fn input_params(&self) -> String {
		number_input_params(
			self.min.map(|v| v.to_string()),
			self.max.map(|v| v.to_string()),
			self.step.clone(),
		)
	}
}

impl AdminField for DecimalField {
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
	use rstest::rstest;

	#[test]
	fn test_integer_field_defaults() {
		let field = IntegerField::new("age");

		assert_eq!(field.kind(), "IntegerField");
		assert_eq!(field.base.search_builder_type, SearchBuilderType::Num);
		assert_eq!(field.min, None);
		assert_eq!(field.max, None);
		assert_eq!(field.step, None);
	}

	#[test]
	fn test_integer_input_params_with_bounds() {
		let field = IntegerField::new("age").with_min(0).with_max(120);

		let params = field.input_params();
		assert!(params.contains(r#"type="number""#));
		assert!(params.contains(r#"min="0""#));
		assert!(params.contains(r#"max="120""#));
		assert!(!params.contains("step"));
	}

	#[rstest]
	#[case(IntegerField::new("count").input_params(), r#"type="number""#)]
	#[case(IntegerField::new("count").with_step("5").input_params(), r#"type="number" step="5""#)]
	fn test_integer_input_params_omits_unset(#[case] params: String, #[case] expected: &str) {
		assert_eq!(params, expected);
	}

	#[test]
	fn test_integer_negative_bounds() {
		let field = IntegerField::new("offset").with_min(-10).with_max(-1);
		assert_eq!(
			field.input_params(),
			r#"type="number" min="-10" max="-1""#
		);
	}

	#[test]
	fn test_decimal_field_step_defaults_to_any() {
		let field = DecimalField::new("price");

		assert_eq!(field.kind(), "DecimalField");
		assert_eq!(
			field.input_params(),
			r#"type="number" step="any""#
		);
	}

	#[test]
	fn test_decimal_field_bounds() {
		let field = DecimalField::new("rate").with_min(0.5).with_max(2.5);

		let params = field.input_params();
		assert!(params.contains(r#"min="0.5""#));
		assert!(params.contains(r#"max="2.5""#));
		assert!(params.contains(r#"step="any""#));
	}

	#[test]
	fn test_min_greater_than_max_is_not_validated() {
		// Descriptive metadata only; bounds are not checked
		let field = IntegerField::new("age").with_min(100).with_max(1);
		assert_eq!(field.min, Some(100));
		assert_eq!(field.max, Some(1));
	}
}
