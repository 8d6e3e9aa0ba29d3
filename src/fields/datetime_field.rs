//! Date and time fields
//!
//! These carry two pattern strings: a strftime-style `output_format` applied
//! server-side when displaying values, and a moment.js `search_format` the
//! search UI sends when filtering. `search_format = None` means the search UI
//! sends ISO format.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::field::{AdminField, BaseField};
use crate::search::SearchBuilderType;

/// Field for timestamp attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeField {
	#[serde(flatten)]
	pub base: BaseField,
	/// strftime pattern for display output
	pub output_format: String,
	/// moment.js pattern sent on search, ISO when absent
	pub search_format: Option<String>,
}

impl DateTimeField {
	/// Create a new DateTimeField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use admin_fields::{AdminField, DateTimeField};
	///
	/// let field = DateTimeField::new("created_at");
	/// assert_eq!(field.output_format, "%B %d, %Y %H:%M:%S");
	/// assert_eq!(
	/// 	field.search_builder_type().as_tag(),
	/// 	"moment-MMMM D, YYYY HH:mm:ss"
	/// );
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "datetime");
		base.search_builder_type = SearchBuilderType::Moment("MMMM D, YYYY HH:mm:ss".to_string());
		Self {
			base,
			output_format: "%B %d, %Y %H:%M:%S".to_string(),
			search_format: None,
		}
	}

	pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
		self.output_format = output_format.into();
		self
	}

	pub fn with_search_format(mut self, search_format: impl Into<String>) -> Self {
		self.search_format = Some(search_format.into());
		self
	}

	/// Render a timestamp with this field's output format.
	pub fn format(&self, value: &NaiveDateTime) -> String {
		value.format(&self.output_format).to_string()
	}
}

impl AdminField for DateTimeField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

/// Field for date attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateField {
	#[serde(flatten)]
	pub base: BaseField,
	pub output_format: String,
	pub search_format: Option<String>,
}

impl DateField {
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "date");
		base.search_builder_type = SearchBuilderType::Moment("MMMM D, YYYY".to_string());
		Self {
			base,
			output_format: "%B %d, %Y".to_string(),
			search_format: Some("YYYY-MM-DD".to_string()),
		}
	}

	pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
		self.output_format = output_format.into();
		self
	}

	pub fn with_search_format(mut self, search_format: impl Into<String>) -> Self {
		self.search_format = Some(search_format.into());
		self
	}

	/// Render a date with this field's output format.
	pub fn format(&self, value: &NaiveDate) -> String {
		value.format(&self.output_format).to_string()
	}
}

impl AdminField for DateField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}

/// Field for time-of-day attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeField {
	#[serde(flatten)]
	pub base: BaseField,
	pub output_format: String,
	pub search_format: Option<String>,
}

impl TimeField {
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "time");
		base.search_builder_type = SearchBuilderType::Moment("HH:mm:ss".to_string());
		Self {
			base,
			output_format: "%H:%M:%S".to_string(),
			search_format: Some("HH:mm:ss".to_string()),
		}
	}

	pub fn with_output_format(mut self, output_format: impl Into<String>) -> Self {
		self.output_format = output_format.into();
		self
	}

	pub fn with_search_format(mut self, search_format: impl Into<String>) -> Self {
		self.search_format = Some(search_format.into());
		self
	}

	/// Render a time with this field's output format.
	pub fn format(&self, value: &NaiveTime) -> String {
		value.format(&self.output_format).to_string()
	}
}

impl AdminField for TimeField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}
