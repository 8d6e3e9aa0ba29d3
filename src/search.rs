//! Search-builder integration tags
//!
//! The datatable search UI picks its filter controls from a fixed set of
//! string tags attached to each field. Date/time fields carry a
//! `moment-<pattern>` tag whose pattern the client-side library parses.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Tag telling the search-UI widget how to render filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBuilderType {
	/// Generic filter controls
	Default,
	/// True/false toggle
	Bool,
	/// Free-text matching
	String,
	/// Numeric range controls
	Num,
	/// Date/time controls driven by a moment.js format pattern
	Moment(String),
}

impl SearchBuilderType {
	/// Tag consumed by `columns.searchBuilderType` on the client.
	pub fn as_tag(&self) -> String {
		match self {
			SearchBuilderType::Default => "default".to_string(),
			SearchBuilderType::Bool => "bool".to_string(),
			SearchBuilderType::String => "string".to_string(),
			SearchBuilderType::Num => "num".to_string(),
			SearchBuilderType::Moment(pattern) => format!("moment-{pattern}"),
		}
	}

	/// Parse a tag back into its typed form.
	///
	/// Returns `None` for tags outside the fixed set.
	pub fn from_tag(tag: &str) -> Option<Self> {
		match tag {
			"default" => Some(SearchBuilderType::Default),
			"bool" => Some(SearchBuilderType::Bool),
			"string" => Some(SearchBuilderType::String),
			"num" => Some(SearchBuilderType::Num),
			_ => tag
				.strip_prefix("moment-")
				.map(|pattern| SearchBuilderType::Moment(pattern.to_string())),
		}
	}
}

impl fmt::Display for SearchBuilderType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.as_tag())
	}
}

impl Serialize for SearchBuilderType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.as_tag())
	}
}

impl<'de> Deserialize<'de> for SearchBuilderType {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let tag = String::deserialize(deserializer)?;
		SearchBuilderType::from_tag(&tag)
			.ok_or_else(|| de::Error::custom(format!("unknown search builder tag: {tag}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(SearchBuilderType::Default, "default")]
	#[case(SearchBuilderType::Bool, "bool")]
	#[case(SearchBuilderType::String, "string")]
	#[case(SearchBuilderType::Num, "num")]
	#[case(SearchBuilderType::Moment("HH:mm:ss".to_string()), "moment-HH:mm:ss")]
	fn test_tag_round_trip(#[case] value: SearchBuilderType, #[case] tag: &str) {
		assert_eq!(value.as_tag(), tag);
		assert_eq!(SearchBuilderType::from_tag(tag), Some(value));
	}

	#[test]
	fn test_unknown_tag_is_rejected() {
		assert_eq!(SearchBuilderType::from_tag("fuzzy"), None);
	}

	#[test]
	fn test_serde_round_trip() {
		let value = SearchBuilderType::Moment("MMMM D, YYYY".to_string());

		let json = serde_json::to_string(&value).unwrap();
		assert_eq!(json, r#""moment-MMMM D, YYYY""#);

		let back: SearchBuilderType = serde_json::from_str(&json).unwrap();
		assert_eq!(back, value);
	}

	#[test]
	fn test_deserialize_unknown_tag_errors() {
		let result: Result<SearchBuilderType, _> = serde_json::from_str(r#""fuzzy""#);
		assert!(result.is_err());
	}
}
