//! Enumeration field rendered as a select input
//!
//! Members come either from a Rust enum implementing [`FieldEnum`] (the
//! [`field_enum!`] macro writes that impl) or from a dynamic JSON payload via
//! [`EnumField::try_from_values`], the one fallible constructor in the crate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{FieldError, FieldResult};
use crate::field::{AdminField, BaseField};
use crate::search::SearchBuilderType;

/// One selectable member: symbolic name plus underlying value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
	pub name: String,
	pub value: Value,
}

impl EnumValue {
	pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Enumeration types usable with [`EnumField::from_enum`].
///
/// `members` must return every member in declaration order. Implement by
/// hand or through [`field_enum!`].
pub trait FieldEnum {
	fn members() -> Vec<EnumValue>;
}

/// Define an enum together with its [`FieldEnum`] implementation.
///
/// # Examples
///
/// ```
/// use admin_fields::{EnumField, field_enum};
///
/// field_enum! {
/// 	pub enum Status {
/// 		New = "new",
/// 		Done = "done",
/// 	}
/// }
///
/// let field = EnumField::from_enum::<Status>("status");
/// assert_eq!(field.values.len(), 2);
/// assert_eq!(field.values[0].name, "New");
/// assert_eq!(field.values[0].value, "new");
/// ```
#[macro_export]
macro_rules! field_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($(#[$vmeta:meta])* $member:ident = $value:expr),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		$vis enum $name {
			$($(#[$vmeta])* $member),+
		}

		impl $crate::fields::FieldEnum for $name {
			fn members() -> Vec<$crate::fields::EnumValue> {
				vec![
					$($crate::fields::EnumValue::new(stringify!($member), $value)),+
				]
			}
		}
	};
}

/// Field whose value is drawn from a fixed set of members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumField {
	#[serde(flatten)]
	pub base: BaseField,
	/// Selectable members, in declaration order
	pub values: Vec<EnumValue>,
}

impl EnumField {
	/// Create a new EnumField with the given name and no members.
	pub fn new(name: impl Into<String>) -> Self {
		let mut base = BaseField::new(name, "enum");
		base.search_builder_type = SearchBuilderType::String;
		Self {
			base,
			values: Vec::new(),
		}
	}

	/// Replace the member list.
	pub fn with_values(mut self, values: Vec<EnumValue>) -> Self {
		self.values = values;
		self
	}

	/// Build the member list from an enumeration type.
	///
	/// The trait bound is the type check: only enumerations implementing
	/// [`FieldEnum`] are accepted, and members keep declaration order.
	pub fn from_enum<E: FieldEnum>(name: impl Into<String>) -> Self {
		Self::new(name).with_values(E::members())
	}

	/// Build the member list from a dynamic JSON payload.
	///
	/// The payload must be an array of `{name, value}` objects; anything
	/// else is rejected with a descriptive error instead of producing an
	/// empty member list.
	pub fn try_from_values(name: impl Into<String>, payload: &Value) -> FieldResult<Self> {
		let name = name.into();
		let members = match payload.as_array() {
			Some(members) => members,
			None => {
				debug!(field = %name, "enum payload rejected: not an array");
				return Err(FieldError::NotAnEnum {
					found: json_kind(payload).to_string(),
				});
			}
		};

		let mut values = Vec::with_capacity(members.len());
		for (index, member) in members.iter().enumerate() {
			let entry = member.as_object().ok_or(FieldError::NotAnEnum {
				found: json_kind(member).to_string(),
			})?;
			let member_name = entry
				.get("name")
				.and_then(Value::as_str)
				.ok_or(FieldError::InvalidEnumMember {
					index,
					missing: "name",
				})?;
			let value = entry
				.get("value")
				.ok_or(FieldError::InvalidEnumMember {
					index,
					missing: "value",
				})?;
			values.push(EnumValue::new(member_name, value.clone()));
		}

		Ok(Self::new(name).with_values(values))
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

impl AdminField for EnumField {
	fn base(&self) -> &BaseField {
		&self.base
	}

	fn base_mut(&mut self) -> &mut BaseField {
		&mut self.base
	}
}
