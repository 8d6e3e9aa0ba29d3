//! Field metadata core
//!
//! Every admin field variant embeds [`BaseField`], which carries the
//! attributes shared by all input kinds: identity, labeling, per-view
//! visibility, search/sort participation, and the template/script paths the
//! rendering layer resolves. Variants override the defaults through their own
//! constructors and expose the shared chainable API via [`AdminField`].

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::{
	BooleanField, DateField, DateTimeField, DecimalField, EmailField, EnumField, FileField,
	HasMany, HasOne, ImageField, IntegerField, JSONField, PhoneField, StringField, TagsField,
	TextAreaField, TimeField,
};
use crate::search::SearchBuilderType;

/// Derive a human-readable label from an attribute name.
///
/// Underscores become spaces, the first character is uppercased and the rest
/// lowercased. Invoked exactly once, at construction time, when no explicit
/// label is supplied.
///
/// # Examples
///
/// ```
/// use admin_fields::field::derive_label;
///
/// assert_eq!(derive_label("first_name"), "First name");
/// assert_eq!(derive_label("EMAIL_ADDRESS"), "Email address");
/// ```
pub fn derive_label(name: &str) -> String {
	let spaced = name.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(|c| c.to_lowercase()))
			.collect(),
		None => String::new(),
	}
}

/// Admin page a field can be excluded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldView {
	List,
	Detail,
	Create,
	Edit,
}

/// Attributes shared by every field variant.
///
/// A `BaseField` is never rendered on its own; concrete variants embed one
/// (flattened in the serialized form) and override its defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseField {
	/// Attribute name in the underlying model
	pub name: String,
	/// Display label, derived from `name` when not supplied
	pub label: String,
	/// Variant tag the renderer uses to pick a template
	pub kind: String,
	/// Filter-control tag for the search UI
	pub search_builder_type: SearchBuilderType,
	pub required: bool,
	pub is_array: bool,
	pub searchable: bool,
	pub orderable: bool,
	pub exclude_from_list: bool,
	pub exclude_from_detail: bool,
	pub exclude_from_create: bool,
	pub exclude_from_edit: bool,
	/// Client-side render script for list cells
	pub render_js: String,
	/// Form template path
	pub form_template: String,
	/// Optional form companion script
	pub form_js: Option<String>,
	/// Detail display template path
	pub display_template: String,
	/// Optional display companion script
	pub display_js: Option<String>,
}

impl BaseField {
	/// Build the shared core with the generic defaults.
	///
	/// The label is derived from `name` here and never recomputed.
	pub fn new(name: impl Into<String>, kind: &str) -> Self {
		let name = name.into();
		let label = derive_label(&name);
		Self {
			name,
			label,
			kind: kind.to_string(),
			search_builder_type: SearchBuilderType::Default,
			required: false,
			is_array: false,
			searchable: true,
			orderable: true,
			exclude_from_list: false,
			exclude_from_detail: false,
			exclude_from_create: false,
			exclude_from_edit: false,
			render_js: "js/text.js".to_string(),
			form_template: "forms/input.html".to_string(),
			form_js: None,
			display_template: "displays/text.html".to_string(),
			display_js: None,
		}
	}

	/// Whether the field is hidden on the given admin page.
	pub fn is_excluded_from(&self, view: FieldView) -> bool {
		match view {
			FieldView::List => self.exclude_from_list,
			FieldView::Detail => self.exclude_from_detail,
			FieldView::Create => self.exclude_from_create,
			FieldView::Edit => self.exclude_from_edit,
		}
	}
}

/// Common interface implemented once per field kind.
///
/// Provides the accessors the renderer and search integration read, the
/// chainable overrides shared by every variant, and [`AdminField::to_dict`]
/// for the template layer.
///
/// # Examples
///
/// ```
/// use admin_fields::{AdminField, FieldView, IntegerField};
///
/// let age = IntegerField::new("age").required().exclude_from_edit();
/// assert_eq!(age.label(), "Age");
/// assert!(age.base().required);
/// assert!(age.is_excluded_from(FieldView::Edit));
/// assert!(!age.is_excluded_from(FieldView::List));
/// ```
pub trait AdminField: Sized {
	fn base(&self) -> &BaseField;
	fn base_mut(&mut self) -> &mut BaseField;

	fn name(&self) -> &str {
		&self.base().name
	}

	fn label(&self) -> &str {
		&self.base().label
	}

	fn kind(&self) -> &str {
		&self.base().kind
	}

	fn search_builder_type(&self) -> &SearchBuilderType {
		&self.base().search_builder_type
	}

	fn is_excluded_from(&self, view: FieldView) -> bool {
		self.base().is_excluded_from(view)
	}

	/// Override the derived label
	fn with_label(mut self, label: impl Into<String>) -> Self {
		self.base_mut().label = label.into();
		self
	}

	/// Mark the field as required
	fn required(mut self) -> Self {
		self.base_mut().required = true;
		self
	}

	/// Mark the field as holding an array of values
	fn array(mut self) -> Self {
		self.base_mut().is_array = true;
		self
	}

	fn searchable(mut self, searchable: bool) -> Self {
		self.base_mut().searchable = searchable;
		self
	}

	fn orderable(mut self, orderable: bool) -> Self {
		self.base_mut().orderable = orderable;
		self
	}

	fn with_search_builder_type(mut self, search_builder_type: SearchBuilderType) -> Self {
		self.base_mut().search_builder_type = search_builder_type;
		self
	}

	fn exclude_from_list(mut self) -> Self {
		self.base_mut().exclude_from_list = true;
		self
	}

	fn exclude_from_detail(mut self) -> Self {
		self.base_mut().exclude_from_detail = true;
		self
	}

	fn exclude_from_create(mut self) -> Self {
		self.base_mut().exclude_from_create = true;
		self
	}

	fn exclude_from_edit(mut self) -> Self {
		self.base_mut().exclude_from_edit = true;
		self
	}

	fn with_render_js(mut self, path: impl Into<String>) -> Self {
		self.base_mut().render_js = path.into();
		self
	}

	fn with_form_template(mut self, path: impl Into<String>) -> Self {
		self.base_mut().form_template = path.into();
		self
	}

	fn with_form_js(mut self, path: impl Into<String>) -> Self {
		self.base_mut().form_js = Some(path.into());
		self
	}

	fn with_display_template(mut self, path: impl Into<String>) -> Self {
		self.base_mut().display_template = path.into();
		self
	}

	fn with_display_js(mut self, path: impl Into<String>) -> Self {
		self.base_mut().display_js = Some(path.into());
		self
	}

	/// Serialize the field to a flat ordered mapping of attribute to value.
	///
	/// Every declared attribute (shared and variant-specific) appears, with
	/// nested structures deep-converted, so templates can rely on key
	/// presence. The shape is stable across calls.
	fn to_dict(&self) -> Map<String, Value>
	where
		Self: Serialize,
	{
		match serde_json::to_value(self) {
			Ok(Value::Object(map)) => map,
			// Fields always serialize to objects
			_ => Map::new(),
		}
	}
}

/// Tagged union over every concrete field variant.
///
/// Model views hold a `Vec<Field>`; the renderer dispatches on
/// [`AdminField::kind`] to pick templates. Serialization is flat (the variant
/// tag lives in the `kind` attribute, not in an outer wrapper) and
/// deserialization dispatches on that same attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
	Boolean(BooleanField),
	String(StringField),
	Integer(IntegerField),
	Decimal(DecimalField),
	TextArea(TextAreaField),
	Tags(TagsField),
	Email(EmailField),
	Phone(PhoneField),
	Enum(EnumField),
	DateTime(DateTimeField),
	Date(DateField),
	Time(TimeField),
	Json(JSONField),
	File(FileField),
	Image(ImageField),
	HasOne(HasOne),
	HasMany(HasMany),
}

macro_rules! field_dispatch {
	($self:ident, $inner:ident => $expr:expr) => {
		match $self {
			Field::Boolean($inner) => $expr,
			Field::String($inner) => $expr,
			Field::Integer($inner) => $expr,
			Field::Decimal($inner) => $expr,
			Field::TextArea($inner) => $expr,
			Field::Tags($inner) => $expr,
			Field::Email($inner) => $expr,
			Field::Phone($inner) => $expr,
			Field::Enum($inner) => $expr,
			Field::DateTime($inner) => $expr,
			Field::Date($inner) => $expr,
			Field::Time($inner) => $expr,
			Field::Json($inner) => $expr,
			Field::File($inner) => $expr,
			Field::Image($inner) => $expr,
			Field::HasOne($inner) => $expr,
			Field::HasMany($inner) => $expr,
		}
	};
}

impl AdminField for Field {
	fn base(&self) -> &BaseField {
		field_dispatch!(self, inner => inner.base())
	}

	fn base_mut(&mut self) -> &mut BaseField {
		field_dispatch!(self, inner => inner.base_mut())
	}
}

macro_rules! impl_from_variant {
	($($variant:ident => $ty:ty),+ $(,)?) => {
		$(impl From<$ty> for Field {
			fn from(field: $ty) -> Self {
				Field::$variant(field)
			}
		})+
	};
}

impl_from_variant! {
	Boolean => BooleanField,
	String => StringField,
	Integer => IntegerField,
	Decimal => DecimalField,
	TextArea => TextAreaField,
	Tags => TagsField,
	Email => EmailField,
	Phone => PhoneField,
	Enum => EnumField,
	DateTime => DateTimeField,
	Date => DateField,
	Time => TimeField,
	Json => JSONField,
	File => FileField,
	Image => ImageField,
	HasOne => HasOne,
	HasMany => HasMany,
}

impl<'de> Deserialize<'de> for Field {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = Value::deserialize(deserializer)?;
		let kind = value
			.get("kind")
			.and_then(Value::as_str)
			.ok_or_else(|| de::Error::missing_field("kind"))?;

		fn rehydrate<'de, T, D, F>(value: Value, wrap: F) -> Result<Field, D::Error>
		where
			T: serde::de::DeserializeOwned,
			D: Deserializer<'de>,
			F: FnOnce(T) -> Field,
		{
			serde_json::from_value(value).map(wrap).map_err(de::Error::custom)
		}

		match kind {
			"BooleanField" => rehydrate::<_, D, _>(value, Field::Boolean),
			// PhoneField shares this tag; the serialized form carries no
			// input-type distinction, so it rehydrates as a StringField.
			"StringField" => rehydrate::<_, D, _>(value, Field::String),
			"IntegerField" => rehydrate::<_, D, _>(value, Field::Integer),
			"DecimalField" => rehydrate::<_, D, _>(value, Field::Decimal),
			"TextAreaField" => rehydrate::<_, D, _>(value, Field::TextArea),
			"tags" => rehydrate::<_, D, _>(value, Field::Tags),
			"email" => rehydrate::<_, D, _>(value, Field::Email),
			"enum" => rehydrate::<_, D, _>(value, Field::Enum),
			"datetime" => rehydrate::<_, D, _>(value, Field::DateTime),
			"date" => rehydrate::<_, D, _>(value, Field::Date),
			"time" => rehydrate::<_, D, _>(value, Field::Time),
			"json" => rehydrate::<_, D, _>(value, Field::Json),
			"file" => rehydrate::<_, D, _>(value, Field::File),
			"image" => rehydrate::<_, D, _>(value, Field::Image),
			"relation" if value.get("many").is_some() => {
				rehydrate::<_, D, _>(value, Field::HasMany)
			}
			"relation" => rehydrate::<_, D, _>(value, Field::HasOne),
			other => Err(de::Error::custom(format!("unknown field kind: {other}"))),
		}
	}
}
