//! Declarative field metadata for admin-panel UI generation
//!
//! Each field type describes how one model attribute is labeled, rendered,
//! searched, and displayed across the list/detail/create/edit pages of an
//! admin panel. Fields are pure descriptors: they carry template paths,
//! search tags, and intended input attributes, and the rendering layer reads
//! them — nothing here touches storage, generates HTML documents, or enforces
//! validation.
//!
//! Fields are built once at admin setup time and read for the lifetime of the
//! process; they are `Clone + Send + Sync` and need no synchronization.
//!
//! ```
//! use admin_fields::{AdminField, Field, HasMany, IntegerField, StringField};
//!
//! let fields: Vec<Field> = vec![
//! 	StringField::new("first_name").required().into(),
//! 	IntegerField::new("age").with_min(0).with_max(120).into(),
//! 	HasMany::new("posts").with_identity("Post").into(),
//! ];
//!
//! assert_eq!(fields[0].label(), "First name");
//! let dict = fields[1].to_dict();
//! assert_eq!(dict["kind"], "IntegerField");
//! ```

pub mod error;
pub mod field;
pub mod fields;
pub mod params;
pub mod search;

pub use error::{FieldError, FieldResult};
pub use field::{AdminField, BaseField, Field, FieldView, derive_label};
pub use fields::{
	BooleanField, DateField, DateTimeField, DecimalField, EmailField, EnumField, EnumValue,
	FieldEnum, FileField, HasMany, HasOne, ImageField, IntegerField, JSONField, PhoneField,
	StringField, TagsField, TextAreaField, TimeField,
};
pub use params::{escape_html_attr, html_params};
pub use search::SearchBuilderType;
