// Basic fields
pub mod boolean_field;
pub mod number_field;
pub mod string_field;
pub mod textarea_field;

// Choice fields
pub mod enum_field;
pub mod tags_field;

// Date/time fields
pub mod datetime_field;

// Structured and file fields
pub mod file_field;
pub mod json_field;

// Relations
pub mod relation_field;

// Re-exports for basic fields
pub use boolean_field::BooleanField;
pub use number_field::{DecimalField, IntegerField};
pub use string_field::{EmailField, PhoneField, StringField};
pub use textarea_field::TextAreaField;

// Re-exports for choice fields
pub use enum_field::{EnumField, EnumValue, FieldEnum};
pub use tags_field::TagsField;

// Re-exports for date/time fields
pub use datetime_field::{DateField, DateTimeField, TimeField};

// Re-exports for structured and file fields
pub use file_field::{FileField, ImageField};
pub use json_field::JSONField;

// Re-exports for relations
pub use relation_field::{HasMany, HasOne};
