//! Serialization contract for field descriptors
//!
//! Templates and client scripts read the flat mapping produced by
//! `to_dict()`; these tests pin down its shape, ordering stability, and
//! round-trip behavior.

use admin_fields::{
	AdminField, BooleanField, DateTimeField, EnumField, Field, HasMany, HasOne, IntegerField,
	StringField, field_enum,
};
use serde_json::json;

const SHARED_KEYS: &[&str] = &[
	"name",
	"label",
	"kind",
	"search_builder_type",
	"required",
	"is_array",
	"searchable",
	"orderable",
	"exclude_from_list",
	"exclude_from_detail",
	"exclude_from_create",
	"exclude_from_edit",
	"render_js",
	"form_template",
	"form_js",
	"display_template",
	"display_js",
];

#[test]
fn every_shared_attribute_is_present() {
	let dict = StringField::new("title").to_dict();

	for key in SHARED_KEYS {
		assert!(dict.contains_key(*key), "missing key: {key}");
	}
	assert!(dict.contains_key("help_text"));
}

#[test]
fn dict_shape_is_stable_across_calls() {
	let field = IntegerField::new("age").with_min(0);

	let first: Vec<String> = field.to_dict().keys().cloned().collect();
	let second: Vec<String> = field.to_dict().keys().cloned().collect();

	assert_eq!(first, second);
}

#[test]
fn defaults_survive_a_round_trip() {
	let field: Field = DateTimeField::new("created_at").into();

	let json = serde_json::to_string(&field).unwrap();
	let back: Field = serde_json::from_str(&json).unwrap();

	assert_eq!(back, field);
	assert_eq!(back.to_dict(), field.to_dict());
}

#[test]
fn explicit_overrides_survive_a_round_trip() {
	let field: Field = IntegerField::new("age")
		.with_min(0)
		.with_max(120)
		.required()
		.exclude_from_list()
		.into();

	let back: Field = serde_json::from_str(&serde_json::to_string(&field).unwrap()).unwrap();
	let dict = back.to_dict();

	assert_eq!(dict["min"], json!(0));
	assert_eq!(dict["max"], json!(120));
	assert_eq!(dict["required"], json!(true));
	assert_eq!(dict["exclude_from_list"], json!(true));
	assert_eq!(dict["exclude_from_detail"], json!(false));
}

#[test]
fn dict_values_match_fresh_construction() {
	let dict = BooleanField::new("is_active").to_dict();
	let fresh = BooleanField::new("is_active");

	assert_eq!(dict["name"], json!("is_active"));
	assert_eq!(dict["label"], json!("Is active"));
	assert_eq!(dict["kind"], json!(fresh.kind()));
	assert_eq!(dict["search_builder_type"], json!("bool"));
	assert_eq!(dict["render_js"], json!("js/bool.js"));
	assert_eq!(dict["form_js"], json!(null));
}

#[test]
fn enum_values_deep_convert() {
	field_enum! {
		enum Status {
			New = "new",
			Done = "done",
		}
	}

	let dict = EnumField::from_enum::<Status>("status").to_dict();

	assert_eq!(
		dict["values"],
		json!([
			{"name": "New", "value": "new"},
			{"name": "Done", "value": "done"},
		])
	);
}

#[test]
fn relations_serialize_their_cardinality() {
	let one = HasOne::new("owner").with_identity("User").to_dict();
	let many = HasMany::new("tags").with_identity("Tag").to_dict();

	assert_eq!(one["identity"], json!("User"));
	assert_eq!(one["is_array"], json!(false));
	assert!(!one.contains_key("many"));

	assert_eq!(many["identity"], json!("Tag"));
	assert_eq!(many["is_array"], json!(true));
	assert_eq!(many["many"], json!(true));
}

#[test]
fn heterogeneous_field_lists_round_trip() {
	let fields: Vec<Field> = vec![
		StringField::new("title").into(),
		IntegerField::new("age").into(),
		HasMany::new("posts").with_identity("Post").into(),
	];

	let json = serde_json::to_string(&fields).unwrap();
	let back: Vec<Field> = serde_json::from_str(&json).unwrap();

	assert_eq!(back, fields);
}
