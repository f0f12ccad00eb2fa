use bag_rs_schema::Schema;
use serde_json::json;

/// Groups whose required leaves all carry defaults, plus an optional leaf.
pub const PERSON_WITH_DEFAULTS_JSON5: &str = r#"{
    fullname: {
        fields: {
            firstname: { required: true, defaultValue: "John" },
            lastname: { required: true, defaultValue: "Doe" },
        },
    },
    address: {
        fields: {
            number: { required: true, defaultValue: 0 },
            type: { required: true, defaultValue: "street" },
            country: {},
        },
    },
}"#;

/// A group hiding a required leaf without default two levels down.
pub const ADDRESS_WITH_REQUIRED_STREET_JSON5: &str = r#"{
    address: {
        fields: {
            number: { required: false },
            street: {
                fields: {
                    type: { required: true, defaultValue: "street" },
                    name: { required: true },
                },
            },
        },
    },
}"#;

pub fn person_with_defaults() -> Schema {
    Schema::load_from_str(PERSON_WITH_DEFAULTS_JSON5).expect("person schema")
}

pub fn address_with_required_street() -> Schema {
    Schema::load_from_str(ADDRESS_WITH_REQUIRED_STREET_JSON5).expect("address schema")
}

/// `firstname` and `lastname`, both required without defaults.
pub fn required_names() -> Schema {
    let mut schema = Schema::new();
    schema
        .add("firstname", &json!({ "required": true }))
        .and_then(|schema| schema.add("lastname", &json!({ "required": true })))
        .expect("names schema");
    schema
}
