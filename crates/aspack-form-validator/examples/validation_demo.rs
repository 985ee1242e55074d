//! Validation demo: direct rule calls, code-built schemas and JSON schemas

use aspack_form_validator::{
    rule, validate_field, FieldSchema, RecordSchema, Validator, ValidatorConfig,
};
use serde_json::json;
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("aspack-form-validator demo");
    println!("==========================\n");

    demo_rules()?;
    demo_field_schemas()?;
    demo_record_schema()?;
    demo_strict_mode()?;

    println!("All validation demos completed.");
    Ok(())
}

fn demo_rules() -> Result<(), Box<dyn std::error::Error>> {
    println!("Demo 1: Calling rules directly");
    println!("------------------------------");

    if let Some(min_length) = rule("minLength") {
        println!("  minLength(\"hi\", 3)    -> {}", min_length(&json!("hi"), &json!(3))?);
        println!("  minLength(\"hello\", 3) -> {}", min_length(&json!("hello"), &json!(3))?);
    }
    if let Some(type_of) = rule("type") {
        println!("  type(\"a@b.com\", email) -> {}", type_of(&json!("a@b.com"), &json!("email"))?);
        println!("  type(null, number)      -> {}", type_of(&json!(null), &json!("number"))?);
    }

    println!();
    Ok(())
}

fn demo_field_schemas() -> Result<(), Box<dyn std::error::Error>> {
    println!("Demo 2: Field schemas");
    println!("---------------------");

    let username = FieldSchema::new()
        .required()
        .min_length(3)
        .max_length(20)
        .pattern(r"^[a-z0-9_]+$");

    for candidate in [json!("ferris_99"), json!("Al"), json!("")] {
        let result = validate_field(&candidate, &username)?;
        if result.is_valid() {
            println!("  {} is valid", candidate);
        } else {
            println!("  {} failed: {}", candidate, result.messages().join("; "));
        }
    }

    println!();
    Ok(())
}

fn demo_record_schema() -> Result<(), Box<dyn std::error::Error>> {
    println!("Demo 3: Record schema loaded from JSON");
    println!("--------------------------------------");

    let schema: RecordSchema = serde_json::from_value(json!({
        "email": {"required": true, "type": "email"},
        "name": {"required": true, "minLength": 2, "maxLength": 50},
        "age": {"type": "number", "min": 1, "max": 120},
        "website": {"type": "url"}
    }))?;

    let mut valid_data = HashMap::new();
    valid_data.insert("email".to_string(), json!("john@example.com"));
    valid_data.insert("name".to_string(), json!("John Doe"));
    valid_data.insert("age".to_string(), json!(25));

    let validator = Validator::default();
    let result = validator.validate(&valid_data, &schema)?;
    println!("  valid user -> isValid = {}", result.is_valid());

    let invalid_data = json!({
        "email": "not-an-email",
        "name": "J",
        "age": 150,
        "website": "example"
    });
    let result = validator.validate(&invalid_data, &schema)?;
    println!("  invalid user -> {} field(s) failed:", result.failed_fields());
    for (field, messages) in result.error_map() {
        for message in messages {
            println!("    - {}: {}", field, message);
        }
    }
    println!("\n  Result:\n{}", serde_json::to_string_pretty(&result)?);

    println!();
    Ok(())
}

fn demo_strict_mode() -> Result<(), Box<dyn std::error::Error>> {
    println!("Demo 4: Unknown rule handling");
    println!("-----------------------------");

    let schema = RecordSchema::new().field(
        "password",
        FieldSchema::new().required().rule("minLenght", 8),
    );
    let data = json!({"password": "abc"});

    let lenient = Validator::default().validate(&data, &schema)?;
    println!("  default config: typo skipped, isValid = {}", lenient.is_valid());

    let strict = Validator::new(ValidatorConfig::builder().reject_unknown_rules().build_config());
    match strict.validate(&data, &schema) {
        Ok(_) => println!("  strict config: unexpectedly accepted"),
        Err(e) => println!("  strict config: {}", e),
    }

    println!();
    Ok(())
}
