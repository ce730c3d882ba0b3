// Builds a user record from loose input, rebuilds it, and prints the
// validation errors of the result.
//
// Run with: RUST_LOG=debug cargo run -p rusty-fields --example demo

use anyhow::Result;
use rusty_fields::{compile_with, fields, Config};
use serde_json::{json, Value};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_default()?;
    let user_definition = vec![
        fields::guid("guid"),
        fields::required_string("firstName"),
        fields::required_string("lastName"),
        fields::number_greater_than_zero("age"),
        fields::phone("phone"),
        fields::address("address"),
    ];
    let schema = compile_with(user_definition, &config)?;

    let data = json!({
        "firstName": null,
        "lastName": "O'Rourke",
        "age": 10,
        "phone": "(619) 555-1234",
        "address": {
            "street": "1234 Main St",
            "city": "San Diego",
            "zip": "92119"
        }
    });

    let built = Value::Object(schema.build(&data));
    info!("built entity");
    println!("{}", serde_json::to_string_pretty(&built)?);

    let rebuilt = Value::Object(schema.build(&built));
    println!("{}", serde_json::to_string_pretty(&rebuilt)?);

    let errors = schema.validate(&rebuilt);
    info!(errors = errors.len(), "validated entity");
    println!("{}", serde_json::to_string_pretty(&errors)?);

    Ok(())
}
