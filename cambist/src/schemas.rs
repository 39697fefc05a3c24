//! Fixed extraction schemas shipped with the demos.

use cprovider::JsonSchemaFormat;
use serde_json::json;

/// Strict schema for the order-extraction flow. Passed to the provider
/// unchanged; the provider's output is treated as an opaque document.
pub fn order_extraction_format() -> JsonSchemaFormat {
    let schema = json!({
        "type": "object",
        "properties": {
            "order_id": {"type": "string"},
            "customer": {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "email": {"type": "string"}
                },
                "required": ["name", "email"],
                "additionalProperties": false
            },
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "sku": {"type": "string"},
                        "name": {"type": "string"},
                        "qty": {"type": "integer"},
                        "price": {"type": "number"}
                    },
                    "required": ["name", "qty", "price"],
                    "additionalProperties": false
                },
                "minItems": 1
            },
            "total": {"type": "number"},
            "currency": {"type": "string"}
        },
        "required": ["order_id", "customer", "items", "total", "currency"],
        "additionalProperties": false
    });

    JsonSchemaFormat::new("OrderExtraction", schema.to_string())
}
