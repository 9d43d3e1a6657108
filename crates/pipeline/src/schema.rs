//! JSON schema constraining the model's answer to a plan draft.

use gymplan_openai::StructuredOutput;
use serde_json::{json, Value};

pub const SCHEMA_NAME: &str = "training_plan";

fn exercise_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "exercise_name": { "type": "string" },
            "order_index": { "type": "integer" },
            "sets": { "type": "integer" },
            "repetitions": { "type": "integer" },
            "rest_time_seconds": { "type": "integer" },
        },
        "required": ["exercise_name", "order_index", "sets", "repetitions", "rest_time_seconds"],
        "additionalProperties": false,
    })
}

fn day_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "weekday": { "type": "integer" },
            "exercises": {
                "type": "array",
                "minItems": 1,
                "items": exercise_schema(),
            },
        },
        "required": ["weekday", "exercises"],
        "additionalProperties": false,
    })
}

/// Schema for the whole answer, including the `status` / `error` marker
/// the model uses to reject documents that are not training plans.
pub fn training_plan_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "status": { "type": "string", "enum": ["ok", "error"] },
            "error": { "type": ["string", "null"] },
            "name": { "type": "string" },
            "description": { "type": ["string", "null"] },
            "training_days": {
                "type": "array",
                "items": day_schema(),
            },
        },
        "required": ["status", "error", "name", "description", "training_days"],
        "additionalProperties": false,
    })
}

pub fn training_plan_output() -> StructuredOutput {
    StructuredOutput {
        name: SCHEMA_NAME.to_string(),
        schema: training_plan_schema(),
        strict: true,
    }
}
