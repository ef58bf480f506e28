//! Argument validation for tool calls.
//!
//! Each tool's parameters are a `serde` + `schemars` struct. The JSON schema
//! generated from that struct is the same one advertised in `tools/list`, and
//! it is walked here to collect every problem with the raw arguments before
//! anything is deserialized. Callers get one message listing all offending
//! fields instead of only the first one `serde` trips over.

use std::fmt;

use rmcp::{handler::server::tool::cached_schema_for_type, model::JsonObject};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::ToolError;

/// A single validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted path of the offending field (`itemIds.2`).
    pub path: String,
    /// Violated constraint.
    pub message: String,
}

impl Issue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate raw tool arguments and deserialize them into `T`.
///
/// Missing arguments are treated as an empty object. Defaults declared on `T`
/// with `#[serde(default)]` are applied during deserialization.
pub fn parse_arguments<T>(arguments: Option<JsonObject>) -> Result<T, ToolError>
where
    T: DeserializeOwned + JsonSchema + 'static,
{
    let arguments = arguments.unwrap_or_default();
    let schema = cached_schema_for_type::<T>();

    let issues = check_object(&schema, &arguments);
    if !issues.is_empty() {
        let message = issues
            .iter()
            .map(Issue::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        warn!("Argument validation failed: {}", message);
        return Err(ToolError::invalid_arguments(message));
    }

    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Check an argument object against an object schema.
pub fn check_object(schema: &JsonObject, arguments: &JsonObject) -> Vec<Issue> {
    let mut issues = Vec::new();

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);
    for field in required {
        if !arguments.contains_key(field) {
            issues.push(Issue::new(field, "Required"));
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (field, property) in properties {
            if let Some(value) = arguments.get(field) {
                check_value(field, property, value, &mut issues);
            }
        }
    }

    issues
}

fn check_value(path: &str, schema: &Value, value: &Value, issues: &mut Vec<Issue>) {
    // `true` / `{}` schemas accept anything.
    let Some(schema) = schema.as_object() else {
        return;
    };

    let allowed = declared_types(schema);
    if !allowed.is_empty() && !allowed.iter().any(|t| type_matches(t, value)) {
        let expected = allowed
            .iter()
            .find(|t| **t != "null")
            .copied()
            .unwrap_or("null");
        issues.push(Issue::new(
            path,
            format!("Expected {}, received {}", expected, type_name(value)),
        ));
        return;
    }

    if let Some(number) = value.as_f64() {
        let (format_min, format_max) = format_bounds(schema);
        let minimum = schema.get("minimum").and_then(Value::as_f64).or(format_min);
        if let Some(minimum) = minimum.filter(|min| number < *min) {
            issues.push(Issue::new(
                path,
                format!("Number must be greater than or equal to {minimum}"),
            ));
        } else if let Some(maximum) = schema
            .get("maximum")
            .and_then(Value::as_f64)
            .or(format_max)
            .filter(|max| number > *max)
        {
            issues.push(Issue::new(
                path,
                format!("Number must be less than or equal to {maximum}"),
            ));
        }
    }

    if let (Some(items), Some(elements)) = (schema.get("items"), value.as_array()) {
        for (index, element) in elements.iter().enumerate() {
            check_value(&format!("{path}.{index}"), items, element, issues);
        }
    }
}

fn declared_types(schema: &JsonObject) -> Vec<&str> {
    let mut types = match schema.get("type") {
        Some(Value::String(t)) => vec![t.as_str()],
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    };
    // Optional fields come out as `"nullable": true` next to a single type.
    if !types.is_empty() && schema.get("nullable").and_then(Value::as_bool) == Some(true) {
        types.push("null");
    }
    types
}

/// Range implied by the integer `format` schemars writes for Rust integer types.
fn format_bounds(schema: &JsonObject) -> (Option<f64>, Option<f64>) {
    match schema.get("format").and_then(Value::as_str) {
        Some("uint8") => (Some(0.0), Some(u8::MAX as f64)),
        Some("uint16") => (Some(0.0), Some(u16::MAX as f64)),
        Some("uint32") => (Some(0.0), Some(u32::MAX as f64)),
        Some("uint64") | Some("uint") => (Some(0.0), Some(u64::MAX as f64)),
        Some("int8") => (Some(i8::MIN as f64), Some(i8::MAX as f64)),
        Some("int16") => (Some(i16::MIN as f64), Some(i16::MAX as f64)),
        Some("int32") => (Some(i32::MIN as f64), Some(i32::MAX as f64)),
        _ => (None, None),
    }
}

fn type_matches(expected: &str, value: &Value) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
