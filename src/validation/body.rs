//! JSON body decoding with per-field error locations.

use serde::de::DeserializeOwned;
use serde_json::{error::Category, Value};
use serde_path_to_error::Segment;

use crate::validation::error::{FieldError, Location};

/// Decode `bytes` as `T`, pointing any failure at the offending field.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FieldError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let loc = body_loc(e.path());
        field_error(loc, e.inner())
    })?;
    de.end()
        .map_err(|e| FieldError::whole(Location::Body, "json_invalid", message(&e)))?;
    Ok(value)
}

fn body_loc(path: &serde_path_to_error::Path) -> Vec<Value> {
    let mut loc = vec![Value::from(Location::Body.as_str())];
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => loc.push(Value::from(*index)),
            Segment::Map { key } => loc.push(Value::from(key.as_str())),
            Segment::Enum { variant } => loc.push(Value::from(variant.as_str())),
            Segment::Unknown => {}
        }
    }
    loc
}

/// serde_json's message without the trailing " at line L column C".
fn message(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rfind(" at line ") {
        Some(pos) => text[..pos].to_string(),
        None => text,
    }
}

fn field_error(mut loc: Vec<Value>, err: &serde_json::Error) -> FieldError {
    let msg = message(err);

    if err.classify() != Category::Data {
        return FieldError::at(loc, "json_invalid", format!("JSON decode error: {msg}"));
    }

    if let Some(field) = msg
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
    {
        loc.push(Value::from(field));
        return FieldError::at(loc, "missing", "Field required");
    }

    let (kind, text) = if msg.contains("expected i64") || msg.contains("expected an integer") {
        ("int_parsing", "Input should be a valid integer")
    } else if msg.contains("expected a string") {
        ("string_type", "Input should be a valid string")
    } else if msg.contains("expected a sequence") {
        ("list_type", "Input should be a valid list")
    } else if msg.contains("expected struct") || msg.contains("expected a map") {
        ("model_type", "Input should be a valid object")
    } else {
        return FieldError::at(loc, "value_error", msg);
    };
    FieldError::at(loc, kind, text)
}
