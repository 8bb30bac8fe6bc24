//! Structured validation errors.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Where an offending value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
    Body,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Path => "path",
            Location::Query => "query",
            Location::Body => "body",
        }
    }
}

/// One rejected field.
///
/// Serializes as `{"loc": [...], "msg": "...", "type": "...", "input": ...}`.
/// `loc` holds strings for keys and integers for sequence indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl FieldError {
    pub fn new(location: Location, field: &str, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![location.as_str().into(), field.into()],
            msg: msg.into(),
            kind,
            input: None,
        }
    }

    /// Error about a whole location (e.g. an unparseable body) rather than one field.
    pub fn whole(location: Location, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![location.as_str().into()],
            msg: msg.into(),
            kind,
            input: None,
        }
    }

    /// Error at a nested position, e.g. `["body", "ids", 1]`.
    pub fn at(loc: Vec<Value>, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind,
            input: None,
        }
    }

    pub fn with_input(mut self, input: impl Into<Value>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn missing(location: Location, field: &str) -> Self {
        Self::new(location, field, "missing", "Field required")
    }

    pub fn int_parsing(location: Location, field: &str, raw: &str) -> Self {
        Self::new(
            location,
            field,
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
        )
        .with_input(raw)
    }

    /// The field name this error points at, if any.
    pub fn field(&self) -> Option<&str> {
        self.loc.get(1).and_then(Value::as_str)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.loc.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match part {
                Value::String(s) => write!(f, "{s}")?,
                other => write!(f, "{other}")?,
            }
        }
        write!(f, ": {}", self.msg)
    }
}

/// Every violation found in one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Record the error side of `result`, passing the value through.
    pub fn check<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_error_wire_shape() {
        let err = FieldError::int_parsing(Location::Query, "x", "abc");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "loc": ["query", "x"],
                "msg": "Input should be a valid integer, unable to parse string as an integer",
                "type": "int_parsing",
                "input": "abc",
            })
        );
    }

    #[test]
    fn test_missing_has_no_input() {
        let value = serde_json::to_value(FieldError::missing(Location::Query, "nickname")).unwrap();
        assert!(value.get("input").is_none());
        assert_eq!(value["type"], "missing");
    }

    #[test]
    fn test_check_collects_errors() {
        let mut errors = ValidationErrors::new();
        let ok: Option<i64> = errors.check(Ok(3));
        let bad: Option<i64> = errors.check(Err(FieldError::missing(Location::Query, "y")));

        assert_eq!(ok, Some(3));
        assert_eq!(bad, None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.to_string(), "query.y: Field required");
    }
}
