//! `GET /add` and `GET /multiply/{x}/{y}`.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extract::{PathParams, QueryParams};
use crate::validation::{check_range, FieldError, Location, ValidationErrors};

/// Accepted operand range for `/add`, half-open.
pub const ADD_MIN: i64 = 0;
pub const ADD_MAX: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

pub fn add(x: i64, y: i64) -> i64 {
    x + y
}

/// Widened so no pair of `i64` operands can overflow.
pub fn multiply(x: i64, y: i64) -> i128 {
    i128::from(x) * i128::from(y)
}

fn bounded(query: &QueryParams, key: &str) -> Result<i64, FieldError> {
    let value = query.int(key)?;
    check_range(Location::Query, key, value, ADD_MIN, ADD_MAX)?;
    Ok(value)
}

pub async fn add_handler(query: QueryParams) -> Result<Json<ResultResponse<i64>>, ApiError> {
    let mut errors = ValidationErrors::new();
    let x = errors.check(bounded(&query, "x"));
    let y = errors.check(bounded(&query, "y"));

    match (x, y) {
        (Some(x), Some(y)) => Ok(Json(ResultResponse { result: add(x, y) })),
        _ => Err(errors.into()),
    }
}

pub async fn multiply_handler(path: PathParams) -> Result<Json<ResultResponse<i128>>, ApiError> {
    let mut errors = ValidationErrors::new();
    let x = errors.check(path.int("x"));
    let y = errors.check(path.int("y"));

    match (x, y) {
        (Some(x), Some(y)) => Ok(Json(ResultResponse {
            result: multiply(x, y),
        })),
        _ => Err(errors.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(0, 0), 0);
        assert_eq!(add(99, 99), 198);
    }

    #[test]
    fn test_multiply_signs() {
        assert_eq!(multiply(5, 6), 30);
        assert_eq!(multiply(-3, 4), -12);
    }

    #[test]
    fn test_multiply_does_not_wrap() {
        let product = multiply(i64::MAX, 2);
        assert_eq!(product, i128::from(i64::MAX) * 2);
        assert!(product > i128::from(i64::MAX));
    }
}
