//! `GET /hello/{name}`.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extract::{PathParams, QueryParams};
use crate::validation::{check_length, ValidationErrors};

pub const NICKNAME_MIN_LEN: usize = 2;
pub const NICKNAME_MAX_LEN: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Build the greeting. An empty nickname falls back to the plain form.
pub fn greet(name: &str, nickname: &str) -> String {
    if nickname.is_empty() {
        format!("Hello {name}")
    } else {
        format!("Hello {name} ({nickname})")
    }
}

pub async fn hello(path: PathParams, query: QueryParams) -> Result<Json<MessageResponse>, ApiError> {
    let mut errors = ValidationErrors::new();

    let name = errors.check(path.text("name"));
    let nickname = errors.check(query.text("nickname").and_then(|nickname| {
        check_length(
            query.location(),
            "nickname",
            nickname,
            NICKNAME_MIN_LEN,
            NICKNAME_MAX_LEN,
        )
        .map(|()| nickname)
    }));

    match (name, nickname) {
        (Some(name), Some(nickname)) => Ok(Json(MessageResponse {
            message: greet(name, nickname),
        })),
        _ => Err(errors.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_with_nickname() {
        assert_eq!(greet("Ann", "annie"), "Hello Ann (annie)");
    }

    #[test]
    fn test_greet_empty_nickname_falls_back() {
        assert_eq!(greet("Ann", ""), "Hello Ann");
    }
}
