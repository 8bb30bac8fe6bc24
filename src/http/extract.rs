//! Request extractors that reject with structured validation errors.
//!
//! axum's stock `Query`/`Path`/`Json` reject with plain-text 400s/422s. These
//! wrappers keep raw values as strings and let handlers apply constraints,
//! so every rejection carries the `{detail: [...]}` body and a 422 status.

use std::collections::HashMap;
use std::ops::Deref;

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::http::error::ApiError;
use crate::validation::{decode_json, FieldError, Location};

/// Raw string parameters from one request location.
#[derive(Debug, Clone)]
pub struct Params {
    location: Location,
    values: HashMap<String, String>,
}

impl Params {
    pub fn new(location: Location, values: HashMap<String, String>) -> Self {
        Self { location, values }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// A required text parameter.
    pub fn text(&self, key: &str) -> Result<&str, FieldError> {
        self.values
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| FieldError::missing(self.location, key))
    }

    /// A required integer parameter.
    pub fn int(&self, key: &str) -> Result<i64, FieldError> {
        let raw = self.text(key)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| FieldError::int_parsing(self.location, key, raw))
    }
}

/// Query-string parameters.
#[derive(Debug, Clone)]
pub struct QueryParams(pub Params);

impl Deref for QueryParams {
    type Target = Params;

    fn deref(&self) -> &Params {
        &self.0
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(values) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| FieldError::whole(Location::Query, "query_invalid", e.body_text()))?;
        Ok(Self(Params::new(Location::Query, values)))
    }
}

/// Path segment parameters, keyed by their route placeholder names.
#[derive(Debug, Clone)]
pub struct PathParams(pub Params);

impl Deref for PathParams {
    type Target = Params;

    fn deref(&self) -> &Params {
        &self.0
    }
}

impl<S> FromRequestParts<S> for PathParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(values) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| FieldError::whole(Location::Path, "path_invalid", e.body_text()))?;
        Ok(Self(Params::new(Location::Path, values)))
    }
}

/// JSON body whose decode failures become per-field validation errors.
///
/// Oversized bodies keep axum's own 413 response.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            let err = FieldError::whole(
                Location::Body,
                "content_type",
                "Expected request with `Content-Type: application/json`",
            );
            return Err(ApiError::from(err).into_response());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        decode_json(&bytes)
            .map(Self)
            .map_err(|e| ApiError::from(e).into_response())
    }
}

/// `application/json` or any `application/*+json`.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}
