//! Request handlers.
//!
//! Five independent endpoints sharing the extractors in `http::extract`
//! and the rules in `validation`. None of them share state except the
//! sheet writer held in `AppState`.

pub mod greeting;
pub mod math;
pub mod sheet;
pub mod user;

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::server::AppState;

/// All API routes, before state and middleware are applied.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hello/{name}", get(greeting::hello))
        .route("/add", get(math::add_handler))
        .route("/multiply/{x}/{y}", get(math::multiply_handler))
        .route("/user", post(user::create_user))
        .route("/sheet", post(sheet::create_sheet))
}
