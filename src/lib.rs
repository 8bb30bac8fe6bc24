//! Small JSON API: greeting, arithmetic, user echo and an id-sheet writer,
//! with validated inputs and structured 422 errors.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod sheet;
pub mod validation;

pub use config::schema::ApiConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
