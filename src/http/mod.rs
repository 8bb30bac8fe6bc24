//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned or propagated)
//!     → extract.rs (path/query/body pulled out, decode errors → 422)
//!     → api handlers
//!     → error.rs (ApiError → status + {detail} body)
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
