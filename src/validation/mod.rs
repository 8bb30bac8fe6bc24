//! Boundary-layer input validation.
//!
//! # Data Flow
//! ```text
//! raw path/query/body
//!     → http/extract.rs (pull out strings and body bytes)
//!     → body.rs (JSON decode, errors located per field)
//!     → rules.rs (length and range constraints)
//!     → ValidationErrors (every violation, 422)
//!     → handler body runs only on clean input
//! ```

pub mod body;
pub mod error;
pub mod rules;

pub use body::decode_json;
pub use error::{FieldError, Location, ValidationErrors};
pub use rules::{check_length, check_range};
