//! Id-sheet subsystem.
//!
//! # Data Flow
//! ```text
//! POST /sheet body
//!     → types.rs (CreateSheetRequest → IdSheet: ids > 0, dedup, sort)
//!     → writer.rs (optional per-file lock → header + one line per id)
//!     → elapsed time → "created in {secs:.2}s"
//! ```
//!
//! # Design Decisions
//! - No file I/O happens unless the whole sheet validates
//! - The per-id pause defaults to zero
//! - Same-file writes are serialized unless disabled in config
//! - Atomic replace (temp file + rename) is opt-in

pub mod types;
pub mod writer;

pub use types::{CreateSheetRequest, CreateSheetResponse, IdSheet};
pub use writer::SheetWriter;
