//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!     → spans.rs (one span per request, tagged with the request id)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted strings
//! - Request ID flows into every span
//! - Metric macros are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
pub mod spans;
