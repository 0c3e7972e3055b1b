//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing (registration, lookup)
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → whatever metrics recorder the application installs
//! ```
//!
//! # Design Decisions
//! - The library only emits; installing a subscriber or recorder is left
//!   to the binary
//! - Lookups log at trace level to keep the hot path quiet

pub mod logging;
pub mod metrics;
