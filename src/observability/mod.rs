//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing (register, match, publish) and config (reload)
//!     → tracing events with structured fields
//!     → logging.rs subscriber (env filter + fmt layer)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Library code only emits events; the binary installs the subscriber
//! - Per-request events are `debug`, table changes are `info`

pub mod logging;
