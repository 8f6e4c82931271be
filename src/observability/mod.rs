//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing, history, config and http subsystems
//!     → tracing macros with structured fields
//!     → logging.rs (subscriber: EnvFilter + fmt layer)
//!     → stdout (pretty or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, view, history) rather than formatted strings
//! - `RUST_LOG` wins over the configured level

pub mod logging;

pub use logging::init_logging;
