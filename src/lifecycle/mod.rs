//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Init logging → Build router → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Trigger → broadcast to server → stop accepting → drain → exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
