//! HTTP host for the single-page application.
//!
//! # Data Flow
//! ```text
//! Browser request (GET /base/home)
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request id for log fields)
//!     → History::location_from_href (strip base per history mode)
//!     → RouteTable::resolve
//!     → 200 HTML shell with data-view, or 404
//! ```
//!
//! # Design Decisions
//! - Web history needs the server to answer every route path with the shell
//! - Hash and memory history only ever request the base
//! - The server shares the immutable table; it never holds navigation state

pub mod request;
pub mod server;

pub use request::{request_id, X_REQUEST_ID};
pub use server::HttpServer;
