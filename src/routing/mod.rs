//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target ("/home?x=1#top")
//!     → location.rs (split path / query / fragment)
//!     → router.rs (route lookup, history update)
//!     → matcher.rs (evaluate path equality)
//!     → Return: Resolution { view: Some(View) | None }
//!
//! Route Compilation (at startup):
//!     RouteEntry[] (routes.rs or config)
//!     → Normalize paths
//!     → Compile matchers
//!     → Freeze as immutable RouteTable behind Arc
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Literal paths only: no parameters, wildcards or nesting
//! - Deterministic: same input always matches same route
//! - First match wins (table order)

pub mod location;
pub mod matcher;
pub mod router;
pub mod routes;
pub mod view;

pub use location::Location;
pub use matcher::MatchOptions;
pub use router::{create_router, Resolution, RouteEntry, RouteTable, Router, RouterOptions};
pub use routes::{app_router, app_routes};
pub use view::View;
