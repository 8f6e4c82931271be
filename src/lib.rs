//! Client-side route table for the sound-gate single-page application.
//!
//! `/` renders the sound gate, `/home` the landing page, over browser
//! (web) history. See [`routing::app_router`].

pub mod config;
pub mod history;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use history::{History, HistoryMode};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{
    app_router, app_routes, create_router, Resolution, RouteEntry, RouteTable, Router, RouterOptions,
    View,
};
