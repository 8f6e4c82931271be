//! The application's route table.

use crate::history::HistoryMode;
use crate::routing::matcher::MatchOptions;
use crate::routing::router::{create_router, RouteEntry, Router, RouterOptions};
use crate::routing::view::View;

/// `/` opens the sound gate; `/home` is the landing page.
pub fn app_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", View::SoundGate),
        RouteEntry::new("/home", View::Landing),
    ]
}

/// The application router: [`app_routes`] over web history at the root.
pub fn app_router() -> Router {
    create_router(RouterOptions {
        history: HistoryMode::Web.create("/"),
        routes: app_routes(),
        match_options: MatchOptions::default(),
    })
}
