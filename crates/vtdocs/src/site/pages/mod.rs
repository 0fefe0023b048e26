//! Page definitions, one module per route.

mod api_reference;
mod authentication;
mod best_practices;
mod changelog;
mod home;
mod quickstart;
mod sdks;
mod status;
mod support;
mod webhooks;

use super::{Page, Route};

/// Build the page for `route`.
#[must_use]
pub fn page(route: Route) -> Page {
    match route {
        Route::Home => home::page(),
        Route::Quickstart => quickstart::page(),
        Route::Authentication => authentication::page(),
        Route::ApiReference => api_reference::page(),
        Route::Webhooks => webhooks::page(),
        Route::Sdks => sdks::page(),
        Route::BestPractices => best_practices::page(),
        Route::Status => status::page(),
        Route::Changelog => changelog::page(),
        Route::Support => support::page(),
    }
}
