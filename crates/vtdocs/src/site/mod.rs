//! The documentation site: routes, content and page definitions.

pub mod changelog;
pub mod content;
mod pages;
mod routes;
pub mod status;

use tracing::debug;

use crate::error::{Error, Result};

pub use content::{Block, CodeGroup, Page, Section};
pub use routes::{Route, RouteTable};

/// All pages, built once and looked up by route.
#[derive(Debug, Clone)]
pub struct Site {
    routes: RouteTable,
    pages: Vec<Page>,
}

impl Site {
    /// Build every page, mounted at `base_path`.
    #[must_use]
    pub fn new(base_path: &str) -> Self {
        let pages: Vec<Page> = Route::ALL.into_iter().map(pages::page).collect();
        debug!(pages = pages.len(), base_path, "Site content built");
        Self {
            routes: RouteTable::new(base_path),
            pages,
        }
    }

    /// The route table.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// All pages in sidebar order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The page for `route`.
    #[must_use]
    pub fn page(&self, route: Route) -> &Page {
        // Pages are built from Route::ALL, so the index always matches.
        &self.pages[route as usize]
    }

    /// Resolve `path` and return its page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoute`] if no page lives at `path`.
    pub fn lookup(&self, path: &str) -> Result<&Page> {
        self.routes.resolve(path).map(|route| self.page(route))
    }

    /// Code group `group` on the page at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoute`] or [`Error::UnknownCodeGroup`].
    pub fn code_group(&self, path: &str, group: usize) -> Result<CodeGroup> {
        let page = self.lookup(path)?;
        page.code_groups()
            .into_iter()
            .nth(group)
            .ok_or_else(|| Error::UnknownCodeGroup {
                path: page.route.path().to_string(),
                group,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_index_matches_route() {
        let site = Site::new("/api-docs");
        for route in Route::ALL {
            assert_eq!(site.page(route).route, route);
        }
        assert_eq!(site.pages().len(), 10);
    }

    #[test]
    fn test_lookup() {
        let site = Site::new("/api-docs");
        assert_eq!(
            site.lookup("/api-docs/webhooks/").unwrap().route,
            Route::Webhooks
        );
        assert!(site.lookup("/api-docs/nope").is_err());
    }

    #[test]
    fn test_code_group() {
        let site = Site::new("/");
        let group = site.code_group("/quickstart", 0).unwrap();
        assert_eq!(group.section, "Install the SDK");
        assert_eq!(group.examples[0].label(), "npm/yarn");

        let err = site.code_group("/quickstart", 99).unwrap_err();
        assert!(matches!(err, Error::UnknownCodeGroup { group: 99, .. }));
    }
}
