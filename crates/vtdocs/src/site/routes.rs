//! The fixed route table.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Every page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Landing page.
    Home,
    /// Getting started guide.
    Quickstart,
    /// OAuth 2.0 guide.
    Authentication,
    /// Endpoint reference.
    ApiReference,
    /// Webhook events and handlers.
    Webhooks,
    /// Official and community SDKs.
    Sdks,
    /// Integration guidance.
    BestPractices,
    /// Service health and incidents.
    Status,
    /// Release notes.
    Changelog,
    /// Help channels and FAQ.
    Support,
}

impl Route {
    /// All routes in sidebar order.
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::Quickstart,
        Route::Authentication,
        Route::ApiReference,
        Route::Webhooks,
        Route::Sdks,
        Route::BestPractices,
        Route::Status,
        Route::Changelog,
        Route::Support,
    ];

    /// Path relative to the site base.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Quickstart => "/quickstart",
            Self::Authentication => "/authentication",
            Self::ApiReference => "/api-reference",
            Self::Webhooks => "/webhooks",
            Self::Sdks => "/sdks",
            Self::BestPractices => "/best-practices",
            Self::Status => "/status",
            Self::Changelog => "/changelog",
            Self::Support => "/support",
        }
    }

    /// Sidebar caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Quickstart => "Quick Start",
            Self::Authentication => "Authentication",
            Self::ApiReference => "API Reference",
            Self::Webhooks => "Webhooks",
            Self::Sdks => "SDKs & Libraries",
            Self::BestPractices => "Best Practices",
            Self::Status => "API Status",
            Self::Changelog => "Changelog",
            Self::Support => "Support",
        }
    }

    /// Output directory for this route, relative to the build root.
    #[must_use]
    pub fn output_dir(self) -> &'static str {
        self.path().trim_start_matches('/')
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Maps request paths under a base path to routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    base_path: String,
}

impl RouteTable {
    /// Create a table mounted at `base_path` (e.g. `/api-docs`, or `/`).
    #[must_use]
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    /// The base path without a trailing slash; empty when mounted at root.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolve a path to a route.
    ///
    /// The base path prefix is optional and a trailing slash is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoute`] if no page lives at `path`.
    pub fn resolve(&self, path: &str) -> Result<Route> {
        let relative = self.strip_base(path.trim());
        let relative = match relative.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let relative = if relative.starts_with('/') {
            relative.to_string()
        } else {
            format!("/{relative}")
        };

        Route::ALL
            .into_iter()
            .find(|route| route.path() == relative)
            .ok_or_else(|| Error::unknown_route(path))
    }

    /// Absolute link to `route`, including the base path.
    #[must_use]
    pub fn href(&self, route: Route) -> String {
        match route {
            Route::Home => format!("{}/", self.base_path),
            _ => format!("{}{}", self.base_path, route.path()),
        }
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base_path.is_empty() {
            return path;
        }
        match path.strip_prefix(self.base_path.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_unique_routes() {
        let mut paths: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 10);
    }

    #[test]
    fn test_resolve_relative_paths() {
        let table = RouteTable::new("/api-docs");
        for route in Route::ALL {
            assert_eq!(table.resolve(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_resolve_with_base_path() {
        let table = RouteTable::new("/api-docs");
        assert_eq!(table.resolve("/api-docs").unwrap(), Route::Home);
        assert_eq!(table.resolve("/api-docs/").unwrap(), Route::Home);
        assert_eq!(
            table.resolve("/api-docs/webhooks").unwrap(),
            Route::Webhooks
        );
    }

    #[test]
    fn test_resolve_trailing_slash() {
        let table = RouteTable::new("/");
        assert_eq!(table.resolve("/status/").unwrap(), Route::Status);
        assert_eq!(table.resolve("changelog").unwrap(), Route::Changelog);
    }

    #[test]
    fn test_resolve_unknown() {
        let table = RouteTable::new("/api-docs");
        let err = table.resolve("/pricing").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/pricing"));
    }

    #[test]
    fn test_base_prefix_must_end_at_segment() {
        let table = RouteTable::new("/api");
        assert!(table.resolve("/api-reference").is_ok());
        assert_eq!(table.resolve("/api/sdks").unwrap(), Route::Sdks);
    }

    #[test]
    fn test_href() {
        let table = RouteTable::new("/api-docs/");
        assert_eq!(table.href(Route::Home), "/api-docs/");
        assert_eq!(table.href(Route::Sdks), "/api-docs/sdks");

        let root = RouteTable::new("/");
        assert_eq!(root.base_path(), "");
        assert_eq!(root.href(Route::Home), "/");
        assert_eq!(root.href(Route::Status), "/status");
    }

    #[test]
    fn test_output_dir() {
        assert_eq!(Route::Home.output_dir(), "");
        assert_eq!(Route::BestPractices.output_dir(), "best-practices");
    }
}
