//! Static HTML rendering of the documentation site.
//!
//! Every page is rendered through the same widgets the CLI copies from, so
//! the markup reflects real [`CodeBlock`](crate::widgets::CodeBlock) and
//! [`LanguageTabs`](crate::widgets::LanguageTabs) state: one live code area
//! per group and the remaining tabs as inert `<template>` panels.

mod assets;
mod html;

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::clipboard::MemoryClipboard;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::site::{Route, Site};
use crate::theme::{Theme, ThemeHandle};
use crate::widgets::WidgetContext;

pub use assets::{stylesheet, SCRIPT};
pub use html::{escape, slug};

/// Settings for a render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Product name shown in the header and page titles.
    pub site_title: String,
    /// Initial theme of every page.
    pub theme: Theme,
    /// Copy acknowledgment duration baked into each widget.
    pub copy_revert: Duration,
    /// Reference time for ongoing incident durations.
    pub now: DateTime<Utc>,
}

impl RenderOptions {
    /// Options taken from configuration, measured at the current time.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            site_title: config.site.title.clone(),
            theme: config.theme.default,
            copy_revert: config.copy_revert(),
            now: Utc::now(),
        }
    }

    /// Override the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Override the reference time.
    #[must_use]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Renders pages of a [`Site`] to complete HTML documents.
#[derive(Debug)]
pub struct Renderer<'a> {
    site: &'a Site,
    options: RenderOptions,
    ctx: WidgetContext,
    stylesheet: String,
}

impl<'a> Renderer<'a> {
    /// Create a renderer.
    ///
    /// Rendering never touches the system clipboard; widgets get an
    /// in-memory one.
    #[must_use]
    pub fn new(site: &'a Site, options: RenderOptions) -> Self {
        let ctx = WidgetContext::new(
            ThemeHandle::fixed(options.theme),
            Arc::new(MemoryClipboard::new()),
        )
        .with_copy_revert(options.copy_revert);

        Self {
            site,
            options,
            ctx,
            stylesheet: stylesheet(),
        }
    }

    /// Render one page as a full HTML document.
    ///
    /// # Errors
    ///
    /// Returns an error if a widget on the page cannot be built.
    pub fn render(&self, route: Route) -> Result<String> {
        let page = self.site.page(route);
        let routes = self.site.routes();
        let main = html::PageWriter::new(&self.ctx, routes, self.options.now).page(page)?;
        let title = escape(&self.options.site_title);

        let mut doc = String::with_capacity(main.len() + self.stylesheet.len() + 4096);
        let _ = write!(
            doc,
            "<!DOCTYPE html>\n<html lang=\"en\" data-theme=\"{theme}\">\n<head>\n\
             <meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{} | {title}</title>\n<style>{}</style>\n</head>\n<body>\n\
             <header class=\"site-header\">\n\
             <a class=\"brand\" href=\"{}\">{title}</a>\n\
             <input type=\"search\" placeholder=\"Search documentation...\" aria-label=\"Search documentation\">\n\
             <button id=\"theme-toggle\" type=\"button\" aria-label=\"Toggle theme\">Toggle theme</button>\n\
             </header>\n<div class=\"layout\">\n<nav class=\"sidebar\">\n",
            escape(&page.title),
            self.stylesheet,
            escape(&routes.href(Route::Home)),
            theme = self.options.theme,
        );

        for link in Route::ALL {
            let active = if link == route {
                " class=\"active\" aria-current=\"page\""
            } else {
                ""
            };
            let _ = writeln!(
                doc,
                "<a href=\"{}\"{active}>{}</a>",
                escape(&routes.href(link)),
                escape(link.label())
            );
        }

        doc.push_str("</nav>\n");
        doc.push_str(&main);
        let _ = write!(doc, "</div>\n<script>{SCRIPT}</script>\n</body>\n</html>\n");
        Ok(doc)
    }
}

/// Summary of a finished site build.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Root of the written site.
    pub out_dir: PathBuf,
    /// Written files, in route order.
    pub pages: Vec<PathBuf>,
    /// Total bytes written.
    pub bytes: usize,
    /// Code groups across all pages.
    pub code_groups: usize,
}

/// Render every route into `out_dir/<path>/index.html`.
///
/// # Errors
///
/// Returns [`Error::DirectoryCreate`] or [`Error::PageWrite`] when the
/// output cannot be written, or a render error.
pub async fn build_site(site: &Site, options: RenderOptions, out_dir: &Path) -> Result<BuildReport> {
    let renderer = Renderer::new(site, options);
    let mut report = BuildReport {
        out_dir: out_dir.to_path_buf(),
        pages: Vec::with_capacity(Route::ALL.len()),
        bytes: 0,
        code_groups: 0,
    };

    for route in Route::ALL {
        let dir = out_dir.join(route.output_dir());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| Error::DirectoryCreate {
                path: dir.clone(),
                source,
            })?;

        let document = renderer.render(route)?;
        let path = dir.join("index.html");
        tokio::fs::write(&path, &document)
            .await
            .map_err(|source| Error::PageWrite {
                path: path.clone(),
                source,
            })?;

        let groups = site.page(route).code_groups().len();
        info!(route = %route, path = %path.display(), bytes = document.len(), "Wrote page");
        report.bytes += document.len();
        report.code_groups += groups;
        report.pages.push(path);
    }

    debug!(
        pages = report.pages.len(),
        bytes = report.bytes,
        "Site build finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::status::timestamp;

    fn options() -> RenderOptions {
        RenderOptions::default().with_now(timestamp("2023-12-07T16:00:00Z"))
    }

    #[test]
    fn test_sidebar_marks_only_current_route() {
        let site = Site::new("/api-docs");
        let html = Renderer::new(&site, options()).render(Route::Webhooks).unwrap();

        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("<a href=\"/api-docs/webhooks\" class=\"active\""));
        assert!(html.contains("placeholder=\"Search documentation...\""));
    }

    #[test]
    fn test_groups_numbered_like_page() {
        let site = Site::new("/api-docs");
        let renderer = Renderer::new(&site, options());
        for route in Route::ALL {
            let html = renderer.render(route).unwrap();
            let expected = site.page(route).code_groups().len();
            assert_eq!(html.matches("data-group=\"").count(), expected, "{route}");
        }
    }

    #[test]
    fn test_theme_option() {
        let site = Site::new("/");
        let html = Renderer::new(&site, options().with_theme(Theme::Dark))
            .render(Route::Home)
            .unwrap();
        assert!(html.contains("<html lang=\"en\" data-theme=\"dark\">"));
    }

    #[test]
    fn test_ongoing_incident_measured_to_now() {
        let site = Site::new("/api-docs");
        let html = Renderer::new(&site, options()).render(Route::Status).unwrap();
        // Started 14:30, rendered at 16:00.
        assert!(html.contains("<span class=\"duration\">1h 30m</span>"));
        assert!(html.contains("Overall status: Degraded Performance"));
    }

    #[tokio::test]
    async fn test_build_site_writes_every_route() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new("/api-docs");

        let report = build_site(&site, options(), dir.path()).await.unwrap();

        assert_eq!(report.pages.len(), Route::ALL.len());
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("api-reference/index.html").exists());
        let written = std::fs::read_to_string(dir.path().join("sdks/index.html")).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(report.code_groups > 0);
    }

    #[tokio::test]
    async fn test_build_site_reports_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let site = Site::new("/");
        let err = build_site(&site, options(), &blocker).await.unwrap_err();
        assert!(matches!(err, Error::DirectoryCreate { .. }));
    }
}
