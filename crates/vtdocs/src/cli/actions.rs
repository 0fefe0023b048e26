//! What the CLI commands do, separate from how their results are printed.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::site::{Route, Site};
use crate::widgets::{CopyReceipt, LanguageTabs, WidgetContext};

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    /// The route.
    pub route: Route,
    /// Link including the base path.
    pub href: String,
    /// Sidebar label.
    pub label: &'static str,
}

/// The route table in sidebar order.
#[must_use]
pub fn route_entries(site: &Site) -> Vec<RouteEntry> {
    Route::ALL
        .into_iter()
        .map(|route| RouteEntry {
            route,
            href: site.routes().href(route),
            label: route.label(),
        })
        .collect()
}

/// Load and validate the configuration file at `path`.
///
/// Unlike [`Config::load_from`], a missing file is an error here.
///
/// # Errors
///
/// Returns an error if the file is missing, malformed or fails validation.
pub fn validate_config(path: &Path) -> Result<Config> {
    if !path.is_file() {
        return Err(Error::config_validation(format!(
            "{} does not exist",
            path.display()
        )));
    }
    let config = Config::load_from(Some(path.to_path_buf()))?;
    info!(path = %path.display(), "configuration is valid");
    Ok(config)
}

/// A code group as listed by `show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupOutline {
    /// Group number, as accepted by `copy --group`.
    pub index: usize,
    /// Section the group appears in.
    pub section: String,
    /// Code block title.
    pub title: Option<String>,
    /// Tab labels, in order.
    pub tabs: Vec<String>,
}

/// A page and its code groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOutline {
    /// The page's route.
    pub route: Route,
    /// Page heading.
    pub title: String,
    /// Section headings, in order.
    pub sections: Vec<String>,
    /// Code groups, in render order.
    pub groups: Vec<GroupOutline>,
}

/// Outline the page at `path`.
///
/// # Errors
///
/// Returns [`Error::UnknownRoute`](crate::Error::UnknownRoute) if no page
/// lives at `path`.
pub fn outline(site: &Site, path: &str) -> Result<PageOutline> {
    let page = site.lookup(path)?;
    let groups = page
        .code_groups()
        .into_iter()
        .enumerate()
        .map(|(index, group)| GroupOutline {
            index,
            section: group.section,
            title: group.title,
            tabs: group
                .examples
                .iter()
                .map(|e| e.label().to_string())
                .collect(),
        })
        .collect();

    Ok(PageOutline {
        route: page.route,
        title: page.title.clone(),
        sections: page.sections.iter().map(|s| s.heading.clone()).collect(),
        groups,
    })
}

/// Result of `copy`.
#[derive(Debug, Clone, Serialize)]
pub struct CopyOutcome {
    /// Page copied from.
    pub route: Route,
    /// Code group copied from.
    pub group: usize,
    /// Label of the copied tab.
    pub label: String,
    /// Language of the copied tab.
    pub language: String,
    /// The copied code.
    pub code: String,
    /// Clipboard confirmation.
    pub receipt: CopyReceipt,
}

/// Copy one example the way a reader would: open the group's tabs, switch
/// to `tab` if given, and press the copy button.
///
/// # Errors
///
/// Returns an addressing error for a bad path, group or tab, or
/// [`Error::Clipboard`](crate::Error::Clipboard) if the write fails.
pub async fn copy_example(
    site: &Site,
    path: &str,
    group: usize,
    tab: Option<&str>,
    ctx: WidgetContext,
) -> Result<CopyOutcome> {
    let route = site.routes().resolve(path)?;
    let code_group = site.code_group(path, group)?;
    let mut tabs = LanguageTabs::new(code_group.examples, code_group.title, ctx)?;
    if let Some(label) = tab {
        tabs.select_label(label)?;
    }

    let receipt = tabs.copy_active().await?;
    let example = tabs.active_example();
    info!(
        route = %route,
        group,
        label = %example.label(),
        hash = %receipt.content_hash,
        "Copied example"
    );

    Ok(CopyOutcome {
        route,
        group,
        label: example.label().to_string(),
        language: example.language().to_string(),
        code: example.code().to_string(),
        receipt,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::error::Error;
    use crate::theme::{Theme, ThemeHandle};

    fn context(clipboard: &MemoryClipboard) -> WidgetContext {
        WidgetContext::new(
            ThemeHandle::fixed(Theme::Light),
            Arc::new(clipboard.clone()),
        )
    }

    #[test]
    fn test_route_entries() {
        let site = Site::new("/api-docs");
        let entries = route_entries(&site);
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].href, "/api-docs/");
        assert_eq!(entries[5].label, "SDKs & Libraries");
    }

    #[test]
    fn test_outline() {
        let site = Site::new("/api-docs");
        let outline = outline(&site, "/quickstart").unwrap();
        assert_eq!(outline.route, Route::Quickstart);
        assert_eq!(outline.groups[0].index, 0);
        assert_eq!(
            outline.groups[0].tabs,
            ["npm/yarn", "Python", "Maven", "Gradle"]
        );
    }

    #[test]
    fn test_validate_config_accepts_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[site]\nbase_path = \"/docs\"\n").unwrap();

        let config = validate_config(&path).unwrap();
        assert_eq!(config.site.base_path, "/docs");
    }

    #[test]
    fn test_validate_config_rejects_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let invalid = dir.path().join("invalid.toml");
        std::fs::write(&invalid, "[widgets]\ncopy_revert_ms = 0\n").unwrap();
        let malformed = dir.path().join("malformed.toml");
        std::fs::write(&malformed, "[theme]\ndefault = \"sepia\"\n").unwrap();

        assert!(matches!(
            validate_config(&invalid).unwrap_err(),
            Error::ConfigValidation { .. }
        ));
        assert!(matches!(
            validate_config(&malformed).unwrap_err(),
            Error::ConfigLoad(_)
        ));
        assert!(matches!(
            validate_config(&dir.path().join("missing.toml")).unwrap_err(),
            Error::ConfigValidation { .. }
        ));
    }

    #[test]
    fn test_outline_unknown_path() {
        let site = Site::new("/api-docs");
        assert!(outline(&site, "/nowhere").unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_copy_selected_tab() {
        let site = Site::new("/api-docs");
        let clipboard = MemoryClipboard::new();

        let outcome = copy_example(&site, "/quickstart", 0, Some("Gradle"), context(&clipboard))
            .await
            .unwrap();

        assert_eq!(outcome.label, "Gradle");
        assert_eq!(
            clipboard.contents().as_deref(),
            Some("implementation 'dev.velora:connected-vehicles:1.0.0'")
        );
        assert_eq!(outcome.receipt.bytes, outcome.code.len());
    }

    #[tokio::test]
    async fn test_copy_defaults_to_first_tab() {
        let site = Site::new("/api-docs");
        let clipboard = MemoryClipboard::new();

        let outcome = copy_example(&site, "/api-docs/", 0, None, context(&clipboard))
            .await
            .unwrap();

        assert_eq!(outcome.label, "JavaScript");
        assert_eq!(clipboard.contents(), Some(outcome.code));
    }

    #[tokio::test]
    async fn test_copy_unknown_tab() {
        let site = Site::new("/api-docs");
        let clipboard = MemoryClipboard::new();

        let err = copy_example(&site, "/quickstart", 0, Some("Rust"), context(&clipboard))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UnknownTab(_)));
        assert_eq!(clipboard.write_count(), 0);
    }

    #[tokio::test]
    async fn test_copy_denied() {
        let site = Site::new("/api-docs");
        let clipboard = MemoryClipboard::denying();

        let err = copy_example(&site, "/quickstart", 0, None, context(&clipboard))
            .await
            .unwrap_err();

        assert!(err.is_clipboard_error());
    }
}
