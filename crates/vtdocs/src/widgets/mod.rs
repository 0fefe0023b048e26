//! Interactive documentation widgets.
//!
//! A page hands a list of [`CodeExample`]s to [`LanguageTabs`], which keeps
//! exactly one [`CodeBlock`] alive for the active example. Widgets read the
//! theme, the clipboard and the highlighter from a shared [`WidgetContext`].

mod code_block;
mod copy_indicator;
mod language_tabs;

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clipboard::ClipboardService;
use crate::highlight::Highlighter;
use crate::theme::ThemeHandle;

pub use code_block::{
    ButtonPlacement, CodeBlock, CodeBlockView, CopyButton, CopyIcon, CopyReceipt, COPIED_LABEL,
    COPY_LABEL,
};
pub use copy_indicator::{CopyIndicator, DEFAULT_COPY_REVERT};
pub use language_tabs::{LanguageTabs, TabView, TabsView};

/// A labelled, language-tagged code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    language: String,
    label: String,
    code: String,
}

impl CodeExample {
    /// Create an example. `code` is kept exactly as given.
    #[must_use]
    pub fn new(
        language: impl Into<String>,
        label: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            label: label.into(),
            code: code.into(),
        }
    }

    /// Grammar identifier.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Tab caption.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The verbatim code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Collaborators shared by every widget on a page.
#[derive(Debug, Clone)]
pub struct WidgetContext {
    /// Read-only theme.
    pub theme: ThemeHandle,
    /// Where copies go.
    pub clipboard: Arc<dyn ClipboardService>,
    /// Shared, pre-compiled highlighter.
    pub highlighter: Arc<Highlighter>,
    /// How long "Copied!" stays up.
    pub copy_revert: Duration,
}

impl WidgetContext {
    /// Create a context with the built-in highlighter and default revert delay.
    #[must_use]
    pub fn new(theme: ThemeHandle, clipboard: Arc<dyn ClipboardService>) -> Self {
        Self {
            theme,
            clipboard,
            highlighter: Arc::new(Highlighter::new()),
            copy_revert: DEFAULT_COPY_REVERT,
        }
    }

    /// Use a different revert delay.
    #[must_use]
    pub fn with_copy_revert(mut self, copy_revert: Duration) -> Self {
        self.copy_revert = copy_revert;
        self
    }

    /// Share an existing highlighter.
    #[must_use]
    pub fn with_highlighter(mut self, highlighter: Arc<Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::theme::Theme;

    #[test]
    fn test_code_example_accessors() {
        let example = CodeExample::new("bash", "cURL", "curl -X GET https://x");
        assert_eq!(example.language(), "bash");
        assert_eq!(example.label(), "cURL");
        assert_eq!(example.code(), "curl -X GET https://x");
    }

    #[test]
    fn test_code_example_keeps_whitespace() {
        let example = CodeExample::new("json", "Response", "\n  {}\n\n");
        assert_eq!(example.code(), "\n  {}\n\n");
    }

    #[test]
    fn test_code_example_serde() {
        let example = CodeExample::new("python", "Python", "print(1)");
        let json = serde_json::to_string(&example).unwrap();
        assert!(json.contains("\"label\":\"Python\""));

        let back: CodeExample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, example);
    }

    #[test]
    fn test_widget_context_defaults() {
        let ctx = WidgetContext::new(
            ThemeHandle::fixed(Theme::Light),
            Arc::new(MemoryClipboard::new()),
        );
        assert_eq!(ctx.copy_revert, DEFAULT_COPY_REVERT);
        assert_eq!(ctx.clipboard.name(), "memory");

        let ctx = ctx.with_copy_revert(Duration::from_millis(10));
        assert_eq!(ctx.copy_revert, Duration::from_millis(10));
    }
}
