//! A single highlighted code sample with a copy button.

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::{CodeExample, CopyIndicator, WidgetContext};
use crate::clipboard::ClipboardError;
use crate::highlight::{Highlighted, Palette};
use crate::theme::Theme;

/// Button caption while idle.
pub const COPY_LABEL: &str = "Copy";

/// Button caption while the acknowledgment is showing.
pub const COPIED_LABEL: &str = "Copied!";

/// Where the single copy button is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ButtonPlacement {
    /// In a header bar next to the title.
    Header {
        /// Header caption.
        title: String,
    },
    /// Floating in the top-right corner of the code area.
    Overlay,
}

/// Icon shown on the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyIcon {
    /// Two stacked sheets.
    Copy,
    /// A check mark.
    Check,
}

/// Rendered state of the copy button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyButton {
    /// Caption text.
    pub label: &'static str,
    /// Icon next to the caption.
    pub icon: CopyIcon,
}

impl CopyButton {
    fn for_state(copied: bool) -> Self {
        if copied {
            Self {
                label: COPIED_LABEL,
                icon: CopyIcon::Check,
            }
        } else {
            Self {
                label: COPY_LABEL,
                icon: CopyIcon::Copy,
            }
        }
    }
}

/// Snapshot of everything a code block displays.
#[derive(Debug, Clone, Serialize)]
pub struct CodeBlockView {
    /// Where the copy button goes.
    pub placement: ButtonPlacement,
    /// The copy button.
    pub button: CopyButton,
    /// Highlighted code.
    pub highlighted: Highlighted,
    /// Theme the view was taken under.
    pub theme: Theme,
    /// Palette for `theme`.
    #[serde(skip)]
    pub palette: &'static Palette,
    /// Inline message from the last failed copy.
    pub error: Option<String>,
}

/// Record of a confirmed clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyReceipt {
    /// Number of bytes written.
    pub bytes: usize,
    /// BLAKE3 hash of the copied text.
    pub content_hash: String,
    /// Clipboard that accepted the write.
    pub clipboard: &'static str,
    /// When the write was confirmed.
    pub copied_at: DateTime<Utc>,
}

/// One code sample with highlighting and copy-to-clipboard.
///
/// The "Copied!" state is owned by this instance; dropping the block cancels
/// its pending revert.
#[derive(Debug)]
pub struct CodeBlock {
    code: String,
    language: String,
    title: Option<String>,
    ctx: WidgetContext,
    indicator: CopyIndicator,
    last_error: Mutex<Option<ClipboardError>>,
}

impl CodeBlock {
    /// Create a code block.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        language: impl Into<String>,
        title: Option<String>,
        ctx: WidgetContext,
    ) -> Self {
        let indicator = CopyIndicator::new(ctx.copy_revert);
        Self {
            code: code.into(),
            language: language.into(),
            title,
            ctx,
            indicator,
            last_error: Mutex::new(None),
        }
    }

    /// Create a code block showing `example`.
    #[must_use]
    pub fn from_example(example: &CodeExample, title: Option<String>, ctx: WidgetContext) -> Self {
        Self::new(example.code(), example.language(), title, ctx)
    }

    /// The verbatim code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The grammar identifier.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The header title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Check whether "Copied!" is showing.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.indicator.is_copied()
    }

    /// The error from the most recent copy, cleared by a successful one.
    #[must_use]
    pub fn last_error(&self) -> Option<ClipboardError> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Where the copy button is placed.
    #[must_use]
    pub fn placement(&self) -> ButtonPlacement {
        match &self.title {
            Some(title) => ButtonPlacement::Header {
                title: title.clone(),
            },
            None => ButtonPlacement::Overlay,
        }
    }

    /// Write the code to the clipboard, then show "Copied!".
    ///
    /// The acknowledgment only appears once the clipboard confirms the
    /// write. Concurrent copies are allowed; each confirmed one restarts the
    /// revert window.
    ///
    /// # Errors
    ///
    /// Returns the clipboard error if the write fails. The button is left
    /// unchanged and the error is kept for [`CodeBlock::last_error`].
    pub async fn copy(&self) -> Result<CopyReceipt, ClipboardError> {
        let clipboard = &self.ctx.clipboard;

        match clipboard.write_text(&self.code).await {
            Ok(()) => {
                self.indicator.acknowledge();
                self.set_error(None);

                let receipt = CopyReceipt {
                    bytes: self.code.len(),
                    content_hash: blake3::hash(self.code.as_bytes()).to_hex().to_string(),
                    clipboard: clipboard.name(),
                    copied_at: Utc::now(),
                };
                debug!(
                    language = %self.language,
                    bytes = receipt.bytes,
                    clipboard = receipt.clipboard,
                    "Copied code sample"
                );
                Ok(receipt)
            }
            Err(e) => {
                warn!(language = %self.language, error = %e, "Copy failed");
                self.set_error(Some(e.clone()));
                Err(e)
            }
        }
    }

    /// Render the current state under the current theme.
    #[must_use]
    pub fn view(&self) -> CodeBlockView {
        let theme = self.ctx.theme.current();
        CodeBlockView {
            placement: self.placement(),
            button: CopyButton::for_state(self.is_copied()),
            highlighted: self.ctx.highlighter.highlight(&self.code, &self.language),
            theme,
            palette: theme.palette(),
            error: self.last_error().map(|e| e.to_string()),
        }
    }

    fn set_error(&self, error: Option<ClipboardError>) {
        *self.last_error.lock().unwrap_or_else(PoisonError::into_inner) = error;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::theme::{ThemeHandle, ThemeProvider};

    fn context(clipboard: &MemoryClipboard) -> WidgetContext {
        WidgetContext::new(
            ThemeHandle::fixed(Theme::Light),
            Arc::new(clipboard.clone()),
        )
    }

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn test_placement_header_when_titled() {
        let clipboard = MemoryClipboard::new();
        let block = CodeBlock::new("x", "bash", Some("Request".into()), context(&clipboard));
        assert_eq!(
            block.placement(),
            ButtonPlacement::Header {
                title: "Request".into()
            }
        );
    }

    #[test]
    fn test_placement_overlay_without_title() {
        let clipboard = MemoryClipboard::new();
        let block = CodeBlock::new("x", "bash", None, context(&clipboard));
        assert_eq!(block.placement(), ButtonPlacement::Overlay);
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_shows_copied_then_reverts() {
        let clipboard = MemoryClipboard::new();
        let block = CodeBlock::new("echo hi", "bash", None, context(&clipboard));
        assert_eq!(block.view().button.label, COPY_LABEL);

        block.copy().await.unwrap();
        let view = block.view();
        assert_eq!(view.button.label, COPIED_LABEL);
        assert_eq!(view.button.icon, CopyIcon::Check);

        tokio::time::advance(Duration::from_millis(1999)).await;
        settle().await;
        assert_eq!(block.view().button.label, COPIED_LABEL);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(block.view().button.label, COPY_LABEL);
        assert_eq!(block.view().button.icon, CopyIcon::Copy);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_copy_governs_revert() {
        let clipboard = MemoryClipboard::new();
        let block = CodeBlock::new("echo hi", "bash", None, context(&clipboard));

        block.copy().await.unwrap();
        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;
        block.copy().await.unwrap();

        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;
        assert!(block.is_copied());

        tokio::time::advance(Duration::from_millis(999)).await;
        settle().await;
        assert!(block.is_copied());

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(!block.is_copied());
        assert_eq!(clipboard.write_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_copy_never_shows_copied() {
        let clipboard = MemoryClipboard::denying();
        let block = CodeBlock::new("secret", "bash", Some("Run".into()), context(&clipboard));

        let result = block.copy().await;
        assert!(matches!(result, Err(ClipboardError::Denied(_))));
        assert!(!block.is_copied());

        let view = block.view();
        assert_eq!(view.button.label, COPY_LABEL);
        assert!(view.error.unwrap().contains("denied"));

        tokio::time::advance(Duration::from_millis(2500)).await;
        settle().await;
        assert!(!block.is_copied());
    }

    #[tokio::test]
    async fn test_successful_copy_clears_error() {
        let clipboard = MemoryClipboard::denying();
        let block = CodeBlock::new("ls", "bash", None, context(&clipboard));

        assert!(block.copy().await.is_err());
        assert!(block.last_error().is_some());

        clipboard.set_denied(false);
        block.copy().await.unwrap();
        assert!(block.last_error().is_none());
        assert!(block.is_copied());
    }

    #[tokio::test]
    async fn test_copy_is_verbatim() {
        let clipboard = MemoryClipboard::new();
        let code = "\n  const x = 1;\t\n\n";
        let block = CodeBlock::new(code, "javascript", None, context(&clipboard));

        let receipt = block.copy().await.unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some(code));
        assert_eq!(receipt.bytes, code.len());
        assert_eq!(receipt.clipboard, "memory");
        assert_eq!(
            receipt.content_hash,
            blake3::hash(code.as_bytes()).to_hex().to_string()
        );
    }

    #[tokio::test]
    async fn test_copy_empty_code() {
        let clipboard = MemoryClipboard::new();
        let block = CodeBlock::new("", "json", None, context(&clipboard));

        block.copy().await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some(""));
        assert!(block.view().highlighted.spans.is_empty());
    }

    #[test]
    fn test_view_follows_theme_changes() {
        let clipboard = MemoryClipboard::new();
        let provider = ThemeProvider::new(Theme::Light);
        let ctx = WidgetContext::new(provider.handle(), Arc::new(clipboard));
        let block = CodeBlock::new("{}", "json", None, ctx);

        assert_eq!(block.view().palette.name, Palette::ONE_LIGHT.name);

        provider.toggle();
        let view = block.view();
        assert_eq!(view.theme, Theme::Dark);
        assert_eq!(view.palette.name, Palette::ONE_DARK.name);
    }

    #[test]
    fn test_unsupported_language_renders_plain() {
        let clipboard = MemoryClipboard::new();
        let block = CodeBlock::new("plugins { id 'x' }", "gradle", None, context(&clipboard));

        let view = block.view();
        assert!(view.highlighted.is_plain());
        assert_eq!(view.highlighted.text(), "plugins { id 'x' }");
    }
}
