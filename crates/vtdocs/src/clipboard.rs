//! Clipboard access for code samples.
//!
//! [`ClipboardService`] is the seam between widgets and the platform: the
//! system implementation writes through clipboard-rs on the blocking pool,
//! and [`MemoryClipboard`] keeps the text in process for tests and dry runs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use clipboard_rs::{Clipboard, ClipboardContext};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while writing to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable from this context.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The platform refused the write.
    #[error("clipboard write denied: {0}")]
    Denied(String),
}

impl ClipboardError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a denied error.
    #[must_use]
    pub fn denied(message: impl Into<String>) -> Self {
        Self::Denied(message.into())
    }
}

/// Result type for clipboard operations.
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Asynchronous text clipboard.
#[async_trait::async_trait]
pub trait ClipboardService: Send + Sync + std::fmt::Debug {
    /// Replace the clipboard contents with `text`, verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be reached or refuses the
    /// write.
    async fn write_text(&self, text: &str) -> Result<()>;

    /// Short name for logs and status output.
    fn name(&self) -> &'static str;
}

/// The operating system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a handle to the system clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ClipboardService for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();
        let len = text.len();

        // clipboard-rs contexts are not Send; build one per write on the
        // blocking pool.
        tokio::task::spawn_blocking(move || {
            let ctx = ClipboardContext::new()
                .map_err(|e| ClipboardError::unavailable(e.to_string()))?;
            ctx.set_text(text)
                .map_err(|e| ClipboardError::denied(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::unavailable(format!("clipboard task failed: {e}")))??;

        debug!(len, "Wrote text to system clipboard");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// An in-process clipboard.
///
/// Clones share the same contents. A denying clipboard rejects every write,
/// which is how tests exercise permission failures.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    writes: Arc<AtomicUsize>,
    deny: Arc<AtomicBool>,
}

impl MemoryClipboard {
    /// Create an empty clipboard that accepts writes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard that rejects every write.
    #[must_use]
    pub fn denying() -> Self {
        let clipboard = Self::default();
        clipboard.set_denied(true);
        clipboard
    }

    /// Start or stop rejecting writes.
    pub fn set_denied(&self, deny: bool) {
        self.deny.store(deny, Ordering::SeqCst);
    }

    /// The current contents, if anything was written.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of accepted writes.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ClipboardService for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if self.deny.load(Ordering::SeqCst) {
            return Err(ClipboardError::denied("write rejected by memory clipboard"));
        }

        let mut guard = self
            .contents
            .lock()
            .map_err(|_| ClipboardError::unavailable("memory clipboard lock poisoned"))?;
        *guard = Some(text.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        trace!(len = text.len(), "Wrote text to memory clipboard");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_display() {
        let error = ClipboardError::unavailable("no display");
        assert_eq!(error.to_string(), "clipboard unavailable: no display");

        let error = ClipboardError::denied("permission refused");
        assert_eq!(
            error.to_string(),
            "clipboard write denied: permission refused"
        );
    }

    #[tokio::test]
    async fn test_memory_clipboard_keeps_text_verbatim() {
        let clipboard = MemoryClipboard::new();
        let text = "  line one\n\tline two  \n";

        clipboard.write_text(text).await.unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some(text));
        assert_eq!(clipboard.write_count(), 1);
    }

    #[tokio::test]
    async fn test_memory_clipboard_empty_text() {
        let clipboard = MemoryClipboard::new();
        clipboard.write_text("").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_denying_clipboard_rejects() {
        let clipboard = MemoryClipboard::denying();

        let result = clipboard.write_text("secret").await;

        assert!(matches!(result, Err(ClipboardError::Denied(_))));
        assert!(clipboard.contents().is_none());
        assert_eq!(clipboard.write_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_contents() {
        let clipboard = MemoryClipboard::new();
        let other = clipboard.clone();

        other.write_text("shared").await.unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some("shared"));

        clipboard.set_denied(true);
        assert!(other.write_text("blocked").await.is_err());
    }

    #[test]
    fn test_service_names() {
        assert_eq!(SystemClipboard::new().name(), "system");
        assert_eq!(MemoryClipboard::new().name(), "memory");
    }

    // Requires a desktop session with clipboard access.
    #[tokio::test]
    #[ignore = "requires clipboard access, may fail in CI"]
    async fn test_system_clipboard_write() {
        let result = SystemClipboard::new().write_text("vtdocs").await;
        assert!(result.is_ok());
    }
}
