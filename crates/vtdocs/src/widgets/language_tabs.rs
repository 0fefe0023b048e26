//! A tab strip over code examples in several languages.

use serde::Serialize;
use tracing::debug;

use super::{CodeBlock, CodeBlockView, CodeExample, CopyReceipt, WidgetContext};
use crate::clipboard::ClipboardError;
use crate::error::{Error, Result};

/// One tab in the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    /// Position in the group.
    pub index: usize,
    /// Tab caption.
    pub label: String,
    /// Grammar identifier of the example.
    pub language: String,
    /// Whether this tab is the active one.
    pub active: bool,
}

/// Snapshot of a tab group.
#[derive(Debug, Clone, Serialize)]
pub struct TabsView {
    /// Tabs in example order.
    pub tabs: Vec<TabView>,
    /// The active example's code block.
    pub block: CodeBlockView,
}

/// Switchable set of code examples, exactly one shown at a time.
///
/// Switching tabs replaces the inner [`CodeBlock`], so a "Copied!" showing on
/// the old tab does not carry over.
#[derive(Debug)]
pub struct LanguageTabs {
    examples: Vec<CodeExample>,
    title: Option<String>,
    ctx: WidgetContext,
    active: usize,
    block: CodeBlock,
}

impl LanguageTabs {
    /// Create a tab group with the first example active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTabGroup`] if `examples` is empty.
    pub fn new(
        examples: Vec<CodeExample>,
        title: Option<String>,
        ctx: WidgetContext,
    ) -> Result<Self> {
        let first = examples.first().ok_or(Error::EmptyTabGroup)?;
        let block = CodeBlock::from_example(first, title.clone(), ctx.clone());

        Ok(Self {
            examples,
            title,
            ctx,
            active: 0,
            block,
        })
    }

    /// All examples, in tab order.
    #[must_use]
    pub fn examples(&self) -> &[CodeExample] {
        &self.examples
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Always false; a group has at least one tab.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Index of the active tab.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active example.
    #[must_use]
    pub fn active_example(&self) -> &CodeExample {
        &self.examples[self.active]
    }

    /// The code block for the active example.
    #[must_use]
    pub fn code_block(&self) -> &CodeBlock {
        &self.block
    }

    /// Make tab `index` active.
    ///
    /// Returns `false` if it already was, in which case nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TabOutOfRange`] if `index` is not a tab.
    pub fn select(&mut self, index: usize) -> Result<bool> {
        if index >= self.examples.len() {
            return Err(Error::TabOutOfRange {
                index,
                len: self.examples.len(),
            });
        }
        if index == self.active {
            return Ok(false);
        }

        let example = &self.examples[index];
        debug!(from = self.active, to = index, label = %example.label(), "Switching tab");
        self.block = CodeBlock::from_example(example, self.title.clone(), self.ctx.clone());
        self.active = index;
        Ok(true)
    }

    /// Make the first tab labelled `label` active.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTab`] if no tab has that label.
    pub fn select_label(&mut self, label: &str) -> Result<bool> {
        let index = self
            .examples
            .iter()
            .position(|example| example.label() == label)
            .ok_or_else(|| Error::UnknownTab(label.to_string()))?;
        self.select(index)
    }

    /// Copy the active example's code.
    ///
    /// # Errors
    ///
    /// Returns the clipboard error if the write fails.
    pub async fn copy_active(&self) -> std::result::Result<CopyReceipt, ClipboardError> {
        self.block.copy().await
    }

    /// Render the tab strip and the active block.
    #[must_use]
    pub fn view(&self) -> TabsView {
        let tabs = self
            .examples
            .iter()
            .enumerate()
            .map(|(index, example)| TabView {
                index,
                label: example.label().to_string(),
                language: example.language().to_string(),
                active: index == self.active,
            })
            .collect();

        TabsView {
            tabs,
            block: self.block.view(),
        }
    }
}
