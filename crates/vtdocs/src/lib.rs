//! `vtdocs` - Documentation site for the Velora Connected Vehicles API
//!
//! This library provides the page content, the interactive code widgets
//! (highlighted code blocks with copy-to-clipboard and language tabs), the
//! theme provider and the static HTML renderer behind the `vtdocs` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod render;
pub mod search;
pub mod site;
pub mod theme;
pub mod widgets;

pub use clipboard::{ClipboardError, ClipboardService, MemoryClipboard, SystemClipboard};
pub use config::Config;
pub use error::{Error, Result};
pub use highlight::{Highlighter, TokenKind};
pub use logging::init_logging;
pub use site::{Route, Site};
pub use theme::{Theme, ThemeHandle, ThemeProvider};
pub use widgets::{CodeBlock, CodeExample, LanguageTabs, WidgetContext};
