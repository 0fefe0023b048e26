//! Light/dark theme state shared by every rendered widget.
//!
//! The theme is owned by a single [`ThemeProvider`] (the only writer) and
//! broadcast to any number of read-only [`ThemeHandle`]s over a
//! `tokio::sync::watch` channel.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::info;

use crate::highlight::Palette;

/// The site color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The highlighting palette used with this theme.
    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &Palette::ONE_LIGHT,
            Self::Dark => &Palette::ONE_DARK,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Owner of the current theme. Only the provider can change it.
#[derive(Debug)]
pub struct ThemeProvider {
    tx: watch::Sender<Theme>,
}

impl ThemeProvider {
    /// Create a provider starting at `initial`.
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// A read-only handle for widgets.
    #[must_use]
    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle {
            rx: self.tx.subscribe(),
        }
    }

    /// The current theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        *self.tx.borrow()
    }

    /// Switch to `theme`, notifying handles only if it actually changed.
    pub fn set(&self, theme: Theme) {
        let changed = self.tx.send_if_modified(|current| {
            if *current == theme {
                false
            } else {
                *current = theme;
                true
            }
        });
        if changed {
            info!(%theme, "Theme changed");
        }
    }

    /// Flip between light and dark, returning the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set(next);
        next
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

/// Read-only view of the theme held by widgets.
#[derive(Debug, Clone)]
pub struct ThemeHandle {
    rx: watch::Receiver<Theme>,
}

impl ThemeHandle {
    /// A handle pinned to `theme`, with no provider behind it.
    #[must_use]
    pub fn fixed(theme: Theme) -> Self {
        let (_tx, rx) = watch::channel(theme);
        Self { rx }
    }

    /// The theme as of now.
    #[must_use]
    pub fn current(&self) -> Theme {
        *self.rx.borrow()
    }

    /// Wait for the next theme change.
    ///
    /// Returns `None` once the provider is gone, after which the theme can
    /// never change again.
    pub async fn changed(&mut self) -> Option<Theme> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
