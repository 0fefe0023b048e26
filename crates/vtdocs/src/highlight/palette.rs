//! Highlighting palettes.
//!
//! Color values follow the "One" light and dark schemes.

use std::fmt::Write as _;

use super::TokenKind;

/// Colors for each token kind under one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Palette identifier, also used as a CSS data attribute value.
    pub name: &'static str,
    /// Code area background.
    pub background: &'static str,
    /// Default text color.
    pub foreground: &'static str,
    comment: &'static str,
    string: &'static str,
    keyword: &'static str,
    constant: &'static str,
    number: &'static str,
    function: &'static str,
    property: &'static str,
    tag: &'static str,
    attribute: &'static str,
    variable: &'static str,
}

impl Palette {
    /// Palette for the light theme.
    pub const ONE_LIGHT: Palette = Palette {
        name: "one-light",
        background: "#fafafa",
        foreground: "#383a42",
        comment: "#a0a1a7",
        string: "#50a14f",
        keyword: "#a626a4",
        constant: "#0184bc",
        number: "#986801",
        function: "#4078f2",
        property: "#e45649",
        tag: "#e45649",
        attribute: "#986801",
        variable: "#e45649",
    };

    /// Palette for the dark theme.
    pub const ONE_DARK: Palette = Palette {
        name: "one-dark",
        background: "#282c34",
        foreground: "#abb2bf",
        comment: "#5c6370",
        string: "#98c379",
        keyword: "#c678dd",
        constant: "#d19a66",
        number: "#d19a66",
        function: "#61afef",
        property: "#e06c75",
        tag: "#e06c75",
        attribute: "#d19a66",
        variable: "#e06c75",
    };

    /// Color for a token kind. Plain text uses [`Palette::foreground`].
    #[must_use]
    pub fn color(&self, kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Plain => self.foreground,
            TokenKind::Comment => self.comment,
            TokenKind::String => self.string,
            TokenKind::Keyword => self.keyword,
            TokenKind::Constant => self.constant,
            TokenKind::Number => self.number,
            TokenKind::Function => self.function,
            TokenKind::Property => self.property,
            TokenKind::Tag => self.tag,
            TokenKind::Attribute => self.attribute,
            TokenKind::Variable => self.variable,
        }
    }

    /// CSS rules coloring token classes inside elements matching `scope`.
    #[must_use]
    pub fn css(&self, scope: &str) -> String {
        let mut css = format!(
            "{scope} .code-area {{ background: {}; color: {}; }}\n",
            self.background, self.foreground
        );
        for kind in TokenKind::ALL {
            if kind == TokenKind::Plain {
                continue;
            }
            let _ = writeln!(
                css,
                "{scope} .{} {{ color: {}; }}",
                kind.css_class(),
                self.color(kind)
            );
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Palette::ONE_LIGHT, Palette::ONE_DARK);
        assert_ne!(
            Palette::ONE_LIGHT.color(TokenKind::Keyword),
            Palette::ONE_DARK.color(TokenKind::Keyword)
        );
    }

    #[test]
    fn test_plain_uses_foreground() {
        assert_eq!(
            Palette::ONE_DARK.color(TokenKind::Plain),
            Palette::ONE_DARK.foreground
        );
    }

    #[test]
    fn test_css_covers_every_styled_kind() {
        let css = Palette::ONE_LIGHT.css("[data-theme=\"light\"]");
        for kind in TokenKind::ALL {
            if kind != TokenKind::Plain {
                assert!(css.contains(kind.css_class()), "missing {kind:?}");
            }
        }
        assert!(css.contains("#fafafa"));
    }
}
