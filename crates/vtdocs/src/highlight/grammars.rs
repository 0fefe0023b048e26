//! Built-in highlighting grammars.
//!
//! Each grammar is an ordered list of regex rules. Earlier rules win when two
//! rules match at the same position, so comments and strings come first.

use regex::{Match, Regex};

use super::TokenKind;

/// One classification rule of a grammar.
#[derive(Debug)]
pub struct Rule {
    /// Token kind assigned to the matched text.
    pub kind: TokenKind,

    /// The compiled regex.
    regex: Regex,
}

impl Rule {
    /// Create a new rule.
    ///
    /// If the pattern has a capture group, only group 1 is classified and the
    /// rest of the match is left to later rules.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(kind: TokenKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
        }
    }

    /// Find the next classified range at or after `start`.
    #[must_use]
    pub fn find_at<'a>(&self, code: &'a str, start: usize) -> Option<Match<'a>> {
        if self.regex.captures_len() > 1 {
            // Grouped rules may consume one leading char of context.
            let mut from = prev_boundary(code, start);
            while from <= code.len() {
                let caps = self.regex.captures_at(code, from)?;
                if let Some(group) = caps.get(1) {
                    if group.start() >= start && !group.is_empty() {
                        return Some(group);
                    }
                }
                let whole = caps.get(0)?;
                from = next_boundary(code, whole.start().max(from));
            }
            None
        } else {
            self.regex.find_at(code, start).filter(|m| !m.is_empty())
        }
    }
}

/// Largest char boundary strictly before `index`, or 0.
fn prev_boundary(code: &str, index: usize) -> usize {
    let mut prev = index.saturating_sub(1);
    while prev > 0 && !code.is_char_boundary(prev) {
        prev -= 1;
    }
    prev
}

/// Smallest char boundary strictly after `index`.
fn next_boundary(code: &str, index: usize) -> usize {
    let mut next = index + 1;
    while next < code.len() && !code.is_char_boundary(next) {
        next += 1;
    }
    next
}

/// A named language grammar.
#[derive(Debug)]
pub struct Grammar {
    /// Canonical grammar name.
    pub name: &'static str,

    /// Other language identifiers resolving to this grammar.
    pub aliases: &'static [&'static str],

    /// Classification rules in priority order.
    pub rules: Vec<Rule>,
}

impl Grammar {
    /// Check whether `language` names this grammar (case-insensitive).
    #[must_use]
    pub fn answers_to(&self, language: &str) -> bool {
        self.name.eq_ignore_ascii_case(language)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(language))
    }
}

const C_COMMENT: &str = r"//[^\n]*|/\*[\s\S]*?\*/";
const NUMBER: &str = r"\b\d+(?:\.\d+)?\b";

/// Get all built-in grammars.
#[must_use]
pub fn builtin_grammars() -> Vec<Grammar> {
    vec![
        javascript(),
        python(),
        java(),
        go(),
        bash(),
        json(),
        xml(),
    ]
}

fn javascript() -> Grammar {
    Grammar {
        name: "javascript",
        aliases: &["js", "jsx", "typescript", "ts", "node"],
        rules: vec![
            Rule::new(TokenKind::Comment, C_COMMENT),
            Rule::new(
                TokenKind::String,
                r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|`(?:[^`\\]|\\[\s\S])*`"#,
            ),
            Rule::new(
                TokenKind::Keyword,
                r"\b(?:async|await|break|case|catch|class|const|continue|default|else|export|extends|finally|for|from|function|if|import|in|instanceof|let|new|of|require|return|switch|throw|try|typeof|var|while)\b",
            ),
            Rule::new(TokenKind::Constant, r"\b(?:true|false|null|undefined|this)\b"),
            Rule::new(TokenKind::Number, NUMBER),
            Rule::new(TokenKind::Function, r"\b([A-Za-z_$][\w$]*)\s*\("),
        ],
    }
}

fn python() -> Grammar {
    Grammar {
        name: "python",
        aliases: &["py", "python3"],
        rules: vec![
            Rule::new(TokenKind::Comment, r"#[^\n]*"),
            Rule::new(
                TokenKind::String,
                r#"(?:\b[rRbBfF]{1,2})?(?:"""[\s\S]*?"""|'''[\s\S]*?'''|"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*')"#,
            ),
            Rule::new(TokenKind::Attribute, r"@[A-Za-z_][\w.]*"),
            Rule::new(
                TokenKind::Keyword,
                r"\b(?:and|as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|from|global|if|import|in|is|lambda|nonlocal|not|or|pass|raise|return|try|while|with|yield)\b",
            ),
            Rule::new(TokenKind::Constant, r"\b(?:True|False|None|self)\b"),
            Rule::new(TokenKind::Number, NUMBER),
            Rule::new(TokenKind::Function, r"\b([A-Za-z_]\w*)\s*\("),
        ],
    }
}

fn java() -> Grammar {
    Grammar {
        name: "java",
        aliases: &["kotlin"],
        rules: vec![
            Rule::new(TokenKind::Comment, C_COMMENT),
            Rule::new(TokenKind::String, r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)'"#),
            Rule::new(TokenKind::Attribute, r"@[A-Za-z_]\w*"),
            Rule::new(
                TokenKind::Keyword,
                r"\b(?:abstract|boolean|break|byte|case|catch|char|class|continue|default|do|double|else|extends|final|finally|float|for|if|implements|import|instanceof|int|interface|long|new|package|private|protected|public|return|short|static|super|switch|this|throw|throws|try|var|void|while)\b",
            ),
            Rule::new(TokenKind::Constant, r"\b(?:true|false|null)\b"),
            Rule::new(TokenKind::Number, NUMBER),
            Rule::new(TokenKind::Function, r"\b([A-Za-z_]\w*)\s*\("),
        ],
    }
}

fn go() -> Grammar {
    Grammar {
        name: "go",
        aliases: &["golang"],
        rules: vec![
            Rule::new(TokenKind::Comment, C_COMMENT),
            Rule::new(TokenKind::String, r#""(?:[^"\\\n]|\\.)*"|`[^`]*`"#),
            Rule::new(
                TokenKind::Keyword,
                r"\b(?:break|case|chan|const|continue|default|defer|else|fallthrough|for|func|go|goto|if|import|interface|map|package|range|return|select|struct|switch|type|var)\b",
            ),
            Rule::new(TokenKind::Constant, r"\b(?:true|false|nil|iota)\b"),
            Rule::new(TokenKind::Number, NUMBER),
            Rule::new(TokenKind::Function, r"\b([A-Za-z_]\w*)\s*\("),
        ],
    }
}

fn bash() -> Grammar {
    Grammar {
        name: "bash",
        aliases: &["sh", "shell", "zsh", "console"],
        rules: vec![
            Rule::new(TokenKind::Comment, r"(?m)(?:^|[ \t])(#[^\n]*)"),
            Rule::new(TokenKind::String, r#""(?:[^"\\]|\\[\s\S])*"|'[^']*'"#),
            Rule::new(
                TokenKind::Variable,
                r"\$\{[^}\n]*\}|\$[A-Za-z_]\w*|\$[0-9@#?$!*-]",
            ),
            Rule::new(
                TokenKind::Keyword,
                r"\b(?:if|then|else|elif|fi|for|while|do|done|case|esac|in|function|export|local|return)\b",
            ),
            Rule::new(TokenKind::Function, r"(?m)^[ \t]*([A-Za-z][\w.-]*)"),
            Rule::new(TokenKind::Attribute, r"(?:^|[ \t])(--?[A-Za-z][\w-]*)"),
            Rule::new(TokenKind::Number, r"\b\d+\b"),
        ],
    }
}

fn json() -> Grammar {
    Grammar {
        name: "json",
        aliases: &["jsonc"],
        rules: vec![
            Rule::new(TokenKind::Property, r#"("(?:[^"\\\n]|\\.)*")\s*:"#),
            Rule::new(TokenKind::String, r#""(?:[^"\\\n]|\\.)*""#),
            Rule::new(TokenKind::Constant, r"\b(?:true|false|null)\b"),
            Rule::new(TokenKind::Number, r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b"),
        ],
    }
}

fn xml() -> Grammar {
    Grammar {
        name: "xml",
        aliases: &["html", "markup", "svg"],
        rules: vec![
            Rule::new(TokenKind::Comment, r"<!--[\s\S]*?-->"),
            Rule::new(TokenKind::Tag, r"</?([A-Za-z][\w:.-]*)"),
            Rule::new(TokenKind::Attribute, r"\s([A-Za-z_:][\w:.-]*)="),
            Rule::new(TokenKind::String, r#""[^"]*"|'[^'\n]*'"#),
        ],
    }
}
