//! Syntax highlighting for code samples.
//!
//! [`Highlighter::highlight`] splits a code sample into classified spans.
//! The spans always concatenate back to the exact input, and languages
//! without a grammar degrade to a single plain span instead of failing.

mod grammars;
mod palette;

use serde::Serialize;
use tracing::trace;

pub use grammars::{builtin_grammars, Grammar, Rule};
pub use palette::Palette;

/// Classification of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Unclassified text.
    Plain,
    /// Line or block comment.
    Comment,
    /// String literal.
    String,
    /// Language keyword.
    Keyword,
    /// Boolean, null and similar literals.
    Constant,
    /// Numeric literal.
    Number,
    /// Function or command name.
    Function,
    /// Object key.
    Property,
    /// Markup tag name.
    Tag,
    /// Markup attribute, decorator or command-line flag.
    Attribute,
    /// Shell variable.
    Variable,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 11] = [
        Self::Plain,
        Self::Comment,
        Self::String,
        Self::Keyword,
        Self::Constant,
        Self::Number,
        Self::Function,
        Self::Property,
        Self::Tag,
        Self::Attribute,
        Self::Variable,
    ];

    /// CSS class applied to spans of this kind.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Plain => "tok-plain",
            Self::Comment => "tok-comment",
            Self::String => "tok-string",
            Self::Keyword => "tok-keyword",
            Self::Constant => "tok-constant",
            Self::Number => "tok-number",
            Self::Function => "tok-function",
            Self::Property => "tok-property",
            Self::Tag => "tok-tag",
            Self::Attribute => "tok-attribute",
            Self::Variable => "tok-variable",
        }
    }
}

/// A run of text with one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    /// How the text is classified.
    pub kind: TokenKind,
    /// The verbatim text.
    pub text: String,
}

/// Result of highlighting one code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    /// The language identifier that was requested.
    pub language: String,
    /// The grammar that was applied, if the language is supported.
    pub grammar: Option<&'static str>,
    /// Classified spans, in order.
    pub spans: Vec<Span>,
}

impl Highlighted {
    /// Check whether the sample was rendered without a grammar.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.grammar.is_none()
    }

    /// Reassemble the original text.
    #[must_use]
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Spans of the given kind.
    pub fn spans_of(&self, kind: TokenKind) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |span| span.kind == kind)
    }
}

/// Regex-driven highlighter over the built-in grammars.
#[derive(Debug)]
pub struct Highlighter {
    grammars: Vec<Grammar>,
}

impl Highlighter {
    /// Create a highlighter with all built-in grammars.
    #[must_use]
    pub fn new() -> Self {
        Self::with_grammars(builtin_grammars())
    }

    /// Create a highlighter with a custom grammar set.
    #[must_use]
    pub fn with_grammars(grammars: Vec<Grammar>) -> Self {
        Self { grammars }
    }

    /// Find the grammar for a language identifier.
    #[must_use]
    pub fn grammar_for(&self, language: &str) -> Option<&Grammar> {
        self.grammars.iter().find(|g| g.answers_to(language))
    }

    /// Check whether a language has a grammar.
    #[must_use]
    pub fn is_supported(&self, language: &str) -> bool {
        self.grammar_for(language).is_some()
    }

    /// Canonical names of the supported languages.
    #[must_use]
    pub fn languages(&self) -> Vec<&'static str> {
        self.grammars.iter().map(|g| g.name).collect()
    }

    /// Highlight `code` as `language`.
    #[must_use]
    pub fn highlight(&self, code: &str, language: &str) -> Highlighted {
        let Some(grammar) = self.grammar_for(language) else {
            trace!(language, "No grammar, rendering as plain text");
            return Highlighted {
                language: language.to_string(),
                grammar: None,
                spans: plain_spans(code),
            };
        };

        Highlighted {
            language: language.to_string(),
            grammar: Some(grammar.name),
            spans: tokenize(grammar, code),
        }
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn plain_spans(code: &str) -> Vec<Span> {
    if code.is_empty() {
        Vec::new()
    } else {
        vec![Span {
            kind: TokenKind::Plain,
            text: code.to_string(),
        }]
    }
}

fn tokenize(grammar: &Grammar, code: &str) -> Vec<Span> {
    let mut spans = SpanBuilder::default();
    let mut next: Vec<Option<(usize, usize)>> = grammar
        .rules
        .iter()
        .map(|rule| rule.find_at(code, 0).map(|m| (m.start(), m.end())))
        .collect();
    let mut pos = 0;

    while pos < code.len() {
        for (slot, rule) in next.iter_mut().zip(&grammar.rules) {
            if matches!(slot, Some((start, _)) if *start < pos) {
                *slot = rule.find_at(code, pos).map(|m| (m.start(), m.end()));
            }
        }

        // Earliest match wins; ties go to the rule listed first.
        let best = next
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|(start, end)| (start, i, end)))
            .min();

        let Some((start, rule, end)) = best else {
            spans.push(TokenKind::Plain, &code[pos..]);
            break;
        };

        spans.push(TokenKind::Plain, &code[pos..start]);
        spans.push(grammar.rules[rule].kind, &code[start..end]);
        pos = end;
    }

    spans.finish()
}

/// Collects spans, merging neighbours of the same kind and dropping empties.
#[derive(Debug, Default)]
struct SpanBuilder {
    spans: Vec<Span>,
}

impl SpanBuilder {
    fn push(&mut self, kind: TokenKind, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(text),
            _ => self.spans.push(Span {
                kind,
                text: text.to_string(),
            }),
        }
    }

    fn finish(self) -> Vec<Span> {
        self.spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of<'a>(highlighted: &'a Highlighted, kind: TokenKind) -> Vec<&'a str> {
        highlighted
            .spans_of(kind)
            .map(|span| span.text.as_str())
            .collect()
    }

    #[test]
    fn test_unsupported_language_is_plain() {
        let hl = Highlighter::new();
        let out = hl.highlight("implementation 'x:y:1.0'", "gradle");

        assert!(out.is_plain());
        assert_eq!(out.spans.len(), 1);
        assert_eq!(out.spans[0].kind, TokenKind::Plain);
        assert_eq!(out.text(), "implementation 'x:y:1.0'");
    }

    #[test]
    fn test_empty_code() {
        let hl = Highlighter::new();
        assert!(hl.highlight("", "javascript").spans.is_empty());
        assert!(hl.highlight("", "cobol").spans.is_empty());
    }

    #[test]
    fn test_javascript_tokens() {
        let hl = Highlighter::new();
        let out = hl.highlight("const x = fetch('https://x'); // go", "javascript");

        assert_eq!(out.grammar, Some("javascript"));
        assert_eq!(kinds_of(&out, TokenKind::Keyword), vec!["const"]);
        assert_eq!(kinds_of(&out, TokenKind::Function), vec!["fetch"]);
        assert_eq!(kinds_of(&out, TokenKind::String), vec!["'https://x'"]);
        assert_eq!(kinds_of(&out, TokenKind::Comment), vec!["// go"]);
    }

    #[test]
    fn test_keyword_beats_function_at_same_position() {
        let hl = Highlighter::new();
        let out = hl.highlight("if (ok) { run(); }", "js");

        assert_eq!(kinds_of(&out, TokenKind::Keyword), vec!["if"]);
        assert_eq!(kinds_of(&out, TokenKind::Function), vec!["run"]);
    }

    #[test]
    fn test_string_hides_keywords() {
        let hl = Highlighter::new();
        let out = hl.highlight("print(\"return if\")", "python");

        assert!(kinds_of(&out, TokenKind::Keyword).is_empty());
        assert_eq!(kinds_of(&out, TokenKind::String), vec!["\"return if\""]);
    }

    #[test]
    fn test_python_fstring_and_decorator() {
        let hl = Highlighter::new();
        let code = "@app.route('/hook')\ndef handle():\n    print(f'id {x}')";
        let out = hl.highlight(code, "py");

        assert_eq!(kinds_of(&out, TokenKind::Attribute), vec!["@app.route"]);
        assert!(kinds_of(&out, TokenKind::String).contains(&"f'id {x}'"));
        assert!(kinds_of(&out, TokenKind::Keyword).contains(&"def"));
        assert_eq!(out.text(), code);
    }

    #[test]
    fn test_json_keys_are_properties() {
        let hl = Highlighter::new();
        let out = hl.highlight("{\n  \"total\": 1,\n  \"ok\": true,\n  \"s\": \"v\"\n}", "json");

        assert_eq!(
            kinds_of(&out, TokenKind::Property),
            vec!["\"total\"", "\"ok\"", "\"s\""]
        );
        assert_eq!(kinds_of(&out, TokenKind::String), vec!["\"v\""]);
        assert_eq!(kinds_of(&out, TokenKind::Number), vec!["1"]);
        assert_eq!(kinds_of(&out, TokenKind::Constant), vec!["true"]);
    }

    #[test]
    fn test_bash_command_flags_and_variables() {
        let hl = Highlighter::new();
        let code = "curl -X GET https://x \\\n  -H \"Authorization: Bearer $TOKEN\"";
        let out = hl.highlight(code, "bash");

        assert_eq!(kinds_of(&out, TokenKind::Function), vec!["curl"]);
        assert_eq!(kinds_of(&out, TokenKind::Attribute), vec!["-X", "-H"]);
        assert_eq!(out.text(), code);
    }

    #[test]
    fn test_bash_comment_line() {
        let hl = Highlighter::new();
        let out = hl.highlight("# Install via npm\nnpm install pkg", "sh");

        assert_eq!(kinds_of(&out, TokenKind::Comment), vec!["# Install via npm"]);
        assert_eq!(kinds_of(&out, TokenKind::Function), vec!["npm"]);
    }

    #[test]
    fn test_xml_tags() {
        let hl = Highlighter::new();
        let out = hl.highlight("<dependency id=\"a\">\n</dependency>", "xml");

        assert_eq!(
            kinds_of(&out, TokenKind::Tag),
            vec!["dependency", "dependency"]
        );
        assert_eq!(kinds_of(&out, TokenKind::Attribute), vec!["id"]);
        assert_eq!(kinds_of(&out, TokenKind::String), vec!["\"a\""]);
    }

    #[test]
    fn test_spans_reassemble_exact_text() {
        let hl = Highlighter::new();
        let samples = [
            ("javascript", "  const a = `x ${b}`;\n\n\t// tail  \n"),
            ("python", "def f():\n    return 'é' # ünïcode\n"),
            ("go", "func main() {\n\tfmt.Println(\"hi\")\n}\n"),
            ("java", "public class A { int x = 3; }"),
            ("bash", "echo \"$HOME\"   \n"),
        ];
        for (language, code) in samples {
            assert_eq!(hl.highlight(code, language).text(), code, "{language}");
        }
    }

    #[test]
    fn test_adjacent_plain_spans_are_merged() {
        let hl = Highlighter::new();
        let out = hl.highlight("a b c", "javascript");
        assert_eq!(out.spans.len(), 1);
    }

    #[test]
    fn test_supported_languages() {
        let hl = Highlighter::new();
        assert!(hl.is_supported("JavaScript"));
        assert!(hl.is_supported("bash"));
        assert!(!hl.is_supported("curl"));
        assert!(hl.languages().contains(&"json"));
    }

    #[test]
    fn test_token_kind_css_classes_unique() {
        let mut classes: Vec<_> = TokenKind::ALL.iter().map(|k| k.css_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), TokenKind::ALL.len());
    }
}
