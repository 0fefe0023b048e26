//! Documentation search.
//!
//! A case-insensitive substring search over page titles, section headings,
//! tab labels and prose. Hits are ranked by where the match occurs: a title
//! match outranks a heading match, which outranks a tab label, which
//! outranks body text.

use serde::Serialize;
use tracing::debug;

use crate::site::{Page, Route, Section, Site};

/// Score of a match in a page title.
pub const TITLE_SCORE: u32 = 100;
/// Score of a match in a section heading.
pub const HEADING_SCORE: u32 = 50;
/// Score of a match in a code tab label or language.
pub const TAB_SCORE: u32 = 30;
/// Score of a match in body text.
pub const TEXT_SCORE: u32 = 10;

const SNIPPET_BEFORE: usize = 40;
const SNIPPET_AFTER: usize = 80;

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Page containing the match.
    pub route: Route,
    /// Title of that page.
    pub title: String,
    /// Matching section, or `None` for a page-level match.
    pub section: Option<String>,
    /// Text around the match.
    pub snippet: String,
    /// Rank; higher is better.
    pub score: u32,
}

/// Search `site` for `query`, returning at most `limit` hits, best first.
///
/// A blank query returns nothing.
#[must_use]
pub fn search(site: &Site, query: &str, limit: usize) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = site
        .pages()
        .iter()
        .flat_map(|page| page_hits(page, &needle))
        .collect();

    // Stable, so equal scores keep sidebar and section order.
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(limit);

    debug!(query, hits = hits.len(), "Search finished");
    hits
}

fn page_hits(page: &Page, needle: &str) -> Vec<SearchHit> {
    let mut hits = Vec::new();

    let page_score = if find_ci(&page.title, needle).is_some() {
        Some(TITLE_SCORE)
    } else if find_ci(&page.lead, needle).is_some() {
        Some(TEXT_SCORE)
    } else {
        None
    };
    if let Some(score) = page_score {
        hits.push(SearchHit {
            route: page.route,
            title: page.title.clone(),
            section: None,
            snippet: snippet(&page.lead, needle),
            score,
        });
    }

    for section in &page.sections {
        if let Some((score, snippet)) = section_match(section, needle) {
            hits.push(SearchHit {
                route: page.route,
                title: page.title.clone(),
                section: Some(section.heading.clone()),
                snippet,
                score,
            });
        }
    }
    hits
}

/// Best score within a section, with the snippet for it.
fn section_match(section: &Section, needle: &str) -> Option<(u32, String)> {
    let text = section
        .blocks
        .iter()
        .map(crate::site::Block::text)
        .find(|text| find_ci(text, needle).is_some());

    if find_ci(&section.heading, needle).is_some() {
        let snippet = text.map_or_else(|| section.heading.clone(), |t| snippet(&t, needle));
        return Some((HEADING_SCORE, snippet));
    }

    let tab = section
        .blocks
        .iter()
        .flat_map(|block| block.code_groups(&section.heading))
        .flat_map(|group| group.examples)
        .find(|e| find_ci(e.label(), needle).is_some() || find_ci(e.language(), needle).is_some());
    if let Some(example) = tab {
        return Some((TAB_SCORE, format!("{} example", example.label())));
    }

    text.map(|t| (TEXT_SCORE, snippet(&t, needle)))
}

/// Byte offset of the first case-insensitive occurrence of `needle`.
///
/// `needle` must already be lowercase. The offset is always a char boundary
/// of `haystack`.
fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| starts_with_ci(&haystack[i..], needle))
}

fn starts_with_ci(text: &str, needle: &str) -> bool {
    let mut lowered = text.chars().flat_map(char::to_lowercase);
    needle.chars().all(|n| lowered.next() == Some(n))
}

/// Up to a fixed number of characters either side of the first match.
fn snippet(text: &str, needle: &str) -> String {
    let Some(at) = find_ci(text, needle) else {
        return truncate_chars(text, SNIPPET_BEFORE + SNIPPET_AFTER);
    };

    let start = text[..at]
        .char_indices()
        .rev()
        .nth(SNIPPET_BEFORE - 1)
        .map_or(0, |(i, _)| i);
    let end = text[at..]
        .char_indices()
        .nth(SNIPPET_AFTER)
        .map_or(text.len(), |(i, _)| at + i);

    let mut out = String::new();
    if start > 0 {
        out.push_str("...");
    }
    out.push_str(text[start..end].trim());
    if end < text.len() {
        out.push_str("...");
    }
    out
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((i, _)) => format!("{}...", &text[..i]),
        None => text.to_string(),
    }
}
