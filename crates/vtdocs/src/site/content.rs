//! Page content model.
//!
//! Pages are plain data: a title, a lead paragraph and sections of blocks.
//! Code samples are stored as [`CodeExample`]s and only become widgets when
//! a page is rendered or copied from.

use std::fmt;

use serde::Serialize;

use super::changelog::Release;
use super::status::{Incident, Service};
use super::Route;
use crate::widgets::CodeExample;

/// One documentation page.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Where the page lives.
    pub route: Route,
    /// Page heading.
    pub title: String,
    /// Introductory paragraph under the heading.
    pub lead: String,
    /// Body sections, in order.
    pub sections: Vec<Section>,
}

/// A titled group of blocks.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    /// Section heading.
    pub heading: String,
    /// Content blocks, in order.
    pub blocks: Vec<Block>,
}

/// Visual tone of a callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Neutral information.
    Info,
    /// Something to be careful about.
    Warning,
    /// Positive confirmation.
    Success,
}

/// A linked summary card.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    /// Card heading.
    pub title: String,
    /// Card text.
    pub body: String,
    /// Optional internal link.
    pub link: Option<Route>,
}

/// A numbered step.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// Step heading.
    pub title: String,
    /// Step text.
    pub body: String,
}

/// A question and its answer.
#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        })
    }
}

/// A path or body parameter of an endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Type name shown to readers.
    pub kind: String,
    /// Whether the parameter must be given.
    pub required: bool,
    /// What the parameter means.
    pub description: String,
}

/// Reference entry for one API endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Endpoint {
    /// HTTP method.
    pub method: Method,
    /// Path template, e.g. `/v1/vehicles/{vehicle_id}`.
    pub path: String,
    /// One-line description.
    pub summary: String,
    /// Accepted parameters.
    pub parameters: Vec<Parameter>,
    /// Example request body (JSON).
    pub request_body: Option<String>,
    /// Example response body (JSON).
    pub response: String,
    /// Request examples per language.
    pub examples: Vec<CodeExample>,
}

/// A piece of page content.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Plain prose.
    Paragraph {
        /// The text.
        text: String,
    },
    /// Bulleted or numbered list.
    List {
        /// Numbered when true.
        ordered: bool,
        /// List items.
        items: Vec<String>,
    },
    /// Highlighted note.
    Callout {
        /// Visual tone.
        tone: Tone,
        /// Callout heading.
        title: String,
        /// Callout text.
        body: String,
    },
    /// Simple table.
    Table {
        /// Column headers.
        headers: Vec<String>,
        /// Rows of cells.
        rows: Vec<Vec<String>>,
    },
    /// A single code sample.
    Code {
        /// Header title for the block.
        title: Option<String>,
        /// The sample.
        example: CodeExample,
    },
    /// Samples of one operation in several languages.
    Tabs {
        /// Header title forwarded to the code block.
        title: Option<String>,
        /// The samples, in tab order.
        examples: Vec<CodeExample>,
    },
    /// A grid of cards.
    Cards {
        /// The cards.
        cards: Vec<Card>,
    },
    /// Numbered steps.
    Steps {
        /// The steps.
        steps: Vec<Step>,
    },
    /// Frequently asked questions.
    Faqs {
        /// Questions and answers.
        faqs: Vec<Faq>,
    },
    /// API endpoint reference.
    Endpoint(Endpoint),
    /// Service health overview.
    Services {
        /// Monitored services.
        services: Vec<Service>,
    },
    /// Status incident.
    Incident(Incident),
    /// Changelog release.
    Release(Release),
}

/// A set of code examples that can be shown as one tab group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeGroup {
    /// Heading of the section the group appears in.
    pub section: String,
    /// Title shown in the code block header.
    pub title: Option<String>,
    /// The examples, in tab order. Never empty.
    pub examples: Vec<CodeExample>,
}

impl Block {
    /// Code groups in this block, in render order.
    #[must_use]
    pub fn code_groups(&self, section: &str) -> Vec<CodeGroup> {
        let group = |title: Option<String>, examples: Vec<CodeExample>| CodeGroup {
            section: section.to_string(),
            title,
            examples,
        };

        match self {
            Self::Code { title, example } => vec![group(title.clone(), vec![example.clone()])],
            Self::Tabs { title, examples } if !examples.is_empty() => {
                vec![group(title.clone(), examples.clone())]
            }
            Self::Endpoint(endpoint) => {
                let name = format!("{} {}", endpoint.method, endpoint.path);
                let mut groups = Vec::new();
                if let Some(body) = &endpoint.request_body {
                    groups.push(group(
                        Some(format!("{name} request")),
                        vec![CodeExample::new("json", "Request", body.as_str())],
                    ));
                }
                groups.push(group(
                    Some(format!("{name} response")),
                    vec![CodeExample::new("json", "Response", endpoint.response.as_str())],
                ));
                if !endpoint.examples.is_empty() {
                    groups.push(group(Some(name), endpoint.examples.clone()));
                }
                groups
            }
            _ => Vec::new(),
        }
    }

    /// Searchable prose of this block.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Paragraph { text } => text.clone(),
            Self::List { items, .. } => items.join(" "),
            Self::Callout { title, body, .. } => format!("{title} {body}"),
            Self::Table { headers, rows } => {
                let mut words = headers.clone();
                words.extend(rows.iter().flatten().cloned());
                words.join(" ")
            }
            Self::Cards { cards } => cards
                .iter()
                .map(|c| format!("{} {}", c.title, c.body))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Steps { steps } => steps
                .iter()
                .map(|s| format!("{} {}", s.title, s.body))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Faqs { faqs } => faqs
                .iter()
                .map(|f| format!("{} {}", f.question, f.answer))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Endpoint(e) => format!("{} {} {}", e.method, e.path, e.summary),
            Self::Services { services } => services
                .iter()
                .map(|s| format!("{} {}", s.name, s.description))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Incident(i) => format!("{} {}", i.title, i.description),
            Self::Release(r) => r.text(),
            Self::Code { title, .. } | Self::Tabs { title, .. } => {
                title.clone().unwrap_or_default()
            }
        }
    }
}

impl Page {
    /// All code groups on the page, numbered from 0 in render order.
    #[must_use]
    pub fn code_groups(&self) -> Vec<CodeGroup> {
        self.sections
            .iter()
            .flat_map(|section| {
                section
                    .blocks
                    .iter()
                    .flat_map(|block| block.code_groups(&section.heading))
            })
            .collect()
    }
}

/// Shorthand constructors used by the page definitions.
pub(crate) mod build {
    use super::{Block, Card, Faq, Section, Step, Tone};
    use crate::site::Route;
    use crate::widgets::CodeExample;

    pub fn section(heading: &str, blocks: Vec<Block>) -> Section {
        Section {
            heading: heading.to_string(),
            blocks,
        }
    }

    pub fn para(text: &str) -> Block {
        Block::Paragraph {
            text: text.to_string(),
        }
    }

    pub fn bullets(items: &[&str]) -> Block {
        Block::List {
            ordered: false,
            items: items.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn numbered(items: &[&str]) -> Block {
        Block::List {
            ordered: true,
            items: items.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn callout(tone: Tone, title: &str, body: &str) -> Block {
        Block::Callout {
            tone,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn table(headers: &[&str], rows: &[&[&str]]) -> Block {
        Block::Table {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    pub fn code(language: &str, title: Option<&str>, code: &str) -> Block {
        Block::Code {
            title: title.map(ToString::to_string),
            example: CodeExample::new(language, language, code),
        }
    }

    pub fn tabs(examples: &[(&str, &str, &str)]) -> Block {
        Block::Tabs {
            title: None,
            examples: examples_of(examples),
        }
    }

    pub fn examples_of(examples: &[(&str, &str, &str)]) -> Vec<CodeExample> {
        examples
            .iter()
            .map(|(language, label, code)| CodeExample::new(*language, *label, *code))
            .collect()
    }

    pub fn cards(cards: &[(&str, &str)]) -> Block {
        Block::Cards {
            cards: cards
                .iter()
                .map(|(title, body)| Card {
                    title: title.to_string(),
                    body: body.to_string(),
                    link: None,
                })
                .collect(),
        }
    }

    pub fn link_cards(cards: &[(&str, &str, Route)]) -> Block {
        Block::Cards {
            cards: cards
                .iter()
                .map(|(title, body, route)| Card {
                    title: title.to_string(),
                    body: body.to_string(),
                    link: Some(*route),
                })
                .collect(),
        }
    }

    pub fn steps(steps: &[(&str, &str)]) -> Block {
        Block::Steps {
            steps: steps
                .iter()
                .map(|(title, body)| Step {
                    title: title.to_string(),
                    body: body.to_string(),
                })
                .collect(),
        }
    }

    pub fn faqs(faqs: &[(&str, &str)]) -> Block {
        Block::Faqs {
            faqs: faqs
                .iter()
                .map(|(question, answer)| Faq {
                    question: question.to_string(),
                    answer: answer.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::build::*;
    use super::*;

    fn sample_page() -> Page {
        Page {
            route: Route::Quickstart,
            title: "Quick Start".into(),
            lead: "Get going.".into(),
            sections: vec![
                section(
                    "Install",
                    vec![
                        para("Pick a package manager."),
                        tabs(&[("bash", "npm", "npm i x"), ("bash", "pip", "pip install x")]),
                    ],
                ),
                section(
                    "Configure",
                    vec![code("json", Some("config.json"), "{}"), tabs(&[])],
                ),
            ],
        }
    }

    #[test]
    fn test_code_groups_in_order() {
        let groups = sample_page().code_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].section, "Install");
        assert_eq!(groups[0].examples.len(), 2);
        assert_eq!(groups[1].title.as_deref(), Some("config.json"));
        assert_eq!(groups[1].examples[0].code(), "{}");
    }

    #[test]
    fn test_empty_tabs_are_not_groups() {
        let block = tabs(&[]);
        assert!(block.code_groups("x").is_empty());
    }

    #[test]
    fn test_endpoint_groups() {
        let block = Block::Endpoint(Endpoint {
            method: Method::Post,
            path: "/v1/webhooks".into(),
            summary: "Create a webhook".into(),
            parameters: Vec::new(),
            request_body: Some("{\"url\": \"https://x\"}".into()),
            response: "{\"id\": \"wh_1\"}".into(),
            examples: examples_of(&[("bash", "cURL", "curl -X POST https://x")]),
        });

        let groups = block.code_groups("Webhooks");
        let titles: Vec<_> = groups.iter().map(|g| g.title.clone().unwrap()).collect();
        assert_eq!(
            titles,
            [
                "POST /v1/webhooks request",
                "POST /v1/webhooks response",
                "POST /v1/webhooks"
            ]
        );
    }

    #[test]
    fn test_block_text() {
        let block = table(&["Scope", "Access"], &[&["vehicle:read", "Basic data"]]);
        assert_eq!(block.text(), "Scope Access vehicle:read Basic data");

        let block = callout(Tone::Warning, "Careful", "Rotate secrets.");
        assert_eq!(block.text(), "Careful Rotate secrets.");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
