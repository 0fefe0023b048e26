//! HTML markup for pages, blocks and code widgets.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::highlight::{Highlighted, TokenKind};
use crate::site::changelog::Release;
use crate::site::content::{Card, Endpoint, Tone};
use crate::site::status::{
    format_duration, overall_state, Incident, IncidentStatus, Service, ServiceState, Severity,
};
use crate::site::{Block, Page, RouteTable};
use crate::widgets::{
    ButtonPlacement, CodeBlock, CodeBlockView, CodeExample, CopyButton, CopyIcon, LanguageTabs,
    WidgetContext,
};

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Anchor id for a heading: lowercase ASCII words joined by `-`.
#[must_use]
pub fn slug(heading: &str) -> String {
    heading
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Writes the body of one page.
///
/// Code groups are numbered in the same order as [`Page::code_groups`], so a
/// `data-group` attribute in the output addresses the same group as the CLI.
pub(crate) struct PageWriter<'a> {
    ctx: &'a WidgetContext,
    routes: &'a RouteTable,
    now: DateTime<Utc>,
    out: String,
    next_group: usize,
}

impl<'a> PageWriter<'a> {
    pub(crate) fn new(ctx: &'a WidgetContext, routes: &'a RouteTable, now: DateTime<Utc>) -> Self {
        Self {
            ctx,
            routes,
            now,
            out: String::new(),
            next_group: 0,
        }
    }

    /// Render `page` and return the markup of its `<main>` element.
    pub(crate) fn page(mut self, page: &Page) -> Result<String> {
        let _ = write!(
            self.out,
            "<main>\n<h1>{}</h1>\n<p class=\"lead\">{}</p>\n",
            escape(&page.title),
            escape(&page.lead)
        );
        for section in &page.sections {
            let _ = writeln!(
                self.out,
                "<section>\n<h2 id=\"{}\">{}</h2>",
                slug(&section.heading),
                escape(&section.heading)
            );
            for block in &section.blocks {
                self.block(block)?;
            }
            self.out.push_str("</section>\n");
        }
        self.out.push_str("</main>\n");
        Ok(self.out)
    }

    fn block(&mut self, block: &Block) -> Result<()> {
        match block {
            Block::Paragraph { text } => {
                let _ = writeln!(self.out, "<p>{}</p>", escape(text));
            }
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                let _ = writeln!(self.out, "<{tag}>");
                for item in items {
                    let _ = writeln!(self.out, "<li>{}</li>", escape(item));
                }
                let _ = writeln!(self.out, "</{tag}>");
            }
            Block::Callout { tone, title, body } => {
                let _ = writeln!(
                    self.out,
                    "<div class=\"callout callout-{}\"><strong>{}</strong><p>{}</p></div>",
                    tone_class(*tone),
                    escape(title),
                    escape(body)
                );
            }
            Block::Table { headers, rows } => self.table(headers, rows),
            Block::Code { title, example } => self.code_block(example, title.clone()),
            Block::Tabs { title, examples } => {
                if !examples.is_empty() {
                    self.tabs(examples, title.clone())?;
                }
            }
            Block::Cards { cards } => self.cards(cards),
            Block::Steps { steps } => {
                self.out.push_str("<ol class=\"steps\">\n");
                for step in steps {
                    let _ = writeln!(
                        self.out,
                        "<li><strong>{}</strong> {}</li>",
                        escape(&step.title),
                        escape(&step.body)
                    );
                }
                self.out.push_str("</ol>\n");
            }
            Block::Faqs { faqs } => {
                for faq in faqs {
                    let _ = writeln!(
                        self.out,
                        "<details class=\"faq\"><summary>{}</summary><p>{}</p></details>",
                        escape(&faq.question),
                        escape(&faq.answer)
                    );
                }
            }
            Block::Endpoint(endpoint) => self.endpoint(endpoint)?,
            Block::Services { services } => self.services(services),
            Block::Incident(incident) => self.incident(incident),
            Block::Release(release) => self.release(release),
        }
        Ok(())
    }

    fn table(&mut self, headers: &[String], rows: &[Vec<String>]) {
        self.out.push_str("<table>\n<thead><tr>");
        for header in headers {
            let _ = write!(self.out, "<th>{}</th>", escape(header));
        }
        self.out.push_str("</tr></thead>\n<tbody>\n");
        for row in rows {
            self.out.push_str("<tr>");
            for cell in row {
                let _ = write!(self.out, "<td>{}</td>", escape(cell));
            }
            self.out.push_str("</tr>\n");
        }
        self.out.push_str("</tbody>\n</table>\n");
    }

    fn cards(&mut self, cards: &[Card]) {
        self.out.push_str("<div class=\"cards\">\n");
        for card in cards {
            let title = match card.link {
                Some(route) => format!(
                    "<a href=\"{}\">{}</a>",
                    escape(&self.routes.href(route)),
                    escape(&card.title)
                ),
                None => escape(&card.title),
            };
            let _ = writeln!(
                self.out,
                "<div class=\"card\"><h3>{title}</h3><p>{}</p></div>",
                escape(&card.body)
            );
        }
        self.out.push_str("</div>\n");
    }

    fn endpoint(&mut self, endpoint: &Endpoint) -> Result<()> {
        let method = endpoint.method.to_string();
        let _ = writeln!(
            self.out,
            "<div class=\"endpoint\">\n<h3><span class=\"method method-{}\">{method}</span><code>{}</code></h3>\n<p>{}</p>",
            method.to_ascii_lowercase(),
            escape(&endpoint.path),
            escape(&endpoint.summary)
        );

        if !endpoint.parameters.is_empty() {
            let rows: Vec<Vec<String>> = endpoint
                .parameters
                .iter()
                .map(|p| {
                    vec![
                        p.name.clone(),
                        p.kind.clone(),
                        if p.required { "Yes" } else { "No" }.to_string(),
                        p.description.clone(),
                    ]
                })
                .collect();
            let headers = ["Name", "Type", "Required", "Description"].map(String::from);
            self.table(&headers, &rows);
        }

        let name = format!("{method} {}", endpoint.path);
        if let Some(body) = &endpoint.request_body {
            self.out.push_str("<h4>Request Body</h4>\n");
            let example = CodeExample::new("json", "Request", body.as_str());
            self.code_block(&example, Some(format!("{name} request")));
        }
        self.out.push_str("<h4>Response</h4>\n");
        let example = CodeExample::new("json", "Response", endpoint.response.as_str());
        self.code_block(&example, Some(format!("{name} response")));

        if !endpoint.examples.is_empty() {
            self.out.push_str("<h4>Examples</h4>\n");
            self.tabs(&endpoint.examples, Some(name))?;
        }
        self.out.push_str("</div>\n");
        Ok(())
    }

    fn services(&mut self, services: &[Service]) {
        let overall = overall_state(services);
        let _ = writeln!(
            self.out,
            "<p class=\"overall {}\">Overall status: {overall}</p>",
            state_class(overall)
        );
        self.out.push_str(
            "<table class=\"services\">\n<thead><tr><th>Service</th><th>Status</th>\
             <th>Uptime</th><th>Response</th><th>Description</th></tr></thead>\n<tbody>\n",
        );
        for service in services {
            let _ = writeln!(
                self.out,
                "<tr><td>{}</td><td class=\"{}\">{}</td><td>{:.2}%</td><td>{}ms</td><td>{}</td></tr>",
                escape(&service.name),
                state_class(service.state),
                service.state,
                service.uptime,
                service.response_ms,
                escape(&service.description)
            );
        }
        self.out.push_str("</tbody>\n</table>\n");
    }

    fn incident(&mut self, incident: &Incident) {
        let _ = writeln!(
            self.out,
            "<article class=\"incident severity-{severity}\">\n<h3>{}</h3>\n\
             <p class=\"incident-meta\"><span class=\"severity\">{severity}</span> \
             <span class=\"incident-status\">{}</span> \
             <time datetime=\"{}\">{}</time> \
             <span class=\"duration\">{}</span></p>\n<p>{}</p>",
            escape(&incident.title),
            status_label(incident.status),
            incident.started.to_rfc3339(),
            incident.started.format("%b %-d, %Y %H:%M UTC"),
            format_duration(incident.duration_at(self.now)),
            escape(&incident.description),
            severity = severity_label(incident.severity),
        );
        if !incident.updates.is_empty() {
            self.out.push_str("<ul class=\"updates\">\n");
            for update in &incident.updates {
                let _ = writeln!(
                    self.out,
                    "<li><time datetime=\"{}\">{}</time> {}</li>",
                    update.at.to_rfc3339(),
                    update.at.format("%H:%M UTC"),
                    escape(&update.message)
                );
            }
            self.out.push_str("</ul>\n");
        }
        self.out.push_str("</article>\n");
    }

    fn release(&mut self, release: &Release) {
        let breaking = if release.is_breaking() {
            " <span class=\"badge breaking\">Breaking</span>"
        } else {
            ""
        };
        let _ = writeln!(
            self.out,
            "<article class=\"release\">\n<h3>{}{breaking}</h3>\n<time datetime=\"{}\">{}</time>\n<ul>",
            escape(&release.version),
            release.date,
            release.display_date()
        );
        for change in &release.changes {
            let _ = write!(
                self.out,
                "<li><span class=\"change-kind\">{}</span> <strong>{}</strong> {}",
                change.kind,
                escape(&change.title),
                escape(&change.description)
            );
            if let Some(details) = &change.details {
                let _ = write!(self.out, "<p class=\"details\">{}</p>", escape(details));
            }
            if !change.endpoints.is_empty() {
                let codes: Vec<String> = change
                    .endpoints
                    .iter()
                    .map(|e| format!("<code>{}</code>", escape(e)))
                    .collect();
                let _ = write!(self.out, "<p class=\"endpoints\">{}</p>", codes.join(" "));
            }
            self.out.push_str("</li>\n");
        }
        self.out.push_str("</ul>\n</article>\n");
    }

    fn code_block(&mut self, example: &CodeExample, title: Option<String>) {
        let block = CodeBlock::from_example(example, title, self.ctx.clone());
        let view = block.view();
        let group = self.take_group();
        self.open_widget(group);
        self.block_view(&view);
        self.out.push_str("</div>\n");
    }

    fn tabs(&mut self, examples: &[CodeExample], title: Option<String>) -> Result<()> {
        let tabs = LanguageTabs::new(examples.to_vec(), title, self.ctx.clone())?;
        let view = tabs.view();
        let group = self.take_group();
        self.open_widget(group);

        self.out.push_str("<div class=\"tab-strip\" role=\"tablist\">");
        for tab in &view.tabs {
            let _ = write!(
                self.out,
                "<button type=\"button\" role=\"tab\" data-tab=\"{}\" data-language=\"{}\"{} aria-selected=\"{}\">{}</button>",
                tab.index,
                escape(&tab.language),
                if tab.active { " class=\"active\"" } else { "" },
                tab.active,
                escape(&tab.label)
            );
        }
        self.out.push_str("</div>\n");

        self.block_view(&view.block);

        // Inactive panels stay inert until selected.
        for tab in view.tabs.iter().filter(|t| !t.active) {
            let example = &examples[tab.index];
            let highlighted = self
                .ctx
                .highlighter
                .highlight(example.code(), example.language());
            let _ = write!(self.out, "<template data-tab=\"{}\">", tab.index);
            self.pre(&highlighted);
            self.out.push_str("</template>\n");
        }

        self.out.push_str("</div>\n");
        Ok(())
    }

    fn take_group(&mut self) -> usize {
        let group = self.next_group;
        self.next_group += 1;
        group
    }

    fn open_widget(&mut self, group: usize) {
        let _ = writeln!(
            self.out,
            "<div class=\"code-widget\" data-group=\"{group}\" data-revert-ms=\"{}\">",
            self.ctx.copy_revert.as_millis()
        );
    }

    fn block_view(&mut self, view: &CodeBlockView) {
        match &view.placement {
            ButtonPlacement::Header { title } => {
                let _ = write!(
                    self.out,
                    "<div class=\"code-header\"><span class=\"code-title\">{}</span>",
                    escape(title)
                );
                self.button(&view.button, "header");
                self.out.push_str("</div>\n<div class=\"code-area\">");
            }
            ButtonPlacement::Overlay => {
                self.out.push_str("<div class=\"code-area\">");
                self.button(&view.button, "overlay");
            }
        }
        self.pre(&view.highlighted);
        self.out.push_str("</div>\n");

        match &view.error {
            Some(message) => {
                let _ = writeln!(self.out, "<div class=\"copy-error\">{}</div>", escape(message));
            }
            None => self.out.push_str("<div class=\"copy-error\" hidden></div>\n"),
        }
    }

    fn button(&mut self, button: &CopyButton, placement: &str) {
        let icon = match button.icon {
            CopyIcon::Copy => "copy",
            CopyIcon::Check => "check",
        };
        let _ = write!(
            self.out,
            "<button type=\"button\" class=\"copy-button {placement}\" data-icon=\"{icon}\" aria-label=\"Copy code\"><span class=\"label\">{}</span></button>",
            button.label
        );
    }

    fn pre(&mut self, highlighted: &Highlighted) {
        let _ = write!(
            self.out,
            "<pre data-grammar=\"{}\"><code class=\"language-{}\">",
            highlighted.grammar.unwrap_or("plain"),
            escape(&highlighted.language)
        );
        for span in &highlighted.spans {
            if span.kind == TokenKind::Plain {
                self.out.push_str(&escape(&span.text));
            } else {
                let _ = write!(
                    self.out,
                    "<span class=\"{}\">{}</span>",
                    span.kind.css_class(),
                    escape(&span.text)
                );
            }
        }
        self.out.push_str("</code></pre>");
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Info => "info",
        Tone::Warning => "warning",
        Tone::Success => "success",
    }
}

fn state_class(state: ServiceState) -> &'static str {
    match state {
        ServiceState::Operational => "state-operational",
        ServiceState::Degraded => "state-degraded",
        ServiceState::Outage => "state-outage",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "critical",
        Severity::Major => "major",
        Severity::Minor => "minor",
        Severity::Maintenance => "maintenance",
    }
}

fn status_label(status: IncidentStatus) -> &'static str {
    match status {
        IncidentStatus::Investigating => "Investigating",
        IncidentStatus::Identified => "Identified",
        IncidentStatus::Monitoring => "Monitoring",
        IncidentStatus::Resolved => "Resolved",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::site::content::build::{code, section, tabs};
    use crate::site::Route;
    use crate::theme::{Theme, ThemeHandle};

    fn context() -> WidgetContext {
        WidgetContext::new(
            ThemeHandle::fixed(Theme::Dark),
            Arc::new(MemoryClipboard::new()),
        )
    }

    fn render(blocks: Vec<Block>) -> String {
        let ctx = context();
        let routes = RouteTable::new("/docs");
        let page = Page {
            route: Route::Home,
            title: "T".into(),
            lead: "L".into(),
            sections: vec![section("S", blocks)],
        };
        PageWriter::new(&ctx, &routes, Utc::now()).page(&page).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("SDKs & Libraries"), "sdks-libraries");
        assert_eq!(slug("  Step 1: Install "), "step-1-install");
    }

    #[test]
    fn test_only_active_panel_is_live() {
        let html = render(vec![tabs(&[
            ("bash", "cURL", "curl -X GET https://x"),
            ("javascript", "JS", "fetch('https://x')"),
        ])]);

        assert_eq!(html.matches("<div class=\"code-area\">").count(), 1);
        assert_eq!(html.matches("<template data-tab=\"1\">").count(), 1);
        assert!(!html.contains("<template data-tab=\"0\">"));

        let live = &html[..html.find("<template").unwrap()];
        assert!(live.contains("data-grammar=\"bash\""));
        assert!(live.contains("class=\"active\" aria-selected=\"true\">cURL"));
    }

    #[test]
    fn test_button_placement() {
        let html = render(vec![code("json", Some("Response Format"), "{}")]);
        assert!(html.contains("<span class=\"code-title\">Response Format</span>"));
        assert!(html.contains("copy-button header"));
        assert!(!html.contains("tab-strip"));

        let html = render(vec![code("json", None, "{}")]);
        assert!(html.contains("copy-button overlay"));
        assert!(!html.contains("code-header"));
    }

    #[test]
    fn test_code_is_escaped_and_classified() {
        let html = render(vec![code("xml", None, "<dependency>a & b</dependency>")]);
        assert!(html.contains("&lt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("class=\"tok-tag\""));
        assert!(!html.contains("<dependency>"));
    }

    #[test]
    fn test_unknown_language_renders_plain() {
        let html = render(vec![code("gradle", None, "implementation 'x'")]);
        assert!(html.contains("data-grammar=\"plain\""));
        assert!(html.contains("implementation &#39;x&#39;"));
    }

    #[test]
    fn test_revert_delay_is_exposed() {
        let html = render(vec![code("bash", None, "ls")]);
        assert!(html.contains("data-revert-ms=\"2000\""));
        assert!(html.contains("<span class=\"label\">Copy</span>"));
    }

    #[test]
    fn test_link_cards_use_base_path() {
        let html = render(vec![crate::site::content::build::link_cards(&[(
            "Status",
            "Live status",
            Route::Status,
        )])]);
        assert!(html.contains("<a href=\"/docs/status\">Status</a>"));
    }
}
