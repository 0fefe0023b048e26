use crate::site::content::build::{cards, faqs, link_cards, section, table};
use crate::site::{Page, Route};

pub fn page() -> Page {
    Page {
        route: Route::Support,
        title: "Support".into(),
        lead: "Get help with the Velora Connected Vehicles API. Find answers to common \
               questions, connect with the community, or reach the support team."
            .into(),
        sections: vec![
            section(
                "Support Channels",
                vec![cards(&[
                    (
                        "Developer Community",
                        "Ask questions, share solutions, and connect with other developers.",
                    ),
                    (
                        "Email Support",
                        "Technical support for integration questions, bug reports, and feature \
                         requests. Response within 24 hours.",
                    ),
                    (
                        "Phone Support",
                        "Direct phone support for enterprise customers and critical issues.",
                    ),
                    (
                        "Documentation",
                        "Guides and tutorials to help you integrate and troubleshoot.",
                    ),
                ])],
            ),
            section(
                "Getting Started",
                vec![faqs(&[
                    (
                        "How do I get API credentials?",
                        "Sign up for a developer account, create a new application, and you'll \
                         receive your client ID and secret immediately.",
                    ),
                    (
                        "Which vehicles are supported?",
                        "All Velora vehicles from 2020 onwards with connected services.",
                    ),
                    (
                        "Is there a sandbox environment?",
                        "Yes. Use api-sandbox.velora.dev as your base URL for testing with \
                         simulated vehicles.",
                    ),
                ])],
            ),
            section(
                "Authentication",
                vec![faqs(&[
                    (
                        "How long do access tokens last?",
                        "Access tokens are valid for 1 hour. Use refresh tokens to obtain new \
                         access tokens without re-authenticating.",
                    ),
                    (
                        "What OAuth 2.0 flows are supported?",
                        "The Client Credentials flow for server-to-server authentication and \
                         the Authorization Code flow for user-facing applications.",
                    ),
                ])],
            ),
            section(
                "Rate Limits",
                vec![faqs(&[
                    (
                        "What are the rate limits?",
                        "100 req/min for vehicle data, 60 req/min for location, 10 req/min for \
                         control commands. Check response headers for current limits.",
                    ),
                    (
                        "How do I handle rate limiting?",
                        "Implement exponential backoff when you receive 429 responses and use \
                         the Retry-After header to decide when to retry.",
                    ),
                ])],
            ),
            section(
                "Webhooks",
                vec![faqs(&[
                    (
                        "How do I verify webhook signatures?",
                        "Use HMAC-SHA256 with your webhook secret to verify the \
                         X-Velora-Signature header.",
                    ),
                    (
                        "What happens if my webhook endpoint is down?",
                        "Failed webhooks are retried up to 5 times with exponential backoff \
                         over 24 hours.",
                    ),
                ])],
            ),
            section(
                "Resources",
                vec![link_cards(&[
                    (
                        "API Reference",
                        "Complete documentation of all endpoints, parameters, and responses.",
                        Route::ApiReference,
                    ),
                    (
                        "SDKs & Libraries",
                        "Official SDKs for popular programming languages.",
                        Route::Sdks,
                    ),
                    (
                        "Best Practices",
                        "Guidelines for building robust and efficient integrations.",
                        Route::BestPractices,
                    ),
                    (
                        "Status Page",
                        "Real-time API status and incident reports.",
                        Route::Status,
                    ),
                    (
                        "Changelog",
                        "Latest updates, new features, and breaking changes.",
                        Route::Changelog,
                    ),
                ])],
            ),
            section(
                "Contact",
                vec![table(
                    &["Channel", "Address", "Hours"],
                    &[
                        &["Email", "developers@velora.dev", "24/7"],
                        &["Phone", "+1 (800) 555-0199", "Mon-Fri 9am-6pm ET"],
                    ],
                )],
            ),
        ],
    }
}
