use crate::site::changelog::{Change, ChangeKind, Release, ReleaseKind};
use crate::site::content::build::{callout, section};
use crate::site::content::{Block, Tone};
use crate::site::{Page, Route};

fn releases() -> Vec<Release> {
    vec![
        Release::new(
            "v2.1.0",
            "2023-12-07",
            ReleaseKind::Minor,
            vec![
                Change::new(
                    ChangeKind::Added,
                    "Enhanced Vehicle Diagnostics",
                    "Added diagnostic endpoints for engine health, transmission status, and \
                     predictive maintenance alerts.",
                )
                .endpoints(&[
                    "/v1/vehicles/{id}/diagnostics/engine",
                    "/v1/vehicles/{id}/diagnostics/transmission",
                ]),
                Change::new(
                    ChangeKind::Added,
                    "Batch Vehicle Operations",
                    "Batch endpoints perform operations on multiple vehicles at once.",
                )
                .endpoints(&[
                    "/v1/vehicles/batch/lock",
                    "/v1/vehicles/batch/unlock",
                    "/v1/vehicles/batch/status",
                ]),
                Change::new(
                    ChangeKind::Improved,
                    "Webhook Reliability",
                    "Improved webhook delivery reliability with enhanced retry mechanisms.",
                )
                .details(
                    "Webhooks now include delivery attempt metadata and support exponential \
                     backoff retry strategies.",
                ),
                Change::new(
                    ChangeKind::Improved,
                    "Rate Limiting Headers",
                    "Added rate limiting headers to all API responses.",
                )
                .details(
                    "New headers: X-RateLimit-Limit, X-RateLimit-Remaining, X-RateLimit-Reset, \
                     X-RateLimit-Retry-After",
                ),
            ],
        ),
        Release::new(
            "v2.0.1",
            "2023-11-28",
            ReleaseKind::Patch,
            vec![
                Change::new(
                    ChangeKind::Fixed,
                    "Location Accuracy Improvements",
                    "Fixed location accuracy in urban areas with poor GPS signal.",
                ),
                Change::new(
                    ChangeKind::Fixed,
                    "Webhook Signature Validation",
                    "Resolved signature validation issues affecting some client implementations.",
                )
                .details("HMAC signature generation is now consistent across all webhook events."),
                Change::new(
                    ChangeKind::Improved,
                    "Error Response Format",
                    "Standardized the error response format across all endpoints.",
                )
                .details("All error responses now include error_code, message, and details fields."),
            ],
        ),
        Release::new(
            "v2.0.0",
            "2023-11-15",
            ReleaseKind::Major,
            vec![
                Change::new(
                    ChangeKind::Breaking,
                    "Authentication Changes",
                    "Updated OAuth 2.0 implementation with new scopes and token format.",
                )
                .details(
                    "Existing tokens will continue to work until January 15, 2024. Update your \
                     applications to use the new authentication flow.",
                ),
                Change::new(
                    ChangeKind::Added,
                    "Electric Vehicle Support",
                    "Full support for electric and hybrid vehicles with battery management \
                     endpoints.",
                )
                .endpoints(&["/v1/vehicles/{id}/battery", "/v1/vehicles/{id}/charging"]),
                Change::new(
                    ChangeKind::Improved,
                    "Performance Optimizations",
                    "40% faster response times and reduced latency.",
                ),
                Change::new(
                    ChangeKind::Deprecated,
                    "Legacy Endpoints",
                    "Several v1 endpoints are deprecated and will be removed in v3.0.",
                )
                .details(
                    "Deprecated endpoints: /v1/vehicles/{id}/info (use /v1/vehicles/{id}), \
                     /v1/vehicles/{id}/position (use /v1/vehicles/{id}/location)",
                ),
            ],
        ),
        Release::new(
            "v1.8.1",
            "2023-10-05",
            ReleaseKind::Patch,
            vec![
                Change::new(
                    ChangeKind::Fixed,
                    "Webhook Delivery Issues",
                    "Resolved intermittent webhook delivery failures during high traffic periods.",
                ),
                Change::new(
                    ChangeKind::Fixed,
                    "Rate Limiting Edge Cases",
                    "Fixed rate limiting calculation errors for burst traffic patterns.",
                ),
            ],
        ),
        Release::new(
            "v1.8.0",
            "2023-09-18",
            ReleaseKind::Minor,
            vec![
                Change::new(
                    ChangeKind::Added,
                    "Trip History API",
                    "New endpoints to access historical trip data and analytics.",
                )
                .endpoints(&["/v1/vehicles/{id}/trips", "/v1/vehicles/{id}/trips/{trip_id}"]),
                Change::new(
                    ChangeKind::Added,
                    "Geofencing Support",
                    "Added geofencing capabilities with entry and exit notifications.",
                )
                .endpoints(&["/v1/vehicles/{id}/geofences", "/v1/geofences"]),
            ],
        ),
    ]
}

pub fn page() -> Page {
    Page {
        route: Route::Changelog,
        title: "Changelog".into(),
        lead: "Stay up to date with the latest changes, improvements, and new features in the \
               Velora Connected Vehicles API."
            .into(),
        sections: vec![
            section(
                "Releases",
                releases().into_iter().map(Block::Release).collect(),
            ),
            section(
                "Migration",
                vec![callout(
                    Tone::Warning,
                    "Upgrading to v2",
                    "v2.0.0 contains breaking authentication changes. Review the \
                     authentication guide before upgrading.",
                )],
            ),
        ],
    }
}
