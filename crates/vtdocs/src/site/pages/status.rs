use crate::site::content::build::{para, section, table};
use crate::site::content::Block;
use crate::site::status::{
    timestamp, Incident, IncidentStatus, IncidentUpdate, Service, ServiceState, Severity,
};
use crate::site::{Page, Route};

fn services() -> Vec<Service> {
    vec![
        Service::new(
            "Vehicle Data API",
            ServiceState::Operational,
            99.98,
            145,
            "Core vehicle information and status endpoints",
        ),
        Service::new(
            "Location Services",
            ServiceState::Operational,
            99.95,
            89,
            "Real-time vehicle location and tracking",
        ),
        Service::new(
            "Vehicle Control",
            ServiceState::Operational,
            99.92,
            234,
            "Remote vehicle control functions",
        ),
        Service::new(
            "Authentication",
            ServiceState::Operational,
            99.99,
            67,
            "OAuth 2.0 authentication and token management",
        ),
        Service::new(
            "Webhooks",
            ServiceState::Degraded,
            98.45,
            456,
            "Real-time event notifications",
        ),
        Service::new(
            "Developer Portal",
            ServiceState::Operational,
            99.87,
            123,
            "Documentation and developer resources",
        ),
    ]
}

fn update(at: &str, message: &str) -> IncidentUpdate {
    IncidentUpdate {
        at: timestamp(at),
        message: message.to_string(),
    }
}

fn resolved(title: &str, severity: Severity, start: &str, end: &str, description: &str) -> Block {
    Block::Incident(Incident {
        title: title.to_string(),
        severity,
        status: IncidentStatus::Resolved,
        started: timestamp(start),
        ended: Some(timestamp(end)),
        description: description.to_string(),
        updates: Vec::new(),
    })
}

pub fn page() -> Page {
    let current = Incident {
        title: "Webhook Delivery Delays".into(),
        severity: Severity::Minor,
        status: IncidentStatus::Identified,
        started: timestamp("2023-12-07T14:30:00Z"),
        ended: None,
        description: "We are investigating reports of delayed webhook deliveries. Vehicle data \
                      and control functions are not affected."
            .into(),
        updates: vec![
            update(
                "2023-12-07T15:15:00Z",
                "We have identified the root cause and are implementing a fix. Webhook \
                 deliveries are gradually returning to normal.",
            ),
            update(
                "2023-12-07T14:45:00Z",
                "We are continuing to investigate the webhook delivery delays. Average delay \
                 is currently 2-3 minutes.",
            ),
            update(
                "2023-12-07T14:30:00Z",
                "We are investigating reports of webhook delivery delays affecting some customers.",
            ),
        ],
    };

    Page {
        route: Route::Status,
        title: "API Status".into(),
        lead: "Real-time status and performance metrics for the Velora Connected Vehicles API. \
               Monitor service availability, response times, and any ongoing incidents."
            .into(),
        sections: vec![
            section("Current Incidents", vec![Block::Incident(current)]),
            section(
                "Service Status",
                vec![Block::Services {
                    services: services(),
                }],
            ),
            section(
                "Performance Metrics",
                vec![table(
                    &["Metric", "Value", "Change", "Period"],
                    &[
                        &["API Uptime", "99.95%", "+0.02%", "Last 30 days"],
                        &["Average Response Time", "156ms", "-12ms", "Last 24 hours"],
                        &["Successful Requests", "99.87%", "+0.05%", "Last 7 days"],
                        &["Webhook Success Rate", "98.92%", "-1.23%", "Last 24 hours"],
                    ],
                )],
            ),
            section(
                "Past Incidents",
                vec![
                    resolved(
                        "Scheduled Maintenance - Authentication Service",
                        Severity::Maintenance,
                        "2023-12-05T02:00:00Z",
                        "2023-12-05T04:00:00Z",
                        "Scheduled maintenance window for authentication service upgrades.",
                    ),
                    resolved(
                        "Elevated Error Rates - Vehicle Control API",
                        Severity::Major,
                        "2023-12-03T09:15:00Z",
                        "2023-12-03T11:30:00Z",
                        "Elevated error rates affecting vehicle control operations. Resolved by \
                         rolling back a recent deployment.",
                    ),
                    resolved(
                        "Partial Outage - Location Services",
                        Severity::Major,
                        "2023-11-28T16:20:00Z",
                        "2023-11-28T18:45:00Z",
                        "Partial outage affecting location services in the EU region. Service \
                         was restored after infrastructure repairs.",
                    ),
                ],
            ),
            section(
                "Stay Updated",
                vec![para(
                    "Subscribe to status notifications to be alerted about incidents and \
                     scheduled maintenance.",
                )],
            ),
        ],
    }
}
