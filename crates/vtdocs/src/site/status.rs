//! Service health and incident history.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Health of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    /// Working normally.
    Operational,
    /// Slow or partially failing.
    Degraded,
    /// Unavailable.
    Outage,
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Operational => "Operational",
            Self::Degraded => "Degraded Performance",
            Self::Outage => "Outage",
        })
    }
}

/// A monitored service.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    /// Service name.
    pub name: String,
    /// Current health.
    pub state: ServiceState,
    /// Uptime over the last 30 days, in percent.
    pub uptime: f64,
    /// Median response time.
    pub response_ms: u32,
    /// What the service covers.
    pub description: String,
}

impl Service {
    /// Create a service entry.
    #[must_use]
    pub fn new(
        name: &str,
        state: ServiceState,
        uptime: f64,
        response_ms: u32,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            state,
            uptime,
            response_ms,
            description: description.to_string(),
        }
    }
}

/// The worst state among `services`; operational when there are none.
#[must_use]
pub fn overall_state(services: &[Service]) -> ServiceState {
    services
        .iter()
        .map(|s| s.state)
        .max()
        .unwrap_or(ServiceState::Operational)
}

/// Impact of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Widespread failure.
    Critical,
    /// Significant impact.
    Major,
    /// Limited impact.
    Minor,
    /// Planned work.
    Maintenance,
}

/// Progress of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    /// Cause unknown.
    Investigating,
    /// Cause found.
    Identified,
    /// Fix deployed, watching.
    Monitoring,
    /// Over.
    Resolved,
}

/// A timestamped incident update.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentUpdate {
    /// When the update was posted.
    pub at: DateTime<Utc>,
    /// Update text.
    pub message: String,
}

/// A service incident.
#[derive(Debug, Clone, Serialize)]
pub struct Incident {
    /// Short title.
    pub title: String,
    /// Impact.
    pub severity: Severity,
    /// Progress.
    pub status: IncidentStatus,
    /// Start time.
    pub started: DateTime<Utc>,
    /// End time; `None` while ongoing.
    pub ended: Option<DateTime<Utc>>,
    /// What happened.
    pub description: String,
    /// Updates, newest first.
    pub updates: Vec<IncidentUpdate>,
}

/// Parse an RFC 3339 timestamp from static content.
///
/// # Panics
///
/// Panics if `timestamp` is not valid RFC 3339.
#[must_use]
pub fn timestamp(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("Invalid incident timestamp")
        .with_timezone(&Utc)
}

impl Incident {
    /// Whether the incident is still open.
    #[must_use]
    pub fn is_ongoing(&self) -> bool {
        self.ended.is_none()
    }

    /// Time from start to end, or to `now` if ongoing.
    #[must_use]
    pub fn duration_at(&self, now: DateTime<Utc>) -> Duration {
        self.ended.unwrap_or(now) - self.started
    }
}

/// Format a duration as `"{h}h {m}m"`, flooring both parts.
///
/// Negative durations format as `0h 0m`.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(ended: Option<&str>) -> Incident {
        Incident {
            title: "Partial Outage".into(),
            severity: Severity::Major,
            status: IncidentStatus::Resolved,
            started: timestamp("2023-11-28T16:20:00Z"),
            ended: ended.map(timestamp),
            description: "EU region.".into(),
            updates: Vec::new(),
        }
    }

    #[test]
    fn test_resolved_duration() {
        let incident = incident(Some("2023-11-28T18:45:00Z"));
        let duration = incident.duration_at(timestamp("2030-01-01T00:00:00Z"));
        assert_eq!(format_duration(duration), "2h 25m");
        assert!(!incident.is_ongoing());
    }

    #[test]
    fn test_ongoing_duration_measured_to_now() {
        let incident = incident(None);
        let now = timestamp("2023-11-28T17:05:59Z");
        assert_eq!(format_duration(incident.duration_at(now)), "0h 45m");
        assert!(incident.is_ongoing());
    }

    #[test]
    fn test_format_duration_floors() {
        assert_eq!(format_duration(Duration::seconds(59)), "0h 0m");
        assert_eq!(format_duration(Duration::minutes(135)), "2h 15m");
        assert_eq!(format_duration(Duration::hours(26)), "26h 0m");
        assert_eq!(format_duration(Duration::minutes(-5)), "0h 0m");
    }

    #[test]
    fn test_overall_state_is_worst() {
        let services = vec![
            Service::new("API", ServiceState::Operational, 99.9, 100, "Core"),
            Service::new("Webhooks", ServiceState::Degraded, 98.4, 456, "Events"),
        ];
        assert_eq!(overall_state(&services), ServiceState::Degraded);
        assert_eq!(overall_state(&[]), ServiceState::Operational);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ServiceState::Degraded.to_string(), "Degraded Performance");
    }
}
