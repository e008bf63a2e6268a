//! AppMessage enum for async communication within the application.

use chrono::{DateTime, Utc};

use crate::domain::ProbeOutcome;
use crate::health::HealthReport;

/// Messages received from async operations (health probes).
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A health probe resolved
    HealthChecked {
        outcome: ProbeOutcome,
        report: Option<HealthReport>,
        checked_at: DateTime<Utc>,
    },
}
