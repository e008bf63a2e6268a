//! Connectivity state management.
//!
//! This module provides [`ConnectivityState`], a domain object that
//! encapsulates the network/backend status shown by the shell banner.
//! Probe results are produced by the health client; this object only
//! records them and answers rendering questions.

use chrono::{DateTime, Utc};

/// Classified backend availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// No probe has completed yet
    #[default]
    Unknown,
    /// Backend reachable, all dependent services up
    Connected,
    /// Backend reachable but a dependent service (database) is down
    Limited,
    /// Backend unreachable or responding with garbage
    Offline,
}

/// Severity of the connectivity banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerSeverity {
    Error,
    Warning,
    Info,
}

/// A banner notice to render above the content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: BannerSeverity,
    pub message: &'static str,
    pub description: &'static str,
}

/// Result of one health probe, as classified by the health client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Whether the backend was reachable at the transport level
    pub is_online: bool,
    /// Classified service status
    pub status: BackendStatus,
}

/// Connectivity state owned by the shell.
///
/// Invariant: `backend_status` is never `Connected` while `is_online` is
/// false; [`apply_probe`](Self::apply_probe) and
/// [`set_offline`](Self::set_offline) both enforce it.
#[derive(Debug, Clone, Default)]
pub struct ConnectivityState {
    /// Transport-level reachability from the last probe
    pub is_online: bool,
    /// Classified backend status from the last probe
    pub backend_status: BackendStatus,
    /// When the last probe resolved
    pub last_checked: Option<DateTime<Utc>>,
    /// User dismissed the current banner
    dismissed: bool,
}

impl ConnectivityState {
    /// Create the pre-probe state: offline/unknown, banner not dismissed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a probe result. A newer probe always supersedes the previous
    /// state; dismissal is cleared when the classified status changes.
    pub fn apply_probe(&mut self, outcome: ProbeOutcome, checked_at: DateTime<Utc>) {
        let status = if !outcome.is_online && outcome.status == BackendStatus::Connected {
            // A probe can never report a connected service over a dead link
            BackendStatus::Offline
        } else {
            outcome.status
        };

        if status != self.backend_status {
            self.dismissed = false;
        }
        self.is_online = outcome.is_online;
        self.backend_status = status;
        self.last_checked = Some(checked_at);
    }

    /// Immediately mark the network as down without waiting for a probe.
    pub fn set_offline(&mut self) {
        if self.backend_status != BackendStatus::Offline {
            self.dismissed = false;
        }
        self.is_online = false;
        self.backend_status = BackendStatus::Offline;
    }

    /// Check if the backend is fully healthy.
    pub fn is_healthy(&self) -> bool {
        self.is_online && self.backend_status == BackendStatus::Connected
    }

    /// Dismiss the current banner until the status changes again.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// The banner to render, if any.
    ///
    /// Suppressed when fully healthy or dismissed; otherwise severity
    /// follows the status: offline is an error, limited service a warning,
    /// and the pre-probe state an informational notice.
    pub fn banner(&self) -> Option<Banner> {
        if self.is_healthy() || self.dismissed {
            return None;
        }
        let banner = match self.backend_status {
            BackendStatus::Connected => {
                // Unreachable: is_healthy() covered Connected+online, and
                // apply_probe never stores Connected while offline
                return None;
            }
            BackendStatus::Offline => Banner {
                severity: BannerSeverity::Error,
                message: "Backend server is offline",
                description: "Working in offline mode. Progress saving and accounts are disabled.",
            },
            BackendStatus::Limited => Banner {
                severity: BannerSeverity::Warning,
                message: "Database unavailable - limited functionality",
                description: "Lessons and practice still work, but progress won't be saved.",
            },
            BackendStatus::Unknown => Banner {
                severity: BannerSeverity::Info,
                message: "Checking system status...",
                description: "Verifying backend services.",
            },
        };
        Some(banner)
    }
}
