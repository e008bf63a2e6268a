//! Backend health probing.
//!
//! This module implements the bounded health probe against the SQL-Flow
//! backend (`GET {base}/api/health`) and its classification into the
//! connectivity states the shell banner renders. A probe never returns an
//! error to the caller: every failure mode collapses into a classified
//! [`ProbeOutcome`], with the detail kept for logs and the `--health` CLI.

use serde::Deserialize;
use std::time::Duration;

use crate::domain::{BackendStatus, ProbeOutcome};
use crate::traits::{Headers, HttpClient, HttpError};

/// Per-service status strings as reported by the backend.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ServiceStatuses {
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub mongodb: String,
    #[serde(default)]
    pub lessons: String,
    #[serde(default, rename = "sqlExecution")]
    pub sql_execution: String,
}

/// Wire shape of the health endpoint response.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub services: ServiceStatuses,
}

impl HealthReport {
    /// Classify a successfully parsed report.
    ///
    /// Connected requires both the overall status flag and the database
    /// sub-field; anything else from a reachable backend is limited
    /// service.
    pub fn classify(&self) -> BackendStatus {
        if self.status == "OK" && self.services.mongodb == "connected" {
            BackendStatus::Connected
        } else {
            BackendStatus::Limited
        }
    }
}

/// Why a probe failed to produce a parsed report.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("health request failed: {0}")]
    Http(#[from] HttpError),
    #[error("health request timed out")]
    Elapsed,
    #[error("health endpoint returned status {0}")]
    BadStatus(u16),
    #[error("health response body malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Everything one probe produced, for the shell and the CLI.
#[derive(Debug)]
pub struct ProbeResult {
    /// Classified outcome applied to the connectivity state
    pub outcome: ProbeOutcome,
    /// Parsed report when the backend produced one
    pub report: Option<HealthReport>,
    /// Round-trip time of the probe
    pub latency_ms: u64,
    /// Failure detail when no report was parsed
    pub error: Option<String>,
}

/// Health probe client for the SQL-Flow backend.
pub struct HealthClient<C: HttpClient> {
    base_url: String,
    client: C,
    timeout: Duration,
}

impl<C: HttpClient> HealthClient<C> {
    /// Create a client probing `{base_url}/api/health`.
    pub fn new(base_url: impl Into<String>, client: C, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client,
            timeout,
        }
    }

    /// The probed endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/api/health", self.base_url.trim_end_matches('/'))
    }

    /// Run one bounded probe and classify the result.
    ///
    /// Classification:
    /// - transport error or timeout: offline, backend unreachable
    /// - reachable but non-2xx or malformed body: offline (fail-closed),
    ///   backend reachable
    /// - parsed report: connected or limited per [`HealthReport::classify`]
    pub async fn probe(&self) -> ProbeResult {
        let started = std::time::Instant::now();
        let fetched = self.fetch().await;
        let latency_ms = started.elapsed().as_millis() as u64;

        match fetched {
            Ok(report) => ProbeResult {
                outcome: ProbeOutcome {
                    is_online: true,
                    status: report.classify(),
                },
                report: Some(report),
                latency_ms,
                error: None,
            },
            Err(e) => {
                let is_online = match &e {
                    ProbeError::Http(_) | ProbeError::Elapsed => false,
                    ProbeError::BadStatus(_) | ProbeError::Malformed(_) => true,
                };
                tracing::debug!("health probe failed: {e}");
                ProbeResult {
                    outcome: ProbeOutcome {
                        is_online,
                        status: BackendStatus::Offline,
                    },
                    report: None,
                    latency_ms,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn fetch(&self) -> Result<HealthReport, ProbeError> {
        let url = self.endpoint();
        let response = tokio::time::timeout(self.timeout, self.client.get(&url, &Headers::new()))
            .await
            .map_err(|_| ProbeError::Elapsed)??;

        if !response.is_success() {
            return Err(ProbeError::BadStatus(response.status));
        }

        Ok(response.json::<HealthReport>()?)
    }
}

/// Print a probe result to the console for the `--health` command.
pub fn display_probe_result(result: &ProbeResult) {
    println!();
    match &result.report {
        Some(report) => {
            println!("✓ Backend responding ({}ms)", result.latency_ms);
            println!("  server:        {}", report.services.server);
            println!("  mongodb:       {}", report.services.mongodb);
            println!("  lessons:       {}", report.services.lessons);
            println!("  sqlExecution:  {}", report.services.sql_execution);
            if result.outcome.status == BackendStatus::Connected {
                println!("\n✓ All systems ready!\n");
            } else {
                println!("\n⚠ Limited service: database unavailable.\n");
            }
        }
        None => {
            println!("✗ Backend not responding");
            if let Some(error) = &result.error {
                println!("  {}", error);
            }
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: &str, mongodb: &str) -> HealthReport {
        HealthReport {
            status: status.to_string(),
            timestamp: None,
            services: ServiceStatuses {
                server: "running".to_string(),
                mongodb: mongodb.to_string(),
                lessons: "available".to_string(),
                sql_execution: "available".to_string(),
            },
        }
    }

    #[test]
    fn test_classify_connected() {
        assert_eq!(report("OK", "connected").classify(), BackendStatus::Connected);
    }

    #[test]
    fn test_classify_limited_when_database_down() {
        assert_eq!(
            report("OK", "disconnected").classify(),
            BackendStatus::Limited
        );
    }

    #[test]
    fn test_classify_limited_when_status_not_ok() {
        assert_eq!(
            report("DEGRADED", "connected").classify(),
            BackendStatus::Limited
        );
    }

    #[test]
    fn test_report_deserializes_backend_shape() {
        let raw = r#"{
            "status": "OK",
            "timestamp": "2026-01-01T00:00:00.000Z",
            "services": {
                "server": "running",
                "mongodb": "connected",
                "lessons": "available",
                "sqlExecution": "available"
            }
        }"#;
        let parsed: HealthReport = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.status, "OK");
        assert_eq!(parsed.services.sql_execution, "available");
        assert_eq!(parsed.classify(), BackendStatus::Connected);
    }

    #[test]
    fn test_report_tolerates_missing_fields() {
        let parsed: HealthReport = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.status, "");
        assert_eq!(parsed.classify(), BackendStatus::Limited);
    }

    #[test]
    fn test_endpoint_normalizes_trailing_slash() {
        use crate::adapters::ReqwestHttpClient;
        let client = HealthClient::new(
            "http://localhost:5000/",
            ReqwestHttpClient::new(),
            Duration::from_secs(3),
        );
        assert_eq!(client.endpoint(), "http://localhost:5000/api/health");
    }
}
