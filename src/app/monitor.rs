//! Background connectivity monitoring.
//!
//! One long-lived task probes the backend on a fixed interval; manual
//! refreshes spawn a one-shot probe. Results arrive on the app message
//! channel, so a newer probe always supersedes an older one when applied.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::adapters::ReqwestHttpClient;
use crate::health::HealthClient;

use super::{App, AppMessage};

/// Spawn the periodic health monitor.
///
/// The task exits when the receiving side of the channel is dropped.
pub fn spawn_health_monitor(
    health: Arc<HealthClient<ReqwestHttpClient>>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    poll_interval: Duration,
) {
    tokio::spawn(async move {
        loop {
            let result = health.probe().await;
            let message = AppMessage::HealthChecked {
                outcome: result.outcome,
                report: result.report,
                checked_at: chrono::Utc::now(),
            };
            if message_tx.send(message).is_err() {
                break;
            }
            tokio::time::sleep(poll_interval).await;
        }
    });
}

impl App {
    /// Run one immediate probe in the background (manual refresh).
    pub fn refresh_health(&mut self) {
        let health = Arc::clone(&self.health);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = health.probe().await;
            let _ = message_tx.send(AppMessage::HealthChecked {
                outcome: result.outcome,
                report: result.report,
                checked_at: chrono::Utc::now(),
            });
        });
        self.mark_dirty();
    }
}
