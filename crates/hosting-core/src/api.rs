//! Wire types for the daemon's HTTP surface.

use serde::{Deserialize, Serialize};

/// Inbound issue-tracker webhook body, reduced to the fields we act on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Event name as sent by the tracker, e.g. `jira:issue_updated`.
    #[serde(rename = "webhookEvent")]
    pub webhook_event: Option<String>,
    /// The issue the event concerns.
    pub issue: Option<IssueStub>,
}

/// The webhook's embedded issue reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueStub {
    /// Issue key, e.g. `HOSTING-1234`.
    pub key: String,
}

impl WebhookPayload {
    /// True for the create/update events that should trigger a check run.
    ///
    /// The tracker prefixes event names with `jira:`; both forms are accepted.
    pub fn is_check_event(&self) -> bool {
        match self.webhook_event.as_deref() {
            Some(event) => {
                let event = event.strip_prefix("jira:").unwrap_or(event);
                event == "issue_created" || event == "issue_updated"
            }
            None => false,
        }
    }
}

/// Operator-triggered check request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Issue key to check.
    pub issue_key: String,
}

/// Rendered outcome of an operator-triggered check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    /// Issue key that was checked.
    pub issue_key: String,
    /// Number of distinct findings.
    pub findings: usize,
    /// The comment body that would be posted to the issue.
    pub report: String,
}
