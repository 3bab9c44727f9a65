//! Issue-tracker (JIRA) REST client.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use hosting_core::model::Issue;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::CheckerConfig;

/// Operations the checker needs from the issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches an issue with custom-field ids resolved to display names.
    async fn fetch_issue(&self, key: &str) -> Result<Issue>;

    /// Appends a comment to an issue.
    async fn add_comment(&self, key: &str, body: &str) -> Result<()>;
}

/// JIRA REST v2 implementation with basic auth.
pub struct JiraClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl JiraClient {
    /// Builds a client from the daemon configuration.
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("build jira client")?;
        Ok(Self {
            client,
            base_url: config.jira_url.trim_end_matches('/').to_string(),
            username: config.jira_username.clone(),
            password: config.jira_password.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    key: String,
    /// Field id (e.g. `customfield_3001`) to raw value.
    #[serde(default)]
    fields: BTreeMap<String, Value>,
    /// Field id to display name, from the `names` expansion.
    #[serde(default)]
    names: BTreeMap<String, String>,
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn fetch_issue(&self, key: &str) -> Result<Issue> {
        let url = format!("{}/rest/api/2/issue/{}?expand=names", self.base_url, key);
        let raw: RawIssue = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .context("issue request")?
            .error_for_status()
            .context("issue status")?
            .json()
            .await
            .context("issue decode")?;

        let mut fields = BTreeMap::new();
        for (id, value) in raw.fields {
            let name = raw.names.get(&id).cloned().unwrap_or(id);
            if let Some(text) = field_text(&value) {
                fields.insert(name, text);
            }
        }
        Ok(Issue {
            key: raw.key,
            fields,
        })
    }

    async fn add_comment(&self, key: &str, body: &str) -> Result<()> {
        let url = format!("{}/rest/api/2/issue/{}/comment", self.base_url, key);
        self.client
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await
            .context("comment request")?
            .error_for_status()
            .context("comment status")?;
        Ok(())
    }
}

/// String rendition of a field value; structured values are dropped.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
