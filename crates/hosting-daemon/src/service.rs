//! End-to-end check pipeline: fetch issue, verify, comment.

use std::sync::Arc;

use anyhow::Context;
use hosting_core::model::FindingSet;
use hosting_core::report;
use thiserror::Error;
use tracing::info;

use crate::checks::{self, Verifier};
use crate::config::CheckerConfig;
use crate::github::SourceHost;
use crate::jira::IssueTracker;

/// Failure of one check run.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The issue could not be retrieved; nothing was checked.
    #[error("could not fetch issue {key}: {source}")]
    FetchIssue {
        /// Issue key that was requested.
        key: String,
        /// Underlying client error.
        source: anyhow::Error,
    },
    /// Anything that went wrong after the issue was retrieved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Orchestrates one webhook-to-comment run.
pub struct HostingChecker {
    tracker: Arc<dyn IssueTracker>,
    host: Arc<dyn SourceHost>,
    verifiers: Vec<Box<dyn Verifier>>,
    dry_run: bool,
}

impl HostingChecker {
    /// Builds the checker with the fixed verification sequence.
    pub fn new(
        tracker: Arc<dyn IssueTracker>,
        host: Arc<dyn SourceHost>,
        config: &CheckerConfig,
    ) -> Self {
        Self {
            tracker,
            host,
            verifiers: checks::default_verifiers(),
            dry_run: config.dry_run,
        }
    }

    /// Fetches the issue and runs the verification sequence.
    pub async fn check_issue(&self, key: &str) -> Result<FindingSet, CheckError> {
        let issue = self
            .tracker
            .fetch_issue(key)
            .await
            .map_err(|source| CheckError::FetchIssue {
                key: key.to_string(),
                source,
            })?;
        Ok(checks::run_all(&self.verifiers, &issue, self.host.as_ref()).await)
    }

    /// Full pipeline: check, render, post the comment (unless dry-run).
    pub async fn process_issue(&self, key: &str) -> Result<(), CheckError> {
        let findings = self.check_issue(key).await?;
        let comment = render_comment(&findings);

        if self.dry_run {
            info!(issue = key, findings = findings.len(), "dry run; comment not posted:\n{comment}");
            return Ok(());
        }

        self.tracker
            .add_comment(key, &comment)
            .await
            .context("post comment")?;
        info!(issue = key, findings = findings.len(), "comment posted");
        Ok(())
    }
}

/// The single consolidated comment body for a check run.
pub fn render_comment(findings: &FindingSet) -> String {
    if findings.is_empty() {
        return "Hello from your friendly hosting checker.\n\n\
                It looks like you have everything in order for your hosting request. \
                A human volunteer will review it shortly."
            .to_string();
    }

    let mut out = String::from(
        "Hello from your friendly hosting checker.\n\n\
         It appears you have some issues with your hosting request:\n\n",
    );
    report::append_report(findings, &mut out, 1);
    out.push_str("\nPlease fix the issues above and update this issue to re-run the checks.");
    out
}
