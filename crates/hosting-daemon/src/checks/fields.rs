use anyhow::Result;
use async_trait::async_trait;
use hosting_core::model::{
    Finding, Issue, FIELD_COMMITTERS, FIELD_NEW_REPOSITORY_NAME, FIELD_REPOSITORY_URL,
};
use hosting_core::parse_repository_url;

use crate::github::SourceHost;

use super::{messages, Verifier};

/// Checks issue fields for presence and structural correctness.
///
/// Runs unconditionally and never talks to the source host.
pub struct FieldVerifier;

#[async_trait]
impl Verifier for FieldVerifier {
    fn name(&self) -> &'static str {
        "fields"
    }

    async fn verify(&self, issue: &Issue, _host: &dyn SourceHost) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        if issue.field(FIELD_COMMITTERS).trim().is_empty() {
            findings.push(messages::missing_committers());
        }

        let repo_url = issue.field(FIELD_REPOSITORY_URL).trim();
        if parse_repository_url(repo_url).is_none() {
            findings.push(messages::invalid_repository_url(repo_url));
        }

        findings.extend(check_repository_name(
            issue.field(FIELD_NEW_REPOSITORY_NAME),
        ));

        Ok(findings)
    }
}

fn check_repository_name(name: &str) -> Vec<Finding> {
    let name = name.trim();
    if name.is_empty() {
        return vec![messages::missing_repository_name()];
    }

    let mut findings = Vec::new();
    let lower = name.to_lowercase();
    if lower.contains("jenkins") || lower.contains("hudson") {
        findings.push(messages::repository_name_contains_jenkins());
    }
    if !name.ends_with("-plugin") {
        findings.push(messages::repository_name_missing_suffix());
    }
    if name != lower {
        findings.push(messages::repository_name_not_lowercase(name));
    }
    findings
}
