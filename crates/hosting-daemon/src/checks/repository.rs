use anyhow::Result;
use async_trait::async_trait;
use hosting_core::model::{Finding, Issue, FIELD_COMMITTERS, FIELD_REPOSITORY_URL};
use hosting_core::parse_repository_url;

use crate::github::SourceHost;

use super::{messages, Verifier};

/// Organization hosted plugins migrate into; forks of it cannot be hosted.
const UPSTREAM_ORG_PREFIX: &str = "jenkinsci/";

/// Checks the referenced repository and the committer usernames.
pub struct RepositoryVerifier;

#[async_trait]
impl Verifier for RepositoryVerifier {
    fn name(&self) -> &'static str {
        "repository"
    }

    async fn verify(&self, issue: &Issue, host: &dyn SourceHost) -> Result<Vec<Finding>> {
        let mut findings = Vec::new();

        findings.extend(check_committers(issue.field(FIELD_COMMITTERS), host).await);

        let Some((owner, mut repo)) = parse_repository_url(issue.field(FIELD_REPOSITORY_URL))
        else {
            return Ok(findings);
        };

        if let Some(stripped) = repo.strip_suffix(".git") {
            findings.push(messages::git_suffix_in_url());
            repo = stripped.to_string();
        }

        // Missing and unreachable both read as "not a hostable repository";
        // without a repository the remaining probes are meaningless.
        match host.get_repository(&owner, &repo).await {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => {
                findings.push(messages::invalid_repository(&owner, &repo));
                return Ok(findings);
            }
        }

        if !host.has_readme(&owner, &repo).await? {
            findings.push(messages::missing_readme());
        }

        // A failed parent probe is not actionable for the requester.
        if let Ok(Some(parent)) = host.fork_parent(&owner, &repo).await {
            if parent.starts_with(UPSTREAM_ORG_PREFIX) {
                findings.push(messages::fork_of_upstream(&parent));
            }
        }

        Ok(findings)
    }
}

/// Classifies each delimited committer name: valid user, organization, or
/// unknown. The latter two are aggregated into one finding per category.
async fn check_committers(raw: &str, host: &dyn SourceHost) -> Vec<Finding> {
    let mut organizations = Vec::new();
    let mut invalid = Vec::new();

    for name in raw
        .split(['\n', ';', ','])
        .map(str::trim)
        .filter(|n| !n.is_empty())
    {
        // A failed lookup reads as "not found" and falls through to the
        // organization lookup, then to the invalid bucket.
        if host.get_user(name).await.ok().flatten().is_some() {
            continue;
        }
        if host.get_organization(name).await.ok().flatten().is_some() {
            organizations.push(name.to_string());
        } else {
            invalid.push(name.to_string());
        }
    }

    let mut findings = Vec::new();
    if !organizations.is_empty() {
        findings.push(messages::committers_are_organizations(&organizations));
    }
    if !invalid.is_empty() {
        findings.push(messages::committers_not_found(&invalid));
    }
    findings
}
