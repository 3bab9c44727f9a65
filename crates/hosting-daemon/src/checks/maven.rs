use anyhow::{bail, Result};
use async_trait::async_trait;
use hosting_core::model::{Finding, Issue, FIELD_NEW_REPOSITORY_NAME, FIELD_REPOSITORY_URL};
use hosting_core::parse_repository_url;
use hosting_core::pom::{version_digit, BuildDescriptor, PomError};
use tracing::{info, warn};

use crate::github::SourceHost;

use super::{messages, Verifier};

/// Group id every hosted plugin's parent descriptor must use.
const PLUGIN_PARENT_GROUP_ID: &str = "org.jenkins-ci.plugins";
/// Property that overrides the Jenkins baseline implied by the parent version.
const JENKINS_VERSION_PROPERTY: &str = "jenkins.version";
/// Descriptor file probed at the repository root.
const DESCRIPTOR_PATH: &str = "pom.xml";

/// Fetches and validates the Maven build descriptor.
pub struct MavenVerifier;

#[async_trait]
impl Verifier for MavenVerifier {
    fn name(&self) -> &'static str {
        "maven"
    }

    async fn verify(&self, issue: &Issue, host: &dyn SourceHost) -> Result<Vec<Finding>> {
        let repo_url = issue.field(FIELD_REPOSITORY_URL).trim();
        let Some((owner, repo)) = parse_repository_url(repo_url) else {
            return Ok(vec![messages::invalid_repository_url(repo_url)]);
        };

        if host.get_repository(&owner, &repo).await?.is_none() {
            bail!("repository {owner}/{repo} not found");
        }

        let Some(text) = host.file_content(&owner, &repo, DESCRIPTOR_PATH).await? else {
            return Ok(vec![messages::no_build_descriptor()]);
        };

        let descriptor = match BuildDescriptor::parse(&text) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                info!(repository = %format!("{owner}/{repo}"), error = %e, "descriptor failed to parse");
                return Ok(vec![messages::invalid_build_descriptor()]);
            }
        };

        let mut findings = Vec::new();
        findings.extend(check_artifact_id(
            &descriptor,
            issue.field(FIELD_NEW_REPOSITORY_NAME),
        ));
        findings.extend(check_display_name(&descriptor));
        // Version oddities are logged, never reported; findings pushed before
        // the failure are kept.
        if let Err(e) = check_parent_version(&descriptor, &mut findings) {
            warn!(repository = %format!("{owner}/{repo}"), error = %e, "parent version check skipped");
        }
        findings.extend(check_licenses(&descriptor));
        Ok(findings)
    }
}

/// The artifact id must be the requested repository name minus "-plugin".
/// Skipped when no repository name was requested.
fn check_artifact_id(descriptor: &BuildDescriptor, requested_name: &str) -> Vec<Finding> {
    let requested_name = requested_name.trim();
    if requested_name.is_empty() {
        return Vec::new();
    }

    let artifact_id = descriptor
        .artifact_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());
    let Some(artifact_id) = artifact_id else {
        return vec![messages::no_artifact_id()];
    };

    let expected = requested_name
        .strip_suffix("-plugin")
        .unwrap_or(requested_name);

    let mut findings = Vec::new();
    if !artifact_id.eq_ignore_ascii_case(expected) {
        findings.push(messages::artifact_id_mismatch(artifact_id, expected));
    }
    if artifact_id.to_lowercase().contains("jenkins") {
        findings.push(messages::artifact_id_contains_jenkins(artifact_id));
    }
    if artifact_id != artifact_id.to_lowercase() {
        findings.push(messages::artifact_id_not_lowercase(artifact_id));
    }
    findings
}

fn check_display_name(descriptor: &BuildDescriptor) -> Vec<Finding> {
    let Some(name) = descriptor.name.as_deref() else {
        return vec![messages::no_display_name()];
    };

    let mut findings = Vec::new();
    if name.trim().is_empty() {
        findings.push(messages::blank_display_name());
    }
    if name.to_lowercase().contains("jenkins") {
        findings.push(messages::display_name_contains_jenkins(name));
    }
    findings
}

/// Parent group id and version recommendation.
///
/// A 2.x parent may pin its Jenkins baseline via the `jenkins.version`
/// property; that override wins when deciding whether to suggest an LTS
/// baseline (build component of 0, or none at all, means a non-LTS line).
fn check_parent_version(
    descriptor: &BuildDescriptor,
    findings: &mut Vec<Finding>,
) -> Result<(), PomError> {
    let Some(parent) = &descriptor.parent else {
        return Ok(());
    };

    if parent.group_id.as_deref() != Some(PLUGIN_PARENT_GROUP_ID) {
        findings.push(messages::wrong_parent_group_id(PLUGIN_PARENT_GROUP_ID));
    }

    let Some(version) = parent.version.as_deref() else {
        return Ok(());
    };

    if version_digit(version, 0)? == 2 {
        let resolved = descriptor
            .properties
            .get(JENKINS_VERSION_PROPERTY)
            .map(String::as_str)
            .unwrap_or(version);
        if version_digit(resolved, 2)? <= 0 {
            findings.push(messages::suggest_lts_baseline(resolved));
        }
    } else {
        findings.push(messages::parent_version_too_old(version));
    }

    Ok(())
}

fn check_licenses(descriptor: &BuildDescriptor) -> Vec<Finding> {
    if descriptor.licenses.is_empty() {
        vec![messages::missing_license()]
    } else {
        Vec::new()
    }
}
