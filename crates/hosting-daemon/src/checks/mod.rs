//! Verification routines for hosting requests.
//!
//! Each verifier is independent: it reads the issue (and the source host)
//! and returns its own findings. The runner merges them into one
//! deduplicating set; a verifier that fails contributes nothing.

mod fields;
mod gradle;
mod maven;
mod messages;
mod repository;

pub use fields::FieldVerifier;
pub use gradle::GradleVerifier;
pub use maven::MavenVerifier;
pub use repository::RepositoryVerifier;

use anyhow::Result;
use async_trait::async_trait;
use hosting_core::model::{Finding, FindingSet, Issue};
use tracing::warn;

use crate::github::SourceHost;

/// One verification routine.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Stable name for logging.
    fn name(&self) -> &'static str;

    /// Runs the checks and returns this verifier's findings.
    async fn verify(&self, issue: &Issue, host: &dyn SourceHost) -> Result<Vec<Finding>>;
}

/// The fixed verification sequence.
pub fn default_verifiers() -> Vec<Box<dyn Verifier>> {
    vec![
        Box::new(FieldVerifier),
        Box::new(RepositoryVerifier),
        Box::new(MavenVerifier),
        Box::new(GradleVerifier),
    ]
}

/// Runs every verifier in order, merging findings into one set.
pub async fn run_all(
    verifiers: &[Box<dyn Verifier>],
    issue: &Issue,
    host: &dyn SourceHost,
) -> FindingSet {
    let mut findings = FindingSet::new();
    for verifier in verifiers {
        match verifier.verify(issue, host).await {
            Ok(items) => findings.extend(items),
            Err(e) => warn!(
                verifier = verifier.name(),
                issue = %issue.key,
                error = %e,
                "verifier failed; skipping"
            ),
        }
    }
    findings
}
