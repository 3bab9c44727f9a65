use anyhow::Result;
use async_trait::async_trait;
use hosting_core::model::{Finding, Issue};

use crate::github::SourceHost;

use super::Verifier;

/// Placeholder for Gradle-built plugins.
///
/// TODO: inspect build.gradle once Gradle-based hosting is supported.
pub struct GradleVerifier;

#[async_trait]
impl Verifier for GradleVerifier {
    fn name(&self) -> &'static str {
        "gradle"
    }

    async fn verify(&self, _issue: &Issue, _host: &dyn SourceHost) -> Result<Vec<Finding>> {
        Ok(Vec::new())
    }
}
