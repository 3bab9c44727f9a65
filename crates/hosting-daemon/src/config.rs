use std::time::Duration;

/// Runtime configuration for the checker daemon.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Issue tracker base URL, e.g. `https://issues.jenkins.io`.
    pub jira_url: String,
    /// Issue tracker username.
    pub jira_username: String,
    /// Issue tracker password or API token.
    pub jira_password: String,
    /// Source host API token. Lookups run anonymously when unset.
    pub github_token: Option<String>,

    /// Log the report comment instead of posting it.
    pub dry_run: bool,
    /// Timeout applied to every outbound API call.
    pub request_timeout: Duration,
}
