//! Source-host (GitHub) REST client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::config::CheckerConfig;

/// Read operations the verifiers need from the source host.
///
/// `Ok(None)` / `Ok(false)` mean "does not exist"; `Err` means the probe
/// itself failed. Verifiers decide which of the two they care about.
#[async_trait]
pub trait SourceHost: Send + Sync {
    /// Looks up a user account.
    async fn get_user(&self, login: &str) -> Result<Option<Account>>;

    /// Looks up an organization.
    async fn get_organization(&self, login: &str) -> Result<Option<Account>>;

    /// Fetches a repository; `None` when it is missing or not visible.
    async fn get_repository(&self, owner: &str, name: &str) -> Result<Option<Repository>>;

    /// Full name (`owner/name`) of the repository this one was forked from.
    async fn fork_parent(&self, owner: &str, name: &str) -> Result<Option<String>>;

    /// Whether the repository publishes a README.
    async fn has_readme(&self, owner: &str, name: &str) -> Result<bool>;

    /// Contents of a file in the repository; `None` when absent.
    async fn file_content(&self, owner: &str, name: &str, path: &str) -> Result<Option<String>>;
}

/// A user or organization account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Account login name.
    pub login: String,
}

/// The slice of repository metadata the verifiers read.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// `owner/name`.
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
struct ForkParent {
    parent: Option<Repository>,
}

/// GitHub v3 REST implementation.
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Builds a client from the daemon configuration.
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent("hosting-checker")
            .timeout(config.request_timeout)
            .build()
            .context("build github client")?;
        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
            token: config.github_token.clone(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// GET that maps 404 to `None` and decodes everything else as `T`.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let resp = self
            .get(path)
            .send()
            .await
            .with_context(|| format!("GET {path}"))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp
            .error_for_status()
            .with_context(|| format!("GET {path}"))?;
        let body = resp.json().await.with_context(|| format!("decode {path}"))?;
        Ok(Some(body))
    }
}

#[async_trait]
impl SourceHost for GithubClient {
    async fn get_user(&self, login: &str) -> Result<Option<Account>> {
        self.get_json(&format!("/users/{login}")).await
    }

    async fn get_organization(&self, login: &str) -> Result<Option<Account>> {
        self.get_json(&format!("/orgs/{login}")).await
    }

    async fn get_repository(&self, owner: &str, name: &str) -> Result<Option<Repository>> {
        self.get_json(&format!("/repos/{owner}/{name}")).await
    }

    async fn fork_parent(&self, owner: &str, name: &str) -> Result<Option<String>> {
        let repo: Option<ForkParent> = self.get_json(&format!("/repos/{owner}/{name}")).await?;
        Ok(repo.and_then(|r| r.parent.map(|p| p.full_name)))
    }

    async fn has_readme(&self, owner: &str, name: &str) -> Result<bool> {
        let resp = self
            .get(&format!("/repos/{owner}/{name}/readme"))
            .send()
            .await
            .context("readme probe")?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        resp.error_for_status().context("readme probe")?;
        Ok(true)
    }

    async fn file_content(&self, owner: &str, name: &str, path: &str) -> Result<Option<String>> {
        let resp = self
            .get(&format!("/repos/{owner}/{name}/contents/{path}"))
            .header(reqwest::header::ACCEPT, "application/vnd.github.raw")
            .send()
            .await
            .with_context(|| format!("fetch {path}"))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp
            .error_for_status()
            .with_context(|| format!("fetch {path}"))?;
        Ok(Some(resp.text().await?))
    }
}
