//! In-memory fakes for the external collaborators.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use hosting_core::model::Issue;
use hosting_daemon::github::{Account, Repository, SourceHost};
use hosting_daemon::jira::IssueTracker;

/// Builds an issue from `(field name, value)` pairs.
pub fn issue(fields: &[(&str, &str)]) -> Issue {
    Issue {
        key: "HOSTING-1".to_string(),
        fields: fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// Source host backed by hash maps.
#[derive(Default)]
pub struct FakeHost {
    pub users: HashSet<String>,
    pub orgs: HashSet<String>,
    /// Repositories by `owner/name`.
    pub repos: HashSet<String>,
    /// Repositories that publish a README.
    pub readmes: HashSet<String>,
    /// Fork parent by `owner/name`.
    pub parents: HashMap<String, String>,
    /// File contents by (`owner/name`, path).
    pub files: HashMap<(String, String), String>,
    /// When set, the fork-parent probe fails instead of answering.
    pub fail_parent_probe: bool,
}

impl FakeHost {
    /// A host with one repository (with README) and one valid user.
    pub fn with_repo(owner: &str, name: &str) -> Self {
        let mut host = Self::default();
        host.users.insert("alice".to_string());
        host.add_repo(owner, name);
        host
    }

    pub fn add_repo(&mut self, owner: &str, name: &str) {
        let full = format!("{owner}/{name}");
        self.repos.insert(full.clone());
        self.readmes.insert(full);
    }

    pub fn add_file(&mut self, owner: &str, name: &str, path: &str, content: &str) {
        self.files
            .insert((format!("{owner}/{name}"), path.to_string()), content.to_string());
    }
}

#[async_trait]
impl SourceHost for FakeHost {
    async fn get_user(&self, login: &str) -> Result<Option<Account>> {
        Ok(self.users.contains(login).then(|| Account {
            login: login.to_string(),
        }))
    }

    async fn get_organization(&self, login: &str) -> Result<Option<Account>> {
        Ok(self.orgs.contains(login).then(|| Account {
            login: login.to_string(),
        }))
    }

    async fn get_repository(&self, owner: &str, name: &str) -> Result<Option<Repository>> {
        let full = format!("{owner}/{name}");
        Ok(self.repos.contains(&full).then(|| Repository { full_name: full }))
    }

    async fn fork_parent(&self, owner: &str, name: &str) -> Result<Option<String>> {
        if self.fail_parent_probe {
            bail!("parent probe failed");
        }
        Ok(self.parents.get(&format!("{owner}/{name}")).cloned())
    }

    async fn has_readme(&self, owner: &str, name: &str) -> Result<bool> {
        Ok(self.readmes.contains(&format!("{owner}/{name}")))
    }

    async fn file_content(&self, owner: &str, name: &str, path: &str) -> Result<Option<String>> {
        Ok(self
            .files
            .get(&(format!("{owner}/{name}"), path.to_string()))
            .cloned())
    }
}

/// Issue tracker that serves one fixed issue and records comments.
pub struct FakeTracker {
    pub issue: Issue,
    pub comments: Mutex<Vec<String>>,
    pub fail_fetch: bool,
}

impl FakeTracker {
    pub fn new(issue: Issue) -> Self {
        Self {
            issue,
            comments: Mutex::new(Vec::new()),
            fail_fetch: false,
        }
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn fetch_issue(&self, key: &str) -> Result<Issue> {
        if self.fail_fetch {
            bail!("issue {key} not retrievable");
        }
        Ok(self.issue.clone())
    }

    async fn add_comment(&self, _key: &str, body: &str) -> Result<()> {
        self.comments.lock().unwrap().push(body.to_string());
        Ok(())
    }
}
