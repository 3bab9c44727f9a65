#![forbid(unsafe_code)]

//! Hosting checker daemon: validates plugin-hosting requests arriving as
//! issue-tracker webhooks and posts the findings back as a comment.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use hosting_daemon::config::CheckerConfig;
use hosting_daemon::github::GithubClient;
use hosting_daemon::http;
use hosting_daemon::jira::JiraClient;
use hosting_daemon::service::HostingChecker;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "hosting-daemon", version, about = "Plugin hosting request checker")]
struct Args {
    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,

    /// Issue tracker base URL.
    #[arg(long, env = "JIRA_URL")]
    jira_url: String,

    /// Issue tracker username.
    #[arg(long, env = "JIRA_USERNAME")]
    jira_username: String,

    /// Issue tracker password or API token.
    #[arg(long, env = "JIRA_PASSWORD", hide_env_values = true)]
    jira_password: String,

    /// Source host API token. Lookups run anonymously when omitted.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: Option<String>,

    /// Log the report comment instead of posting it.
    #[arg(long, env = "HOSTING_DRY_RUN")]
    dry_run: bool,

    /// Timeout for outbound API calls, in seconds.
    #[arg(long, default_value_t = 30)]
    request_timeout_secs: u64,

    /// Log level (env-filter syntax). Defaults to debug in dry-run mode.
    #[arg(long)]
    log: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = args
        .log
        .clone()
        .unwrap_or_else(|| if args.dry_run { "debug" } else { "info" }.to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CheckerConfig {
        jira_url: args.jira_url,
        jira_username: args.jira_username,
        jira_password: args.jira_password,
        github_token: args.github_token,
        dry_run: args.dry_run,
        request_timeout: Duration::from_secs(args.request_timeout_secs),
    };

    if config.dry_run {
        tracing::info!("dry-run mode: report comments will be logged, not posted");
    }

    let tracker = Arc::new(JiraClient::new(&config)?);
    let host = Arc::new(GithubClient::new(&config)?);
    let checker = Arc::new(HostingChecker::new(tracker, host, &config));

    let app = http::router(checker);

    tracing::info!(listen = %args.listen, "daemon starting");
    axum::serve(tokio::net::TcpListener::bind(args.listen).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown requested");
}
