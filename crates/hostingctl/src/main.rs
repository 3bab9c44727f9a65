#![forbid(unsafe_code)]

//! Operator CLI for the hosting checker daemon.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hosting_core::api::{CheckRequest, CheckResponse};

#[derive(Parser, Debug)]
#[command(name = "hostingctl", version, about = "Operator CLI for the hosting checker daemon")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run the checks for an issue and print the report without commenting.
    Check {
        /// Daemon base URL.
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        daemon: String,
        /// Issue key, e.g. HOSTING-1234.
        #[arg(long)]
        issue_key: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = reqwest::Client::new();

    match args.cmd {
        Cmd::Check { daemon, issue_key } => {
            let url = format!("{}/v1/check", daemon.trim_end_matches('/'));
            let resp: CheckResponse = client
                .post(url)
                .json(&CheckRequest { issue_key })
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            println!("{} finding(s) for {}", resp.findings, resp.issue_key);
            println!();
            println!("{}", resp.report);
        }
    }

    Ok(())
}
