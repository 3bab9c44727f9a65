#![forbid(unsafe_code)]

//! Hosting-request checker daemon: webhook endpoint, API clients, and the
//! verification routines that turn an issue into a report comment.

pub mod checks;
pub mod config;
pub mod github;
pub mod http;
pub mod jira;
pub mod service;
