//! A typed client for GitHub's GraphQL API.
//!
//! ```no_run
//! use libgithub::ClientConfig;
//! use libgithub::GitHub;
//!
//! # async fn run() -> Result<(), libgithub::error::ClientError> {
//! let github = GitHub::new(&ClientConfig::from_env())?;
//!
//! let mut repository = github.fetch_repository("rust-lang", "rust", Some(&["name"])).await?;
//! let owner = repository.fetch_owner().await?;
//! println!("{} is owned by {}", repository.name()?, owner.login()?);
//! # Ok(())
//! # }
//! ```

pub use libgithub_core::*;

mod client;
mod config;
pub mod http;
pub mod interfaces;
pub mod objects;

pub use client::GitHub;
pub use config::ClientConfig;
pub use config::DEFAULT_ENDPOINT;

#[cfg(test)]
mod tests;
