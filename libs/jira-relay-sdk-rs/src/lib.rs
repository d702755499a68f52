//! Rust client for the Jira dashboard.
//!
//! This SDK is the client half of the dashboard: it signs a user in through
//! the credential relay and then reads their projects directly from Jira.
//!
//! # Features
//!
//! - **Sign-in** - Verify credentials through `POST /jira-authenticate`
//! - **Session** - In-memory record of the verified user and its auth header
//! - **Projects** - List projects and turn them into grid cards
//!
//! # Example
//!
//! ```rust,ignore
//! use jira_relay_sdk::{DashboardClient, DashboardConfig};
//!
//! let client = DashboardClient::new(DashboardConfig {
//!     relay_url: "http://localhost:3001".to_string(),
//!     jira_scheme: None,
//! })?;
//!
//! let session = client
//!     .authenticate("you@example.com", "your-domain.atlassian.net", "api-token")
//!     .await?;
//! for card in client.project_cards(&session).await? {
//!     println!("{} [{}] lead: {}", card.title, card.key, card.lead);
//! }
//! session.logout();
//! ```

#[cfg(feature = "client")]
mod client;
mod error;
mod projects;
mod session;

#[cfg(feature = "client")]
pub use client::{DashboardClient, DashboardConfig};
pub use error::DashboardError;
pub use projects::{
    Project, ProjectCard, ProjectInsight, ProjectLead, ProjectSearchPage, ProjectStatus,
};
pub use session::Session;

// Re-export shared helpers for convenience
pub use jira_relay_types::normalize_domain;
