//! Shared types and helpers for the Jira credential relay.
//!
//! This crate provides:
//! - Request/response bodies of the `/jira-authenticate` endpoint
//! - Jira REST endpoint paths used by the relay and the dashboard client
//! - Domain normalization and Basic-Auth header construction

mod auth_header;
mod domain;
mod endpoints;
mod responses;

pub use auth_header::basic_auth_header;
pub use domain::normalize_domain;
pub use endpoints::{
    IDENTITY_PATH, PROJECT_SEARCH_EXPAND, PROJECT_SEARCH_PATH, RELAY_PATH, remote_url,
};
pub use responses::{AuthenticateRequest, AuthenticateResponse, ErrorResponse};
