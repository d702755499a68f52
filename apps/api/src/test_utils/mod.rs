//! Test utilities for integration testing.
//!
//! This module provides:
//! - A scripted in-memory `IdentityVerifier` that records its calls
//! - A builder for `AppState` wired to either that stub or the real Jira adapter

mod app_state_builder;
mod relay_mocks;

pub use app_state_builder::*;
pub use relay_mocks::*;
