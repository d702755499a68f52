pub mod http;
pub mod jira;
