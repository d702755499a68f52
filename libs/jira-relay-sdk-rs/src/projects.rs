//! Jira project search results and their dashboard view.

use std::collections::HashMap;

use serde::Deserialize;

const NOT_AVAILABLE: &str = "N/A";
const AVATAR_SIZE: &str = "48x48";

/// Project as returned by `/rest/api/3/project/search`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub project_type_key: Option<String>,
    #[serde(default)]
    pub avatar_urls: HashMap<String, String>,
    #[serde(default)]
    pub lead: Option<ProjectLead>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub insight: Option<ProjectInsight>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLead {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
}

/// Present when the search is expanded with `insight`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInsight {
    #[serde(default)]
    pub total_issue_count: Option<u64>,
    #[serde(default)]
    pub last_issue_update_time: Option<String>,
}

/// One page of project search results. Only the first page is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSearchPage {
    #[serde(default)]
    pub values: Vec<Project>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Archived => "Archived",
        }
    }
}

/// Render-ready card for the project grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub key: String,
    /// Upper-cased project type, empty when Jira didn't send one
    pub project_type: String,
    pub avatar_url: Option<String>,
    /// "{displayName} ({emailAddress})" with "N/A" for missing parts
    pub lead: String,
    pub status: ProjectStatus,
    pub updated: String,
    pub issue_count: Option<u64>,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        let lead_name = project
            .lead
            .as_ref()
            .and_then(|l| l.display_name.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE);
        let lead_email = project
            .lead
            .as_ref()
            .and_then(|l| l.email_address.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(NOT_AVAILABLE);

        let updated = project
            .updated
            .clone()
            .or_else(|| {
                project
                    .insight
                    .as_ref()
                    .and_then(|i| i.last_issue_update_time.clone())
            })
            .unwrap_or_else(|| "n/a".to_string());

        ProjectCard {
            id: project.id.clone(),
            title: project.name.clone(),
            key: project.key.clone(),
            project_type: project
                .project_type_key
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_default(),
            avatar_url: project.avatar_urls.get(AVATAR_SIZE).cloned(),
            lead: format!("{lead_name} ({lead_email})"),
            status: if project.archived {
                ProjectStatus::Archived
            } else {
                ProjectStatus::Active
            },
            updated,
            issue_count: project.insight.as_ref().and_then(|i| i.total_issue_count),
        }
    }
}
