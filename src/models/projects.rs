use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::matches::FreelancerMatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Paid,
    Learning,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Paid => "paid",
            ProjectType::Learning => "learning",
        }
    }
}

/// Project lifecycle status, stored as snake_case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Human label used on project detail.
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Open => "Open",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

/// Minimal client shape when the server populates `clientId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// `clientId` arrives either as a bare id or as a populated client document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientRef {
    Id(String),
    Populated(ClientSummary),
}

impl ClientRef {
    pub fn id(&self) -> &str {
        match self {
            ClientRef::Id(id) => id,
            ClientRef::Populated(c) => &c.id,
        }
    }

    /// Owner name for display; a bare id renders as the generic "Client".
    pub fn display_name(&self) -> &str {
        match self {
            ClientRef::Populated(ClientSummary {
                name: Some(name), ..
            }) => name,
            _ => "Client",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub project_type: ProjectType,
    /// Only meaningful for paid projects.
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub client_id: Option<ClientRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ── DTOs ──

/// Body of `POST /projects`. `budget` is sent as `null` for learning projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub project_type: ProjectType,
    pub budget: Option<f64>,
    pub duration: String,
    pub client_id: String,
}

/// Payload of a successful `POST /projects`: the stored project plus the
/// freelancers the matcher paired with it at creation time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProject {
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub matched_freelancers: Vec<FreelancerMatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProjectStatus {
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignFreelancer {
    pub freelancer_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectFilters {
    pub status: Option<ProjectStatus>,
    pub client_id: Option<String>,
    pub project_type: Option<ProjectType>,
}

impl ProjectFilters {
    pub fn for_client(client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        super::query_pairs(&[
            ("status", self.status.map(|s| s.as_str().to_string())),
            ("clientId", self.client_id.clone()),
            ("projectType", self.project_type.map(|t| t.as_str().to_string())),
        ])
    }
}

/// Unvalidated "post a new project" form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub project_type: Option<ProjectType>,
    /// Raw budget text as typed; parsed on submit.
    pub budget: String,
    pub duration: String,
}
