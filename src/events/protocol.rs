use serde::Serialize;

use crate::models::matches::FreelancerMatch;
use crate::models::projects::Project;

/// Notifications passed between dashboard panels.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// A project was just posted; carries the matches computed at creation
    /// so the top-matches panel can show them without a second fetch.
    ProjectCreated {
        project: Option<Project>,
        matched_freelancers: Vec<FreelancerMatch>,
    },
    /// The client's project list is stale and should be refetched.
    ProjectsChanged,
}
