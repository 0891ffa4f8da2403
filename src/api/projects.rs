use serde_json::Value;

use super::{ApiClient, RequestError};
use crate::models::matches::FreelancerMatch;
use crate::models::projects::{
    AssignFreelancer, CreateProject, CreatedProject, Project, ProjectFilters, ProjectStatus,
    UpdateProjectStatus,
};

/// POST /projects. The server runs matching on creation.
pub async fn create_project(
    api: &ApiClient,
    input: &CreateProject,
) -> Result<CreatedProject, RequestError> {
    api.post("/projects", input).await
}

/// GET /projects, optionally filtered by status, owner or type.
pub async fn get_projects(
    api: &ApiClient,
    filters: &ProjectFilters,
) -> Result<Vec<Project>, RequestError> {
    api.get("/projects", &filters.to_query()).await
}

/// GET /projects/{id}
pub async fn get_project_by_id(api: &ApiClient, id: &str) -> Result<Project, RequestError> {
    api.get(&format!("/projects/{id}"), &[]).await
}

/// GET /projects/{id}/matched-freelancers: scored freelancers, best first as
/// ordered by the server.
pub async fn get_matched_freelancers(
    api: &ApiClient,
    id: &str,
) -> Result<Vec<FreelancerMatch>, RequestError> {
    api.get(&format!("/projects/{id}/matched-freelancers"), &[])
        .await
}

/// PATCH /projects/{id}/status
pub async fn update_project_status(
    api: &ApiClient,
    id: &str,
    status: ProjectStatus,
) -> Result<Project, RequestError> {
    api.patch(
        &format!("/projects/{id}/status"),
        &UpdateProjectStatus { status },
    )
    .await
}

/// PATCH /projects/{id}/assign. The response payload varies by server
/// version, so it is returned undecoded.
pub async fn assign_freelancer(
    api: &ApiClient,
    id: &str,
    freelancer_id: &str,
) -> Result<Value, RequestError> {
    api.patch(
        &format!("/projects/{id}/assign"),
        &AssignFreelancer {
            freelancer_id: freelancer_id.to_string(),
        },
    )
    .await
}
