use futures_util::future::join;
use tracing::{info, warn};

use super::{ViewError, ViewState, authorized};
use crate::aggregator::board::{BoardTab, EMPTY_MATCHES, ProjectBoard, ProjectDetail};
use crate::aggregator::ranking::{RankedFreelancer, match_badge, rank_freelancers};
use crate::api::{ApiClient, RequestError, freelancers as freelancer_api, projects as project_api};
use crate::events::{DashboardEvent, EventBus};
use crate::models::freelancers::Freelancer;
use crate::models::projects::{
    CreateProject, Project, ProjectDraft, ProjectFilters, ProjectStatus, ProjectType,
};
use crate::models::users::Roles;
use crate::session::{ProfileContext, SessionStore};

pub const REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const BUDGET_REQUIRED: &str = "Budget is required for paid projects";
pub const BUDGET_INVALID: &str = "Budget must be a positive number";
pub const DUPLICATE_SKILL: &str = "This skill is already added";
pub const PROFILE_LOAD_FAILED: &str = "Failed to load freelancer profile";

// ── Top matches ──

/// Ranked freelancers for `project_id`, or for the client's most recent open
/// project when no id is given.
pub async fn load_top_matches(
    api: &ApiClient,
    session: &SessionStore,
    project_id: Option<&str>,
) -> ViewState<Vec<RankedFreelancer>> {
    let api = authorized(api, session).await;

    let project_id = match project_id {
        Some(id) => id.to_string(),
        None => {
            let ctx = match ProfileContext::resolve(session, Roles::Client).await {
                Ok(ctx) => ctx,
                Err(e) => return ViewState::failed(e),
            };
            let filters = ProjectFilters::for_client(&ctx.profile_id).with_status(ProjectStatus::Open);
            match project_api::get_projects(&api, &filters).await {
                Ok(projects) => match projects.into_iter().next() {
                    Some(latest) => latest.id,
                    None => return ViewState::Empty(EMPTY_MATCHES),
                },
                Err(e) => return ViewState::failed(e),
            }
        }
    };

    match project_api::get_matched_freelancers(&api, &project_id).await {
        Ok(matches) if matches.is_empty() => ViewState::Empty(EMPTY_MATCHES),
        Ok(matches) => ViewState::Loaded(rank_freelancers(&matches)),
        Err(e) => ViewState::failed(e),
    }
}

// ── Project board ──

/// All projects owned by the signed-in client.
pub async fn load_projects(
    api: &ApiClient,
    session: &SessionStore,
) -> Result<Vec<Project>, RequestError> {
    let ctx = ProfileContext::resolve(session, Roles::Client).await?;
    let api = ctx.authorize(api);
    project_api::get_projects(&api, &ProjectFilters::for_client(&ctx.profile_id)).await
}

pub async fn load_project_board(
    api: &ApiClient,
    session: &SessionStore,
    tab: BoardTab,
    search: &str,
) -> ViewState<ProjectBoard> {
    match load_projects(api, session).await {
        Ok(projects) => ViewState::Loaded(ProjectBoard::build(&projects, tab, search)),
        Err(e) => ViewState::failed(e),
    }
}

/// Project plus its matches. Both requests are in flight together and both
/// must finish before anything is shown.
pub async fn load_project_detail(
    api: &ApiClient,
    session: &SessionStore,
    project_id: &str,
) -> ViewState<ProjectDetail> {
    let api = authorized(api, session).await;
    let (project, matches) = join(
        project_api::get_project_by_id(&api, project_id),
        project_api::get_matched_freelancers(&api, project_id),
    )
    .await;

    match (project, matches) {
        (Ok(project), Ok(matches)) => ViewState::Loaded(ProjectDetail::new(project, &matches)),
        (Err(e), _) | (_, Err(e)) => ViewState::failed(e),
    }
}

// ── Profile drill-down ──

/// A matched freelancer opened from the top-matches panel.
///
/// Starts from the copy embedded in the match record. The freshly fetched
/// profile replaces it when the lookup succeeds; otherwise the match copy
/// stays on screen next to the error.
#[derive(Debug, Clone, PartialEq)]
pub struct FreelancerProfile {
    pub freelancer: Freelancer,
    pub match_score: u8,
    pub matching_skills: Vec<String>,
    pub fetched: bool,
    pub error: Option<ViewError>,
}

impl FreelancerProfile {
    pub fn from_match(ranked: &RankedFreelancer) -> Self {
        Self {
            freelancer: ranked.record.freelancer.clone(),
            match_score: ranked.match_score,
            matching_skills: ranked.matching_skills.clone(),
            fetched: false,
            error: None,
        }
    }

    pub fn badge(&self) -> String {
        match_badge(self.match_score)
    }

    pub fn status_label(&self) -> &'static str {
        if self.freelancer.is_graduated() {
            "Graduated"
        } else {
            "Active"
        }
    }
}

pub async fn load_freelancer_profile(
    api: &ApiClient,
    session: &SessionStore,
    ranked: &RankedFreelancer,
) -> FreelancerProfile {
    let mut profile = FreelancerProfile::from_match(ranked);
    let api = authorized(api, session).await;

    match freelancer_api::get_freelancer_by_id(&api, &ranked.freelancer_id).await {
        Ok(freelancer) => {
            profile.freelancer = freelancer;
            profile.fetched = true;
        }
        Err(e) => {
            warn!(freelancer_id = %ranked.freelancer_id, error = %e, "Profile lookup failed");
            let message = e.to_string();
            profile.error = Some(ViewError::new(if message.trim().is_empty() {
                PROFILE_LOAD_FAILED.to_string()
            } else {
                message
            }));
        }
    }
    profile
}

// ── Posting ──

/// Add a required skill to the draft, refusing exact duplicates.
pub fn add_required_skill(draft: &mut ProjectDraft, skill: &str) -> Result<(), ViewError> {
    let skill = skill.trim();
    if skill.is_empty() {
        return Ok(());
    }
    if draft.required_skills.iter().any(|s| s == skill) {
        return Err(ViewError::new(DUPLICATE_SKILL));
    }
    draft.required_skills.push(skill.to_string());
    Ok(())
}

/// Check the draft and build the request body for `client_id`.
pub fn validate_project(draft: &ProjectDraft, client_id: &str) -> Result<CreateProject, ViewError> {
    let blank = |s: &str| s.trim().is_empty();
    let Some(project_type) = draft.project_type else {
        return Err(ViewError::new(REQUIRED_FIELDS));
    };
    if blank(&draft.title)
        || blank(&draft.description)
        || draft.required_skills.is_empty()
        || blank(&draft.duration)
    {
        return Err(ViewError::new(REQUIRED_FIELDS));
    }

    let budget = match project_type {
        ProjectType::Learning => None,
        ProjectType::Paid if blank(&draft.budget) => {
            return Err(ViewError::new(BUDGET_REQUIRED));
        }
        ProjectType::Paid => match draft.budget.trim().parse::<f64>() {
            Ok(b) if b.is_finite() && b > 0.0 => Some(b),
            _ => return Err(ViewError::new(BUDGET_INVALID)),
        },
    };

    Ok(CreateProject {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        required_skills: draft.required_skills.clone(),
        project_type,
        budget,
        duration: draft.duration.trim().to_string(),
        client_id: client_id.to_string(),
    })
}

/// "Project created successfully! N freelancer(s) matched."
pub fn created_message(matched: usize) -> String {
    let plural = if matched == 1 { "" } else { "s" };
    format!("Project created successfully! {matched} freelancer{plural} matched.")
}

/// Validate and submit a new project, then tell the other panels about it.
/// Returns the success message on the happy path.
pub async fn post_project(
    api: &ApiClient,
    session: &SessionStore,
    bus: &EventBus,
    draft: &ProjectDraft,
) -> Result<String, ViewError> {
    // Form errors come before session errors.
    validate_project(draft, "")?;
    let ctx = ProfileContext::resolve(session, Roles::Client).await?;
    let input = validate_project(draft, &ctx.profile_id)?;

    let created = project_api::create_project(&ctx.authorize(api), &input).await?;
    let matched = created.matched_freelancers.len();
    info!(title = %input.title, matched, "Project posted");

    bus.publish(DashboardEvent::ProjectCreated {
        project: created.project,
        matched_freelancers: created.matched_freelancers,
    })
    .await;
    bus.publish(DashboardEvent::ProjectsChanged).await;

    Ok(created_message(matched))
}

// ── Dashboard ──

/// Client dashboard state: top matches next to the project board.
pub struct ClientDashboard {
    pub welcome_name: String,
    pub top_matches: ViewState<Vec<RankedFreelancer>>,
    pub board: ViewState<ProjectBoard>,
    pub tab: BoardTab,
    pub search: String,
}

impl ClientDashboard {
    pub async fn load(api: &ApiClient, session: &SessionStore) -> Self {
        let welcome_name = match session.user().await {
            Ok(Some(user)) => user.name,
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Could not read session user");
                None
            }
        }
        .unwrap_or_else(|| "Client".to_string());

        let (top_matches, board) = join(
            load_top_matches(api, session, None),
            load_project_board(api, session, BoardTab::default(), ""),
        )
        .await;

        Self {
            welcome_name,
            top_matches,
            board,
            tab: BoardTab::default(),
            search: String::new(),
        }
    }

    /// React to an event from another panel. Project creation swaps in the
    /// new matches directly; a stale project list is refetched.
    pub async fn handle_event(
        &mut self,
        api: &ApiClient,
        session: &SessionStore,
        event: &DashboardEvent,
    ) {
        match event {
            DashboardEvent::ProjectCreated {
                matched_freelancers,
                ..
            } => {
                self.top_matches = if matched_freelancers.is_empty() {
                    ViewState::Empty(EMPTY_MATCHES)
                } else {
                    ViewState::Loaded(rank_freelancers(matched_freelancers))
                };
            }
            DashboardEvent::ProjectsChanged => {
                self.board = load_project_board(api, session, self.tab, &self.search).await;
            }
        }
    }
}
