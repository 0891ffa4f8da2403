use serde::Serialize;

use super::ViewState;
use crate::aggregator::progress::ProgressStats;
use crate::aggregator::suggestions::SuggestionBoard;
use crate::api::{ApiClient, freelancers as freelancer_api};
use crate::models::matches::FreelancerSuggestions;
use crate::models::users::Roles;
use crate::session::{ProfileContext, SessionStore};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreelancerDashboard {
    pub welcome_name: String,
    pub suggestions: SuggestionBoard,
    pub progress: ProgressStats,
}

impl FreelancerDashboard {
    pub fn from_suggestions(data: &FreelancerSuggestions) -> Self {
        Self {
            welcome_name: data
                .freelancer
                .as_ref()
                .map(|f| f.name.clone())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Freelancer".to_string()),
            suggestions: SuggestionBoard::from_suggested(&data.suggested_projects),
            progress: ProgressStats::from_freelancer(data.freelancer.as_ref()),
        }
    }
}

/// Suggestions and progress for the signed-in freelancer. An empty
/// suggestion list still loads; the board carries its own empty state.
pub async fn load(api: &ApiClient, session: &SessionStore) -> ViewState<FreelancerDashboard> {
    let ctx = match ProfileContext::resolve(session, Roles::Freelancer).await {
        Ok(ctx) => ctx,
        Err(e) => return ViewState::failed(e),
    };

    match freelancer_api::get_suggested_projects(&ctx.authorize(api), &ctx.profile_id).await {
        Ok(data) => ViewState::Loaded(FreelancerDashboard::from_suggestions(&data)),
        Err(e) => ViewState::failed(e),
    }
}
