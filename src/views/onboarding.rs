use tracing::info;

use super::ViewError;
use crate::api::{ApiClient, freelancers as freelancer_api};
use crate::models::clients::ClientOnboardingDraft;
use crate::models::freelancers::FreelancerOnboardingDraft;
use crate::models::users::Roles;
use crate::session::{DraftKind, ProfileContext, Route, SessionStore};

pub const SKILL_REQUIRED: &str = "Please add at least one skill";

/// Stash the freelancer form for the review step.
pub async fn save_freelancer_draft(
    session: &SessionStore,
    draft: &FreelancerOnboardingDraft,
) -> Result<Route, ViewError> {
    if draft.skills.is_empty() {
        return Err(ViewError::new(SKILL_REQUIRED));
    }
    session.save_draft(DraftKind::Freelancer, draft).await?;
    Ok(Route::FreelancerReview)
}

/// Submit the reviewed draft as a profile update and drop it.
///
/// Without a draft there is nothing to review, so the user is sent back to
/// the form.
pub async fn finish_freelancer(
    api: &ApiClient,
    session: &SessionStore,
) -> Result<Route, ViewError> {
    let Some(draft) = session
        .load_draft::<FreelancerOnboardingDraft>(DraftKind::Freelancer)
        .await?
    else {
        return Ok(Route::Onboarding);
    };

    let ctx = ProfileContext::resolve(session, Roles::Freelancer).await?;
    freelancer_api::update_freelancer(&ctx.authorize(api), &ctx.profile_id, &draft.to_update())
        .await?;
    session.discard_draft(DraftKind::Freelancer).await?;

    info!(profile_id = %ctx.profile_id, "Freelancer onboarding finished");
    Ok(Route::FreelancerDashboard)
}

pub async fn save_client_draft(
    session: &SessionStore,
    draft: &ClientOnboardingDraft,
) -> Result<Route, ViewError> {
    session.save_draft(DraftKind::Client, draft).await?;
    Ok(Route::ClientReview)
}

/// The client review step only confirms what was entered; finishing clears
/// the draft and opens the dashboard.
pub async fn finish_client(session: &SessionStore) -> Result<Route, ViewError> {
    if session
        .load_draft::<ClientOnboardingDraft>(DraftKind::Client)
        .await?
        .is_none()
    {
        return Ok(Route::ClientOnboarding);
    }
    session.discard_draft(DraftKind::Client).await?;
    Ok(Route::ClientDashboard)
}
