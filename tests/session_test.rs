//! Tests for session persistence, route guarding and profile resolution.
//!
//! Memory and file backends only; redis needs a live server.
//!
//! Run with: `cargo test --test session_test`
use std::time::Duration;

use freelancehub_client::api::{ApiClient, RequestError};
use freelancehub_client::config::{ClientConfig, SessionBackendKind};
use freelancehub_client::models::clients::ClientOnboardingDraft;
use freelancehub_client::models::freelancers::{FreelancerOnboardingDraft, ProjectPreference, Skill};
use freelancehub_client::models::users::{AuthResponse, Roles, SessionUser};
use freelancehub_client::session::backend::FileBackend;
use freelancehub_client::session::profile::{MISSING_CLIENT_ID, MISSING_PROFILE_ID};
use freelancehub_client::session::store::keys;
use freelancehub_client::session::{
    Access, DraftKind, ProfileContext, Route, SessionBackend, SessionEvent, SessionState,
    SessionStore, guard,
};
use freelancehub_client::views::client_dashboard;
use freelancehub_client::views::{ViewState, freelancer_dashboard, onboarding};
use serde_json::json;

async fn memory_store() -> SessionStore {
    SessionStore::open(&SessionBackendKind::Memory).await.unwrap()
}

fn auth_response(role: Option<Roles>, profile_id: Option<&str>) -> AuthResponse {
    AuthResponse {
        token: "jwt-abc".to_string(),
        user: SessionUser {
            id: Some("u1".to_string()),
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            role,
            profile_id: profile_id.map(str::to_string),
        },
    }
}

/// Points at a closed port: any request that does go out fails as a network
/// error, so a precondition error proves nothing was sent.
fn offline_api() -> ApiClient {
    ApiClient::new(&ClientConfig {
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        request_timeout: Duration::from_secs(2),
        session_backend: SessionBackendKind::Memory,
    })
    .unwrap()
}

// ── State ──

#[test]
fn test_session_state_transitions() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());

    let state = state.transition(SessionEvent::SignedUp(Roles::Client));
    assert_eq!(state.role(), Some(Roles::Client));

    let state = state.transition(SessionEvent::LoggedIn(Roles::Freelancer));
    assert_eq!(state, SessionState::Authenticated(Roles::Freelancer));

    assert_eq!(state.transition(SessionEvent::LoggedOut), SessionState::Anonymous);
}

#[tokio::test]
async fn test_empty_store_is_anonymous() {
    let store = memory_store().await;
    assert_eq!(store.init().await.unwrap(), SessionState::Anonymous);
    assert!(store.token().await.unwrap().is_none());
}

#[tokio::test]
async fn test_establish_persists_token_and_user() {
    let store = memory_store().await;

    let state = store
        .establish(&auth_response(Some(Roles::Client), Some("c1")), Roles::Client)
        .await
        .unwrap();

    assert_eq!(state, SessionState::Authenticated(Roles::Client));
    assert_eq!(store.token().await.unwrap().as_deref(), Some("jwt-abc"));
    let user = store.user().await.unwrap().unwrap();
    assert_eq!(user.profile_id.as_deref(), Some("c1"));
    assert_eq!(store.state().await.unwrap(), state);
}

#[tokio::test]
async fn test_establish_fills_missing_role_from_entry_page() {
    let store = memory_store().await;

    store
        .establish(&auth_response(None, Some("f1")), Roles::Freelancer)
        .await
        .unwrap();

    let user = store.user().await.unwrap().unwrap();
    assert_eq!(user.role, Some(Roles::Freelancer));
}

#[tokio::test]
async fn test_token_without_user_is_anonymous() {
    let store = memory_store().await;
    store.set(keys::TOKEN, &"jwt-abc").await.unwrap();

    assert_eq!(store.state().await.unwrap(), SessionState::Anonymous);
}

#[tokio::test]
async fn test_malformed_user_reads_as_absent() {
    let store = memory_store().await;
    store.set(keys::USER, &json!(["not", "a", "user"])).await.unwrap();

    assert!(store.user().await.unwrap().is_none());
    assert_eq!(store.state().await.unwrap(), SessionState::Anonymous);

    store.set(keys::USER, &json!("ada")).await.unwrap();
    assert!(store.user().await.unwrap().is_none());
}

#[tokio::test]
async fn test_logout_clears_everything() {
    let store = memory_store().await;
    store
        .establish(&auth_response(Some(Roles::Freelancer), Some("f1")), Roles::Freelancer)
        .await
        .unwrap();
    store
        .save_draft(DraftKind::Freelancer, &FreelancerOnboardingDraft::default())
        .await
        .unwrap();
    store
        .save_draft(DraftKind::Client, &ClientOnboardingDraft::default())
        .await
        .unwrap();

    let outcome = store.clear().await.unwrap();

    assert_eq!(outcome.redirect, Route::Root);
    assert!(outcome.reload);
    assert!(store.token().await.unwrap().is_none());
    assert!(store.user().await.unwrap().is_none());
    assert!(
        store
            .load_draft::<FreelancerOnboardingDraft>(DraftKind::Freelancer)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        store
            .load_draft::<ClientOnboardingDraft>(DraftKind::Client)
            .await
            .unwrap()
            .is_none()
    );
    assert_eq!(store.state().await.unwrap(), SessionState::Anonymous);
}

// ── File backend ──

#[tokio::test]
async fn test_file_session_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");
    let kind = SessionBackendKind::File(path.clone());

    {
        let store = SessionStore::open(&kind).await.unwrap();
        store
            .establish(&auth_response(Some(Roles::Client), Some("c1")), Roles::Client)
            .await
            .unwrap();
    }

    assert!(path.exists());
    let reopened = SessionStore::open(&kind).await.unwrap();
    assert_eq!(
        reopened.init().await.unwrap(),
        SessionState::Authenticated(Roles::Client)
    );
}

#[tokio::test]
async fn test_corrupt_session_file_starts_anonymous() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let backend = FileBackend::new(path.clone());
    assert_eq!(backend.path(), path.as_path());
    let store = SessionStore::new(SessionBackend::File(backend));

    assert_eq!(store.state().await.unwrap(), SessionState::Anonymous);

    store
        .establish(&auth_response(Some(Roles::Freelancer), Some("f1")), Roles::Freelancer)
        .await
        .unwrap();
    assert!(store.state().await.unwrap().is_authenticated());
}

#[tokio::test]
async fn test_file_logout_removes_keys_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = SessionStore::open(&SessionBackendKind::File(path.clone()))
        .await
        .unwrap();
    store
        .establish(&auth_response(Some(Roles::Client), Some("c1")), Roles::Client)
        .await
        .unwrap();

    store.clear().await.unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, json!({}));
}

// ── Drafts ──

#[tokio::test]
async fn test_freelancer_draft_round_trip_and_review_route() {
    let store = memory_store().await;
    let mut draft = FreelancerOnboardingDraft {
        name: "Ada".to_string(),
        ..Default::default()
    };
    assert!(draft.add_skill(Skill::beginner("SEO")));
    assert!(!draft.add_skill(Skill::beginner("seo")));

    let next = onboarding::save_freelancer_draft(&store, &draft).await.unwrap();
    assert_eq!(next, Route::FreelancerReview);

    let loaded: FreelancerOnboardingDraft = store
        .load_draft(DraftKind::Freelancer)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded, draft);

    let update = loaded.to_update();
    assert_eq!(update.preferred_project_type, Some(ProjectPreference::Both));
    assert_eq!(update.availability_hours, Some(20));
}

#[test]
fn test_zero_availability_defaults_to_twenty_hours() {
    let draft = FreelancerOnboardingDraft {
        availability_hours: Some(0),
        ..Default::default()
    };
    assert_eq!(draft.to_update().availability_hours, Some(20));

    let draft = FreelancerOnboardingDraft {
        availability_hours: Some(35),
        ..Default::default()
    };
    assert_eq!(draft.to_update().availability_hours, Some(35));
}

#[tokio::test]
async fn test_freelancer_draft_needs_a_skill() {
    let store = memory_store().await;
    let err = onboarding::save_freelancer_draft(&store, &FreelancerOnboardingDraft::default())
        .await
        .unwrap_err();
    assert_eq!(err.message(), onboarding::SKILL_REQUIRED);
}

#[tokio::test]
async fn test_finishing_without_draft_returns_to_form() {
    let store = memory_store().await;

    let next = onboarding::finish_freelancer(&offline_api(), &store).await.unwrap();
    assert_eq!(next, Route::Onboarding);

    assert_eq!(onboarding::finish_client(&store).await.unwrap(), Route::ClientOnboarding);
}

#[tokio::test]
async fn test_client_onboarding_flow() {
    let store = memory_store().await;
    let draft = ClientOnboardingDraft {
        full_name: "Grace".to_string(),
        ..Default::default()
    };

    assert_eq!(
        onboarding::save_client_draft(&store, &draft).await.unwrap(),
        Route::ClientReview
    );
    assert_eq!(onboarding::finish_client(&store).await.unwrap(), Route::ClientDashboard);
    assert!(
        store
            .load_draft::<ClientOnboardingDraft>(DraftKind::Client)
            .await
            .unwrap()
            .is_none()
    );
}

// ── Guard ──

#[test]
fn test_protected_routes_redirect_to_role_login() {
    let anon = SessionState::Anonymous;
    assert_eq!(guard(Route::FreelancerDashboard, anon), Access::Redirect(Route::Login));
    assert_eq!(guard(Route::Onboarding, anon), Access::Redirect(Route::Login));
    assert_eq!(guard(Route::ClientDashboard, anon), Access::Redirect(Route::LoginClient));
    assert_eq!(guard(Route::ClientReview, anon), Access::Redirect(Route::LoginClient));
    assert_eq!(guard(Route::Root, anon), Access::Allow);
    assert_eq!(guard(Route::SignupClient, anon), Access::Allow);
}

#[test]
fn test_root_sends_signed_in_users_to_their_dashboard() {
    assert_eq!(
        guard(Route::Root, SessionState::Authenticated(Roles::Client)),
        Access::Redirect(Route::ClientDashboard)
    );
    assert_eq!(
        guard(Route::Root, SessionState::Authenticated(Roles::Freelancer)),
        Access::Redirect(Route::FreelancerDashboard)
    );
    assert_eq!(
        guard(Route::FreelancerDashboard, SessionState::Authenticated(Roles::Freelancer)),
        Access::Allow
    );
}

#[test]
fn test_route_paths() {
    assert_eq!(Route::ClientOnboarding.path(), "/clientonbording");
    assert_eq!(Route::FreelancerDashboard.path(), "/freelancerDashboard");
    assert_eq!(Route::LoginClient.path(), "/loginclient");
}

// ── Profile context ──

#[tokio::test]
async fn test_profile_context_resolves_scoping_ids() {
    let store = memory_store().await;
    store
        .establish(&auth_response(Some(Roles::Client), Some("c1")), Roles::Client)
        .await
        .unwrap();

    let ctx = ProfileContext::resolve(&store, Roles::Client).await.unwrap();

    assert_eq!(ctx.profile_id, "c1");
    assert_eq!(ctx.name.as_deref(), Some("Ada"));
    assert_eq!(ctx.authorize(&offline_api()).token(), Some("jwt-abc"));
}

#[tokio::test]
async fn test_missing_profile_id_is_a_precondition_error() {
    let store = memory_store().await;
    store
        .establish(&auth_response(Some(Roles::Client), None), Roles::Client)
        .await
        .unwrap();

    let err = ProfileContext::resolve(&store, Roles::Client).await.unwrap_err();
    assert!(matches!(err, RequestError::Precondition(_)));
    assert_eq!(err.to_string(), MISSING_CLIENT_ID);

    let err = ProfileContext::resolve(&memory_store().await, Roles::Freelancer)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), MISSING_PROFILE_ID);
}

#[tokio::test]
async fn test_role_mismatch_is_refused() {
    let store = memory_store().await;
    store
        .establish(&auth_response(Some(Roles::Freelancer), Some("f1")), Roles::Freelancer)
        .await
        .unwrap();

    let err = ProfileContext::resolve(&store, Roles::Client).await.unwrap_err();
    assert!(matches!(err, RequestError::Precondition(_)));
}

#[tokio::test]
async fn test_client_views_report_missing_id_without_requesting() {
    let store = memory_store().await;
    store
        .establish(&auth_response(Some(Roles::Client), None), Roles::Client)
        .await
        .unwrap();
    let api = offline_api();

    let board = client_dashboard::load_project_board(&api, &store, Default::default(), "").await;
    assert_eq!(board.error().map(|e| e.message()), Some(MISSING_CLIENT_ID));

    let matches = client_dashboard::load_top_matches(&api, &store, None).await;
    assert_eq!(matches.error().map(|e| e.message()), Some(MISSING_CLIENT_ID));
}

#[tokio::test]
async fn test_freelancer_dashboard_reports_missing_id() {
    let store = memory_store().await;
    store
        .establish(&auth_response(Some(Roles::Freelancer), None), Roles::Freelancer)
        .await
        .unwrap();

    let mut state = freelancer_dashboard::load(&offline_api(), &store).await;

    assert!(matches!(state, ViewState::Failed(_)));
    let error = state.error_mut().unwrap();
    assert_eq!(error.visible(), Some(MISSING_PROFILE_ID));
    error.dismiss();
    assert!(error.visible().is_none());
}
