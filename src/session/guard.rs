use super::state::SessionState;
use crate::models::users::Roles;

/// Entry points and pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Role selection for anonymous visitors.
    Root,
    Login,
    Signup,
    LoginClient,
    SignupClient,
    Onboarding,
    ClientOnboarding,
    FreelancerReview,
    ClientReview,
    FreelancerDashboard,
    ClientDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::LoginClient => "/loginclient",
            Route::SignupClient => "/signupclient",
            Route::Onboarding => "/onboarding",
            Route::ClientOnboarding => "/clientonbording",
            Route::FreelancerReview => "/freelancerreview",
            Route::ClientReview => "/clientreview",
            Route::FreelancerDashboard => "/freelancerDashboard",
            Route::ClientDashboard => "/clientdashboard",
        }
    }

    /// Role whose session a protected page needs, `None` for public pages.
    pub fn required_role(&self) -> Option<Roles> {
        match self {
            Route::Onboarding | Route::FreelancerReview | Route::FreelancerDashboard => {
                Some(Roles::Freelancer)
            }
            Route::ClientOnboarding | Route::ClientReview | Route::ClientDashboard => {
                Some(Roles::Client)
            }
            _ => None,
        }
    }

    pub fn login_for(role: Roles) -> Self {
        match role {
            Roles::Freelancer => Route::Login,
            Roles::Client => Route::LoginClient,
        }
    }

    pub fn dashboard_for(role: Roles) -> Self {
        match role {
            Roles::Freelancer => Route::FreelancerDashboard,
            Roles::Client => Route::ClientDashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(Route),
}

/// Decide whether `route` may render for `state`.
///
/// Protected pages never render without a session; they send the visitor to
/// the login page for that page's role. The root sends signed-in users
/// straight to their own dashboard.
pub fn guard(route: Route, state: SessionState) -> Access {
    match (route, state) {
        (Route::Root, SessionState::Authenticated(role)) => {
            Access::Redirect(Route::dashboard_for(role))
        }
        (route, SessionState::Anonymous) => match route.required_role() {
            Some(role) => Access::Redirect(Route::login_for(role)),
            None => Access::Allow,
        },
        _ => Access::Allow,
    }
}
