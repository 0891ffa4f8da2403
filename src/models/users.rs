use serde::{Deserialize, Serialize};

use super::freelancers::Skill;

/// Marketplace role, sent lowercase as the `role` discriminator on register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Roles {
    Client,
    Freelancer,
}

impl Roles {
    pub fn as_str(&self) -> &'static str {
        match self {
            Roles::Client => "client",
            Roles::Freelancer => "freelancer",
        }
    }
}

impl std::fmt::Display for Roles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user fields returned alongside the token by `/auth/login` and
/// `/auth/register`. Stored verbatim under the session's `user` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        deserialize_with = "super::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Roles>,
    /// Id of the role-specific profile (client or freelancer record).
    #[serde(
        default,
        deserialize_with = "super::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_id: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/register`. Freelancer sign-ups carry a default skill
/// and weekly availability so the profile is matchable immediately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Roles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_hours: Option<u32>,
}

impl RegisterRequest {
    pub fn client(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            role: Roles::Client,
            skills: None,
            availability_hours: None,
        }
    }

    pub fn freelancer(name: String, email: String, password: String) -> Self {
        Self {
            name,
            email,
            password,
            role: Roles::Freelancer,
            skills: Some(vec![Skill::beginner("General")]),
            availability_hours: Some(20),
        }
    }
}

/// `{token, ...userFields}` as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: SessionUser,
}
