use serde::{Deserialize, Serialize};

/// Number of completed projects at which a freelancer graduates.
pub const GRADUATION_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub skill_name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(skill_name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            skill_name: skill_name.into(),
            level,
        }
    }

    pub fn beginner(skill_name: impl Into<String>) -> Self {
        Self::new(skill_name, SkillLevel::Beginner)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectPreference {
    Paid,
    Learning,
    #[default]
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreelancerStatus {
    #[default]
    Active,
    Graduated,
}

impl FreelancerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FreelancerStatus::Active => "active",
            FreelancerStatus::Graduated => "graduated",
        }
    }
}

/// Freelancer profile as served by `/freelancers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Freelancer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub completed_projects_count: u32,
    #[serde(default)]
    pub availability_hours: u32,
    #[serde(default)]
    pub preferred_project_type: ProjectPreference,
    #[serde(default)]
    pub status: FreelancerStatus,
}

impl Freelancer {
    /// Graduated once the server says so or the completed count reaches the
    /// threshold, whichever the payload reflects first.
    pub fn is_graduated(&self) -> bool {
        self.status == FreelancerStatus::Graduated
            || self.completed_projects_count >= GRADUATION_THRESHOLD
    }

    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(|s| s.skill_name.as_str())
    }
}

// ── DTOs ──

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFreelancer {
    pub name: String,
    pub email: String,
    pub skills: Vec<Skill>,
    pub preferred_project_type: ProjectPreference,
    pub availability_hours: u32,
}

/// The only fields the server lets a freelancer change about themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFreelancer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_project_type: Option<ProjectPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_hours: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct FreelancerFilters {
    pub status: Option<FreelancerStatus>,
    pub preferred_project_type: Option<ProjectPreference>,
    pub skill: Option<String>,
}

impl FreelancerFilters {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        super::query_pairs(&[
            ("status", self.status.map(|s| s.as_str().to_string())),
            (
                "preferredProjectType",
                self.preferred_project_type.map(|p| {
                    match p {
                        ProjectPreference::Paid => "paid",
                        ProjectPreference::Learning => "learning",
                        ProjectPreference::Both => "both",
                    }
                    .to_string()
                }),
            ),
            ("skill", self.skill.clone()),
        ])
    }
}

/// What the freelancer onboarding form stashes in the session before the
/// review step submits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerOnboardingDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub project_preference: Option<ProjectPreference>,
    #[serde(default)]
    pub availability_hours: Option<u32>,
    #[serde(default)]
    pub project_link: String,
    #[serde(default)]
    pub college_email: String,
}

impl FreelancerOnboardingDraft {
    /// Add a skill unless one with the same name (case-insensitive) exists.
    pub fn add_skill(&mut self, skill: Skill) -> bool {
        let exists = self
            .skills
            .iter()
            .any(|s| s.skill_name.eq_ignore_ascii_case(&skill.skill_name));
        if !exists {
            self.skills.push(skill);
        }
        !exists
    }

    /// Project the draft onto the restricted update payload. Unset or zero
    /// availability becomes 20 hours.
    pub fn to_update(&self) -> UpdateFreelancer {
        UpdateFreelancer {
            name: Some(self.name.clone()),
            skills: Some(self.skills.clone()),
            preferred_project_type: Some(self.project_preference.unwrap_or_default()),
            availability_hours: Some(self.availability_hours.filter(|h| *h > 0).unwrap_or(20)),
        }
    }
}
