use serde::{Deserialize, Serialize};

use super::freelancers::Freelancer;
use super::projects::Project;

/// One scored freelancer for a project, from
/// `GET /projects/{id}/matched-freelancers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerMatch {
    pub freelancer: Freelancer,
    #[serde(deserialize_with = "super::match_score")]
    pub match_score: u8,
    #[serde(default)]
    pub matching_skills: Vec<String>,
}

/// One scored project for a freelancer, from
/// `GET /freelancers/{id}/suggested-projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMatch {
    pub project: Project,
    #[serde(deserialize_with = "super::match_score")]
    pub match_score: u8,
    /// Percentage shown on suggestion cards. Older servers omit it, in which
    /// case the raw score stands in.
    #[serde(default)]
    pub match_percentage: Option<f64>,
    #[serde(default)]
    pub matching_skills: Vec<String>,
}

impl ProjectMatch {
    pub fn percentage(&self) -> f64 {
        self.match_percentage
            .unwrap_or_else(|| f64::from(self.match_score))
    }
}

/// Server-side pre-split of suggestions. The split is recomputed client side
/// from each project's type, so a misfiled record still lands correctly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestedProjects {
    #[serde(default)]
    pub learning: Vec<ProjectMatch>,
    #[serde(default)]
    pub paid: Vec<ProjectMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerSuggestions {
    #[serde(default)]
    pub freelancer: Option<Freelancer>,
    #[serde(default)]
    pub suggested_projects: SuggestedProjects,
}
