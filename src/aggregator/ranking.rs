use serde::Serialize;

use crate::models::freelancers::{Freelancer, GRADUATION_THRESHOLD};
use crate::models::matches::FreelancerMatch;

/// One row of a client's "top matched freelancers" panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFreelancer {
    pub freelancer_id: String,
    pub name: String,
    pub email: Option<String>,
    /// Comma-joined skill names, or "Freelancer" for a profile with none.
    pub role_label: String,
    /// "<completed> of 10"
    pub projects_label: String,
    pub match_score: u8,
    pub matching_skills: Vec<String>,
    pub availability_hours: u32,
    /// The source record; the profile drill-down falls back to it.
    pub record: FreelancerMatch,
}

impl RankedFreelancer {
    pub fn from_match(record: &FreelancerMatch) -> Self {
        let f = &record.freelancer;
        Self {
            freelancer_id: f.id.clone(),
            name: f.name.clone(),
            email: f.email.clone(),
            role_label: role_label(f),
            projects_label: projects_label(f),
            match_score: record.match_score,
            matching_skills: record.matching_skills.clone(),
            availability_hours: f.availability_hours,
            record: record.clone(),
        }
    }

    pub fn badge(&self) -> String {
        match_badge(self.match_score)
    }

    pub fn matching_skills_label(&self) -> String {
        join_or(&self.matching_skills, "N/A")
    }

    pub fn availability_label(&self) -> String {
        format!("{} hours/week", self.availability_hours)
    }
}

/// Map matches to rows, keeping the server's order. Duplicate freelancers
/// are passed through untouched.
pub fn rank_freelancers(records: &[FreelancerMatch]) -> Vec<RankedFreelancer> {
    records.iter().map(RankedFreelancer::from_match).collect()
}

pub fn role_label(freelancer: &Freelancer) -> String {
    let names: Vec<&str> = freelancer.skill_names().collect();
    if names.is_empty() {
        "Freelancer".to_string()
    } else {
        names.join(", ")
    }
}

pub fn projects_label(freelancer: &Freelancer) -> String {
    format!(
        "{} of {}",
        freelancer.completed_projects_count, GRADUATION_THRESHOLD
    )
}

pub fn match_badge(score: u8) -> String {
    format!("{score}% Match")
}

pub(crate) fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}
