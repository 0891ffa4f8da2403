use serde::Serialize;

use crate::models::freelancers::{
    Freelancer, FreelancerStatus, GRADUATION_THRESHOLD, Skill, SkillLevel,
};

pub const GRADUATION_BANNER: &str = "Congratulations! You've graduated!";
pub const GRADUATION_DETAIL: &str =
    "You've completed 10+ projects and are now a graduate freelancer.";

/// Percentage of the way to graduation: `min(c / 10 * 100, 100)`.
pub fn overall_progress(completed_projects: u32) -> f64 {
    (f64::from(completed_projects) / f64::from(GRADUATION_THRESHOLD) * 100.0).min(100.0)
}

/// "Intermediate" when any skill is intermediate, otherwise "Beginner".
pub fn level_label(skills: &[Skill]) -> &'static str {
    if skills.iter().any(|s| s.level == SkillLevel::Intermediate) {
        "Intermediate"
    } else {
        "Beginner"
    }
}

/// Figures for the freelancer's "Your Progress" panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressStats {
    pub skills_built: usize,
    pub level: &'static str,
    pub projects_completed: u32,
    pub status: FreelancerStatus,
    pub overall_progress: f64,
    pub graduated: bool,
}

impl ProgressStats {
    /// Stats for `freelancer`, or the zeroed beginner view when the profile
    /// hasn't loaded.
    pub fn from_freelancer(freelancer: Option<&Freelancer>) -> Self {
        match freelancer {
            Some(f) => Self {
                skills_built: f.skills.len(),
                level: level_label(&f.skills),
                projects_completed: f.completed_projects_count,
                status: f.status,
                overall_progress: overall_progress(f.completed_projects_count),
                graduated: f.is_graduated(),
            },
            None => Self {
                skills_built: 0,
                level: level_label(&[]),
                projects_completed: 0,
                status: FreelancerStatus::Active,
                overall_progress: 0.0,
                graduated: false,
            },
        }
    }

    /// Rounded percentage as displayed next to the progress bar.
    pub fn progress_label(&self) -> String {
        format!("{}%", self.overall_progress.round() as u32)
    }

    pub fn completed_description(&self) -> String {
        format!("Total completed ({})", self.status.as_str())
    }

    /// Graduation banner lines, shown only once graduated.
    pub fn banner(&self) -> Option<(&'static str, &'static str)> {
        self.graduated
            .then_some((GRADUATION_BANNER, GRADUATION_DETAIL))
    }
}
