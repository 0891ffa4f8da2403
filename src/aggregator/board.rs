use serde::Serialize;

use super::ranking::{RankedFreelancer, rank_freelancers};
use super::suggestions::TabCount;
use crate::models::matches::FreelancerMatch;
use crate::models::projects::{Project, ProjectStatus, ProjectType};

pub const EMPTY_PROJECTS: &str = "No projects found";
pub const EMPTY_MATCHES: &str = "No matched freelancers found. Post a project to see matches!";

/// Tabs of the client's "Your Projects" panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardTab {
    #[default]
    Open,
    Completed,
}

impl BoardTab {
    pub fn label(&self) -> &'static str {
        match self {
            BoardTab::Open => "Ongoing/Open",
            BoardTab::Completed => "Completed",
        }
    }

    /// In-progress projects are listed under the open tab.
    pub fn includes(&self, status: ProjectStatus) -> bool {
        match self {
            BoardTab::Open => matches!(status, ProjectStatus::Open | ProjectStatus::InProgress),
            BoardTab::Completed => status == ProjectStatus::Completed,
        }
    }

    /// Status counted on the tab badge. Only exact matches count, so
    /// in-progress projects are listed under "open" without adding to it.
    fn counted_status(&self) -> ProjectStatus {
        match self {
            BoardTab::Open => ProjectStatus::Open,
            BoardTab::Completed => ProjectStatus::Completed,
        }
    }
}

/// One card on the project board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub project_id: String,
    pub title: String,
    /// "Budget: $<n>" or "Unpaid"
    pub budget_label: String,
    /// "<n> Skills"
    pub skills_label: String,
    pub duration: String,
    pub status: ProjectStatus,
}

impl ProjectCard {
    pub fn from_project(project: &Project) -> Self {
        let budget_label = match (project.project_type, project.budget) {
            (ProjectType::Paid, Some(budget)) => format!("Budget: ${budget}"),
            (ProjectType::Paid, None) => "Budget: -".to_string(),
            (ProjectType::Learning, _) => "Unpaid".to_string(),
        };
        Self {
            project_id: project.id.clone(),
            title: project.title.clone(),
            budget_label,
            skills_label: format!("{} Skills", project.required_skills.len()),
            duration: project.duration.clone(),
            status: project.status,
        }
    }
}

/// A client's projects with tab and title-search filtering applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectBoard {
    pub tabs: [TabCount<BoardTab>; 2],
    pub active: BoardTab,
    pub search: String,
    pub cards: Vec<ProjectCard>,
}

impl ProjectBoard {
    pub fn build(projects: &[Project], active: BoardTab, search: &str) -> Self {
        let needle = search.to_lowercase();
        let cards = projects
            .iter()
            .filter(|p| active.includes(p.status))
            .filter(|p| p.title.to_lowercase().contains(&needle))
            .map(ProjectCard::from_project)
            .collect();

        let tabs = [BoardTab::Open, BoardTab::Completed].map(|id| TabCount {
            id,
            label: id.label(),
            count: projects
                .iter()
                .filter(|p| p.status == id.counted_status())
                .count(),
        });

        Self {
            tabs,
            active,
            search: search.to_string(),
            cards,
        }
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.cards.is_empty().then_some(EMPTY_PROJECTS)
    }
}

/// Project drill-down: the project itself plus its ranked matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub status_label: &'static str,
    /// "Paid - $<n>" or "Learning/Unpaid"
    pub type_label: String,
    pub client_name: Option<String>,
    pub matches: Vec<RankedFreelancer>,
}

impl ProjectDetail {
    pub fn new(project: Project, matches: &[FreelancerMatch]) -> Self {
        let type_label = match (project.project_type, project.budget) {
            (ProjectType::Paid, Some(budget)) => format!("Paid - ${budget}"),
            (ProjectType::Paid, None) => "Paid".to_string(),
            (ProjectType::Learning, _) => "Learning/Unpaid".to_string(),
        };
        Self {
            status_label: project.status.label(),
            type_label,
            client_name: project
                .client_id
                .as_ref()
                .map(|c| c.display_name().to_string()),
            matches: rank_freelancers(matches),
            project,
        }
    }
}
