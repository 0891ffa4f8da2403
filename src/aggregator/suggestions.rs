use serde::Serialize;

use super::ranking::{join_or, match_badge};
use crate::models::matches::{ProjectMatch, SuggestedProjects};
use crate::models::projects::{Project, ProjectType};

/// Characters of description kept on a suggestion card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

pub const EMPTY_SUGGESTIONS: &str = "No projects found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Learning,
    Paid,
}

impl SuggestionCategory {
    pub fn of(project: &Project) -> Self {
        match project.project_type {
            ProjectType::Learning => SuggestionCategory::Learning,
            ProjectType::Paid => SuggestionCategory::Paid,
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            SuggestionCategory::Learning => "Learning Projects",
            SuggestionCategory::Paid => "Paid Projects",
        }
    }
}

/// First 100 characters followed by "...", whatever the length.
///
/// The ellipsis is appended even to short or empty descriptions.
pub fn truncate_description(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Type/budget line of a suggestion card.
pub fn type_annotation(project: &Project) -> String {
    match (project.project_type, project.budget) {
        (ProjectType::Learning, _) => "Learning project".to_string(),
        (ProjectType::Paid, Some(budget)) => format!("Paid project - ${budget}"),
        (ProjectType::Paid, None) => "Paid project".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionSummary {
    pub project_id: String,
    pub title: String,
    /// Required skills joined with ", ", or "General".
    pub skill_tags: String,
    pub description_preview: String,
    pub duration: String,
    pub annotation: String,
    /// "<percentage>% match"
    pub match_label: String,
    pub match_score: u8,
    pub category: SuggestionCategory,
}

impl SuggestionSummary {
    pub fn from_match(record: &ProjectMatch) -> Self {
        let project = &record.project;
        Self {
            project_id: project.id.clone(),
            title: project.title.clone(),
            skill_tags: join_or(&project.required_skills, "General"),
            description_preview: truncate_description(&project.description),
            duration: project.duration.clone(),
            annotation: type_annotation(project),
            match_label: format!("{}% match", record.percentage()),
            match_score: record.match_score,
            category: SuggestionCategory::of(project),
        }
    }

    pub fn badge(&self) -> String {
        match_badge(self.match_score)
    }

    /// The four detail lines in display order.
    pub fn details(&self) -> [&str; 4] {
        [
            self.description_preview.as_str(),
            self.duration.as_str(),
            self.annotation.as_str(),
            self.match_label.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabCount<T> {
    pub id: T,
    pub label: &'static str,
    pub count: usize,
}

/// Suggested projects split into the learning and paid tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionBoard {
    pub learning: Vec<SuggestionSummary>,
    pub paid: Vec<SuggestionSummary>,
    pub active: SuggestionCategory,
}

impl SuggestionBoard {
    /// Partition records by each project's own type. Every record lands in
    /// exactly one bucket, and within a bucket the input order is kept.
    pub fn categorize<'a>(records: impl IntoIterator<Item = &'a ProjectMatch>) -> Self {
        let (learning, paid): (Vec<_>, Vec<_>) = records
            .into_iter()
            .map(SuggestionSummary::from_match)
            .partition(|s| s.category == SuggestionCategory::Learning);

        Self {
            learning,
            paid,
            active: SuggestionCategory::Learning,
        }
    }

    pub fn from_suggested(suggested: &SuggestedProjects) -> Self {
        Self::categorize(suggested.learning.iter().chain(suggested.paid.iter()))
    }

    pub fn select(&mut self, category: SuggestionCategory) {
        self.active = category;
    }

    pub fn bucket(&self, category: SuggestionCategory) -> &[SuggestionSummary] {
        match category {
            SuggestionCategory::Learning => &self.learning,
            SuggestionCategory::Paid => &self.paid,
        }
    }

    pub fn visible(&self) -> &[SuggestionSummary] {
        self.bucket(self.active)
    }

    pub fn tabs(&self) -> [TabCount<SuggestionCategory>; 2] {
        [SuggestionCategory::Learning, SuggestionCategory::Paid].map(|id| TabCount {
            id,
            label: id.tab_label(),
            count: self.bucket(id).len(),
        })
    }

    pub fn total(&self) -> usize {
        self.learning.len() + self.paid.len()
    }

    /// Empty-state text for the active tab, if it has nothing to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.visible().is_empty().then_some(EMPTY_SUGGESTIONS)
    }
}
