//! Turns raw match records and profiles into dashboard view models.
//!
//! Nothing here talks to the network or the session; every function is a
//! pure reshaping of data the API already returned.

pub mod board;
pub mod progress;
pub mod ranking;
pub mod suggestions;

pub use board::{BoardTab, ProjectBoard, ProjectCard, ProjectDetail};
pub use progress::{ProgressStats, level_label, overall_progress};
pub use ranking::{RankedFreelancer, rank_freelancers};
pub use suggestions::{SuggestionBoard, SuggestionCategory, SuggestionSummary, truncate_description};
