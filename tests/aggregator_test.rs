//! Tests for the dashboard view models built from match records.
//!
//! Pure data in, data out: no server or session is involved.
//!
//! Run with: `cargo test --test aggregator_test`
use freelancehub_client::aggregator::board::{BoardTab, EMPTY_PROJECTS, ProjectBoard, ProjectDetail};
use freelancehub_client::aggregator::progress::{ProgressStats, level_label, overall_progress};
use freelancehub_client::aggregator::ranking::rank_freelancers;
use freelancehub_client::aggregator::suggestions::{
    EMPTY_SUGGESTIONS, SuggestionBoard, SuggestionCategory, truncate_description,
};
use freelancehub_client::models::freelancers::{
    Freelancer, FreelancerStatus, ProjectPreference, Skill, SkillLevel,
};
use freelancehub_client::models::matches::{FreelancerMatch, ProjectMatch, SuggestedProjects};
use freelancehub_client::models::projects::{
    ClientRef, ClientSummary, Project, ProjectStatus, ProjectType,
};

fn freelancer(id: &str, skills: Vec<Skill>, completed: u32) -> Freelancer {
    Freelancer {
        id: id.to_string(),
        name: format!("Freelancer {id}"),
        email: Some(format!("{id}@example.com")),
        skills,
        completed_projects_count: completed,
        availability_hours: 20,
        preferred_project_type: ProjectPreference::Both,
        status: FreelancerStatus::Active,
    }
}

fn project(id: &str, project_type: ProjectType, status: ProjectStatus) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {id}"),
        description: "Build a landing page".to_string(),
        required_skills: vec!["SEO".to_string(), "Web Design".to_string()],
        project_type,
        budget: match project_type {
            ProjectType::Paid => Some(500.0),
            ProjectType::Learning => None,
        },
        duration: "2 weeks".to_string(),
        status,
        client_id: None,
        created_at: None,
    }
}

fn project_match(p: Project, score: u8) -> ProjectMatch {
    ProjectMatch {
        project: p,
        match_score: score,
        match_percentage: Some(f64::from(score)),
        matching_skills: vec!["SEO".to_string()],
    }
}

// ── Progress ──

#[test]
fn test_overall_progress_formula_and_cap() {
    assert_eq!(overall_progress(0), 0.0);
    assert!((overall_progress(3) - 30.0).abs() < 1e-9);
    assert_eq!(overall_progress(10), 100.0);
    assert_eq!(overall_progress(25), 100.0);
}

#[test]
fn test_overall_progress_is_monotonic_and_bounded() {
    let mut previous = overall_progress(0);
    for c in 1..=50 {
        let current = overall_progress(c);
        assert!(current >= previous, "progress dropped at {c}");
        assert!(current <= 100.0);
        previous = current;
    }
}

#[test]
fn test_level_label_is_binary() {
    assert_eq!(level_label(&[]), "Beginner");
    assert_eq!(level_label(&[Skill::beginner("SEO")]), "Beginner");
    assert_eq!(
        level_label(&[
            Skill::beginner("SEO"),
            Skill::new("Marketing", SkillLevel::Intermediate),
        ]),
        "Intermediate"
    );
}

#[test]
fn test_ten_completed_projects_graduates() {
    let f = freelancer("f1", vec![Skill::beginner("SEO")], 10);
    let stats = ProgressStats::from_freelancer(Some(&f));

    assert_eq!(stats.overall_progress, 100.0);
    assert_eq!(stats.progress_label(), "100%");
    assert!(stats.graduated);
    assert!(stats.banner().is_some());
}

#[test]
fn test_progress_stats_for_active_freelancer() {
    let f = freelancer(
        "f1",
        vec![
            Skill::beginner("SEO"),
            Skill::new("Web Design", SkillLevel::Intermediate),
        ],
        4,
    );
    let stats = ProgressStats::from_freelancer(Some(&f));

    assert_eq!(stats.skills_built, 2);
    assert_eq!(stats.level, "Intermediate");
    assert_eq!(stats.projects_completed, 4);
    assert_eq!(stats.progress_label(), "40%");
    assert_eq!(stats.completed_description(), "Total completed (active)");
    assert!(!stats.graduated);
    assert!(stats.banner().is_none());
}

#[test]
fn test_progress_stats_without_profile() {
    let stats = ProgressStats::from_freelancer(None);

    assert_eq!(stats.skills_built, 0);
    assert_eq!(stats.level, "Beginner");
    assert_eq!(stats.progress_label(), "0%");
    assert_eq!(stats.completed_description(), "Total completed (active)");
}

// ── Ranking ──

#[test]
fn test_ranked_freelancer_badge_and_skills() {
    let record = FreelancerMatch {
        freelancer: freelancer("f1", vec![Skill::beginner("SEO"), Skill::beginner("Marketing")], 2),
        match_score: 85,
        matching_skills: vec!["SEO".to_string()],
    };

    let ranked = rank_freelancers(&[record]);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].badge(), "85% Match");
    assert_eq!(ranked[0].matching_skills, vec!["SEO".to_string()]);
    assert_eq!(ranked[0].matching_skills_label(), "SEO");
    assert_eq!(ranked[0].role_label, "SEO, Marketing");
    assert_eq!(ranked[0].projects_label, "2 of 10");
    assert_eq!(ranked[0].availability_label(), "20 hours/week");
}

#[test]
fn test_ranking_keeps_server_order_and_duplicates() {
    let low = FreelancerMatch {
        freelancer: freelancer("a", vec![], 0),
        match_score: 40,
        matching_skills: vec![],
    };
    let high = FreelancerMatch {
        freelancer: freelancer("b", vec![], 0),
        match_score: 90,
        matching_skills: vec![],
    };

    let ranked = rank_freelancers(&[low.clone(), high, low]);
    let ids: Vec<&str> = ranked.iter().map(|r| r.freelancer_id.as_str()).collect();

    assert_eq!(ids, vec!["a", "b", "a"]);
    assert_eq!(ranked[0].role_label, "Freelancer");
    assert_eq!(ranked[0].matching_skills_label(), "N/A");
}

// ── Suggestions ──

#[test]
fn test_truncation_always_appends_ellipsis() {
    assert_eq!(truncate_description(""), "...");
    assert_eq!(truncate_description("Short brief"), "Short brief...");

    let exact = "x".repeat(100);
    assert_eq!(truncate_description(&exact), format!("{exact}..."));

    let long = format!("{}{}", "a".repeat(100), "tail that gets cut");
    assert_eq!(truncate_description(&long), format!("{}...", "a".repeat(100)));
}

#[test]
fn test_truncation_counts_characters_not_bytes() {
    let text = "é".repeat(120);
    let preview = truncate_description(&text);
    assert_eq!(preview.chars().count(), 103);
}

#[test]
fn test_partition_is_total_and_disjoint() {
    let records = vec![
        project_match(project("l1", ProjectType::Learning, ProjectStatus::Open), 70),
        project_match(project("p1", ProjectType::Paid, ProjectStatus::Open), 80),
        project_match(project("l2", ProjectType::Learning, ProjectStatus::Open), 60),
        project_match(project("p2", ProjectType::Paid, ProjectStatus::Open), 90),
        project_match(project("p3", ProjectType::Paid, ProjectStatus::Open), 50),
    ];

    let board = SuggestionBoard::categorize(&records);

    assert_eq!(board.learning.len() + board.paid.len(), records.len());
    assert!(board.learning.iter().all(|s| s.category == SuggestionCategory::Learning));
    assert!(board.paid.iter().all(|s| s.category == SuggestionCategory::Paid));

    let learning_ids: Vec<&str> = board.learning.iter().map(|s| s.project_id.as_str()).collect();
    assert_eq!(learning_ids, vec!["l1", "l2"]);

    let tabs = board.tabs();
    assert_eq!(tabs[0].label, "Learning Projects");
    assert_eq!(tabs[0].count, 2);
    assert_eq!(tabs[1].label, "Paid Projects");
    assert_eq!(tabs[1].count, 3);
}

#[test]
fn test_misfiled_server_bucket_is_recategorized() {
    let suggested = SuggestedProjects {
        learning: vec![project_match(project("p1", ProjectType::Paid, ProjectStatus::Open), 80)],
        paid: vec![],
    };

    let board = SuggestionBoard::from_suggested(&suggested);

    assert!(board.learning.is_empty());
    assert_eq!(board.paid.len(), 1);
}

#[test]
fn test_suggestion_summary_lines() {
    let paid = project_match(project("p1", ProjectType::Paid, ProjectStatus::Open), 85);
    let learning = project_match(project("l1", ProjectType::Learning, ProjectStatus::Open), 72);

    let board = SuggestionBoard::categorize([&paid, &learning]);
    let p = &board.paid[0];
    let l = &board.learning[0];

    assert_eq!(p.skill_tags, "SEO, Web Design");
    assert_eq!(
        p.details(),
        [
            "Build a landing page...",
            "2 weeks",
            "Paid project - $500",
            "85% match"
        ]
    );
    assert_eq!(p.badge(), "85% Match");
    assert_eq!(l.annotation, "Learning project");
    assert_eq!(l.match_label, "72% match");
}

#[test]
fn test_summary_without_skills_or_percentage() {
    let mut p = project("l1", ProjectType::Learning, ProjectStatus::Open);
    p.required_skills.clear();
    let record = ProjectMatch {
        project: p,
        match_score: 64,
        match_percentage: None,
        matching_skills: vec![],
    };

    let board = SuggestionBoard::categorize([&record]);

    assert_eq!(board.learning[0].skill_tags, "General");
    assert_eq!(board.learning[0].match_label, "64% match");
}

#[test]
fn test_empty_suggestions_show_empty_state() {
    let board = SuggestionBoard::from_suggested(&SuggestedProjects::default());

    let tabs = board.tabs();
    assert_eq!(tabs[0].count, 0);
    assert_eq!(tabs[1].count, 0);
    assert_eq!(board.empty_message(), Some(EMPTY_SUGGESTIONS));
}

#[test]
fn test_selecting_a_tab_changes_visible_bucket() {
    let records = vec![project_match(project("p1", ProjectType::Paid, ProjectStatus::Open), 80)];
    let mut board = SuggestionBoard::categorize(&records);

    assert_eq!(board.active, SuggestionCategory::Learning);
    assert!(board.visible().is_empty());
    assert!(board.empty_message().is_some());

    board.select(SuggestionCategory::Paid);
    assert_eq!(board.visible().len(), 1);
    assert!(board.empty_message().is_none());
}

// ── Project board ──

#[test]
fn test_board_tabs_count_exact_status_but_open_lists_in_progress() {
    let projects = vec![
        project("a", ProjectType::Paid, ProjectStatus::Open),
        project("b", ProjectType::Learning, ProjectStatus::InProgress),
        project("c", ProjectType::Paid, ProjectStatus::Completed),
    ];

    let board = ProjectBoard::build(&projects, BoardTab::Open, "");

    assert_eq!(board.tabs[0].label, "Ongoing/Open");
    assert_eq!(board.tabs[0].count, 1);
    assert_eq!(board.tabs[1].count, 1);
    let ids: Vec<&str> = board.cards.iter().map(|c| c.project_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_board_search_is_case_insensitive() {
    let mut logo = project("a", ProjectType::Paid, ProjectStatus::Open);
    logo.title = "Logo Design".to_string();
    let mut site = project("b", ProjectType::Learning, ProjectStatus::Open);
    site.title = "Website Redesign".to_string();

    let board = ProjectBoard::build(&[logo, site], BoardTab::Open, "LOGO");

    assert_eq!(board.cards.len(), 1);
    assert_eq!(board.cards[0].title, "Logo Design");
    assert_eq!(board.cards[0].budget_label, "Budget: $500");
    assert_eq!(board.cards[0].skills_label, "2 Skills");

    let none = ProjectBoard::build(&[], BoardTab::Completed, "");
    assert_eq!(none.empty_message(), Some(EMPTY_PROJECTS));
}

#[test]
fn test_project_detail_labels() {
    let mut p = project("a", ProjectType::Paid, ProjectStatus::InProgress);
    p.client_id = Some(ClientRef::Populated(ClientSummary {
        id: "c1".to_string(),
        name: Some("Acme".to_string()),
    }));

    let detail = ProjectDetail::new(p, &[]);

    assert_eq!(detail.status_label, "In Progress");
    assert_eq!(detail.type_label, "Paid - $500");
    assert_eq!(detail.client_name.as_deref(), Some("Acme"));
    assert!(detail.matches.is_empty());

    let mut learning = project("b", ProjectType::Learning, ProjectStatus::Open);
    learning.client_id = Some(ClientRef::Id("c1".to_string()));
    let detail = ProjectDetail::new(learning, &[]);
    assert_eq!(detail.type_label, "Learning/Unpaid");
    assert_eq!(detail.client_name.as_deref(), Some("Client"));
}
