use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use freelancehub_client::aggregator::{BoardTab, SuggestionCategory};
use freelancehub_client::api::ApiClient;
use freelancehub_client::config::ClientConfig;
use freelancehub_client::events::EventBus;
use freelancehub_client::models::projects::{ProjectDraft, ProjectType};
use freelancehub_client::models::users::{RegisterRequest, Roles};
use freelancehub_client::session::{Access, Route, SessionStore, guard};
use freelancehub_client::views::client_dashboard::{self, ClientDashboard};
use freelancehub_client::views::{ViewError, ViewState, auth, freelancer_dashboard, onboarding};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "freelancehub", about = "FreelanceHub marketplace client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Client,
    Freelancer,
}

impl From<RoleArg> for Roles {
    fn from(r: RoleArg) -> Self {
        match r {
            RoleArg::Client => Roles::Client,
            RoleArg::Freelancer => Roles::Freelancer,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session
    Login {
        #[arg(long, value_enum, default_value = "freelancer")]
        role: RoleArg,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and persist the session
    Register {
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear every piece of session state
    Logout,
    /// Show the stored session user
    Whoami,
    /// Top matches and the project board for the signed-in client
    ClientDashboard {
        #[arg(long)]
        completed: bool,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Suggestions and progress for the signed-in freelancer
    FreelancerDashboard {
        #[arg(long)]
        paid: bool,
    },
    /// Project detail with its matched freelancers
    Project { id: String },
    /// Post a new project as the signed-in client
    PostProject {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long)]
        duration: String,
        /// Omit for a learning (unpaid) project
        #[arg(long)]
        budget: Option<String>,
    },
    /// Submit the stored freelancer onboarding draft
    FinishOnboarding,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("Failed to render output: {e}"),
    }
}

/// Print a panel; `false` when it failed to load.
fn show<T: Serialize>(state: &ViewState<T>) -> bool {
    match state {
        ViewState::Loaded(value) => {
            print_json(value);
            true
        }
        ViewState::Empty(message) => {
            println!("{message}");
            true
        }
        ViewState::Failed(e) => {
            eprintln!("{e}");
            false
        }
    }
}

fn render<T: Serialize>(state: &ViewState<T>) -> ExitCode {
    if show(state) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn fail(e: &ViewError) -> ExitCode {
    eprintln!("{e}");
    ExitCode::FAILURE
}

/// Refuse to run a protected command without the matching session.
async fn require(store: &SessionStore, route: Route) -> Result<(), ViewError> {
    let state = store.state().await?;
    match guard(route, state) {
        Access::Allow => Ok(()),
        Access::Redirect(to) => Err(ViewError::new(format!(
            "Not signed in. Log in first (entry point: {}).",
            to.path()
        ))),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    let store = match SessionStore::open(&config.session_backend).await {
        Ok(store) => store,
        Err(e) => return fail(&ViewError::from(e)),
    };
    if let Err(e) = store.init().await {
        return fail(&ViewError::from(e));
    }

    let api = match ApiClient::new(&config) {
        Ok(api) => api,
        Err(e) => return fail(&ViewError::from(e)),
    };
    tracing::debug!(base_url = api.base_url(), "API client ready");

    match cli.command {
        Command::Login {
            role,
            email,
            password,
        } => match auth::login(&api, &store, role.into(), &email, &password).await {
            Ok(route) => {
                println!("Logged in. Next: {}", route.path());
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },
        Command::Register {
            role,
            name,
            email,
            password,
        } => {
            let request = match Roles::from(role) {
                Roles::Client => RegisterRequest::client(name, email, password),
                Roles::Freelancer => RegisterRequest::freelancer(name, email, password),
            };
            match auth::signup(&api, &store, &request).await {
                Ok(route) => {
                    println!("Account created. Next: {}", route.path());
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&e),
            }
        }
        Command::Logout => match auth::logout(&store).await {
            Ok(outcome) => {
                println!("Logged out.");
                if outcome.reload {
                    println!("Session state reset. Restart from {}", outcome.redirect.path());
                }
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },
        Command::Whoami => match store.user().await {
            Ok(Some(user)) => {
                print_json(&user);
                ExitCode::SUCCESS
            }
            Ok(None) => {
                println!("Not signed in");
                ExitCode::SUCCESS
            }
            Err(e) => fail(&ViewError::from(e)),
        },
        Command::ClientDashboard { completed, search } => {
            if let Err(e) = require(&store, Route::ClientDashboard).await {
                return fail(&e);
            }
            let mut dashboard = ClientDashboard::load(&api, &store).await;
            if completed || !search.is_empty() {
                dashboard.tab = if completed {
                    BoardTab::Completed
                } else {
                    BoardTab::Open
                };
                dashboard.search = search;
                dashboard.board = client_dashboard::load_project_board(
                    &api,
                    &store,
                    dashboard.tab,
                    &dashboard.search,
                )
                .await;
            }
            println!("Welcome back, {}!", dashboard.welcome_name);
            let matches_ok = show(&dashboard.top_matches);
            let board_ok = show(&dashboard.board);
            if matches_ok && board_ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::FreelancerDashboard { paid } => {
            if let Err(e) = require(&store, Route::FreelancerDashboard).await {
                return fail(&e);
            }
            let mut state = freelancer_dashboard::load(&api, &store).await;
            if let ViewState::Loaded(dashboard) = &mut state {
                if paid {
                    dashboard.suggestions.select(SuggestionCategory::Paid);
                }
                println!("Welcome, {}!", dashboard.welcome_name);
                if let Some(message) = dashboard.suggestions.empty_message() {
                    println!("{message}");
                }
            }
            render(&state)
        }
        Command::Project { id } => {
            render(&client_dashboard::load_project_detail(&api, &store, &id).await)
        }
        Command::PostProject {
            title,
            description,
            skills,
            duration,
            budget,
        } => {
            let mut draft = ProjectDraft {
                title,
                description,
                project_type: Some(if budget.is_some() {
                    ProjectType::Paid
                } else {
                    ProjectType::Learning
                }),
                budget: budget.unwrap_or_default(),
                duration,
                ..Default::default()
            };
            for skill in &skills {
                if let Err(e) = client_dashboard::add_required_skill(&mut draft, skill) {
                    return fail(&e);
                }
            }
            let bus = EventBus::new();
            match client_dashboard::post_project(&api, &store, &bus, &draft).await {
                Ok(message) => {
                    println!("{message}");
                    ExitCode::SUCCESS
                }
                Err(e) => fail(&e),
            }
        }
        Command::FinishOnboarding => match onboarding::finish_freelancer(&api, &store).await {
            Ok(route) => {
                println!("Next: {}", route.path());
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },
    }
}
