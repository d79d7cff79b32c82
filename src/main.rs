//! StudyHub CLI
//!
//! Command-line front end for the StudyHub API:
//! - Search topics and track progress
//! - Browse practice scenarios
//! - Check journal entries in the ledger simulator
//! - Show the progress dashboard

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studyhub::user::{FileStore, UserIdStore};
use studyhub::{
    dashboard, ledger, practice, search, status, ClientError, Config, LoggingConfig,
    ProgressStatus, Status, StatusKind, StudyHubClient,
};

#[derive(Parser)]
#[command(name = "studyhub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Accounting study hub client")]
#[command(long_about = "StudyHub searches accounting topics, serves practice scenarios,\nchecks journal entries and tracks your study progress.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config and STUDYHUB_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/studyhub/config.toml or ./studyhub.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search topics by name
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Record progress on a topic
    Track {
        /// Topic id (shown by `search`)
        topic_id: i64,
        /// viewed, in_progress or mastered
        status: ProgressStatus,
        /// Optional note stored with the entry
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List topics that have practice scenarios
    Topics,

    /// List practice scenarios
    Scenarios {
        /// Only scenarios for this topic
        #[arg(short, long)]
        topic: Option<i64>,
    },

    /// Show one practice scenario
    Scenario {
        /// Scenario id
        id: i64,
    },

    /// Check journal entries with the ledger simulator
    Ledger {
        /// Check against this scenario (default: balance only)
        #[arg(short, long)]
        template: Option<i64>,
        /// Entries as account:debit:credit, e.g. "Supplies:500:" "Accounts Payable::500"
        #[arg(required = true)]
        entries: Vec<String>,
    },

    /// Show the progress dashboard
    Dashboard {
        /// User id (default: configured or saved id)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show or change the saved user id
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Check that the API is reachable
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Print the saved user id
    Show,
    /// Save a user id
    Set { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    let base_url = cli.api_url.clone().unwrap_or_else(|| config.api.base_url.clone());
    let client = StudyHubClient::new(&base_url);
    let store = FileStore::new(config.user.state_dir());
    tracing::debug!(api = %client.base_url(), store = ?store.path(), "Starting");

    match cli.command {
        Commands::Search { query } => {
            let raw = query.join(" ");
            let query = match search::normalize_query(&raw) {
                Ok(q) => q,
                Err(e) => exit_with(&e.status()),
            };

            report(&Status::info(status::SEARCHING));
            let topics = match client.search(query).await {
                Ok(topics) => topics,
                Err(e) => fail(status::SEARCH_UNREACHABLE, &e),
            };

            match cli.format {
                OutputFormat::Json => print_json(&topics)?,
                OutputFormat::Table => print_topics(&topics),
            }
            report(&search::results_status(&topics));
        }

        Commands::Track {
            topic_id,
            status: progress,
            notes,
        } => {
            let user_id = match config.user.id.as_deref().and_then(studyhub::user::normalize) {
                Some(id) => id,
                None => studyhub::user::ensure_user_id(&store, prompt_user_id),
            };

            match client.log_progress(&user_id, topic_id, progress, notes).await {
                Ok(logged) => {
                    tracing::debug!(id = logged.id, topic_id = logged.topic_id, "Progress stored");
                    report(&Status::success(status::PROGRESS_LOGGED));
                }
                Err(e) if e.is_server_response() => fail(status::PROGRESS_REJECTED, &e),
                Err(e) => fail(status::PROGRESS_UNREACHABLE, &e),
            }
        }

        Commands::Topics => {
            let topics = match client.practice_topics().await {
                Ok(topics) => topics,
                Err(e) => fail(status::TOPICS_FAILED, &e),
            };

            match cli.format {
                OutputFormat::Json => print_json(&topics)?,
                OutputFormat::Table => {
                    println!("{:<6} {}", "ID", "Topic");
                    println!("{}", "-".repeat(40));
                    for topic in &topics {
                        println!("{:<6} {}", topic.id, topic.display_name());
                    }
                }
            }
        }

        Commands::Scenarios { topic } => {
            let result = match topic {
                Some(id) => client.templates_for_topic(id).await,
                None => client.practice_templates().await,
            };
            let templates = match result {
                Ok(templates) => templates,
                Err(e) => fail(status::SCENARIOS_FAILED, &e),
            };

            match cli.format {
                OutputFormat::Json => print_json(&templates)?,
                OutputFormat::Table => {
                    if templates.is_empty() {
                        println!("No scenarios.");
                    } else {
                        println!("{:<6} {:<6} {}", "ID", "Topic", "Scenario");
                        println!("{}", "-".repeat(96));
                        for t in &templates {
                            println!("{:<6} {:<6} {}", t.id, t.topic_id, practice::list_label(t));
                        }
                    }
                }
            }
        }

        Commands::Scenario { id } => {
            let template = match client.practice_template(id).await {
                Ok(template) => template,
                Err(e) => fail(status::SCENARIO_FAILED, &e),
            };

            match cli.format {
                OutputFormat::Json => print_json(&template)?,
                OutputFormat::Table => {
                    println!("Scenario #{} (topic {})", template.id, template.topic_id);
                    println!();
                    println!("{}", template.template_text);
                    println!();
                    println!("Try it in the Ledger Simulator:");
                    println!("  studyhub ledger --template {} <account:debit:credit>...", template.id);
                }
            }
        }

        Commands::Ledger { template, entries } => {
            let rows = match entries
                .iter()
                .map(|spec| ledger::parse_row_spec(spec))
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(rows) => rows,
                Err(e) => exit_with(&Status::error(e.to_string())),
            };
            let entries = match ledger::collect_entries(&rows) {
                Ok(entries) => entries,
                Err(e) => exit_with(&Status::error(e.to_string())),
            };

            report(&Status::info(status::CHECKING));
            let response = match client.validate_ledger(template, entries).await {
                Ok(response) => response,
                Err(e) => fail(status::LEDGER_UNREACHABLE, &e),
            };

            match cli.format {
                OutputFormat::Json => print_json(&response)?,
                OutputFormat::Table => {
                    println!("Total debits:  {:>12.2}", response.total_debits);
                    println!("Total credits: {:>12.2}", response.total_credits);
                    println!();
                }
            }
            report(&ledger::verdict(&response));
        }

        Commands::Dashboard { user } => {
            let user_id = user
                .as_deref()
                .and_then(studyhub::user::normalize)
                .or_else(|| config.user.id.as_deref().and_then(studyhub::user::normalize))
                .or_else(|| store.load());

            let Some(user_id) = user_id else {
                eprintln!("No user id. Pass --user or run `studyhub user set <id>`.");
                std::process::exit(1);
            };
            if user.is_some() {
                if let Err(e) = store.save(&user_id) {
                    tracing::warn!("Failed to save user id: {}", e);
                }
            }

            let summary = match client.dashboard(&user_id).await {
                Ok(summary) => summary,
                Err(e) => fail(status::DASHBOARD_UNREACHABLE, &e),
            };

            match cli.format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Table => {
                    println!("Dashboard for {}", user_id);
                    println!();
                    println!("  Viewed:       {}", summary.topics_viewed);
                    println!("  In progress:  {}", summary.topics_in_progress);
                    println!("  Mastered:     {}", summary.topics_mastered);
                    println!();
                    if summary.recent_activity.is_empty() {
                        println!("No recent activity");
                    } else {
                        println!("Recent activity:");
                        for activity in &summary.recent_activity {
                            println!("  {}", dashboard::activity_line(activity));
                        }
                    }
                }
            }
        }

        Commands::User { action } => match action {
            UserAction::Show => match store.load() {
                Some(id) => println!("{}", id),
                None => {
                    eprintln!("No user id saved.");
                    std::process::exit(1);
                }
            },
            UserAction::Set { id } => {
                store.save(&id)?;
                match store.load() {
                    Some(saved) => println!("User id saved: {}", saved),
                    None => println!("User id cleared."),
                }
            }
        },

        Commands::Status => match client.health().await {
            Ok(health) => {
                println!("StudyHub v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!("API: {}", client.base_url());
                println!("API Status: {}", health.status);
            }
            Err(e) => {
                eprintln!("Cannot connect to the StudyHub API at {}", client.base_url());
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },

        Commands::Config { output } => {
            let config = studyhub::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("studyhub={}", config.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Print a status line; errors go to stderr
fn report(status: &Status) {
    match status.kind {
        StatusKind::Error | StatusKind::Info => eprintln!("{}", status),
        StatusKind::Success => println!("{}", status),
    }
}

fn exit_with(status: &Status) -> ! {
    report(status);
    std::process::exit(1);
}

/// Show the generic message for a failed request and exit
fn fail(message: &str, error: &ClientError) -> ! {
    tracing::error!(error = %error, "Request failed");
    exit_with(&Status::error(message))
}

fn prompt_user_id() -> Option<String> {
    eprint!("{} ", status::USER_ID_PROMPT);
    std::io::stderr().flush().ok()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line).ok()?;
    Some(line)
}

fn print_json<T: serde::Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_topics(topics: &[studyhub::Topic]) {
    for topic in topics {
        println!("[{}] {}", topic.id, topic.display_name());
        println!("    {}", topic.reference_line());
        for link in topic.links() {
            println!("    {}: {}", link.label, link.href);
        }
        let labels: Vec<String> = ProgressStatus::ALL.iter().map(|s| s.to_string()).collect();
        println!("    Track: studyhub track {} <{}>", topic.id, labels.join("|"));
        println!();
    }
}
