mod client;
mod commands;
mod render;
mod session;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docket_core::User;
use docket_core::config::DocketConfig;

use crate::client::ApiClient;
use crate::session::SessionStore;

#[derive(Parser)]
#[command(name = "docket")]
#[command(about = "Your law firm's agenda: events, comments and team from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with your registered email
    Login {
        email: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show who is currently logged in
    Whoami,
    /// Weekly calendar view of the agenda
    Agenda {
        /// Any date inside the week to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Only show events of this type (e.g. audiencia, reuniao)
        #[arg(short = 't', long = "type")]
        event_type: Option<String>,

        /// Search in event titles and client names
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List diligences
    Tasks {
        /// Search in titles and client names
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Team roster with workload counters
    Team,
    /// Show one event with its comments
    Show {
        id: i64,
    },
    /// Create a new event
    New {
        #[arg(long)]
        title: Option<String>,

        /// Event type (e.g. audiencia, reuniao, prazo)
        #[arg(short = 't', long = "type")]
        event_type: Option<String>,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Time (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// Client name, if the event concerns one
        #[arg(short, long)]
        client: Option<String>,
    },
    /// Change an event's status
    Status {
        id: i64,
        /// New status (pendente, confirmado, concluido, urgente, cancelado)
        status: String,
    },
    /// Add a comment to an event
    Comment {
        id: i64,
        text: String,
    },
    /// Delete an event
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Import events from the external calendar
    Sync,
    /// Events happening today
    Today,
    /// Events happening this week
    Week,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = DocketConfig::load()?;
    let client = ApiClient::new(config.api_base_url);
    let sessions = SessionStore::default_location()?;

    match cli.command {
        Commands::Login { email } => commands::login::run(&client, &sessions, email).await,
        Commands::Logout => commands::login::logout(&sessions),
        Commands::Whoami => commands::login::whoami(&sessions),
        Commands::Agenda { date, event_type, search } => {
            let user = require_session(&sessions)?;
            commands::agenda::run(&client, &user, date, event_type, search).await
        }
        Commands::Tasks { search } => {
            require_session(&sessions)?;
            commands::tasks::run(&client, search).await
        }
        Commands::Team => {
            require_session(&sessions)?;
            commands::team::run(&client).await
        }
        Commands::Show { id } => {
            require_session(&sessions)?;
            commands::show::run(&client, id).await
        }
        Commands::New { title, event_type, date, time, location, client: client_name } => {
            let user = require_session(&sessions)?;
            commands::new::run(&client, &user, title, event_type, date, time, location, client_name)
                .await
        }
        Commands::Status { id, status } => {
            let user = require_session(&sessions)?;
            commands::status::run(&client, &user, id, &status).await
        }
        Commands::Comment { id, text } => {
            let user = require_session(&sessions)?;
            commands::comment::run(&client, &user, id, &text).await
        }
        Commands::Delete { id, yes } => {
            let user = require_session(&sessions)?;
            commands::delete::run(&client, &user, id, yes).await
        }
        Commands::Sync => {
            require_session(&sessions)?;
            commands::sync::run(&client).await
        }
        Commands::Today => {
            require_session(&sessions)?;
            commands::feeds::today(&client).await
        }
        Commands::Week => {
            require_session(&sessions)?;
            commands::feeds::week(&client).await
        }
    }
}

fn require_session(sessions: &SessionStore) -> Result<User> {
    sessions.load().ok_or_else(|| docket_core::DocketError::NoSession.into())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
