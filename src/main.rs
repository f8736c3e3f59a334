mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daylee_core::Daylee;
use daylee_core::config::DayleeConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "daylee")]
#[command(about = "A shared family calendar with a scripted schedule assistant")]
struct Cli {
    /// Log what daylee is doing to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new family calendar
    Create {
        /// Family name (e.g. "The Smiths")
        name: String,

        /// Family member (repeat for each member)
        #[arg(short, long = "member")]
        members: Vec<String>,
    },
    /// Join a family calendar by its code
    Join {
        /// Family code (e.g. "ABC123")
        code: String,
    },
    /// Forget the current family calendar
    Logout,
    /// Show the current family calendar
    Status,
    /// List family members
    Members,
    /// Switch the active family member
    Switch {
        member: String,
    },
    /// Add an event
    Add {
        /// Event title (prompted for if missing)
        title: Option<String>,

        /// Date (e.g. "2026-03-20", "next friday"), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Time of day as HH:MM
        #[arg(short, long, default_value = "09:00")]
        time: String,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Member the event is for (repeat for several; prompted for if missing)
        #[arg(short, long = "member")]
        members: Vec<String>,
    },
    /// Delete an event by id
    Delete {
        id: u64,
    },
    /// List every event
    Events,
    /// List every event on one day
    Day {
        /// Date (e.g. "2026-03-20", "tomorrow"), defaults to today
        date: Option<String>,
    },
    /// Show a month grid
    Month {
        /// Month to show as YYYY-MM, defaults to the current month
        #[arg(short, long)]
        month: Option<String>,

        /// Months to move forward (or back, if negative) from that month
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// Ask the assistant a single question
    Ask {
        /// The question (e.g. "Can I play with friends on Saturday?")
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,

        /// Seed for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Chat with the assistant
    Chat {
        /// Seed for reproducible replies
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show configuration paths
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = DayleeConfig::load()?;
    let mut daylee = Daylee::open(config.session_store()?);

    match cli.command {
        Commands::Create { name, members } => commands::create::run(&mut daylee, &name, members),
        Commands::Join { code } => commands::join::run(&mut daylee, &code),
        Commands::Logout => commands::logout::run(&mut daylee),
        Commands::Status => commands::status::run(&daylee),
        Commands::Members => commands::members::list(&daylee),
        Commands::Switch { member } => commands::members::switch(&mut daylee, &member),
        Commands::Add {
            title,
            date,
            time,
            description,
            members,
        } => commands::add::run(&mut daylee, title, date, &time, description, members),
        Commands::Delete { id } => commands::delete::run(&mut daylee, id),
        Commands::Events => commands::events::list(&daylee),
        Commands::Day { date } => commands::events::day(&daylee, date.as_deref()),
        Commands::Month { month, offset } => commands::month::run(&daylee, month.as_deref(), offset),
        Commands::Ask { question, seed } => {
            commands::ask::run(&daylee, &config, &question.join(" "), seed).await
        }
        Commands::Chat { seed } => commands::chat::run(&daylee, &config, seed).await,
        Commands::Config => commands::config::run(&config),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("daylee_core=debug,daylee=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
