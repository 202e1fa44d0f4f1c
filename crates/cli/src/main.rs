//! LightBnB CLI - Query and populate the LightBnB store from a shell.
//!
//! # Usage
//!
//! ```bash
//! # Look up a user (email match ignores case)
//! lightbnb users get --email Tristan.Jacobs@gmail.com
//! lightbnb users get --id 3
//!
//! # Add a user
//! lightbnb users add -n "Eva Stanley" -e evastanley@example.com -p secret
//!
//! # A guest's reservations (first row only, or --all for every row)
//! lightbnb reservations --guest 1 --limit 5 --all
//!
//! # Search listings
//! lightbnb properties search --city Vancouver --min-price 5000 --max-price 20000 --min-rating 4
//!
//! # Show the generated SQL without connecting
//! lightbnb properties search --owner 7 --limit 5 --explain
//!
//! # Add a listing from a JSON file
//! lightbnb properties add --file listing.json
//! ```
//!
//! # Environment Variables
//!
//! - `LIGHTBNB_DATABASE_URL` - `PostgreSQL` connection string (or `DATABASE_URL`)
//! - `RUST_LOG` - Log filter (default: `info`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lightbnb_core::{Email, UserId};
use lightbnb_store::search::DEFAULT_LIMIT;
use lightbnb_store::{Database, StoreConfig};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lightbnb")]
#[command(author, version, about = "LightBnB data-access tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up and add users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// List a guest's reservations
    Reservations {
        /// Guest user ID
        #[arg(short, long)]
        guest: UserId,

        /// Maximum number of rows the query returns
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,

        /// Print every row instead of only the first
        #[arg(long)]
        all: bool,
    },
    /// Search and add property listings
    Properties {
        #[command(subcommand)]
        action: PropertyAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Fetch a single user
    Get {
        /// Email address (matched case-insensitively)
        #[arg(short, long, conflicts_with = "id", required_unless_present = "id")]
        email: Option<Email>,

        /// User ID
        #[arg(short, long)]
        id: Option<UserId>,
    },
    /// Insert a user
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: Email,

        /// Password credential, stored as given
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum PropertyAction {
    /// Search listings, cheapest first
    Search(SearchArgs),
    /// Insert a listing read from a JSON file
    Add {
        /// Path to a JSON object with the listing fields
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Substring of the city name (case-sensitive)
    #[arg(long)]
    pub(crate) city: Option<String>,

    /// Owner user ID
    #[arg(long)]
    pub(crate) owner: Option<UserId>,

    /// Lowest nightly cost in cents (needs --max-price)
    #[arg(long)]
    pub(crate) min_price: Option<i32>,

    /// Highest nightly cost in cents (needs --min-price)
    #[arg(long)]
    pub(crate) max_price: Option<i32>,

    /// Lowest mean review rating
    #[arg(long)]
    pub(crate) min_rating: Option<Decimal>,

    /// Maximum number of listings
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub(crate) limit: u32,

    /// Print the SQL and parameters instead of running the search
    #[arg(long)]
    pub(crate) explain: bool,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Explaining a search never touches the database
    if let Commands::Properties {
        action: PropertyAction::Search(args),
    } = &cli.command
        && args.explain
    {
        commands::properties::explain(args);
        return Ok(());
    }

    let config = StoreConfig::from_env()?;
    let db = Database::connect(&config).await?;

    let result = dispatch(&db, cli.command).await;
    db.close().await;
    Ok(result?)
}

async fn dispatch(db: &Database, command: Commands) -> Result<(), commands::CommandError> {
    match command {
        Commands::Users { action } => match action {
            UserAction::Get { email, id } => match (email, id) {
                (Some(email), _) => commands::users::get_by_email(db, &email).await,
                (None, Some(id)) => commands::users::get_by_id(db, id).await,
                (None, None) => Err(commands::CommandError::Usage(
                    "either --email or --id is required".to_owned(),
                )),
            },
            UserAction::Add {
                name,
                email,
                password,
            } => commands::users::add(db, name, email, password).await,
        },
        Commands::Reservations { guest, limit, all } => {
            commands::reservations::list(db, guest, limit, all).await
        }
        Commands::Properties { action } => match action {
            PropertyAction::Search(args) => commands::properties::search(db, &args).await,
            PropertyAction::Add { file } => commands::properties::add(db, &file).await,
        },
    }
}
