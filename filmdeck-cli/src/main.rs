//! filmdeck CLI
//!
//! Batch driver for the in-memory catalog engine: loads film, people, and
//! subscription CSV files, runs queries against the loaded collections,
//! and prints reports in the engine's wire format.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

mod commands;
mod error;

use commands::Engine;
use error::CliError;

#[derive(Parser)]
#[command(name = "filmdeck")]
#[command(about = "In-memory catalog engine for films, people, and subscriptions", long_about = None)]
struct Cli {
    /// Film records CSV (name,HH:MM,genre,DD/MM/YYYY,rating,free)
    #[arg(long, global = true)]
    films: Option<PathBuf>,

    /// Person records CSV (document,name,surname,phone,email,address,cp,birthday)
    #[arg(long, global = true)]
    people: Option<PathBuf>,

    /// Subscription records CSV (id,document,start,end,plan,price,devices)
    #[arg(long, global = true)]
    subscriptions: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show collection counts
    Stats,

    /// List films
    Films {
        /// Sort order to apply before listing
        #[arg(long, value_enum)]
        sort: Option<FilmOrder>,
    },

    /// List the free-film index
    FreeFilms,

    /// Show the film with the earliest release date
    Oldest {
        /// Restrict the scan to the free-film index
        #[arg(long)]
        free: bool,
    },

    /// Show the longest film
    Longest {
        /// Restrict the scan to the free-film index
        #[arg(long)]
        free: bool,
    },

    /// List people with their recomputed VIP level
    People {
        /// Sort order to apply before listing
        #[arg(long, value_enum)]
        sort: Option<PeopleOrder>,
    },

    /// List subscriptions
    Subscriptions {
        /// Only subscriptions of this person
        #[arg(long, conflicts_with = "id")]
        document: Option<String>,

        /// Only the subscription with this id
        #[arg(long)]
        id: Option<u32>,
    },

    /// Show the most popular watchlist film
    Popular,

    /// Push a cataloged film onto a subscription's watchlist
    Watch {
        /// Subscription id
        #[arg(long)]
        id: u32,

        /// Name of a cataloged film
        #[arg(long)]
        film: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilmOrder {
    /// Ascending by release date
    Year,
    /// Descending by rating
    Rating,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PeopleOrder {
    /// Descending by VIP level
    Vip,
    /// Ascending by document
    Document,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!(
                "{} {err}",
                "error:".if_supports_color(Stderr, |t| t.red())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut engine = Engine::load(
        cli.films.as_deref(),
        cli.people.as_deref(),
        cli.subscriptions.as_deref(),
    )?;

    match cli.command {
        Commands::Stats => commands::run_stats(&engine),
        Commands::Films { sort } => commands::run_films(&mut engine, sort),
        Commands::FreeFilms => commands::run_free_films(&engine),
        Commands::Oldest { free } => commands::run_oldest(&engine, free),
        Commands::Longest { free } => commands::run_longest(&engine, free),
        Commands::People { sort } => commands::run_people(&mut engine, sort),
        Commands::Subscriptions { document, id } => {
            commands::run_subscriptions(&engine, document.as_deref(), id)
        }
        Commands::Popular => commands::run_popular(&engine),
        Commands::Watch { id, film } => commands::run_watch(&mut engine, id, &film)?,
    }
    Ok(())
}
