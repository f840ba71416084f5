//! Core value types for the filmdeck catalog engine.
//!
//! This crate defines the entity records (films, people, subscriptions),
//! their semicolon-separated wire renderings, and the generic sorting
//! routines shared by the owning collections. It performs no I/O; ingestion
//! lives in `filmdeck-import` and the owning collections live in
//! `filmdeck-catalog`, `filmdeck-registry`, and `filmdeck-ledger`.

pub mod date;
pub mod film;
pub mod person;
pub mod sort;
pub mod subscription;

pub use date::{DateParseError, format_date, parse_date};
pub use film::{Film, FilmGenre, GenreParseError, Runtime, RuntimeParseError};
pub use person::Person;
pub use subscription::{Subscription, Watchlist};
