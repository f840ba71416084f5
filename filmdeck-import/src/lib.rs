//! CSV ingestion for the filmdeck engine.
//!
//! Input files are headerless, comma-delimited; each record maps to one
//! value type with a fixed field order and count. Parsing is strict: a
//! malformed field or wrong field count fails the record, and the loaders
//! fail the whole file naming the offending record.

pub mod error;
pub mod loader;
pub mod record;

pub use error::ImportError;
pub use loader::{
    load_films, load_people, load_subscriptions, read_films, read_people, read_subscriptions,
};
pub use record::{film_from_record, person_from_record, subscription_from_record};
