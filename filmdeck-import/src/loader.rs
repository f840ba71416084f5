//! File- and reader-level CSV loaders.
//!
//! One loader per entity file. A malformed record fails the whole load,
//! wrapped with its 1-based record number so the caller can point at the
//! offending line.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use filmdeck_core::{Film, Person, Subscription};

use crate::error::ImportError;
use crate::record::{film_from_record, person_from_record, subscription_from_record};

/// Read film records from any reader.
pub fn read_films<R: Read>(input: R) -> Result<Vec<Film>, ImportError> {
    read_records(input, film_from_record)
}

/// Read person records from any reader.
pub fn read_people<R: Read>(input: R) -> Result<Vec<Person>, ImportError> {
    read_records(input, person_from_record)
}

/// Read subscription records from any reader.
pub fn read_subscriptions<R: Read>(input: R) -> Result<Vec<Subscription>, ImportError> {
    read_records(input, subscription_from_record)
}

/// Load film records from a CSV file.
pub fn load_films(path: impl AsRef<Path>) -> Result<Vec<Film>, ImportError> {
    let films = read_films(File::open(path.as_ref())?)?;
    log::debug!("loaded {} films from {}", films.len(), path.as_ref().display());
    Ok(films)
}

/// Load person records from a CSV file.
pub fn load_people(path: impl AsRef<Path>) -> Result<Vec<Person>, ImportError> {
    let people = read_people(File::open(path.as_ref())?)?;
    log::debug!("loaded {} people from {}", people.len(), path.as_ref().display());
    Ok(people)
}

/// Load subscription records from a CSV file.
pub fn load_subscriptions(path: impl AsRef<Path>) -> Result<Vec<Subscription>, ImportError> {
    let subscriptions = read_subscriptions(File::open(path.as_ref())?)?;
    log::debug!(
        "loaded {} subscriptions from {}",
        subscriptions.len(),
        path.as_ref().display()
    );
    Ok(subscriptions)
}

fn read_records<R, T, F>(input: R, parse: F) -> Result<Vec<T>, ImportError>
where
    R: Read,
    F: Fn(&csv::StringRecord) -> Result<T, ImportError>,
{
    // flexible: field-count mismatches are our FieldCount error, not csv's
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut parsed = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let value = parse(&record).map_err(|err| ImportError::record(index + 1, err))?;
        parsed.push(value);
    }
    Ok(parsed)
}
