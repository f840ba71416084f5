//! Field-level parsing of CSV records into value types.
//!
//! Field orders and counts are fixed per entity:
//!
//! - Film = `name,HH:MM,genre code,DD/MM/YYYY,rating,is_free`
//! - Person = `document,name,surname,phone,email,address,postal code,birthday`
//! - Subscription = `id,document,start,end,plan,price,devices`
//!
//! Subscription ids are parsed only to validate the record shape; the
//! ledger assigns its own ids at insertion.

use chrono::NaiveDate;
use csv::StringRecord;

use filmdeck_core::date::parse_date;
use filmdeck_core::film::{RATING_MAX, RATING_MIN};
use filmdeck_core::{Film, FilmGenre, Person, Runtime, Subscription, Watchlist};

use crate::error::ImportError;

/// Field count of a film record.
pub const FILM_FIELDS: usize = 6;
/// Field count of a person record.
pub const PERSON_FIELDS: usize = 8;
/// Field count of a subscription record.
pub const SUBSCRIPTION_FIELDS: usize = 7;

/// Parse a film from a 6-field record.
pub fn film_from_record(record: &StringRecord) -> Result<Film, ImportError> {
    check_field_count(record, FILM_FIELDS)?;

    let name = text_field(record, 0);
    let duration: Runtime = parse_field(record, 1, "duration")?;
    let genre = FilmGenre::from_code(int_field(record, 2, "genre code")?)
        .map_err(|err| ImportError::invalid_field("genre code", field(record, 2), err.to_string()))?;
    let release = date_field(record, 3, "release date")?;
    let rating = real_field(record, 4, "rating")?;
    if !(RATING_MIN..=RATING_MAX).contains(&(rating as f32)) {
        return Err(ImportError::invalid_field(
            "rating",
            field(record, 4),
            format!("expected a value in {RATING_MIN}..={RATING_MAX}"),
        ));
    }
    let is_free = flag_field(record, 5, "free flag")?;

    Ok(Film::new(name, duration, genre, release, rating as f32, is_free))
}

/// Parse a person from an 8-field record. The VIP level always starts at
/// zero; it is derived state, not input.
pub fn person_from_record(record: &StringRecord) -> Result<Person, ImportError> {
    check_field_count(record, PERSON_FIELDS)?;

    Ok(Person {
        document: text_field(record, 0),
        name: text_field(record, 1),
        surname: text_field(record, 2),
        phone: text_field(record, 3),
        email: text_field(record, 4),
        address: text_field(record, 5),
        postal_code: text_field(record, 6),
        birthday: date_field(record, 7, "birthday")?,
        vip_level: 0,
    })
}

/// Parse a subscription from a 7-field record. The watchlist starts empty.
pub fn subscription_from_record(record: &StringRecord) -> Result<Subscription, ImportError> {
    check_field_count(record, SUBSCRIPTION_FIELDS)?;

    let id = int_field(record, 0, "id")?;
    let id = u32::try_from(id).map_err(|_| {
        ImportError::invalid_field("id", field(record, 0), "expected a non-negative integer")
    })?;

    let price = real_field(record, 5, "price")?;
    if price < 0.0 {
        return Err(ImportError::invalid_field(
            "price",
            field(record, 5),
            "expected a non-negative value",
        ));
    }

    let num_devices = int_field(record, 6, "device count")?;
    if num_devices < 1 {
        return Err(ImportError::invalid_field(
            "device count",
            field(record, 6),
            "expected at least 1",
        ));
    }

    Ok(Subscription {
        id,
        document: text_field(record, 1),
        start: date_field(record, 2, "start date")?,
        end: date_field(record, 3, "end date")?,
        plan: text_field(record, 4),
        price,
        num_devices: num_devices as u32,
        watchlist: Watchlist::new(),
    })
}

fn check_field_count(record: &StringRecord, expected: usize) -> Result<(), ImportError> {
    if record.len() != expected {
        return Err(ImportError::FieldCount {
            expected,
            actual: record.len(),
        });
    }
    Ok(())
}

fn field<'a>(record: &'a StringRecord, index: usize) -> &'a str {
    record.get(index).unwrap_or("")
}

fn text_field(record: &StringRecord, index: usize) -> String {
    field(record, index).to_string()
}

fn int_field(record: &StringRecord, index: usize, name: &'static str) -> Result<i64, ImportError> {
    let value = field(record, index);
    value
        .trim()
        .parse()
        .map_err(|_| ImportError::invalid_field(name, value, "expected an integer"))
}

fn real_field(record: &StringRecord, index: usize, name: &'static str) -> Result<f64, ImportError> {
    let value = field(record, index);
    value
        .trim()
        .parse()
        .map_err(|_| ImportError::invalid_field(name, value, "expected a number"))
}

fn date_field(
    record: &StringRecord,
    index: usize,
    name: &'static str,
) -> Result<NaiveDate, ImportError> {
    let value = field(record, index);
    parse_date(value).map_err(|err| ImportError::invalid_field(name, value, err.to_string()))
}

fn parse_field<T: std::str::FromStr>(
    record: &StringRecord,
    index: usize,
    name: &'static str,
) -> Result<T, ImportError>
where
    T::Err: std::fmt::Display,
{
    let value = field(record, index);
    value
        .parse()
        .map_err(|err: T::Err| ImportError::invalid_field(name, value, err.to_string()))
}

fn flag_field(record: &StringRecord, index: usize, name: &'static str) -> Result<bool, ImportError> {
    match field(record, index) {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(ImportError::invalid_field(name, other, "expected 0 or 1")),
    }
}
