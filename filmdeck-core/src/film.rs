//! Film records and their wire rendering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::format_date;

/// Lowest accepted rating.
pub const RATING_MIN: f32 = 0.0;
/// Highest accepted rating.
pub const RATING_MAX: f32 = 10.0;

// ── Runtime ─────────────────────────────────────────────────────────────────

/// A film's running time, kept as the hours/minutes pair it is written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runtime {
    pub hours: u32,
    pub minutes: u32,
}

impl Runtime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Total length in minutes; the comparison key for "longest film".
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl std::fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Error returned when a string cannot be parsed into a `Runtime`.
#[derive(Debug, Clone)]
pub struct RuntimeParseError(pub String);

impl std::fmt::Display for RuntimeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid duration '{}': expected HH:MM", self.0)
    }
}

impl std::error::Error for RuntimeParseError {}

impl std::str::FromStr for Runtime {
    type Err = RuntimeParseError;

    /// Parse a fixed-width `HH:MM` duration (e.g. `02:49`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RuntimeParseError(s.to_string());
        if s.len() != 5 {
            return Err(err());
        }
        let (hours, minutes) = s.split_once(':').ok_or_else(err)?;
        Ok(Self {
            hours: hours.parse().map_err(|_| err())?,
            minutes: minutes.parse().map_err(|_| err())?,
        })
    }
}

// ── Genre ───────────────────────────────────────────────────────────────────

/// Film genres, identified on the wire by their numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilmGenre {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Romance,
    Documentary,
    Thriller,
}

/// All genre variants in wire-code order.
const ALL_GENRES: &[FilmGenre] = &[
    FilmGenre::Action,
    FilmGenre::Comedy,
    FilmGenre::Drama,
    FilmGenre::Horror,
    FilmGenre::SciFi,
    FilmGenre::Romance,
    FilmGenre::Documentary,
    FilmGenre::Thriller,
];

impl FilmGenre {
    /// Stable numeric wire code for this genre.
    pub fn code(&self) -> u8 {
        match self {
            Self::Action => 0,
            Self::Comedy => 1,
            Self::Drama => 2,
            Self::Horror => 3,
            Self::SciFi => 4,
            Self::Romance => 5,
            Self::Documentary => 6,
            Self::Thriller => 7,
        }
    }

    /// Human-readable genre name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
            Self::SciFi => "Sci-Fi",
            Self::Romance => "Romance",
            Self::Documentary => "Documentary",
            Self::Thriller => "Thriller",
        }
    }

    /// Look up a genre by wire code. Codes outside `0..=7` are rejected.
    pub fn from_code(code: i64) -> Result<Self, GenreParseError> {
        u8::try_from(code)
            .ok()
            .and_then(|c| ALL_GENRES.get(usize::from(c)).copied())
            .ok_or(GenreParseError(code))
    }

    /// All genre variants.
    pub fn all() -> &'static [FilmGenre] {
        ALL_GENRES
    }
}

impl std::fmt::Display for FilmGenre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a numeric code maps to no genre.
#[derive(Debug, Clone)]
pub struct GenreParseError(pub i64);

impl std::fmt::Display for GenreParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown genre code: {}", self.0)
    }
}

impl std::error::Error for GenreParseError {}

// ── Film ────────────────────────────────────────────────────────────────────

/// A catalog film record. The name is the unique key within a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub name: String,
    pub duration: Runtime,
    pub genre: FilmGenre,
    pub release: NaiveDate,
    pub rating: f32,
    pub is_free: bool,
}

impl Film {
    pub fn new(
        name: impl Into<String>,
        duration: Runtime,
        genre: FilmGenre,
        release: NaiveDate,
        rating: f32,
        is_free: bool,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            genre,
            release,
            rating,
            is_free,
        }
    }

    /// Identity comparison: name, release date, genre, and free flag.
    ///
    /// Duration and rating are display attributes and do not participate
    /// in film identity.
    pub fn same_film(&self, other: &Film) -> bool {
        self.name == other.name
            && self.release == other.release
            && self.genre == other.genre
            && self.is_free == other.is_free
    }
}

impl std::fmt::Display for Film {
    /// Wire rendering: `name;HH:MM;<genre code>;DD/MM/YYYY;<rating>;<0|1>`.
    ///
    /// The rating always carries one decimal place; the free flag renders
    /// as `0`/`1`. Other tooling consumes these lines; the format is a
    /// contract.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{};{};{};{};{:.1};{}",
            self.name,
            self.duration,
            self.genre.code(),
            format_date(self.release),
            self.rating,
            u8::from(self.is_free),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interstellar() -> Film {
        Film::new(
            "Interstellar",
            Runtime::new(2, 49),
            FilmGenre::SciFi,
            NaiveDate::from_ymd_opt(2014, 11, 7).unwrap(),
            8.6,
            false,
        )
    }

    #[test]
    fn wire_rendering() {
        assert_eq!(interstellar().to_string(), "Interstellar;02:49;4;07/11/2014;8.6;0");
    }

    #[test]
    fn rating_renders_one_decimal() {
        let mut film = interstellar();
        film.rating = 9.0;
        assert!(film.to_string().ends_with(";9.0;0"));
    }

    #[test]
    fn runtime_parse_round_trip() {
        let runtime: Runtime = "02:49".parse().unwrap();
        assert_eq!(runtime.total_minutes(), 169);
        assert_eq!(runtime.to_string(), "02:49");
    }

    #[test]
    fn runtime_parse_rejects_unpadded() {
        assert!("2:49".parse::<Runtime>().is_err());
        assert!("02-49".parse::<Runtime>().is_err());
    }

    #[test]
    fn genre_codes_round_trip() {
        for &genre in FilmGenre::all() {
            assert_eq!(FilmGenre::from_code(i64::from(genre.code())).unwrap(), genre);
        }
        assert!(FilmGenre::from_code(8).is_err());
        assert!(FilmGenre::from_code(-1).is_err());
    }

    #[test]
    fn same_film_ignores_duration_and_rating() {
        let a = interstellar();
        let mut b = interstellar();
        b.duration = Runtime::new(3, 0);
        b.rating = 1.0;
        assert!(a.same_film(&b));

        let mut c = interstellar();
        c.is_free = true;
        assert!(!a.same_film(&c));
    }
}
