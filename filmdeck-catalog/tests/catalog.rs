use chrono::NaiveDate;
use filmdeck_catalog::{CatalogError, FilmCatalog};
use filmdeck_core::{Film, FilmGenre, Runtime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn film(name: &str, year: i32, free: bool) -> Film {
    Film::new(
        name,
        Runtime::new(2, 0),
        FilmGenre::Drama,
        date(year, 6, 15),
        7.0,
        free,
    )
}

#[test]
fn add_then_find_returns_equal_film() {
    let mut catalog = FilmCatalog::new();
    let added = film("Interstellar", 2014, false);
    catalog.add(added.clone()).unwrap();

    let found = catalog.find("Interstellar").unwrap();
    assert!(found.same_film(&added));
}

#[test]
fn duplicate_add_fails_and_leaves_counts_unchanged() {
    let mut catalog = FilmCatalog::new();
    catalog.add(film("Arrival", 2016, true)).unwrap();
    assert_eq!((catalog.len(), catalog.free_len()), (1, 1));

    let err = catalog.add(film("Arrival", 2016, true)).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateFilm { .. }));
    assert_eq!((catalog.len(), catalog.free_len()), (1, 1));
}

#[test]
fn free_films_are_indexed_and_deregistered_on_remove() {
    let mut catalog = FilmCatalog::new();
    catalog.add(film("Paid", 2020, false)).unwrap();
    catalog.add(film("Free", 2021, true)).unwrap();
    assert_eq!(catalog.free_len(), 1);

    let free: Vec<&str> = catalog.free_films().map(|f| f.name.as_str()).collect();
    assert_eq!(free, ["Free"]);

    catalog.remove("Free").unwrap();
    assert_eq!((catalog.len(), catalog.free_len()), (1, 0));
}

#[test]
fn remove_missing_film_fails() {
    let mut catalog = FilmCatalog::new();
    catalog.add(film("Arrival", 2016, false)).unwrap();

    let err = catalog.remove("Dune").unwrap_err();
    assert!(matches!(err, CatalogError::FilmNotFound { .. }));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn sort_by_year_orders_catalog_and_free_index() {
    // Scenario: A(2020, free), B(2019, free), C(2021, paid).
    let mut catalog = FilmCatalog::new();
    catalog.add(film("A", 2020, true)).unwrap();
    catalog.add(film("B", 2019, true)).unwrap();
    catalog.add(film("C", 2021, false)).unwrap();

    catalog.sort_by_year();

    let all: Vec<&str> = catalog.films().map(|f| f.name.as_str()).collect();
    assert_eq!(all, ["B", "A", "C"]);

    let free: Vec<&str> = catalog.free_films().map(|f| f.name.as_str()).collect();
    assert_eq!(free, ["B", "A"]);

    assert_eq!(catalog.free_len(), 2);
    assert_eq!(catalog.oldest_film(true).map(|f| f.name.as_str()), Some("B"));
}

#[test]
fn sort_by_year_is_stable_for_equal_dates() {
    let mut catalog = FilmCatalog::new();
    catalog.add(film("First", 2020, false)).unwrap();
    catalog.add(film("Second", 2020, false)).unwrap();
    catalog.add(film("Earlier", 2010, false)).unwrap();

    catalog.sort_by_year();

    let all: Vec<&str> = catalog.films().map(|f| f.name.as_str()).collect();
    assert_eq!(all, ["Earlier", "First", "Second"]);
}

#[test]
fn adjacent_releases_are_non_decreasing_after_sort() {
    let mut catalog = FilmCatalog::new();
    for (name, year, free) in [
        ("D", 2003, true),
        ("A", 2021, false),
        ("E", 1999, true),
        ("B", 2010, true),
        ("C", 2010, false),
    ] {
        catalog.add(film(name, year, free)).unwrap();
    }

    catalog.sort_by_year();

    let releases: Vec<_> = catalog.films().map(|f| f.release).collect();
    assert!(releases.windows(2).all(|pair| pair[0] <= pair[1]));

    let free_releases: Vec<_> = catalog.free_films().map(|f| f.release).collect();
    assert!(free_releases.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn sorted_flag_tracks_mutations() {
    let mut catalog = FilmCatalog::new();
    catalog.add(film("A", 2020, false)).unwrap();
    assert!(!catalog.is_sorted_by_date());

    catalog.sort_by_year();
    assert!(catalog.is_sorted_by_date());

    catalog.add(film("B", 2019, false)).unwrap();
    assert!(!catalog.is_sorted_by_date());

    catalog.sort_by_year();
    catalog.remove("A").unwrap();
    assert!(!catalog.is_sorted_by_date());

    catalog.sort_by_year();
    catalog.sort_by_rating();
    assert!(!catalog.is_sorted_by_date());
}

#[test]
fn sort_by_rating_orders_descending() {
    let mut catalog = FilmCatalog::new();
    let mut rated = |name: &str, rating: f32| {
        let mut entry = film(name, 2020, false);
        entry.rating = rating;
        catalog.add(entry).unwrap();
    };
    rated("Mid", 7.1);
    rated("Top", 9.3);
    rated("Low", 4.8);

    catalog.sort_by_rating();

    let all: Vec<&str> = catalog.films().map(|f| f.name.as_str()).collect();
    assert_eq!(all, ["Top", "Mid", "Low"]);
}

#[test]
fn longest_film_tie_goes_to_last_added() {
    let mut catalog = FilmCatalog::new();
    let mut timed = |name: &str, hours: u32, minutes: u32, free: bool| {
        let mut entry = film(name, 2020, free);
        entry.duration = Runtime::new(hours, minutes);
        catalog.add(entry).unwrap();
    };
    timed("Short", 1, 30, false);
    timed("LongA", 2, 45, true);
    timed("LongB", 2, 45, true);

    assert_eq!(catalog.longest_film().map(|f| f.name.as_str()), Some("LongB"));
    assert_eq!(
        catalog.longest_free_film().map(|f| f.name.as_str()),
        Some("LongB")
    );
}

#[test]
fn oldest_film_tie_goes_to_first_added() {
    let mut catalog = FilmCatalog::new();
    catalog.add(film("First", 1999, false)).unwrap();
    catalog.add(film("Second", 1999, false)).unwrap();
    catalog.add(film("Newer", 2015, false)).unwrap();

    assert_eq!(catalog.oldest_film(false).map(|f| f.name.as_str()), Some("First"));
}

#[test]
fn empty_catalog_queries() {
    let catalog = FilmCatalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.find("Anything").is_none());
    assert!(catalog.longest_film().is_none());
    assert!(catalog.longest_free_film().is_none());
    assert!(catalog.oldest_film(false).is_none());
    assert!(catalog.oldest_film(true).is_none());
}
