//! The film catalog: an insertion-ordered primary collection plus a
//! secondary index of free films.
//!
//! The free-film index stores stable keys (film names) that are re-resolved
//! against the primary collection on access. It never holds references or
//! duplicate film data, so structural mutations and sorts of the primary
//! collection cannot invalidate it. The index invariant is purely that
//! every indexed name resolves to exactly one cataloged film with
//! `is_free == true`.

use chrono::NaiveDate;

use filmdeck_core::sort;
use filmdeck_core::Film;

use crate::error::CatalogError;

/// The owning collection of all films plus the derived free-film index.
#[derive(Debug, Clone, Default)]
pub struct FilmCatalog {
    films: Vec<Film>,
    free_index: Vec<String>,
    sorted_by_date: bool,
}

impl FilmCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a film to the catalog.
    ///
    /// Fails with [`CatalogError::DuplicateFilm`] if a film with the same
    /// name is already cataloged. Free films are also registered in the
    /// free-film index; if that registration fails the primary insertion
    /// is rolled back, so the catalog is left exactly as before the call.
    pub fn add(&mut self, film: Film) -> Result<(), CatalogError> {
        if self.find(&film.name).is_some() {
            return Err(CatalogError::DuplicateFilm { name: film.name });
        }

        let is_free = film.is_free;
        let name = film.name.clone();
        self.films.push(film);

        if is_free {
            if let Err(err) = self.register_free(&name) {
                self.films.pop();
                return Err(err);
            }
        }

        self.sorted_by_date = false;
        Ok(())
    }

    /// Remove a film by name.
    ///
    /// Deregisters it from the free-film index first (a no-op for paid
    /// films), then removes it from the primary collection. Fails with
    /// [`CatalogError::FilmNotFound`] if no such film exists.
    pub fn remove(&mut self, name: &str) -> Result<(), CatalogError> {
        self.free_index.retain(|indexed| indexed != name);

        let pos = self
            .films
            .iter()
            .position(|film| film.name == name)
            .ok_or_else(|| CatalogError::FilmNotFound {
                name: name.to_string(),
            })?;
        self.films.remove(pos);

        self.sorted_by_date = false;
        Ok(())
    }

    /// Look up a film by name. Linear scan.
    pub fn find(&self, name: &str) -> Option<&Film> {
        self.films.iter().find(|film| film.name == name)
    }

    /// Number of cataloged films.
    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Number of films in the free-film index.
    pub fn free_len(&self) -> usize {
        self.free_index.len()
    }

    /// Whether the catalog is currently date-sorted. Cleared by any
    /// structural mutation and by [`FilmCatalog::sort_by_rating`].
    pub fn is_sorted_by_date(&self) -> bool {
        self.sorted_by_date
    }

    /// Iterate all films in catalog order.
    pub fn films(&self) -> impl Iterator<Item = &Film> {
        self.films.iter()
    }

    /// Iterate the free films in index order, resolved against the
    /// primary collection.
    pub fn free_films(&self) -> impl Iterator<Item = &Film> {
        self.free_index.iter().filter_map(|name| self.find(name))
    }

    /// The longest cataloged film; on a duration tie the last film in
    /// catalog order wins.
    pub fn longest_film(&self) -> Option<&Film> {
        longest(self.films())
    }

    /// The longest free film; same tie-break as [`FilmCatalog::longest_film`].
    pub fn longest_free_film(&self) -> Option<&Film> {
        longest(self.free_films())
    }

    /// The film with the earliest release date; on a tie the first film in
    /// traversal order wins. With `free_only` the scan covers the
    /// free-film index instead of the whole catalog.
    pub fn oldest_film(&self, free_only: bool) -> Option<&Film> {
        if free_only {
            oldest(self.free_films())
        } else {
            oldest(self.films())
        }
    }

    /// Sort the catalog ascending by release date.
    ///
    /// Both the primary collection and the free-film index are ordered with
    /// the stable exchange sort, so films sharing a release date keep their
    /// insertion order.
    pub fn sort_by_year(&mut self) {
        sort::bubble_sort_by(&mut self.films, |a, b| a.release.cmp(&b.release));

        let mut free_index = std::mem::take(&mut self.free_index);
        sort::bubble_sort_by(&mut free_index, |a, b| {
            self.release_of(a).cmp(&self.release_of(b))
        });
        self.free_index = free_index;

        self.sorted_by_date = true;
    }

    /// Sort the catalog descending by rating. The free-film index is
    /// untouched: it resolves by name, so it stays valid, and its own
    /// order is only specified after [`FilmCatalog::sort_by_year`].
    pub fn sort_by_rating(&mut self) {
        sort::quicksort_by(&mut self.films, |a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self.sorted_by_date = false;
    }

    fn register_free(&mut self, name: &str) -> Result<(), CatalogError> {
        if self.free_index.iter().any(|indexed| indexed == name) {
            return Err(CatalogError::DuplicateFilm {
                name: name.to_string(),
            });
        }
        self.free_index.push(name.to_string());
        Ok(())
    }

    fn release_of(&self, name: &str) -> Option<NaiveDate> {
        self.find(name).map(|film| film.release)
    }
}

fn longest<'a>(films: impl Iterator<Item = &'a Film>) -> Option<&'a Film> {
    let mut best: Option<&Film> = None;
    for film in films {
        let beaten = best
            .is_some_and(|b| film.duration.total_minutes() < b.duration.total_minutes());
        if !beaten {
            // ties resolve to the later film in traversal order
            best = Some(film);
        }
    }
    best
}

fn oldest<'a>(films: impl Iterator<Item = &'a Film>) -> Option<&'a Film> {
    let mut best: Option<&Film> = None;
    for film in films {
        if best.is_none_or(|b| film.release < b.release) {
            // strict comparison: ties keep the earlier film
            best = Some(film);
        }
    }
    best
}
