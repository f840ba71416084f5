//! Subscription records and the per-subscription watchlist stack.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::format_date;
use crate::film::Film;

// ── Watchlist ───────────────────────────────────────────────────────────────

/// A LIFO stack of films scoped to one subscription.
///
/// The last film pushed is the top. Films are owned, independent copies
/// rather than references into a catalog, so a watchlist stays valid
/// regardless of what happens to the catalog it was built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Watchlist {
    films: Vec<Film>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a film; it becomes the new top.
    pub fn push(&mut self, film: Film) {
        self.films.push(film);
    }

    /// Pop the top film, if any.
    pub fn pop(&mut self) -> Option<Film> {
        self.films.pop()
    }

    /// The most recently pushed film.
    pub fn top(&self) -> Option<&Film> {
        self.films.last()
    }

    pub fn len(&self) -> usize {
        self.films.len()
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    /// Iterate films from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &Film> {
        self.films.iter().rev()
    }
}

// ── Subscription ────────────────────────────────────────────────────────────

/// One subscription of a registered person.
///
/// `id` is assigned by the ledger at insertion time (input ids are only
/// validated, never kept) and renumbered after structural mutations so that
/// ids always form a contiguous `1..=count` range in ledger order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: u32,
    pub document: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub plan: String,
    pub price: f64,
    pub num_devices: u32,
    pub watchlist: Watchlist,
}

impl Subscription {
    /// Term equality: document, dates, plan, price, and device count.
    ///
    /// The ledger-assigned id and the watchlist are excluded: two entries
    /// with the same terms are duplicates no matter what they have queued.
    pub fn same_terms(&self, other: &Subscription) -> bool {
        self.document == other.document
            && self.start == other.start
            && self.end == other.end
            && self.plan == other.plan
            && self.price == other.price
            && self.num_devices == other.num_devices
    }
}

impl std::fmt::Display for Subscription {
    /// Wire rendering: `id;document;start;end;plan;price;devices`.
    ///
    /// Dates render as `DD/MM/YYYY`; the price renders as a general real
    /// (`300`, not `300.0`). The format is a contract with other tooling.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{};{}",
            self.id,
            self.document,
            format_date(self.start),
            format_date(self.end),
            self.plan,
            self.price,
            self.num_devices,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::film::{FilmGenre, Runtime};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn film(name: &str) -> Film {
        Film::new(
            name,
            Runtime::new(2, 0),
            FilmGenre::Drama,
            date(2000, 1, 1),
            7.0,
            false,
        )
    }

    fn premium() -> Subscription {
        Subscription {
            id: 1,
            document: "47051307Z".into(),
            start: date(2025, 1, 1),
            end: date(2025, 12, 31),
            plan: "Premium".into(),
            price: 149.99,
            num_devices: 4,
            watchlist: Watchlist::new(),
        }
    }

    #[test]
    fn wire_rendering() {
        assert_eq!(
            premium().to_string(),
            "1;47051307Z;01/01/2025;31/12/2025;Premium;149.99;4"
        );
    }

    #[test]
    fn whole_price_renders_without_decimals() {
        let mut sub = premium();
        sub.price = 300.0;
        assert_eq!(
            sub.to_string(),
            "1;47051307Z;01/01/2025;31/12/2025;Premium;300;4"
        );
    }

    #[test]
    fn same_terms_ignores_id_and_watchlist() {
        let a = premium();
        let mut b = premium();
        b.id = 9;
        b.watchlist.push(film("Arrival"));
        assert!(a.same_terms(&b));

        let mut c = premium();
        c.price = 150.0;
        assert!(!a.same_terms(&c));
    }

    #[test]
    fn watchlist_is_lifo() {
        let mut watchlist = Watchlist::new();
        watchlist.push(film("First"));
        watchlist.push(film("Second"));
        watchlist.push(film("Third"));

        assert_eq!(watchlist.len(), 3);
        assert_eq!(watchlist.top().map(|f| f.name.as_str()), Some("Third"));

        let names: Vec<&str> = watchlist.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Third", "Second", "First"]);

        assert_eq!(watchlist.pop().map(|f| f.name), Some("Third".to_string()));
        assert_eq!(watchlist.len(), 2);
    }

    #[test]
    fn clone_preserves_top_to_bottom_order() {
        let mut watchlist = Watchlist::new();
        watchlist.push(film("Bottom"));
        watchlist.push(film("Top"));

        let copy = watchlist.clone();
        let names: Vec<&str> = copy.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Top", "Bottom"]);
    }
}
