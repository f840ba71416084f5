//! Command implementations over a loaded engine.

use std::path::Path;

use filmdeck_catalog::FilmCatalog;
use filmdeck_import::{load_films, load_people, load_subscriptions};
use filmdeck_ledger::SubscriptionLedger;
use filmdeck_registry::PeopleRegistry;

use crate::error::CliError;
use crate::{FilmOrder, PeopleOrder};

/// The three owning collections, loaded for one batch run.
pub(crate) struct Engine {
    pub catalog: FilmCatalog,
    pub people: PeopleRegistry,
    pub ledger: SubscriptionLedger,
}

impl Engine {
    /// Load whichever CSV files were given. Insertion failures (duplicate
    /// keys, unknown documents) abort the run: the batch either loads
    /// cleanly or not at all.
    pub fn load(
        films: Option<&Path>,
        people: Option<&Path>,
        subscriptions: Option<&Path>,
    ) -> Result<Self, CliError> {
        if subscriptions.is_some() && people.is_none() {
            return Err(CliError::SubscriptionsRequirePeople);
        }

        let mut engine = Self {
            catalog: FilmCatalog::new(),
            people: PeopleRegistry::new(),
            ledger: SubscriptionLedger::new(),
        };

        if let Some(path) = films {
            for film in load_films(path)? {
                engine.catalog.add(film)?;
            }
            log::info!(
                "cataloged {} films ({} free)",
                engine.catalog.len(),
                engine.catalog.free_len()
            );
        }

        if let Some(path) = people {
            for person in load_people(path)? {
                engine.people.add(person)?;
            }
            log::info!("registered {} people", engine.people.len());
        }

        if let Some(path) = subscriptions {
            for subscription in load_subscriptions(path)? {
                engine.ledger.add(&engine.people, subscription)?;
            }
            log::info!("recorded {} subscriptions", engine.ledger.len());
        }

        Ok(engine)
    }
}

pub(crate) fn run_stats(engine: &Engine) {
    println!("films: {}", engine.catalog.len());
    println!("free films: {}", engine.catalog.free_len());
    println!("people: {}", engine.people.len());
    println!("subscriptions: {}", engine.ledger.len());
}

pub(crate) fn run_films(engine: &mut Engine, order: Option<FilmOrder>) {
    match order {
        Some(FilmOrder::Year) => {
            if !engine.catalog.is_sorted_by_date() {
                engine.catalog.sort_by_year();
            }
        }
        Some(FilmOrder::Rating) => engine.catalog.sort_by_rating(),
        None => {}
    }
    for film in engine.catalog.films() {
        println!("{film}");
    }
}

pub(crate) fn run_free_films(engine: &Engine) {
    for film in engine.catalog.free_films() {
        println!("{film}");
    }
}

pub(crate) fn run_oldest(engine: &Engine, free: bool) {
    match engine.catalog.oldest_film(free) {
        Some(film) => println!("{film}"),
        None => println!("no result"),
    }
}

pub(crate) fn run_longest(engine: &Engine, free: bool) {
    let longest = if free {
        engine.catalog.longest_free_film()
    } else {
        engine.catalog.longest_film()
    };
    match longest {
        Some(film) => println!("{film}"),
        None => println!("no result"),
    }
}

pub(crate) fn run_people(engine: &mut Engine, order: Option<PeopleOrder>) {
    engine.ledger.update_vip_levels(&mut engine.people);
    match order {
        Some(PeopleOrder::Vip) => engine.people.sort_by_vip_level(),
        Some(PeopleOrder::Document) => engine.people.sort_by_document(),
        None => {}
    }
    for (pos, person) in engine.people.iter().enumerate() {
        println!(
            "{pos};{};{};{};{}",
            person.document, person.name, person.surname, person.vip_level
        );
    }
}

pub(crate) fn run_subscriptions(engine: &Engine, document: Option<&str>, id: Option<u32>) {
    if let Some(id) = id {
        match engine.ledger.find_by_id(id) {
            Some(subscription) => println!("{subscription}"),
            None => println!("no result"),
        }
        return;
    }
    if let Some(document) = document {
        for subscription in engine.ledger.find_by_document(document) {
            println!("{subscription}");
        }
        return;
    }
    for subscription in engine.ledger.iter() {
        println!("{subscription}");
    }
}

pub(crate) fn run_popular(engine: &Engine) {
    match engine.ledger.most_popular_film() {
        Some(name) => println!("{name}"),
        None => println!("no result"),
    }
}

pub(crate) fn run_watch(engine: &mut Engine, id: u32, name: &str) -> Result<(), CliError> {
    let film = engine
        .catalog
        .find(name)
        .cloned()
        .ok_or_else(|| filmdeck_catalog::CatalogError::FilmNotFound {
            name: name.to_string(),
        })?;

    engine.ledger.push_to_watchlist(id, film)?;

    if let Some(subscription) = engine.ledger.find_by_id(id) {
        println!("{subscription}");
        println!("watchlist: {} films", subscription.watchlist.len());
    }
    Ok(())
}
