//! Dense, id-keyed collection of subscriptions.
//!
//! Ids are ledger-assigned and always form a contiguous `1..=count` range
//! in ledger order: `add` hands out `count + 1` and `remove` renumbers the
//! survivors. Input ids are never trusted.

use filmdeck_core::{Film, Subscription};
use filmdeck_registry::PeopleRegistry;

use crate::error::LedgerError;

/// Spend required per VIP level, in the ledger's currency.
const VIP_LEVEL_SPEND: f64 = 500.0;

/// The owning collection of all subscriptions.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionLedger {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscription for a registered person.
    ///
    /// Fails with [`LedgerError::DuplicateSubscription`] if an entry with
    /// the same terms exists, and with [`LedgerError::PersonNotFound`] if
    /// the document is not in the registry. On success the ledger assigns
    /// the next sequential id and returns it; whatever id the input
    /// carried is discarded.
    pub fn add(
        &mut self,
        people: &PeopleRegistry,
        mut subscription: Subscription,
    ) -> Result<u32, LedgerError> {
        if self
            .subscriptions
            .iter()
            .any(|existing| existing.same_terms(&subscription))
        {
            return Err(LedgerError::DuplicateSubscription);
        }
        if people.find(&subscription.document).is_none() {
            return Err(LedgerError::PersonNotFound {
                document: subscription.document,
            });
        }

        let id = self.subscriptions.len() as u32 + 1;
        subscription.id = id;
        self.subscriptions.push(subscription);
        Ok(id)
    }

    /// Remove a subscription by id and renumber the survivors so ids are
    /// again contiguous `1..=count` in ledger order.
    pub fn remove(&mut self, id: u32) -> Result<(), LedgerError> {
        let pos = self
            .subscriptions
            .iter()
            .position(|subscription| subscription.id == id)
            .ok_or(LedgerError::SubscriptionNotFound { id })?;
        self.subscriptions.remove(pos);

        for (i, subscription) in self.subscriptions.iter_mut().enumerate() {
            subscription.id = i as u32 + 1;
        }
        Ok(())
    }

    /// Look up a subscription by id. Linear scan.
    pub fn find_by_id(&self, id: u32) -> Option<&Subscription> {
        self.subscriptions
            .iter()
            .find(|subscription| subscription.id == id)
    }

    /// All subscriptions for a document, as independent deep copies
    /// (watchlists included), ascending by id.
    pub fn find_by_document(&self, document: &str) -> Vec<Subscription> {
        // ledger order is ascending-id order by the renumbering invariant
        self.subscriptions
            .iter()
            .filter(|subscription| subscription.document == document)
            .cloned()
            .collect()
    }

    /// Push a film onto the watchlist of the subscription with this id.
    pub fn push_to_watchlist(&mut self, id: u32, film: Film) -> Result<(), LedgerError> {
        let subscription = self
            .subscriptions
            .iter_mut()
            .find(|subscription| subscription.id == id)
            .ok_or(LedgerError::SubscriptionNotFound { id })?;
        subscription.watchlist.push(film);
        Ok(())
    }

    /// VIP level for a document: total subscription spend, one level per
    /// 500 spent, rounded down.
    pub fn vip_level_for(&self, document: &str) -> u32 {
        let total: f64 = self
            .subscriptions
            .iter()
            .filter(|subscription| subscription.document == document)
            .map(|subscription| subscription.price)
            .sum();
        (total / VIP_LEVEL_SPEND) as u32
    }

    /// Recompute and overwrite the VIP level of every registered person.
    pub fn update_vip_levels(&self, people: &mut PeopleRegistry) {
        for person in people.iter_mut() {
            person.vip_level = self.vip_level_for(&person.document);
        }
    }

    /// The most frequent film name across every watchlist.
    ///
    /// Subscriptions are scanned in ledger order and each watchlist from
    /// top to bottom; on a count tie the first name to reach the maximum
    /// wins. `None` when every watchlist is empty.
    pub fn most_popular_film(&self) -> Option<String> {
        let mut counts: Vec<(&str, u32)> = Vec::new();
        for subscription in &self.subscriptions {
            for film in subscription.watchlist.iter() {
                match counts.iter_mut().find(|(name, _)| *name == film.name) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((film.name.as_str(), 1)),
                }
            }
        }

        let mut best: Option<(&str, u32)> = None;
        for &(name, count) in &counts {
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((name, count));
            }
        }
        best.map(|(name, _)| name.to_string())
    }

    /// The subscription at `pos`, if in range.
    pub fn get(&self, pos: usize) -> Option<&Subscription> {
        self.subscriptions.get(pos)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Iterate subscriptions in ledger (ascending-id) order.
    pub fn iter(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.iter()
    }
}
