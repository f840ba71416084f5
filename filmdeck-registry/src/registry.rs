//! Dense, document-keyed collection of people.

use filmdeck_core::sort;
use filmdeck_core::Person;

use crate::error::RegistryError;

/// The owning collection of all registered people, unique by document.
///
/// Backed by a dense `Vec` in insertion order; removal shifts later
/// entries left so relative order is preserved.
#[derive(Debug, Clone, Default)]
pub struct PeopleRegistry {
    people: Vec<Person>,
}

impl PeopleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a person. Fails with [`RegistryError::DuplicatePerson`] if
    /// the document is already taken.
    pub fn add(&mut self, person: Person) -> Result<(), RegistryError> {
        if self.find(&person.document).is_some() {
            return Err(RegistryError::DuplicatePerson {
                document: person.document,
            });
        }
        self.people.push(person);
        Ok(())
    }

    /// Remove a person by document, preserving the order of the rest.
    pub fn remove(&mut self, document: &str) -> Result<(), RegistryError> {
        let pos = self
            .find(document)
            .ok_or_else(|| RegistryError::PersonNotFound {
                document: document.to_string(),
            })?;
        self.people.remove(pos);
        Ok(())
    }

    /// Position of the person with this document. Linear scan.
    pub fn find(&self, document: &str) -> Option<usize> {
        self.people
            .iter()
            .position(|person| person.document == document)
    }

    /// Position of the person with this email.
    ///
    /// Email uniqueness is not enforced at insertion, so a positive result
    /// requires exactly one match: zero matches and multiple matches both
    /// come back as `None`.
    pub fn find_by_email(&self, email: &str) -> Option<usize> {
        let mut matches = self
            .people
            .iter()
            .enumerate()
            .filter(|(_, person)| person.email == email);

        let (pos, _) = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(pos)
    }

    /// The person at `pos`, if in range.
    pub fn get(&self, pos: usize) -> Option<&Person> {
        self.people.get(pos)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate people in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    /// Mutable iteration, used by the ledger's VIP update pass.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.people.iter_mut()
    }

    /// Sort descending by VIP level.
    ///
    /// Partition sort is not stable: the order among people sharing a VIP
    /// level is unspecified.
    pub fn sort_by_vip_level(&mut self) {
        sort::quicksort_by(&mut self.people, |a, b| b.vip_level.cmp(&a.vip_level));
    }

    /// Sort ascending by document, lexicographically.
    pub fn sort_by_document(&mut self) {
        sort::quicksort_by(&mut self.people, |a, b| a.document.cmp(&b.document));
    }
}
