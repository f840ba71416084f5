use thiserror::Error;

/// Errors that can occur while mutating the subscription ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The subscription references a document with no registered person
    #[error("person not found: document '{document}'")]
    PersonNotFound { document: String },

    /// A subscription with identical terms already exists
    #[error("duplicate subscription")]
    DuplicateSubscription,

    /// No subscription with this id exists
    #[error("subscription not found: id {id}")]
    SubscriptionNotFound { id: u32 },
}
