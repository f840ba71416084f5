//! The owning collection of subscriptions, with per-person aggregation.

pub mod error;
pub mod ledger;

pub use error::LedgerError;
pub use ledger::SubscriptionLedger;
