use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// CSV ingestion failed
    #[error("{0}")]
    Import(#[from] filmdeck_import::ImportError),

    /// Catalog mutation failed
    #[error("{0}")]
    Catalog(#[from] filmdeck_catalog::CatalogError),

    /// Registry mutation failed
    #[error("{0}")]
    Registry(#[from] filmdeck_registry::RegistryError),

    /// Ledger mutation failed
    #[error("{0}")]
    Ledger(#[from] filmdeck_ledger::LedgerError),

    /// Subscriptions cannot be validated without a people file
    #[error("--subscriptions requires --people")]
    SubscriptionsRequirePeople,
}
