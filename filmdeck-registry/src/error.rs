use thiserror::Error;

/// Errors that can occur while mutating the people registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A person with this document is already registered
    #[error("duplicate person: document '{document}'")]
    DuplicatePerson { document: String },

    /// No person with this document exists
    #[error("person not found: document '{document}'")]
    PersonNotFound { document: String },
}
