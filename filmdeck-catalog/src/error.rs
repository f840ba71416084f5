use thiserror::Error;

/// Errors that can occur while mutating a film catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A film with this name is already cataloged
    #[error("duplicate film: '{name}'")]
    DuplicateFilm { name: String },

    /// No film with this name exists
    #[error("film not found: '{name}'")]
    FilmNotFound { name: String },
}
