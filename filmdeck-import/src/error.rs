use thiserror::Error;

/// Errors that can occur during CSV ingestion.
#[derive(Debug, Error)]
pub enum ImportError {
    /// I/O error while reading the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level read error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The record does not have the documented field count
    #[error("wrong field count: expected {expected}, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A field failed validation
    #[error("invalid {field} '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A record failed to parse, by 1-based record number
    #[error("record {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: Box<ImportError>,
    },
}

impl ImportError {
    pub fn invalid_field(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn record(line: usize, source: ImportError) -> Self {
        Self::Record {
            line,
            source: Box::new(source),
        }
    }
}
