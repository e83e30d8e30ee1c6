//! Error types for PropertyHub

use thiserror::Error;

/// Errors raised while loading a listing catalog.
///
/// Filtering itself is total and has no error cases; only getting catalog
/// data into memory can fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Could not read a listings file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Listings document is not valid catalog JSON
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
        assert!(format!("{}", err).starts_with("IO error:"));
    }

    #[test]
    fn test_error_from_parse() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = parse_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
