//! Station catalog error types.

/// Errors that can occur when loading the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No usable stations were supplied
    #[error("station catalog is empty")]
    EmptyCatalog,

    /// Catalog file could not be opened
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV header could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            CatalogError::EmptyCatalog.to_string(),
            "station catalog is empty"
        );

        let err = CatalogError::Io {
            path: "stations.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "failed to read catalog stations.csv: missing");
    }
}
