use thiserror::Error;

/// Storage-level failures of a region lookup
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A single-row lookup matched nothing
    #[error("query with given params not found")]
    QueryNotFound,

    /// Connectivity, malformed statement, scan failure, ...
    #[error("database query failed: {0}")]
    Database(#[source] sqlx::Error),
}

impl RepositoryError {
    /// Classifies a failure of a single-row query.
    pub fn from_single(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::QueryNotFound,
            other => RepositoryError::Database(other),
        }
    }
}
