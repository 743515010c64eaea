use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres};

use super::RepositoryError;
use crate::features::regions::models::Region;

/// Read-only lookups shared by every level of the hierarchy.
///
/// Every method returns entities with their full ancestor chain populated.
#[async_trait]
pub trait RegionRepository<R: Region>: Send + Sync {
    /// Returns every record, ordered by ID. Empty when the table is empty.
    async fn find_all(&self) -> Result<Vec<R>, RepositoryError>;

    /// Returns the record with the given ID.
    ///
    /// # Errors
    ///
    /// `QueryNotFound` when no row matches, `Database` for anything else.
    async fn find_by_id(&self, id: &str) -> Result<R, RepositoryError>;

    /// Case-insensitive substring match on the entity's own name.
    async fn find_by_name(&self, keyword: &str) -> Result<Vec<R>, RepositoryError>;
}

/// Postgres implementation, parameterized by the entity's ancestor-join query
pub struct PgRegionRepository<R> {
    pool: PgPool,
    _region: PhantomData<fn() -> R>,
}

impl<R: Region> PgRegionRepository<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _region: PhantomData,
        }
    }

    /// Runs a multi-row statement with at most one bound argument.
    pub(super) async fn fetch_many(
        &self,
        statement: &str,
        argument: Option<&str>,
    ) -> Result<Vec<R>, RepositoryError> {
        let mut query = sqlx::query_as::<Postgres, R::Row>(statement);
        if let Some(argument) = argument {
            query = query.bind(argument);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            tracing::error!("Failed to fetch {} rows: {:?}", R::ENTITY, e);
            RepositoryError::Database(e)
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl<R: Region> RegionRepository<R> for PgRegionRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, RepositoryError> {
        self.fetch_many(&select_statement::<R>(None), None).await
    }

    async fn find_by_id(&self, id: &str) -> Result<R, RepositoryError> {
        let statement = select_statement::<R>(Some(&format!("{} = $1", R::ID_COLUMN)));

        let row = sqlx::query_as::<Postgres, R::Row>(&statement)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match RepositoryError::from_single(e) {
                RepositoryError::Database(e) => {
                    tracing::error!("Failed to fetch {} by ID {}: {:?}", R::ENTITY, id, e);
                    RepositoryError::Database(e)
                }
                not_found => not_found,
            })?;

        let region: R = row.into();
        tracing::debug!("Fetched {} {} ({})", R::ENTITY, region.id(), region.name());
        Ok(region)
    }

    async fn find_by_name(&self, keyword: &str) -> Result<Vec<R>, RepositoryError> {
        let statement = select_statement::<R>(Some(&contains_condition(R::NAME_COLUMN)));
        self.fetch_many(&statement, Some(&escape_like(keyword))).await
    }
}

/// Builds the full lookup statement for `R`, optionally filtered.
pub(super) fn select_statement<R: Region>(condition: Option<&str>) -> String {
    match condition {
        Some(condition) => format!(
            "{} WHERE {} ORDER BY {}",
            R::SELECT,
            condition,
            R::ID_COLUMN
        ),
        None => format!("{} ORDER BY {}", R::SELECT, R::ID_COLUMN),
    }
}

/// Case-insensitive substring condition on `column` against `$1`
pub(super) fn contains_condition(column: &str) -> String {
    format!("{} ILIKE '%' || $1 || '%'", column)
}

/// Escapes LIKE metacharacters so the keyword matches literally.
pub(super) fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
