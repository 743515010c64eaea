use async_trait::async_trait;

use super::region_repository::{contains_condition, escape_like, select_statement};
use super::{PgRegionRepository, RegionRepository, RepositoryError};
use crate::features::regions::models::Village;

/// Village lookups scoped by the parent district
#[async_trait]
pub trait VillageRepository: RegionRepository<Village> {
    /// Exact match on the parent district's ID.
    async fn find_by_district_id(&self, district_id: &str)
        -> Result<Vec<Village>, RepositoryError>;

    /// Case-insensitive substring match on the parent district's name.
    async fn find_by_district_name(&self, keyword: &str) -> Result<Vec<Village>, RepositoryError>;
}

#[async_trait]
impl VillageRepository for PgRegionRepository<Village> {
    async fn find_by_district_id(
        &self,
        district_id: &str,
    ) -> Result<Vec<Village>, RepositoryError> {
        let statement = select_statement::<Village>(Some(&format!(
            "{} = $1",
            Village::DISTRICT_ID_COLUMN
        )));
        self.fetch_many(&statement, Some(district_id)).await
    }

    async fn find_by_district_name(&self, keyword: &str) -> Result<Vec<Village>, RepositoryError> {
        let statement =
            select_statement::<Village>(Some(&contains_condition(Village::DISTRICT_NAME_COLUMN)));
        self.fetch_many(&statement, Some(&escape_like(keyword)))
            .await
    }
}
