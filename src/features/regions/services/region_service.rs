use std::marker::PhantomData;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::regions::models::Region;
use crate::features::regions::repositories::RegionRepository;

/// Lookup service for one level of the hierarchy.
///
/// Chooses the query strategy from the keyword and maps storage entities
/// (`R`) into API models (`M`).
pub struct RegionService<R, M> {
    repository: Arc<dyn RegionRepository<R>>,
    _model: PhantomData<fn() -> M>,
}

impl<R, M> RegionService<R, M>
where
    R: Region,
    M: From<R> + Send,
{
    pub fn new(repository: Arc<dyn RegionRepository<R>>) -> Self {
        Self {
            repository,
            _model: PhantomData,
        }
    }

    /// Lists every record, or only those whose name contains `keyword`
    /// when it is non-empty.
    pub async fn get_all(&self, keyword: &str) -> Result<Vec<M>> {
        let regions = if keyword.is_empty() {
            self.repository.find_all().await?
        } else {
            self.repository.find_by_name(keyword).await?
        };

        Ok(regions.into_iter().map(M::from).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> Result<M> {
        let region = self.repository.find_by_id(id).await?;
        Ok(M::from(region))
    }
}
