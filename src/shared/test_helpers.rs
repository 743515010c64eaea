//! In-memory stand-ins for the Postgres repositories.

use std::sync::Arc;

use async_trait::async_trait;

use crate::features::regions::models::{Region, Village};
use crate::features::regions::repositories::{RegionRepository, RepositoryError, VillageRepository};

/// Serves lookups from a fixed list, matching names the way ILIKE does.
///
/// Keywords are compared as plain substrings, which is what the Postgres
/// repository gets after `escape_like` neutralises `%`, `_` and `\`.
pub struct InMemoryRegionRepository<R> {
    regions: Vec<R>,
}

pub fn region_repository<R: Region + Clone>(
    mut regions: Vec<R>,
) -> Arc<InMemoryRegionRepository<R>> {
    regions.sort_by(|a, b| a.id().cmp(b.id()));
    Arc::new(InMemoryRegionRepository { regions })
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl<R: Region + Clone> InMemoryRegionRepository<R> {
    fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.regions.iter().filter(|r| predicate(r)).cloned().collect()
    }
}

#[async_trait]
impl<R: Region + Clone> RegionRepository<R> for InMemoryRegionRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, RepositoryError> {
        Ok(self.regions.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<R, RepositoryError> {
        self.regions
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(RepositoryError::QueryNotFound)
    }

    async fn find_by_name(&self, keyword: &str) -> Result<Vec<R>, RepositoryError> {
        Ok(self.filter(|r| contains_ignore_case(r.name(), keyword)))
    }
}

#[async_trait]
impl VillageRepository for InMemoryRegionRepository<Village> {
    async fn find_by_district_id(
        &self,
        district_id: &str,
    ) -> Result<Vec<Village>, RepositoryError> {
        Ok(self.filter(|v| v.district.id == district_id))
    }

    async fn find_by_district_name(
        &self,
        keyword: &str,
    ) -> Result<Vec<Village>, RepositoryError> {
        Ok(self.filter(|v| contains_ignore_case(&v.district.name, keyword)))
    }
}

/// Simulates a store outage: every lookup fails with a database error
pub struct FailingRepository;

pub fn failing_repository() -> Arc<FailingRepository> {
    Arc::new(FailingRepository)
}

fn outage() -> RepositoryError {
    RepositoryError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl<R: Region> RegionRepository<R> for FailingRepository {
    async fn find_all(&self) -> Result<Vec<R>, RepositoryError> {
        Err(outage())
    }

    async fn find_by_id(&self, _id: &str) -> Result<R, RepositoryError> {
        Err(outage())
    }

    async fn find_by_name(&self, _keyword: &str) -> Result<Vec<R>, RepositoryError> {
        Err(outage())
    }
}

#[async_trait]
impl VillageRepository for FailingRepository {
    async fn find_by_district_id(
        &self,
        _district_id: &str,
    ) -> Result<Vec<Village>, RepositoryError> {
        Err(outage())
    }

    async fn find_by_district_name(
        &self,
        _keyword: &str,
    ) -> Result<Vec<Village>, RepositoryError> {
        Err(outage())
    }
}

/// A small slice of Jawa Tengah and Jawa Timur
pub mod fixtures {
    use crate::features::regions::models::{District, Province, Regency, Village};

    fn province(id: &str, name: &str) -> Province {
        Province {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn regency(id: &str, name: &str, province_id: &str) -> Regency {
        Regency {
            id: id.to_string(),
            name: name.to_string(),
            province: find(provinces(), province_id, |p| &p.id),
        }
    }

    fn district(id: &str, name: &str, regency_id: &str) -> District {
        District {
            id: id.to_string(),
            name: name.to_string(),
            regency: find(regencies(), regency_id, |r| &r.id),
        }
    }

    fn village(id: &str, name: &str, district_id: &str) -> Village {
        Village {
            id: id.to_string(),
            name: name.to_string(),
            district: find(districts(), district_id, |d| &d.id),
        }
    }

    fn find<T>(items: Vec<T>, id: &str, key: impl Fn(&T) -> &String) -> T {
        items
            .into_iter()
            .find(|item| key(item) == id)
            .expect("fixture parent exists")
    }

    pub fn provinces() -> Vec<Province> {
        vec![province("33", "Jawa Tengah"), province("35", "Jawa Timur")]
    }

    pub fn regencies() -> Vec<Regency> {
        vec![
            regency("3301", "Cilacap", "33"),
            regency("3501", "Ponorogo", "35"),
            regency("3502", "Pacitan", "35"),
        ]
    }

    pub fn districts() -> Vec<District> {
        vec![
            district("3301010", "Dayeuhluhur", "3301"),
            district("3501010", "Ngrayun", "3501"),
            district("3501020", "Slahung", "3501"),
        ]
    }

    pub fn villages() -> Vec<Village> {
        vec![
            village("3301010001", "Hanum", "3301010"),
            village("3501010001", "Baosan Lor", "3501010"),
            village("3501010002", "Baosan Kidul", "3501010"),
            village("3501020001", "Slahung", "3501020"),
        ]
    }
}
