use std::sync::Arc;

use crate::core::error::Result;
use crate::features::regions::dtos::{DistrictResponseDto, VillageResponseDto};
use crate::features::regions::models::District;
use crate::features::regions::repositories::{RegionRepository, VillageRepository};
use crate::features::regions::services::RegionService;

/// District lookups plus the villages-by-district compositions.
///
/// Village queries go straight to the village repository rather than through
/// the village service.
pub struct DistrictService {
    districts: RegionService<District, DistrictResponseDto>,
    villages: Arc<dyn VillageRepository>,
}

impl DistrictService {
    pub fn new(
        district_repository: Arc<dyn RegionRepository<District>>,
        village_repository: Arc<dyn VillageRepository>,
    ) -> Self {
        Self {
            districts: RegionService::new(district_repository),
            villages: village_repository,
        }
    }

    pub async fn get_all(&self, keyword: &str) -> Result<Vec<DistrictResponseDto>> {
        self.districts.get_all(keyword).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<DistrictResponseDto> {
        self.districts.get_by_id(id).await
    }

    /// Villages whose parent district has exactly this ID
    pub async fn get_villages_by_district_id(&self, id: &str) -> Result<Vec<VillageResponseDto>> {
        let villages = self.villages.find_by_district_id(id).await?;
        Ok(villages.into_iter().map(Into::into).collect())
    }

    /// Villages whose parent district's name contains `keyword`
    pub async fn get_villages_by_district_name(
        &self,
        keyword: &str,
    ) -> Result<Vec<VillageResponseDto>> {
        let villages = self.villages.find_by_district_name(keyword).await?;
        Ok(villages.into_iter().map(Into::into).collect())
    }
}
