use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{District, Province, Regency, Village};

/// Query parameters for searching regions
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RegionSearchQuery {
    /// Search by name (case-insensitive, partial match)
    #[param(example = "ponorogo")]
    pub keyword: Option<String>,
}

impl RegionSearchQuery {
    /// The keyword, or an empty string when none was supplied
    pub fn keyword(&self) -> &str {
        self.keyword.as_deref().unwrap_or_default()
    }
}

/// Response DTO for province data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceResponseDto {
    #[schema(example = "35")]
    pub id: String,
    #[schema(example = "Jawa Timur")]
    pub name: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            id: province.id,
            name: province.name,
        }
    }
}

/// Response DTO for regency data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegencyResponseDto {
    #[schema(example = "3501")]
    pub id: String,
    #[schema(example = "Ponorogo")]
    pub name: String,
    pub province: ProvinceResponseDto,
}

impl From<Regency> for RegencyResponseDto {
    fn from(regency: Regency) -> Self {
        Self {
            id: regency.id,
            name: regency.name,
            province: regency.province.into(),
        }
    }
}

/// Response DTO for district data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponseDto {
    #[schema(example = "3501010")]
    pub id: String,
    #[schema(example = "Ngrayun")]
    pub name: String,
    pub regency: RegencyResponseDto,
}

impl From<District> for DistrictResponseDto {
    fn from(district: District) -> Self {
        Self {
            id: district.id,
            name: district.name,
            regency: district.regency.into(),
        }
    }
}

/// Response DTO for village data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VillageResponseDto {
    #[schema(example = "3501010001")]
    pub id: String,
    #[schema(example = "Baosan Lor")]
    pub name: String,
    pub district: DistrictResponseDto,
}

impl From<Village> for VillageResponseDto {
    fn from(village: Village) -> Self {
        Self {
            id: village.id,
            name: village.name,
            district: village.district.into(),
        }
    }
}
