mod district_service;
mod region_service;

pub use district_service::DistrictService;
pub use region_service::RegionService;

use crate::features::regions::dtos::{ProvinceResponseDto, RegencyResponseDto, VillageResponseDto};
use crate::features::regions::models::{Province, Regency, Village};

pub type ProvinceService = RegionService<Province, ProvinceResponseDto>;
pub type RegencyService = RegionService<Regency, RegencyResponseDto>;
pub type VillageService = RegionService<Village, VillageResponseDto>;
