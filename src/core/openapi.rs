use utoipa::{Modify, OpenApi};

use crate::features::home::handlers as home_handlers;
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Home
        home_handlers::get_hello,
        // Provinces
        regions_handlers::list_provinces,
        regions_handlers::get_province,
        // Regencies
        regions_handlers::list_regencies,
        regions_handlers::get_regency,
        // Districts
        regions_handlers::list_districts,
        regions_handlers::get_district,
        regions_handlers::list_villages_by_district_id,
        regions_handlers::list_villages_by_district_name,
        // Villages
        regions_handlers::list_villages,
        regions_handlers::get_village,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            ApiResponse<String>,
            // Regions
            regions_dtos::ProvinceResponseDto,
            regions_dtos::RegencyResponseDto,
            regions_dtos::DistrictResponseDto,
            regions_dtos::VillageResponseDto,
            ApiResponse<Vec<regions_dtos::ProvinceResponseDto>>,
            ApiResponse<regions_dtos::ProvinceResponseDto>,
            ApiResponse<Vec<regions_dtos::RegencyResponseDto>>,
            ApiResponse<regions_dtos::RegencyResponseDto>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            ApiResponse<regions_dtos::DistrictResponseDto>,
            ApiResponse<Vec<regions_dtos::VillageResponseDto>>,
            ApiResponse<regions_dtos::VillageResponseDto>,
        )
    ),
    tags(
        (name = "home", description = "API connectivity check"),
        (name = "provinces", description = "Provinces (provinsi)"),
        (name = "regencies", description = "Regencies and cities (kabupaten/kota)"),
        (name = "districts", description = "Districts (kecamatan) and their villages"),
        (name = "villages", description = "Villages (kelurahan/desa)"),
    ),
    info(
        title = "Balungpisah Wilayah API",
        version = "0.1.0",
        description = "Indonesian administrative regions (provinces, regencies, districts, villages)",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
