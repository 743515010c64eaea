use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::regions::dtos::{DistrictResponseDto, RegionSearchQuery, VillageResponseDto};
use crate::features::regions::services::DistrictService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List districts, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/v1/districts",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of districts", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "districts"
)]
pub async fn list_districts(
    State(service): State<Arc<DistrictService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = service.get_all(query.keyword()).await?;
    Ok(Json(ApiResponse::success(
        "successfully get districts",
        districts,
    )))
}

/// Get a district by ID
#[utoipa::path(
    get,
    path = "/api/v1/districts/{id}",
    params(
        ("id" = String, Path, description = "District ID (7 digits)")
    ),
    responses(
        (status = 200, description = "District details", body = ApiResponse<DistrictResponseDto>),
        (status = 404, description = "District not found", body = ErrorResponse),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "districts"
)]
pub async fn get_district(
    State(service): State<Arc<DistrictService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<DistrictResponseDto>>> {
    let district = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(
        format!("successfully get district with ID {}", id),
        district,
    )))
}

/// List villages in a district
#[utoipa::path(
    get,
    path = "/api/v1/districts/{id}/villages",
    params(
        ("id" = String, Path, description = "District ID (7 digits)")
    ),
    responses(
        (status = 200, description = "Villages of the district", body = ApiResponse<Vec<VillageResponseDto>>),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "districts"
)]
pub async fn list_villages_by_district_id(
    State(service): State<Arc<DistrictService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<Vec<VillageResponseDto>>>> {
    let villages = service.get_villages_by_district_id(&id).await?;
    Ok(Json(ApiResponse::success(
        format!("successfully get villages with district ID {}", id),
        villages,
    )))
}

/// List villages whose district name matches the keyword
#[utoipa::path(
    get,
    path = "/api/v1/districts/villages",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "Villages of the matching districts", body = ApiResponse<Vec<VillageResponseDto>>),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "districts"
)]
pub async fn list_villages_by_district_name(
    State(service): State<Arc<DistrictService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<VillageResponseDto>>>> {
    let keyword = query.keyword();
    let villages = service.get_villages_by_district_name(keyword).await?;
    Ok(Json(ApiResponse::success(
        format!(
            "successfully get villages with district keyword name {}",
            keyword
        ),
        villages,
    )))
}
