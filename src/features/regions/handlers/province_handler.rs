use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::regions::dtos::{ProvinceResponseDto, RegionSearchQuery};
use crate::features::regions::services::ProvinceService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List provinces, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/v1/provinces",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of provinces", body = ApiResponse<Vec<ProvinceResponseDto>>),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "provinces"
)]
pub async fn list_provinces(
    State(service): State<Arc<ProvinceService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<ProvinceResponseDto>>>> {
    let provinces = service.get_all(query.keyword()).await?;
    Ok(Json(ApiResponse::success(
        "successfully get provinces",
        provinces,
    )))
}

/// Get a province by ID
#[utoipa::path(
    get,
    path = "/api/v1/provinces/{id}",
    params(
        ("id" = String, Path, description = "Province ID (2 digits)")
    ),
    responses(
        (status = 200, description = "Province details", body = ApiResponse<ProvinceResponseDto>),
        (status = 404, description = "Province not found", body = ErrorResponse),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "provinces"
)]
pub async fn get_province(
    State(service): State<Arc<ProvinceService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<ProvinceResponseDto>>> {
    let province = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(
        format!("successfully get province with ID {}", id),
        province,
    )))
}
