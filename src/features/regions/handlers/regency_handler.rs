use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::regions::dtos::{RegencyResponseDto, RegionSearchQuery};
use crate::features::regions::services::RegencyService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List regencies, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/v1/regencies",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of regencies", body = ApiResponse<Vec<RegencyResponseDto>>),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "regencies"
)]
pub async fn list_regencies(
    State(service): State<Arc<RegencyService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<RegencyResponseDto>>>> {
    let regencies = service.get_all(query.keyword()).await?;
    Ok(Json(ApiResponse::success(
        "successfully get regencies",
        regencies,
    )))
}

/// Get a regency by ID
#[utoipa::path(
    get,
    path = "/api/v1/regencies/{id}",
    params(
        ("id" = String, Path, description = "Regency ID (4 digits)")
    ),
    responses(
        (status = 200, description = "Regency details", body = ApiResponse<RegencyResponseDto>),
        (status = 404, description = "Regency not found", body = ErrorResponse),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "regencies"
)]
pub async fn get_regency(
    State(service): State<Arc<RegencyService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<RegencyResponseDto>>> {
    let regency = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(
        format!("successfully get regency with ID {}", id),
        regency,
    )))
}
