use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppPath, AppQuery};
use crate::features::regions::dtos::{RegionSearchQuery, VillageResponseDto};
use crate::features::regions::services::VillageService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List villages, optionally filtered by name
#[utoipa::path(
    get,
    path = "/api/v1/villages",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of villages", body = ApiResponse<Vec<VillageResponseDto>>),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "villages"
)]
pub async fn list_villages(
    State(service): State<Arc<VillageService>>,
    AppQuery(query): AppQuery<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<VillageResponseDto>>>> {
    let villages = service.get_all(query.keyword()).await?;
    Ok(Json(ApiResponse::success("successfully get villages", villages)))
}

/// Get a village by ID
#[utoipa::path(
    get,
    path = "/api/v1/villages/{id}",
    params(
        ("id" = String, Path, description = "Village ID (10 digits)")
    ),
    responses(
        (status = 200, description = "Village details", body = ApiResponse<VillageResponseDto>),
        (status = 404, description = "Village not found", body = ErrorResponse),
        (status = 500, description = "Something went wrong", body = ErrorResponse)
    ),
    tag = "villages"
)]
pub async fn get_village(
    State(service): State<Arc<VillageService>>,
    AppPath(id): AppPath<String>,
) -> Result<Json<ApiResponse<VillageResponseDto>>> {
    let village = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(
        format!("successfully get village with ID {}", id),
        village,
    )))
}
