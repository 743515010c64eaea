use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::{
    DistrictService, ProvinceService, RegencyService, VillageService,
};

/// Create routes for the regions feature (mounted under the API prefix)
pub fn routes(
    provinces: Arc<ProvinceService>,
    regencies: Arc<RegencyService>,
    districts: Arc<DistrictService>,
    villages: Arc<VillageService>,
) -> Router {
    let province_routes = Router::new()
        .route("/provinces", get(handlers::list_provinces))
        .route("/provinces/{id}", get(handlers::get_province))
        .with_state(provinces);

    let regency_routes = Router::new()
        .route("/regencies", get(handlers::list_regencies))
        .route("/regencies/{id}", get(handlers::get_regency))
        .with_state(regencies);

    // Static "/districts/villages" takes precedence over "/districts/{id}"
    let district_routes = Router::new()
        .route("/districts", get(handlers::list_districts))
        .route(
            "/districts/villages",
            get(handlers::list_villages_by_district_name),
        )
        .route("/districts/{id}", get(handlers::get_district))
        .route(
            "/districts/{id}/villages",
            get(handlers::list_villages_by_district_id),
        )
        .with_state(districts);

    let village_routes = Router::new()
        .route("/villages", get(handlers::list_villages))
        .route("/villages/{id}", get(handlers::get_village))
        .with_state(villages);

    Router::new()
        .merge(province_routes)
        .merge(regency_routes)
        .merge(district_routes)
        .merge(village_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::models::{District, Province, Regency, Village};
    use crate::features::regions::repositories::{RegionRepository, VillageRepository};
    use crate::shared::constants::API_V1_PREFIX;
    use crate::shared::test_helpers::{failing_repository, fixtures, region_repository};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server_with(
        provinces: Arc<dyn RegionRepository<Province>>,
        regencies: Arc<dyn RegionRepository<Regency>>,
        districts: Arc<dyn RegionRepository<District>>,
        villages: Arc<dyn VillageRepository>,
        village_lookups: Arc<dyn RegionRepository<Village>>,
    ) -> TestServer {
        let app = Router::new().nest(
            API_V1_PREFIX,
            routes(
                Arc::new(ProvinceService::new(provinces)),
                Arc::new(RegencyService::new(regencies)),
                Arc::new(DistrictService::new(districts, villages)),
                Arc::new(VillageService::new(village_lookups)),
            ),
        );
        TestServer::new(app).unwrap()
    }

    fn server() -> TestServer {
        let villages = region_repository(fixtures::villages());
        server_with(
            region_repository(fixtures::provinces()),
            region_repository(fixtures::regencies()),
            region_repository(fixtures::districts()),
            villages.clone(),
            villages,
        )
    }

    fn failing_server() -> TestServer {
        server_with(
            failing_repository(),
            failing_repository(),
            failing_repository(),
            failing_repository(),
            failing_repository(),
        )
    }

    #[tokio::test]
    async fn test_get_regency_by_id_envelope() {
        let response = server().get("/api/v1/regencies/3501").await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "status": "success",
            "message": "successfully get regency with ID 3501",
            "data": {
                "id": "3501",
                "name": "Ponorogo",
                "province": { "id": "35", "name": "Jawa Timur" }
            }
        }));
    }

    #[tokio::test]
    async fn test_get_unknown_village_is_404() {
        let response = server().get("/api/v1/villages/99999999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "message": "Resource with given ID not found." }));
    }

    #[tokio::test]
    async fn test_list_provinces_without_keyword() {
        let response = server().get("/api/v1/provinces").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "successfully get provinces");
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_with_keyword_filters_by_name() {
        let response = server()
            .get("/api/v1/villages")
            .add_query_param("keyword", "baosan")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let names: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Baosan Lor", "Baosan Kidul"]);
        assert_eq!(body["message"], "successfully get villages");
    }

    #[tokio::test]
    async fn test_list_with_unmatched_keyword_returns_empty_list() {
        let response = server()
            .get("/api/v1/regencies")
            .add_query_param("keyword", "atlantis")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_repeated_keyword_uses_first_value() {
        let response = server()
            .get("/api/v1/provinces?keyword=jawa&keyword=timur")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let response = server()
            .get("/api/v1/provinces?keyword=timur&keyword=jawa")
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"], json!([{ "id": "35", "name": "Jawa Timur" }]));
    }

    #[tokio::test]
    async fn test_wildcard_characters_in_keyword_match_literally() {
        let server = server();

        for keyword in ["%", "_", "Jawa%Timur"] {
            let response = server
                .get("/api/v1/provinces")
                .add_query_param("keyword", keyword)
                .await;

            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["data"], json!([]), "keyword {:?}", keyword);
        }
    }

    #[tokio::test]
    async fn test_undecodable_id_is_404_without_details() {
        let response = server()
            .get("/api/v1/villages/%FF%FE")
            .expect_failure()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({ "message": "Resource with given ID not found." }));
    }

    #[tokio::test]
    async fn test_get_district_nests_regency_and_province() {
        let response = server().get("/api/v1/districts/3501020").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "successfully get district with ID 3501020");
        assert_eq!(body["data"]["name"], "Slahung");
        assert_eq!(body["data"]["regency"]["id"], "3501");
        assert_eq!(body["data"]["regency"]["province"]["id"], "35");
    }

    #[tokio::test]
    async fn test_villages_by_district_id() {
        let response = server().get("/api/v1/districts/3501010/villages").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "successfully get villages with district ID 3501010"
        );
        let villages = body["data"].as_array().unwrap();
        assert_eq!(villages.len(), 2);
        assert!(villages.iter().all(|v| v["district"]["id"] == "3501010"));
    }

    #[tokio::test]
    async fn test_villages_by_district_name_is_not_captured_by_id_route() {
        let response = server()
            .get("/api/v1/districts/villages")
            .add_query_param("keyword", "slahung")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "successfully get villages with district keyword name slahung"
        );
        let villages = body["data"].as_array().unwrap();
        assert_eq!(villages.len(), 1);
        assert_eq!(villages[0]["id"], "3501020001");
        assert_eq!(villages[0]["district"]["name"], "Slahung");
    }

    #[tokio::test]
    async fn test_village_ancestors_match_independent_lookups() {
        let server = server();

        let village: Value = server.get("/api/v1/villages/3501010002").await.json();
        let district: Value = server.get("/api/v1/districts/3501010").await.json();
        let regency: Value = server.get("/api/v1/regencies/3501").await.json();
        let province: Value = server.get("/api/v1/provinces/35").await.json();

        assert_eq!(village["data"]["district"], district["data"]);
        assert_eq!(village["data"]["district"]["regency"], regency["data"]);
        assert_eq!(
            village["data"]["district"]["regency"]["province"],
            province["data"]
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_500_without_internal_details() {
        let server = failing_server();

        for path in [
            "/api/v1/provinces",
            "/api/v1/provinces/35",
            "/api/v1/regencies",
            "/api/v1/regencies/3501",
            "/api/v1/districts",
            "/api/v1/districts/3501010",
            "/api/v1/districts/3501010/villages",
            "/api/v1/districts/villages",
            "/api/v1/villages",
            "/api/v1/villages/3501010001",
        ] {
            let response = server.get(path).expect_failure().await;
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.assert_json(&json!({ "message": "Something went wrong." }));
        }
    }
}
