use std::sync::Arc;

use tonic::{Request, Response, Status};

use super::pb::{
    self, province_service_server::ProvinceService as ProvinceRpc, GetProvinceRequest,
    GetProvinceResponse, GetProvincesRequest, GetProvincesResponse,
};
use crate::features::regions::dtos::ProvinceResponseDto;
use crate::features::regions::services::ProvinceService;

/// Serves `wilayah.v1.ProvinceService` from the province service
pub struct ProvinceServer {
    service: Arc<ProvinceService>,
}

impl ProvinceServer {
    pub fn new(service: Arc<ProvinceService>) -> Self {
        Self { service }
    }
}

impl From<ProvinceResponseDto> for pb::Province {
    fn from(province: ProvinceResponseDto) -> Self {
        Self {
            id: province.id,
            name: province.name,
        }
    }
}

#[tonic::async_trait]
impl ProvinceRpc for ProvinceServer {
    async fn get_provinces(
        &self,
        request: Request<GetProvincesRequest>,
    ) -> Result<Response<GetProvincesResponse>, Status> {
        let keyword = request
            .into_inner()
            .filter
            .map(|filter| filter.name)
            .unwrap_or_default();

        let provinces = self.service.get_all(&keyword).await?;

        Ok(Response::new(GetProvincesResponse {
            provinces: provinces.into_iter().map(Into::into).collect(),
        }))
    }

    async fn get_province(
        &self,
        request: Request<GetProvinceRequest>,
    ) -> Result<Response<GetProvinceResponse>, Status> {
        let id = request.into_inner().id;
        let province = self.service.get_by_id(&id).await?;

        Ok(Response::new(GetProvinceResponse {
            province: Some(province.into()),
        }))
    }
}
