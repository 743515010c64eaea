//! gRPC front end over the region services.

pub mod pb;
mod province_server;
mod status;

pub use pb::province_service_server::ProvinceServiceServer;
pub use province_server::ProvinceServer;
