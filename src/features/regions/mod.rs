//! Indonesian administrative regions (wilayah) feature.
//!
//! Read-only lookups over a fixed four-level hierarchy. Every entity below
//! the province carries a full copy of its ancestors.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota)
//! - Level 3: Districts (Kecamatan)
//! - Level 4: Villages (Kelurahan/Desa)
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/provinces?keyword=` | List provinces |
//! | GET | `/api/v1/provinces/{id}` | Get province by ID |
//! | GET | `/api/v1/regencies?keyword=` | List regencies |
//! | GET | `/api/v1/regencies/{id}` | Get regency by ID |
//! | GET | `/api/v1/districts?keyword=` | List districts |
//! | GET | `/api/v1/districts/{id}` | Get district by ID |
//! | GET | `/api/v1/districts/{id}/villages` | List villages in a district |
//! | GET | `/api/v1/districts/villages?keyword=` | List villages by district name |
//! | GET | `/api/v1/villages?keyword=` | List villages |
//! | GET | `/api/v1/villages/{id}` | Get village by ID |
//!
//! The same province lookups are served over gRPC by [`rpc::ProvinceServer`].

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod rpc;
pub mod services;

pub use services::{DistrictService, ProvinceService, RegencyService, VillageService};
