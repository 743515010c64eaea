//! Wire messages of the `wilayah.v1` package.
//!
//! Service stubs are generated by `build.rs`; the message types below are
//! their input and output types.

#![allow(clippy::derive_partial_eq_without_eq)]

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Province {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProvinceFilter {
    /// Case-insensitive substring of the province name; empty means all
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProvincesRequest {
    #[prost(message, optional, tag = "1")]
    pub filter: ::core::option::Option<ProvinceFilter>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProvincesResponse {
    #[prost(message, repeated, tag = "1")]
    pub provinces: ::prost::alloc::vec::Vec<Province>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProvinceRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProvinceResponse {
    #[prost(message, optional, tag = "1")]
    pub province: ::core::option::Option<Province>,
}

#[allow(dead_code)]
mod generated {
    include!(concat!(env!("OUT_DIR"), "/wilayah.v1.ProvinceService.rs"));
}

pub use generated::*;
