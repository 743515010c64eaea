use tonic_build::manual::{Builder, Method, Service};

const PB: &str = "crate::features::regions::rpc::pb";

fn unary(name: &str, route_name: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(format!("{PB}::{input}"))
        .output_type(format!("{PB}::{output}"))
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    // Messages are declared by hand in src/features/regions/rpc/pb.rs, so only
    // the service stubs are generated here and no protoc is required.
    let province_service = Service::builder()
        .name("ProvinceService")
        .package("wilayah.v1")
        .method(unary(
            "get_provinces",
            "GetProvinces",
            "GetProvincesRequest",
            "GetProvincesResponse",
        ))
        .method(unary(
            "get_province",
            "GetProvince",
            "GetProvinceRequest",
            "GetProvinceResponse",
        ))
        .build();

    Builder::new().compile(&[province_service]);

    println!("cargo:rerun-if-changed=build.rs");
}
