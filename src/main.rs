mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::home::routes as home_routes;
use crate::features::regions::models::{District, Province, Regency, Village};
use crate::features::regions::repositories::PgRegionRepository;
use crate::features::regions::rpc::{ProvinceServer, ProvinceServiceServer};
use crate::features::regions::{
    routes as regions_routes, DistrictService, ProvinceService, RegencyService, VillageService,
};
use crate::shared::constants::API_V1_PREFIX;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tonic::codec::CompressionEncoding;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    if config.database.run_migrations {
        tracing::info!("Running database migrations...");
        database::run_migrations(&pool)
            .await
            .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
        tracing::info!("Database migrations completed successfully");
    }

    // Repositories
    let province_repository = Arc::new(PgRegionRepository::<Province>::new(pool.clone()));
    let regency_repository = Arc::new(PgRegionRepository::<Regency>::new(pool.clone()));
    let district_repository = Arc::new(PgRegionRepository::<District>::new(pool.clone()));
    let village_repository = Arc::new(PgRegionRepository::<Village>::new(pool.clone()));

    // Services
    let province_service = Arc::new(ProvinceService::new(province_repository));
    let regency_service = Arc::new(RegencyService::new(regency_repository));
    let district_service = Arc::new(DistrictService::new(
        district_repository,
        village_repository.clone(),
    ));
    let village_service = Arc::new(VillageService::new(village_repository));
    tracing::info!("Region services initialized");

    // Build swagger router with dynamic info
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let regions = regions_routes::routes(
        Arc::clone(&province_service),
        regency_service,
        district_service,
        village_service,
    );
    let app = build_app(swagger, regions, config.app.cors_allowed_origins.clone());

    // HTTP listener
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;
    let listener = bind_listener(socket_addr)?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    // gRPC listener
    let grpc_addr: std::net::SocketAddr = config
        .grpc
        .server_address()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid gRPC address: {}", e))?;
    let province_rpc = ProvinceServiceServer::new(ProvinceServer::new(province_service))
        .accept_compressed(CompressionEncoding::Gzip)
        .send_compressed(CompressionEncoding::Gzip);
    tracing::info!("gRPC server listening on {}", grpc_addr);

    let http = async {
        axum::serve(listener, app)
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))
    };
    let grpc = async {
        tonic::transport::Server::builder()
            .add_service(province_rpc)
            .serve(grpc_addr)
            .await
            .map_err(|e| anyhow::anyhow!("gRPC server failed: {}", e))
    };

    tokio::try_join!(http, grpc)?;

    Ok(())
}

/// Mounts the docs, home and region routers under the shared layer stack
fn build_app(swagger: Router, regions: Router, cors_allowed_origins: Vec<String>) -> Router {
    Router::new()
        .merge(swagger)
        .merge(home_routes::routes())
        .nest(API_V1_PREFIX, regions)
        .layer(CompressionLayer::new().gzip(true))
        .layer(middleware::cors_layer(cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

/// TCP listener tuned with socket2 (reuse, nodelay, keepalive)
fn bind_listener(socket_addr: std::net::SocketAddr) -> anyhow::Result<tokio::net::TcpListener> {
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}
