mod error;
mod region_repository;
mod village_repository;

pub use error::RepositoryError;
pub use region_repository::{PgRegionRepository, RegionRepository};
pub use village_repository::VillageRepository;
