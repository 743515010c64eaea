pub mod district_handler;
pub mod province_handler;
pub mod regency_handler;
pub mod village_handler;

pub use district_handler::*;
pub use province_handler::*;
pub use regency_handler::*;
pub use village_handler::*;
