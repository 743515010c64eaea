pub mod home;
pub mod regions;
