pub mod auth;
pub mod vehicles;
