pub mod data_stores;
mod sha256_password_hasher;

pub use sha256_password_hasher::*;
