mod hashmap_user_store;
mod hashmap_vehicle_store;
mod sqlite_database;
mod sqlite_user_store;
mod sqlite_vehicle_store;

pub use hashmap_user_store::*;
pub use hashmap_vehicle_store::*;
pub use sqlite_database::*;
pub use sqlite_user_store::*;
pub use sqlite_vehicle_store::*;

#[cfg(test)]
pub(crate) use sqlite_database::test_support;
