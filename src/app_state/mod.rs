use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{PasswordHasher, UserStore, VehicleStore};
pub type UserStoreType = Arc<RwLock<dyn UserStore + Send + Sync>>;
pub type VehicleStoreType = Arc<RwLock<dyn VehicleStore + Send + Sync>>;
pub type PasswordHasherType = Arc<dyn PasswordHasher + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub vehicle_store: VehicleStoreType,
    pub password_hasher: PasswordHasherType,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        vehicle_store: VehicleStoreType,
        password_hasher: PasswordHasherType,
    ) -> Self {
        Self {
            user_store,
            vehicle_store,
            password_hasher,
        }
    }
}
