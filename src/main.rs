use std::sync::Arc;
use tokio::sync::RwLock;

use vehicle_registry::{
    app_state::AppState,
    get_sqlite_database,
    services::{
        data_stores::{SqliteUserStore, SqliteVehicleStore},
        Sha256PasswordHasher,
    },
    utils::{
        constants::{APP_ADDRESS, DATABASE_PATH},
        tracing::init_tracing,
    },
    Application,
};

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let database = get_sqlite_database(DATABASE_PATH.as_str()).await?;
    tracing::info!("using SQLite database at {}", DATABASE_PATH.as_str());

    let user_store =
        Arc::new(RwLock::new(SqliteUserStore::new(database.clone())));
    let vehicle_store =
        Arc::new(RwLock::new(SqliteVehicleStore::new(database)));
    let password_hasher = Arc::new(Sha256PasswordHasher);

    let app_state = AppState::new(user_store, vehicle_store, password_hasher);

    let app = Application::build(app_state, APP_ADDRESS.as_str())
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}
