use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Vehicle, VehicleAPIError},
    AppState,
};

#[tracing::instrument(name = "List vehicles route handler", skip_all)]
pub async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Vehicle>>), VehicleAPIError> {
    let vehicles = state
        .vehicle_store
        .read()
        .await
        .list_vehicles()
        .await
        .map_err(|e| VehicleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(vehicles)))
}
