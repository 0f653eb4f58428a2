use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{VehicleAPIError, VehicleId, VehicleStoreError},
    utils::constants::messages,
    AppState,
};

#[tracing::instrument(name = "Delete vehicle route handler", skip_all)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<DeleteVehicleResponse>), VehicleAPIError> {
    let id = VehicleId::new(id);

    state
        .vehicle_store
        .write()
        .await
        .delete_vehicle(id)
        .await
        .map_err(|e| match e {
            VehicleStoreError::VehicleNotFound => {
                VehicleAPIError::VehicleNotFound(id)
            }
            e => VehicleAPIError::UnexpectedError(eyre!(e)),
        })?;

    let response = Json(DeleteVehicleResponse {
        message: messages::VEHICLE_DELETED.to_string(),
    });

    Ok((StatusCode::OK, response))
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct DeleteVehicleResponse {
    pub message: String,
}
