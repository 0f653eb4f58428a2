use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{deserialize_ramal, Vehicle, VehicleAPIError, VehicleFields},
    AppState,
};

/// Inserts a vehicle and returns the row as stored.
///
/// Fields are not validated here: a missing one reaches the store and the
/// resulting constraint failure is reported as an unexpected error.
#[tracing::instrument(name = "Add vehicle route handler", skip_all)]
pub async fn add_vehicle(
    State(state): State<AppState>,
    Json(request): Json<AddVehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), VehicleAPIError> {
    let fields = request.into_fields();

    let vehicle = state
        .vehicle_store
        .write()
        .await
        .add_vehicle(&fields)
        .await
        .map_err(|e| VehicleAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::CREATED, Json(vehicle)))
}

#[derive(Debug, Default, Deserialize)]
pub struct AddVehicleRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_ramal")]
    pub ramal: Option<i64>,
    pub setor: Option<String>,
    pub plate: Option<String>,
    pub model: Option<String>,
    pub cor: Option<String>,
    pub color: Option<String>,
}

impl AddVehicleRequest {
    /// `cor` wins when it is non-empty, otherwise `color` is used as given.
    pub fn into_fields(self) -> VehicleFields {
        let cor = match self.cor {
            Some(cor) if !cor.is_empty() => Some(cor),
            _ => self.color,
        };

        VehicleFields {
            name: self.name,
            ramal: self.ramal,
            setor: self.setor,
            plate: self.plate,
            model: self.model,
            cor,
        }
    }
}
