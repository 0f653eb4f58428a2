use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::{Deserialize, Deserializer};

use crate::{
    domain::{
        deserialize_ramal, Vehicle, VehicleAPIError, VehicleFields, VehicleId,
        VehicleStoreError,
    },
    AppState,
};

/// Writes the supplied fields, then re-reads the row. A missing id is only
/// detected by the re-read, after the (possibly empty) write.
#[tracing::instrument(name = "Update vehicle route handler", skip_all)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<(StatusCode, Json<Vehicle>), VehicleAPIError> {
    let id = VehicleId::new(id);
    let fields = request.into_fields();

    let vehicle = state
        .vehicle_store
        .write()
        .await
        .update_vehicle(id, &fields)
        .await
        .map_err(|e| match e {
            VehicleStoreError::VehicleNotFound => {
                VehicleAPIError::VehicleNotFound(id)
            }
            e => VehicleAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((StatusCode::OK, Json(vehicle)))
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_ramal")]
    pub ramal: Option<i64>,
    pub setor: Option<String>,
    pub plate: Option<String>,
    pub model: Option<String>,
    /// `None` when the key is absent, `Some(None)` when it is sent as null.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub cor: Option<Option<String>>,
    pub color: Option<String>,
}

impl UpdateVehicleRequest {
    /// `color` only stands in for `cor` when the `cor` key was not sent at
    /// all. A null `cor` blocks the alias and leaves the column unchanged.
    pub fn into_fields(self) -> VehicleFields {
        let cor = match self.cor {
            Some(cor) => cor,
            None => self.color,
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

fn deserialize_present<'de, D, T>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
