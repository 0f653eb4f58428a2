use color_eyre::eyre::eyre;
use std::collections::BTreeMap;

use crate::domain::{
    Vehicle, VehicleFields, VehicleId, VehicleStore, VehicleStoreError,
};

/// In-memory vehicle table. Ids are never reused, matching `AUTOINCREMENT`.
#[derive(Default)]
pub struct HashmapVehicleStore {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    last_id: i64,
}

#[async_trait::async_trait]
impl VehicleStore for HashmapVehicleStore {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, VehicleStoreError> {
        Ok(self.vehicles.values().cloned().collect())
    }

    async fn add_vehicle(
        &mut self,
        fields: &VehicleFields,
    ) -> Result<Vehicle, VehicleStoreError> {
        if let Some(column) = fields.first_missing() {
            return Err(VehicleStoreError::UnexpectedError(eyre!(
                "NOT NULL constraint failed: vehicles.{column}"
            )));
        }

        self.last_id += 1;
        let id = VehicleId::new(self.last_id);
        let vehicle = Vehicle {
            id,
            name: fields.name.clone().unwrap_or_default(),
            ramal: fields.ramal.unwrap_or_default(),
            setor: fields.setor.clone().unwrap_or_default(),
            plate: fields.plate.clone().unwrap_or_default(),
            model: fields.model.clone().unwrap_or_default(),
            cor: fields.cor.clone().unwrap_or_default(),
        };
        self.vehicles.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    async fn update_vehicle(
        &mut self,
        id: VehicleId,
        fields: &VehicleFields,
    ) -> Result<Vehicle, VehicleStoreError> {
        let vehicle = self
            .vehicles
            .get_mut(&id)
            .ok_or(VehicleStoreError::VehicleNotFound)?;
        fields.apply_to(vehicle);
        Ok(vehicle.clone())
    }

    async fn delete_vehicle(
        &mut self,
        id: VehicleId,
    ) -> Result<(), VehicleStoreError> {
        match self.vehicles.remove(&id) {
            Some(_) => Ok(()),
            None => Err(VehicleStoreError::VehicleNotFound),
        }
    }
}
