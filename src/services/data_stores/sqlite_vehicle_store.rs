use color_eyre::eyre::{eyre, Result};
use sqlx::{QueryBuilder, Sqlite};

use super::SqliteDatabase;
use crate::domain::{
    Vehicle, VehicleFields, VehicleId, VehicleStore, VehicleStoreError,
};

pub struct SqliteVehicleStore {
    database: SqliteDatabase,
}

impl SqliteVehicleStore {
    pub fn new(database: SqliteDatabase) -> Self {
        Self { database }
    }

    async fn connect(
        &self,
    ) -> Result<sqlx::SqliteConnection, VehicleStoreError> {
        self.database
            .connect()
            .await
            .map_err(|e| VehicleStoreError::UnexpectedError(eyre!(e)))
    }
}

async fn fetch_vehicle(
    connection: &mut sqlx::SqliteConnection,
    id: VehicleId,
) -> Result<Vehicle, VehicleStoreError> {
    sqlx::query_as::<_, Vehicle>(
        r#"
        SELECT id, name, ramal, setor, plate, model, cor
        FROM vehicles
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(connection)
    .await
    .map_err(|e| VehicleStoreError::UnexpectedError(eyre!(e)))?
    .ok_or(VehicleStoreError::VehicleNotFound)
}

fn build_update(
    id: VehicleId,
    fields: &VehicleFields,
) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::<Sqlite>::new("UPDATE vehicles SET ");
    let mut columns = builder.separated(", ");
    if let Some(name) = &fields.name {
        columns.push("name = ").push_bind_unseparated(name.clone());
    }
    if let Some(ramal) = fields.ramal {
        columns.push("ramal = ").push_bind_unseparated(ramal);
    }
    if let Some(setor) = &fields.setor {
        columns.push("setor = ").push_bind_unseparated(setor.clone());
    }
    if let Some(plate) = &fields.plate {
        columns.push("plate = ").push_bind_unseparated(plate.clone());
    }
    if let Some(model) = &fields.model {
        columns.push("model = ").push_bind_unseparated(model.clone());
    }
    if let Some(cor) = &fields.cor {
        columns.push("cor = ").push_bind_unseparated(cor.clone());
    }
    builder.push(" WHERE id = ").push_bind(id);
    builder
}

#[async_trait::async_trait]
impl VehicleStore for SqliteVehicleStore {
    #[tracing::instrument(name = "Listing vehicles from SQLite", skip_all)]
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, VehicleStoreError> {
        let mut connection = self.connect().await?;

        sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, name, ramal, setor, plate, model, cor
            FROM vehicles
            "#,
        )
        .fetch_all(&mut connection)
        .await
        .map_err(|e| VehicleStoreError::UnexpectedError(eyre!(e)))
    }

    #[tracing::instrument(name = "Adding vehicle to SQLite", skip_all)]
    async fn add_vehicle(
        &mut self,
        fields: &VehicleFields,
    ) -> Result<Vehicle, VehicleStoreError> {
        let mut connection = self.connect().await?;

        // Absent fields are bound as NULL and rejected by the NOT NULL
        // constraints.
        let result = sqlx::query(
            r#"
            INSERT INTO vehicles (name, ramal, setor, plate, model, cor)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(fields.name.as_deref())
        .bind(fields.ramal)
        .bind(fields.setor.as_deref())
        .bind(fields.plate.as_deref())
        .bind(fields.model.as_deref())
        .bind(fields.cor.as_deref())
        .execute(&mut connection)
        .await
        .map_err(|e| VehicleStoreError::UnexpectedError(eyre!(e)))?;

        let id = VehicleId::new(result.last_insert_rowid());
        fetch_vehicle(&mut connection, id).await
    }

    #[tracing::instrument(name = "Updating vehicle in SQLite", skip_all)]
    async fn update_vehicle(
        &mut self,
        id: VehicleId,
        fields: &VehicleFields,
    ) -> Result<Vehicle, VehicleStoreError> {
        let mut connection = self.connect().await?;

        // Zero affected rows is not checked; the re-read reports a missing
        // id.
        if !fields.is_empty() {
            let mut update = build_update(id, fields);
            update
                .build()
                .execute(&mut connection)
                .await
                .map_err(|e| VehicleStoreError::UnexpectedError(eyre!(e)))?;
        }

        fetch_vehicle(&mut connection, id).await
    }

    #[tracing::instrument(name = "Deleting vehicle from SQLite", skip_all)]
    async fn delete_vehicle(
        &mut self,
        id: VehicleId,
    ) -> Result<(), VehicleStoreError> {
        let mut connection = self.connect().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM vehicles WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut connection)
        .await
        .map_err(|e| VehicleStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(VehicleStoreError::VehicleNotFound);
        }

        Ok(())
    }
}
