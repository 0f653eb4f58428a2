use super::{
    Email, NewUser, PasswordDigest, User, Vehicle, VehicleFields, VehicleId,
};
use color_eyre::eyre::Report;
use thiserror::Error;

#[async_trait::async_trait]
pub trait UserStore {
    async fn add_user(&mut self, user: NewUser) -> Result<(), UserStoreError>;
    /// Exact match on the `(email, digest)` pair.
    async fn find_user(
        &self,
        email: &Email,
        digest: &PasswordDigest,
    ) -> Result<User, UserStoreError>;
}

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait::async_trait]
pub trait VehicleStore {
    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, VehicleStoreError>;
    /// Inserts the fields as given and returns the stored row. Every field
    /// must be present or the insert fails with `UnexpectedError`.
    async fn add_vehicle(
        &mut self,
        fields: &VehicleFields,
    ) -> Result<Vehicle, VehicleStoreError>;
    /// Writes only the present fields, then re-reads the row. A missing id
    /// surfaces as `VehicleNotFound` from the re-read, not from the write.
    async fn update_vehicle(
        &mut self,
        id: VehicleId,
        fields: &VehicleFields,
    ) -> Result<Vehicle, VehicleStoreError>;
    async fn delete_vehicle(
        &mut self,
        id: VehicleId,
    ) -> Result<(), VehicleStoreError>;
}

#[derive(Debug, Error)]
pub enum VehicleStoreError {
    #[error("Vehicle not found")]
    VehicleNotFound,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for VehicleStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::VehicleNotFound, Self::VehicleNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
