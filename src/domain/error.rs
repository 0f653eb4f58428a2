use color_eyre::eyre::Report;
use thiserror::Error;

use super::VehicleId;

#[derive(Debug, Error)]
pub enum AuthAPIError {
    #[error("Invalid credentials")]
    IncorrectCredentials,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("User already exists")]
    UserAlreadyExists,
}

#[derive(Debug, Error)]
pub enum VehicleAPIError {
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleId),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}
