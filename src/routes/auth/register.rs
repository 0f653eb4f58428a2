use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use color_eyre::eyre::eyre;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, Email, NewUser, Password, UserStoreError},
    utils::constants::messages,
};

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthAPIError> {
    let email = Email::new(Secret::new(request.email));
    let password = Password::new(request.password);

    let digest = state
        .password_hasher
        .hash(&password)
        .map_err(AuthAPIError::UnexpectedError)?;

    let user = NewUser::new(request.fullname, email, digest);

    {
        let mut user_store = state.user_store.write().await;
        user_store.add_user(user).await.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                AuthAPIError::UserAlreadyExists
            }
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;
    }

    let response = Json(RegisterResponse {
        message: messages::USER_CREATED.to_string(),
    });

    Ok((StatusCode::CREATED, response))
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub fullname: String,
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}
