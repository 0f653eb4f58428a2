use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    domain::{AuthAPIError, Email, Password, User, UserId, UserStoreError},
    utils::constants::messages,
};

/// Checks credentials and echoes the matching user back. No session or
/// token is issued.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), AuthAPIError> {
    let email = Email::new(Secret::new(request.email));
    let password = Password::new(request.password);

    let digest = state
        .password_hasher
        .hash(&password)
        .map_err(AuthAPIError::UnexpectedError)?;

    let user = state
        .user_store
        .read()
        .await
        .find_user(&email, &digest)
        .await
        .map_err(|e| match e {
            UserStoreError::UserNotFound => AuthAPIError::IncorrectCredentials,
            err => AuthAPIError::UnexpectedError(eyre!(err)),
        })?;

    let response = Json(LoginResponse {
        message: messages::LOGIN_SUCCEEDED.to_string(),
        user: UserSummary::from(user),
    });

    Ok((StatusCode::OK, response))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
}

/// The public view of a user; never carries the password digest.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub fullname: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            fullname: user.fullname,
            email: user.email.as_ref().expose_secret().to_owned(),
        }
    }
}
