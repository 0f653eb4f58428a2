use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    serve::Serve,
    Json, Router,
};

use serde::{Deserialize, Serialize};
use std::{error::Error, path::Path};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::Level;

use domain::{AuthAPIError, VehicleAPIError};
pub mod routes;
use crate::utils::{constants::messages, tracing::*};
use routes::{
    auth::{login, register},
    vehicles::{add_vehicle, delete_vehicle, list_vehicles, update_vehicle},
};
pub mod app_state;
pub mod domain;
pub mod services;
use app_state::AppState;
use services::data_stores::SqliteDatabase;
pub mod utils;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AuthAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AuthAPIError::UserAlreadyExists => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::BAD_REQUEST, messages::EMAIL_ALREADY_REGISTERED)
            }
            AuthAPIError::IncorrectCredentials => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::UNAUTHORIZED, messages::INVALID_CREDENTIALS)
            }
            AuthAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (StatusCode::INTERNAL_SERVER_ERROR, messages::UNEXPECTED_ERROR)
            }
        };
        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });
        (status, body).into_response()
    }
}

impl IntoResponse for VehicleAPIError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            VehicleAPIError::VehicleNotFound(_) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::NOT_FOUND, messages::VEHICLE_NOT_FOUND)
            }
            VehicleAPIError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (StatusCode::INTERNAL_SERVER_ERROR, messages::UNEXPECTED_ERROR)
            }
        };
        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });
        (status, body).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        // Any origin may call the API
        let cors = CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
            ])
            .allow_headers(Any)
            .allow_origin(Any);

        let api = Router::new()
            .route("/register", post(register))
            .route("/login", post(login))
            .route("/vehicles", get(list_vehicles).post(add_vehicle))
            .route(
                "/vehicles/:id",
                put(update_vehicle).delete(delete_vehicle),
            );

        let router = Router::new()
            .nest("/api", api)
            .with_state(app_state)
            .layer(cors)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Opens the SQLite file at `path`, creating it and its tables if needed.
pub async fn get_sqlite_database(
    path: impl AsRef<Path>,
) -> Result<SqliteDatabase, sqlx::Error> {
    let database = SqliteDatabase::new(path);
    database.ensure_schema().await?;
    Ok(database)
}
