use std::sync::Arc;
use tokio::sync::RwLock;
use vehicle_registry::{
    app_state::AppState,
    domain::Vehicle,
    services::{
        data_stores::{HashmapUserStore, HashmapVehicleStore},
        Sha256PasswordHasher,
    },
    utils::constants::test,
    Application,
};

// The HTTP layer only sees the store traits, so the in-memory stores serve
// the same contract as SQLite.
async fn spawn_in_memory_app() -> String {
    let app_state = AppState::new(
        Arc::new(RwLock::new(HashmapUserStore::default())),
        Arc::new(RwLock::new(HashmapVehicleStore::default())),
        Arc::new(Sha256PasswordHasher),
    );

    let app = Application::build(app_state, test::APP_ADDRESS)
        .await
        .expect("Failed to build app");
    let address = format!("http://{}", app.address.clone());

    #[allow(clippy::let_underscore_future)]
    let _ = tokio::spawn(app.run());

    address
}

#[tokio::test]
async fn should_serve_auth_with_in_memory_stores() {
    let address = spawn_in_memory_app().await;
    let client = reqwest::Client::new();
    let register = serde_json::json!({
        "fullname": "Maria Silva",
        "email": "maria@example.com",
        "password": "password"
    });

    let response = client
        .post(format!("{address}/api/register"))
        .json(&register)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 201);

    let response = client
        .post(format!("{address}/api/register"))
        .json(&register)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .post(format!("{address}/api/login"))
        .json(&serde_json::json!({
            "email": "maria@example.com",
            "password": "password"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);

    let response = client
        .post(format!("{address}/api/login"))
        .json(&serde_json::json!({
            "email": "maria@example.com",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_serve_vehicle_crud_with_in_memory_stores() {
    let address = spawn_in_memory_app().await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{address}/api/vehicles"))
        .json(&serde_json::json!({
            "name": "Van1",
            "ramal": 100,
            "setor": "TI",
            "plate": "ABC123",
            "model": "Fiat",
            "color": "red"
        }))
        .send()
        .await
        .expect("Failed to execute request")
        .json::<Vehicle>()
        .await
        .expect("Could not deserialise response body to Vehicle");
    assert_eq!(created.cor, "red");
    let id = *created.id.as_ref();

    let updated = client
        .put(format!("{address}/api/vehicles/{id}"))
        .json(&serde_json::json!({ "setor": "RH" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json::<Vehicle>()
        .await
        .expect("Could not deserialise response body to Vehicle");
    assert_eq!(
        updated,
        Vehicle {
            setor: "RH".to_owned(),
            ..created
        }
    );

    let response = client
        .post(format!("{address}/api/vehicles"))
        .json(&serde_json::json!({ "name": "Incomplete" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 500);

    let response = client
        .delete(format!("{address}/api/vehicles/{id}"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 200);

    let listed = client
        .get(format!("{address}/api/vehicles"))
        .send()
        .await
        .expect("Failed to execute request")
        .json::<Vec<Vehicle>>()
        .await
        .expect("Could not deserialise response body to Vec<Vehicle>");
    assert!(listed.is_empty());

    let response = client
        .delete(format!("{address}/api/vehicles/{id}"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status().as_u16(), 404);
}
