use crate::helpers::{create_vehicle, list_vehicles, van, TestApp};
use test_context::test_context;
use vehicle_registry::{
    domain::Vehicle, utils::constants::messages, ErrorResponse,
};

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_with_created_vehicle(app: &mut TestApp) {
    let response = app.post_vehicle(&van()).await;
    assert_eq!(response.status().as_u16(), 201);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Could not deserialise response body to JSON");
    assert!(body["id"].is_i64(), "Missing assigned id: {body}");

    let vehicle: Vehicle = serde_json::from_value(body)
        .expect("Could not deserialise response body to Vehicle");
    assert_eq!(vehicle.name, "Van1");
    assert_eq!(vehicle.ramal, 100);
    assert_eq!(vehicle.setor, "TI");
    assert_eq!(vehicle.plate, "ABC123");
    assert_eq!(vehicle.model, "Fiat");
    assert_eq!(vehicle.cor, "red");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_store_color_alias_as_cor(app: &mut TestApp) {
    let mut body = van();
    body.as_object_mut().unwrap().remove("cor");
    body["color"] = serde_json::json!("blue");

    let response = app.post_vehicle(&body).await;
    assert_eq!(response.status().as_u16(), 201);

    let json = response
        .json::<serde_json::Value>()
        .await
        .expect("Could not deserialise response body to JSON");
    assert_eq!(json["cor"], "blue");
    assert!(json.get("color").is_none(), "Only `cor` is exposed: {json}");

    let stored = list_vehicles(app).await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].cor, "blue");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_prefer_cor_over_color(app: &mut TestApp) {
    let mut body = van();
    body["color"] = serde_json::json!("blue");

    let vehicle = create_vehicle(app, &body).await;
    assert_eq!(vehicle.cor, "red");

    body["cor"] = serde_json::json!("");
    let vehicle = create_vehicle(app, &body).await;
    assert_eq!(vehicle.cor, "blue", "Empty `cor` should fall back to `color`");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_numeric_string_ramal(app: &mut TestApp) {
    let mut body = van();
    body["ramal"] = serde_json::json!("2040");

    let vehicle = create_vehicle(app, &body).await;
    assert_eq!(vehicle.ramal, 2040);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_ramal_is_not_an_integer(app: &mut TestApp) {
    let test_cases = [
        serde_json::json!("abc"),
        serde_json::json!(12.5),
        serde_json::json!(true),
    ];

    for ramal in test_cases.iter() {
        let mut body = van();
        body["ramal"] = ramal.clone();

        let response = app.post_vehicle(&body).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for ramal: {ramal}"
        );
    }
    assert!(list_vehicles(app).await.is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_500_if_required_field_missing(app: &mut TestApp) {
    for field in ["name", "ramal", "setor", "plate", "model", "cor"] {
        let mut body = van();
        body.as_object_mut().unwrap().remove(field);

        let response = app.post_vehicle(&body).await;
        assert_eq!(
            response.status().as_u16(),
            500,
            "Missing {field} should surface as a server error"
        );
        assert_eq!(
            response
                .json::<ErrorResponse>()
                .await
                .expect("Could not deserialise response body to ErrorResponse")
                .error,
            messages::UNEXPECTED_ERROR.to_owned()
        );
    }

    assert!(
        list_vehicles(app).await.is_empty(),
        "No row should be written for an incomplete vehicle"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_allow_duplicate_plates(app: &mut TestApp) {
    let first = create_vehicle(app, &van()).await;
    let second = create_vehicle(app, &van()).await;

    assert_ne!(first.id, second.id);
    assert_eq!(list_vehicles(app).await.len(), 2);
}
