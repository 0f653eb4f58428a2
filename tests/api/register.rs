use crate::helpers::{get_random_email, register, TestApp};
use test_context::test_context;
use vehicle_registry::{
    routes::auth::RegisterResponse, utils::constants::messages, ErrorResponse,
};

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_201_for_valid_requests(app: &mut TestApp) {
    let test_cases = [
        serde_json::json!({
            "fullname": "Maria Silva",
            "email": get_random_email(),
            "password": "abcd1234"
        }),
        serde_json::json!({
            "fullname": "João",
            "email": get_random_email(),
            "password": "☀😎"
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            201,
            "Failed for input: {:?}",
            test_case
        );

        let expected_response = RegisterResponse {
            message: messages::USER_CREATED.to_owned(),
        };

        assert_eq!(
            response
                .json::<RegisterResponse>()
                .await
                .expect("Could not deserialise response body to RegisterResponse"),
            expected_response
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_accept_unvalidated_fields(app: &mut TestApp) {
    // Only presence is checked; format is up to the client
    let test_cases = [
        serde_json::json!({
            "fullname": "",
            "email": "not-an-email",
            "password": ""
        }),
        serde_json::json!({
            "fullname": "Empty Email",
            "email": "",
            "password": "x"
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            201,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_422_if_malformed_input(app: &mut TestApp) {
    let random_email = get_random_email();

    let test_cases = [
        serde_json::json!({
            "email": random_email,
            "password": "password123"
        }),
        serde_json::json!({
            "fullname": "Maria Silva",
            "password": "password123"
        }),
        serde_json::json!({
            "fullname": "Maria Silva",
            "email": random_email
        }),
        serde_json::json!({
            "fullname": "Maria Silva",
            "email": random_email,
            "password": 1234
        }),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_register(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "Failed for input: {:?}",
            test_case
        );
    }
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_if_email_exists(app: &mut TestApp) {
    let email = get_random_email();
    register(app, "First Owner", &email, "first-password").await;

    let response = app
        .post_register(&serde_json::json!({
            "fullname": "Second Owner",
            "email": email,
            "password": "second-password"
        }))
        .await;
    assert_eq!(
        response.status().as_u16(),
        400,
        "Should fail with HTTP400 (account with email already exists)"
    );
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        messages::EMAIL_ALREADY_REGISTERED.to_owned()
    );

    // The original account is untouched and no second one exists
    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "second-password"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "first-password"
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
}
