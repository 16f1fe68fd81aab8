//! # HTTP Client Tests
//!
//! `ApiClient` against a local mock backend: request paths, JSON bodies and
//! error mapping.

use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bank_client::config::ClientConfig;
use bank_client::core::{AppError, BankApi};
use bank_client::services::ApiClient;
use shared::{CardOperationRequest, PaymentSystem, SignInRequest, TransferRequest};

const CARD: &str = "4111222233334444";

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig {
        api_base_url: format!("{}/api/", server.uri()),
        request_timeout: Duration::from_secs(2),
        ..ClientConfig::default()
    };
    ApiClient::new(&config).unwrap()
}

fn card_request(amount: i64) -> CardOperationRequest {
    CardOperationRequest {
        card_num: CARD.to_string(),
        password_of_card: "1234".to_string(),
        summa: Decimal::from(amount),
    }
}

#[tokio::test]
async fn test_sign_in_posts_credentials_and_parses_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signIn"))
        .and(body_json(json!({ "numberOfCard": CARD, "passwordOfCard": "1234" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token",
            "clientFirstName": "Aibek",
            "clientLastName": "Sydykov",
            "numberOfCard": CARD,
            "paymentSystem": "VISA",
            "balance": 1000.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server)
        .sign_in(SignInRequest {
            number_of_card: CARD.to_string(),
            password_of_card: "1234".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(session.token, "jwt-token");
    assert_eq!(session.payment_system, PaymentSystem::Visa);
    assert_eq!(session.balance, Decimal::new(10005, 1));
}

#[tokio::test]
async fn test_card_operations_hit_network_endpoints() {
    let server = MockServer::start().await;
    for route in ["/api/visa/replenishVisa", "/api/master/debitingMaster"] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("POST"))
        .and(path("/api/master/transferMaster"))
        .and(body_json(json!({
            "cardNum": CARD,
            "passwordOfCard": "1234",
            "summa": 250,
            "otherCardNum": "5555666677778888",
            "payment": "VISA"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.deposit(PaymentSystem::Visa, card_request(100)).await.unwrap();
    client.withdraw(PaymentSystem::Mastercard, card_request(100)).await.unwrap();
    client
        .transfer(
            PaymentSystem::Mastercard,
            TransferRequest {
                card_num: CARD.to_string(),
                password_of_card: "1234".to_string(),
                summa: Decimal::from(250),
                other_card_num: "5555666677778888".to_string(),
                payment: PaymentSystem::Visa,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_error_status_maps_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signIn"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid card or PIN" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/visa/replenishVisa"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client
        .sign_in(SignInRequest {
            number_of_card: CARD.to_string(),
            password_of_card: "0000".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::Network(reason) if reason == "Invalid card or PIN"));

    let err = client.deposit(PaymentSystem::Visa, card_request(1)).await.unwrap_err();
    assert!(matches!(&err, AppError::Network(reason) if reason == "HTTP 503"));
}

#[tokio::test]
async fn test_malformed_session_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/signIn"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server)
        .sign_in(SignInRequest {
            number_of_card: CARD.to_string(),
            password_of_card: "1234".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let config = ClientConfig {
        api_base_url: "http://127.0.0.1:1/api".to_string(),
        request_timeout: Duration::from_secs(2),
        ..ClientConfig::default()
    };
    let client = ApiClient::new(&config).unwrap();

    let result = client.deposit(PaymentSystem::Visa, card_request(5)).await;
    assert!(matches!(result, Err(AppError::Network(_))));
}
