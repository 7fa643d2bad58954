//! Integration tests for the REST API, driven through the router with an
//! in-memory stand-in for the internal service.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use messages_external::client::{GatewayError, GatewayResult, MessageGateway};
use messages_external::dto::MessageDto;
use messages_external::http::{create_router, AppState};

/// In-memory stand-in for the internal service.
///
/// Missing ids surface the way the real service surfaces them: as `404`
/// status errors, not as absences.
struct StoreGateway {
    store: Mutex<BTreeMap<i64, String>>,
    next_id: AtomicI64,
    healthy: AtomicBool,
}

impl StoreGateway {
    fn new() -> Self {
        Self {
            store: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            healthy: AtomicBool::new(true),
        }
    }

    fn not_found(id: i64) -> GatewayError {
        GatewayError::Status {
            status: 404,
            body: format!(
                r#"{{"status":"NOT_FOUND","message":"no message found with id: {}","code":404}}"#,
                id
            ),
        }
    }

    fn message_count(&self) -> usize {
        self.store.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageGateway for StoreGateway {
    async fn health_check(&self) -> GatewayResult<bool> {
        Ok(self.healthy.load(Ordering::SeqCst))
    }

    async fn create_message(&self, message: &MessageDto) -> GatewayResult<MessageDto> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.store
            .lock()
            .unwrap()
            .insert(id, message.message.clone());
        Ok(MessageDto {
            id: Some(id),
            message: message.message.clone(),
        })
    }

    async fn update_message(&self, id: i64, message: &MessageDto) -> GatewayResult<MessageDto> {
        let mut store = self.store.lock().unwrap();
        if !store.contains_key(&id) {
            return Err(Self::not_found(id));
        }
        store.insert(id, message.message.clone());
        Ok(MessageDto {
            id: Some(id),
            message: message.message.clone(),
        })
    }

    async fn get_message_by_id(&self, id: i64) -> GatewayResult<MessageDto> {
        self.store
            .lock()
            .unwrap()
            .get(&id)
            .map(|message| MessageDto {
                id: Some(id),
                message: message.clone(),
            })
            .ok_or_else(|| Self::not_found(id))
    }

    async fn get_all_messages(&self) -> GatewayResult<Vec<MessageDto>> {
        Ok(self
            .store
            .lock()
            .unwrap()
            .iter()
            .map(|(id, message)| MessageDto {
                id: Some(*id),
                message: message.clone(),
            })
            .collect())
    }

    async fn delete_message(&self, id: i64) -> GatewayResult<()> {
        if self.store.lock().unwrap().remove(&id).is_none() {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

fn test_app() -> (Router, Arc<StoreGateway>) {
    let gateway = Arc::new(StoreGateway::new());
    let app = create_router(AppState::with_gateway(gateway.clone()));
    (app, gateway)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_message(app: &Router, content: &str) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/messages",
            json!({"message": content}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn post_creates_message_with_assigned_id() {
    let (app, _gateway) = test_app();

    let body = create_message(&app, "Created message").await;

    assert_eq!(body["message"], "Created message");
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn post_rejects_blank_message_without_reaching_upstream() {
    let (app, gateway) = test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/messages", json!({"message": " "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["status"], "BAD_REQUEST");
    assert_eq!(body["code"], 400);
    assert_eq!(gateway.message_count(), 0);
}

#[tokio::test]
async fn post_rejects_malformed_json() {
    let (app, _gateway) = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/messages")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_returns_stored_message() {
    let (app, _gateway) = test_app();
    let created = create_message(&app, "stored").await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(bare_request("GET", &format!("/api/messages/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, created);
}

#[tokio::test]
async fn get_missing_message_returns_internal_error() {
    let (app, _gateway) = test_app();

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/messages/42"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["status"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["code"], 500);
    assert_eq!(body["message"], "Error retrieving message with id: 42");
}

#[tokio::test]
async fn get_rejects_non_numeric_id() {
    let (app, _gateway) = test_app();

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/messages/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn put_updates_existing_message() {
    let (app, _gateway) = test_app();
    let created = create_message(&app, "before").await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/messages/{}", id),
            json!({"message": "after"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["message"], "after");
}

#[tokio::test]
async fn put_missing_message_returns_internal_error() {
    let (app, _gateway) = test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/messages/1",
            json!({"message": "updated"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["status"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["message"], "Error updating an existing message");
}

#[tokio::test]
async fn put_rejects_blank_message() {
    let (app, _gateway) = test_app();
    let created = create_message(&app, "kept").await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/messages/{}", id),
            json!({"message": ""}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_messages_in_upstream_order() {
    let (app, _gateway) = test_app();
    for content in ["first", "second", "third"] {
        create_message(&app, content).await;
    }

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/api/messages"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    let contents: Vec<&str> = items
        .iter()
        .map(|m| m["message"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let (app, gateway) = test_app();
    let created = create_message(&app, "short lived").await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(bare_request("DELETE", &format!("/api/messages/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(gateway.message_count(), 0);
}

#[tokio::test]
async fn delete_missing_message_returns_internal_error() {
    let (app, _gateway) = test_app();

    let response = app
        .clone()
        .oneshot(bare_request("DELETE", "/api/messages/9"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Error deleting message with id: 9");
}

#[tokio::test]
async fn health_reports_connected_upstream() {
    let (app, _gateway) = test_app();

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream"], "connected");
}

#[tokio::test]
async fn health_reports_disconnected_upstream() {
    let (app, gateway) = test_app();
    gateway.healthy.store(false, Ordering::SeqCst);

    let response = app
        .clone()
        .oneshot(bare_request("GET", "/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["upstream"], "disconnected");
}
