pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/test", get(health::diagnostics_handler))
        .route("/api/questions", get(handlers::handle_list_questions))
        .route("/api/assess", post(handlers::handle_assess))
        .route("/api/assessments/:id", get(handlers::handle_get_assessment))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::store::testing::{FailingStore, MemoryStore};
    use crate::store::DocumentStore;

    fn app(store: Option<Arc<dyn DocumentStore>>) -> Router {
        build_router(AppState {
            store,
            config: Config {
                database_url: None,
                database_name: None,
                port: 8000,
                rust_log: "info".to_string(),
            },
        })
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn assess_req(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/assess")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn answers(agree: &[i64]) -> Value {
        let list: Vec<Value> = (1..=12)
            .map(|id| {
                json!({
                    "question_id": id,
                    "choice": if agree.contains(&id) { "A" } else { "B" }
                })
            })
            .collect();
        Value::Array(list)
    }

    #[tokio::test]
    async fn test_root_liveness() {
        let (status, body) = send(app(None), get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Career Pathfinder API is running");
    }

    #[tokio::test]
    async fn test_questions_are_stable_across_calls() {
        let (status, first) = send(app(None), get_req("/api/questions")).await;
        assert_eq!(status, StatusCode::OK);
        let (_, second) = send(app(None), get_req("/api/questions")).await;
        assert_eq!(first, second);

        let json: Value = serde_json::from_slice(&first).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 12);
        assert_eq!(list[11]["id"], 12);
        assert_eq!(list[0]["options"], json!({"A": "Agree", "B": "Disagree"}));
    }

    #[tokio::test]
    async fn test_assess_tie_between_r_and_i() {
        let store = Arc::new(MemoryStore::default());
        let (status, body) = send(
            app(Some(store.clone() as Arc<dyn DocumentStore>)),
            assess_req(json!({"name": "Sam", "answers": answers(&[1, 2, 3, 4])})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["scores"],
            json!({"R": 2, "I": 2, "A": 0, "S": 0, "E": 0, "C": 0})
        );
        assert_eq!(json["top_types"], json!(["R", "I"]));
        assert_eq!(json["careers"].as_array().unwrap().len(), 6);
        assert!(json["id"].is_string());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_assess_all_b() {
        let (status, body) = send(app(None), assess_req(json!({"answers": answers(&[])}))).await;
        assert_eq!(status, StatusCode::OK);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["scores"],
            json!({"R": 0, "I": 0, "A": 0, "S": 0, "E": 0, "C": 0})
        );
        assert_eq!(json["top_types"], json!(["R"]));
        assert!(json["id"].is_null());
    }

    #[tokio::test]
    async fn test_assess_unknown_question_is_client_error() {
        let (status, body) = send(
            app(None),
            assess_req(json!({"answers": [{"question_id": 999, "choice": "A"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_QUESTION_ID");
        assert_eq!(json["error"]["message"], "Invalid question id: 999");
    }

    #[tokio::test]
    async fn test_assess_invalid_choice_is_client_error() {
        let (status, body) = send(
            app(None),
            assess_req(json!({"answers": [{"question_id": 5, "choice": "C"}]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "INVALID_CHOICE");
        assert!(json.get("scores").is_none());
    }

    #[tokio::test]
    async fn test_assess_survives_store_outage() {
        let body = json!({"answers": answers(&[1, 2])});
        let (ok_status, ok_body) = send(
            app(Some(Arc::new(MemoryStore::default()))),
            assess_req(body.clone()),
        )
        .await;
        let (down_status, down_body) =
            send(app(Some(Arc::new(FailingStore))), assess_req(body)).await;
        assert_eq!(ok_status, StatusCode::OK);
        assert_eq!(down_status, StatusCode::OK);

        let mut ok: Value = serde_json::from_slice(&ok_body).unwrap();
        let mut down: Value = serde_json::from_slice(&down_body).unwrap();
        assert!(ok["id"].is_string());
        assert!(down["id"].is_null());
        ok["id"] = Value::Null;
        down["id"] = Value::Null;
        assert_eq!(ok, down);
    }

    #[tokio::test]
    async fn test_stored_result_can_be_fetched() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::default());
        let (_, body) = send(
            app(Some(store.clone())),
            assess_req(json!({"email": "kim@example.com", "answers": answers(&[7, 8])})),
        )
        .await;
        let created: Value = serde_json::from_slice(&body).unwrap();
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(
            app(Some(store.clone())),
            get_req(&format!("/api/assessments/{id}")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let doc: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["id"], id);
        assert_eq!(doc["email"], "kim@example.com");
        assert_eq!(doc["top_types"], json!(["S"]));
        assert_eq!(doc["summary"], created["summary"]);
    }

    #[tokio::test]
    async fn test_fetch_unknown_result_is_404() {
        let (status, _) = send(
            app(Some(Arc::new(MemoryStore::default()))),
            get_req("/api/assessments/not-a-real-id"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fetch_without_store_is_503() {
        let (status, _) = send(app(None), get_req("/api/assessments/abc")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let (status, _) = send(
            app(Some(Arc::new(FailingStore))),
            get_req("/api/assessments/abc"),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_diagnostics_always_ok() {
        for store in [
            None,
            Some(Arc::new(FailingStore) as Arc<dyn DocumentStore>),
            Some(Arc::new(MemoryStore::default()) as Arc<dyn DocumentStore>),
        ] {
            let (status, body) = send(app(store), get_req("/test")).await;
            assert_eq!(status, StatusCode::OK);
            let json: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["backend"], "✅ Running");
            assert_eq!(json["database_url"], "❌ Not Set");
        }
    }
}
