use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::state::AppState;
use crate::store::DocumentStore;

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Career Pathfinder API is running"
    }))
}

#[derive(Debug, Serialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub connection_status: String,
    pub store_name: Option<String>,
    pub collections: Vec<String>,
    pub database_url: String,
    pub database_name: String,
}

/// GET /test
/// Always 200: store failures are reported in the body, never raised.
pub async fn diagnostics_handler(State(state): State<AppState>) -> Json<Diagnostics> {
    Json(collect_diagnostics(state.store.as_deref(), &state.config).await)
}

pub async fn collect_diagnostics(store: Option<&dyn DocumentStore>, config: &Config) -> Diagnostics {
    let mut report = Diagnostics {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        connection_status: "Not Connected".to_string(),
        store_name: None,
        collections: Vec::new(),
        database_url: presence(config.database_url.is_some()),
        database_name: presence(config.database_name.is_some()),
    };

    if let Some(store) = store {
        report.connection_status = "Connected".to_string();
        report.store_name = Some(store.name().to_string());
        match store.list_collections().await {
            Ok(names) => {
                report.collections = names.into_iter().take(MAX_LISTED_COLLECTIONS).collect();
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                let short: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
                report.database = format!("⚠️  Connected but Error: {short}");
            }
        }
    }

    report
}

fn presence(set: bool) -> String {
    let label = if set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}
