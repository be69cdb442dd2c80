use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Resume Rocket API";

/// GET / and GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "online",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
