use axum::Json;
use serde::Serialize;

use salvage_rules::RULE_VERSION;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    rule_version: &'static str,
}

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        rule_version: RULE_VERSION,
    })
}
