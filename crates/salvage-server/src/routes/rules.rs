use axum::Json;

use salvage_rules::tables::{rule_tables, RuleTables};

pub async fn get_rules() -> Json<RuleTables> {
    Json(rule_tables())
}
