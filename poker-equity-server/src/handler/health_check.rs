use axum::{Json, extract::Query};

use crate::define_handler;

#[derive(serde::Serialize, serde::Deserialize)]
pub struct HealthCheckRequest {
    pub id: String,
}

#[derive(serde::Deserialize, serde::Serialize, PartialEq, Debug)]
pub struct HealthCheckResponse {
    pub id: String,
    pub status: String,
}

pub async fn handler(Query(params): Query<HealthCheckRequest>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        id: params.id,
        status: "ok".to_string(),
    })
}

define_handler!(
    HealthCheckHandler {
        Method = GET;
        Path = "/health_check";
        FN = handler;
    }
);
