use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthReport {
    status: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

impl HealthReport {
    fn new(status: &'static str) -> Self {
        HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            store: None,
        }
    }
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport::new("healthy"))
}

pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(HealthReport::new("alive"))
}

/// Ready once the question store answers a ping.
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let Some(db) = &state.db else {
        return HttpResponse::Ok().json(HealthReport {
            store: Some("in-memory"),
            ..HealthReport::new("ready")
        });
    };

    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthReport {
            store: Some("mongodb"),
            ..HealthReport::new("ready")
        }),
        Err(e) => {
            log::warn!("readiness ping failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthReport {
                store: Some("unreachable"),
                ..HealthReport::new("not_ready")
            })
        }
    }
}
