use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::redis;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;

use crate::shared::backend::BackendHandles;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
/// - No Redis
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks critical dependencies
/// - Without a backend the service runs on built-in content and is ready
#[get("/ready")]
pub async fn readiness(backend: web::Data<BackendHandles>) -> impl Responder {
    let db_status = match &backend.db {
        None => "not_configured",
        Some(db) => match db
            .execute(Statement::from_string(
                db.get_database_backend(),
                "SELECT 1",
            ))
            .await
        {
            Ok(_) => "ok",
            Err(_) => "unhealthy",
        },
    };

    let redis_status = match &backend.redis {
        None => "not_configured",
        Some(pool) => match pool.get().await {
            Ok(mut conn) => match redis::cmd("PING").query_async::<String>(&mut conn).await {
                Ok(_) => "ok",
                Err(_) => "unhealthy",
            },
            Err(_) => "unhealthy",
        },
    };

    let healthy = db_status != "unhealthy" && redis_status != "unhealthy";

    let body = ReadinessResponse {
        status: if healthy { "ok" } else { "unhealthy" },
        database: db_status,
        redis: redis_status,
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
