//! `api` crate — HTTP layer over the course-registration service.
//!
//! Exposes:
//!   GET    /courses
//!   GET    /courses/enrolled
//!   POST   /courses/enroll   (name, emailId, courseName as query or form body)

pub mod config;
pub mod error;
pub mod handlers;

use axum::Router;
use service::CourseService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub use config::ServerConfig;
pub use error::{ApiError, ServeError};
pub use handlers::AppState;

/// Build the application router with all routes
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .merge(handlers::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `config.bind_addr` and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig, service: CourseService) -> Result<(), ServeError> {
    let cors = config.cors_layer()?;
    info!(origin = %config.allowed_origin, "CORS origin configured");

    let app = build_router(AppState::new(service), cors);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            warn!("Received SIGTERM, starting shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use db::repository::InMemoryStore;
    use db::CourseRow;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_over(store: &InMemoryStore) -> Router {
        let service = CourseService::new(Arc::new(store.clone()), Arc::new(store.clone()));
        let cors = ServerConfig::default().cors_layer().unwrap();
        build_router(AppState::new(service), cors)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_enroll(app: &Router, query: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(format!("/courses/enroll?{query}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn post_enroll_form(app: &Router, body: &'static str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/courses/enroll")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn empty_catalog_is_an_empty_array() {
        let app = app_over(&InMemoryStore::new());
        let (status, body) = get(&app, "/courses").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn seeded_courses_are_served_verbatim() {
        let store = InMemoryStore::with_courses(vec![
            CourseRow::new(1, "Algebra", "Euler", 6),
            CourseRow::new(2, "Rust", "Ferris", 10),
        ]);
        let (status, body) = get(&app_over(&store), "/courses").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "courseId": 1, "courseName": "Algebra", "trainer": "Euler", "durationInWeeks": 6 },
                { "courseId": 2, "courseName": "Rust", "trainer": "Ferris", "durationInWeeks": 10 }
            ])
        );
    }

    #[tokio::test]
    async fn enroll_then_list_enrolled() {
        let store = InMemoryStore::with_courses(vec![CourseRow::new(1, "Algebra", "Euler", 6)]);
        let app = app_over(&store);

        let response =
            post_enroll(&app, "name=Alice&emailId=alice%40x.com&courseName=Algebra").await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/plain"));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Congratulation! Alice course enrolled successfully");

        let (status, body) = get(&app, "/courses/enrolled").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 1, "name": "Alice", "emailId": "alice@x.com", "courseName": "Algebra" }])
        );
    }

    #[tokio::test]
    async fn duplicate_enrollments_are_both_stored() {
        let store = InMemoryStore::new();
        let app = app_over(&store);

        for _ in 0..2 {
            let response =
                post_enroll(&app, "name=Alice&emailId=alice%40x.com&courseName=Algebra").await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let (_, body) = get(&app, "/courses/enrolled").await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0]["id"], rows[1]["id"]);
    }

    #[tokio::test]
    async fn missing_parameter_is_a_client_error_and_stores_nothing() {
        let store = InMemoryStore::new();
        let app = app_over(&store);

        for query in [
            "emailId=alice%40x.com&courseName=Algebra",
            "name=Alice&courseName=Algebra",
            "name=Alice&emailId=alice%40x.com",
            "",
        ] {
            let response = post_enroll(&app, query).await;
            assert!(
                response.status().is_client_error(),
                "query '{query}' gave {}",
                response.status()
            );
        }

        assert_eq!(store.registration_count().await, 0);
    }

    #[tokio::test]
    async fn form_encoded_enrollment_is_stored() {
        let store = InMemoryStore::new();
        let app = app_over(&store);

        let response =
            post_enroll_form(&app, "name=Alice&emailId=alice%40x.com&courseName=Algebra").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Congratulation! Alice course enrolled successfully");

        let (_, body) = get(&app, "/courses/enrolled").await;
        assert_eq!(
            body,
            json!([{ "id": 1, "name": "Alice", "emailId": "alice@x.com", "courseName": "Algebra" }])
        );
    }

    #[tokio::test]
    async fn form_body_missing_a_field_is_a_client_error() {
        let store = InMemoryStore::new();
        let app = app_over(&store);

        for body in [
            "emailId=alice%40x.com&courseName=Algebra",
            "name=Alice&courseName=Algebra",
            "name=Alice&emailId=alice%40x.com",
        ] {
            let response = post_enroll_form(&app, body).await;
            assert!(
                response.status().is_client_error(),
                "body '{body}' gave {}",
                response.status()
            );
        }

        assert_eq!(store.registration_count().await, 0);
    }

    #[tokio::test]
    async fn storage_failure_is_a_server_error() {
        let app = app_over(&InMemoryStore::unavailable());

        let (status, body) = get(&app, "/courses").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");

        let (status, _) = get(&app, "/courses/enrolled").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let response =
            post_enroll(&app, "name=Alice&emailId=alice%40x.com&courseName=Algebra").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn configured_origin_passes_cors_preflight() {
        let app = app_over(&InMemoryStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/courses/enroll")
                    .header(header::ORIGIN, "http://localhost:5500")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5500"
        );
    }

    #[tokio::test]
    async fn configured_origin_gets_cors_grant_on_plain_request() {
        let app = app_over(&InMemoryStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/courses")
                    .header(header::ORIGIN, "http://localhost:5500")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5500"
        );
    }

    #[tokio::test]
    async fn other_origins_get_no_cors_grant() {
        let app = app_over(&InMemoryStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/courses")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
