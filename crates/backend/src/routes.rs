use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::config::Config;

/// Запас на служебные части multipart сверх размера документа
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Norms catalog
        .route("/api/norms", get(handlers::a001_norms_catalog::list_all))
        .route(
            "/api/norms/:period",
            get(handlers::a001_norms_catalog::get_by_period),
        )
        // UseCase u502: Import norms from document
        .route(
            "/api/norms/import",
            post(handlers::usecases::u502_import).layer(DefaultBodyLimit::max(
                config.import.max_document_bytes + MULTIPART_OVERHEAD_BYTES,
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::usecases::common::UseCaseError;
    use tower::ServiceExt;

    const BOUNDARY: &str = "norms-import-boundary";

    fn multipart_body(period: &str, file: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"period\"\r\n\r\n{period}\r\n\
             --{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"normy.txt\"\r\n\
             Content-Type: text/plain\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(file);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected_with_413() {
        let mut config = Config::default();
        config.import.max_document_bytes = 1024;

        let request = Request::builder()
            .method("POST")
            .uri("/api/norms/import")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body("Сентябрь", &vec![b'x'; 200 * 1024])))
            .unwrap();

        let response = configure_routes(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error: UseCaseError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "PAYLOAD_TOO_LARGE");
        assert!(error.message.starts_with("Документ слишком большой"));
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = configure_routes(&Config::default())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
