use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::features::points::handlers::{create_point, get_point, list_points};
use crate::features::points::services::PointService;

/// Create routes for the points feature
pub fn routes(service: Arc<PointService>) -> Router {
    // Allow body size up to the image limit plus a buffer for the text fields
    let body_limit = service.max_upload_size() + 1024 * 1024;

    Router::new()
        .route(
            "/points",
            get(list_points).post(create_point).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/points/{id}", get(get_point))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::points::dtos::{PointDetailResponseDto, PointResponseDto};
    use crate::shared::test_helpers::{sample_items, test_storage, InMemoryPointRepository};
    use crate::shared::types::ErrorResponse;
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;

    fn test_server() -> TestServer {
        let service = Arc::new(PointService::new(
            Arc::new(InMemoryPointRepository::new(sample_items())),
            test_storage(),
            1024 * 1024,
        ));
        TestServer::new(routes(service)).unwrap()
    }

    fn point_form(city: &str, uf: &str, items: &str) -> MultipartForm {
        MultipartForm::new()
            .add_text("name", "Mercado Verde")
            .add_text("email", "contato@mercadoverde.com.br")
            .add_text("whatsapp", "5511999999999")
            .add_text("city", city.to_string())
            .add_text("uf", uf.to_string())
            .add_text("latitude", "-23.5505")
            .add_text("longitude", "-46.6333")
            .add_text("items", items.to_string())
            .add_part(
                "image",
                Part::bytes(vec![0x89, b'P', b'N', b'G'])
                    .file_name("mercado.png")
                    .mime_type("image/png"),
            )
    }

    #[tokio::test]
    async fn test_create_and_fetch_point() {
        let server = test_server();

        let response = server
            .post("/points")
            .multipart(point_form("São Paulo", "SP", "1, 2,3"))
            .await;
        response.assert_status_ok();
        let created: PointResponseDto = response.json();
        assert_eq!(created.uf, "SP");
        assert_eq!(created.latitude, -23.5505);
        assert!(created.image.ends_with("-mercado.png"));
        assert_eq!(
            created.image_url,
            format!("http://localhost:3333/uploads/{}", created.image)
        );

        let response = server.get(&format!("/points/{}", created.id)).await;
        response.assert_status_ok();
        let detail: PointDetailResponseDto = response.json();
        assert_eq!(detail.point.id, created.id);
        assert_eq!(detail.items.len(), 3);
        assert_eq!(detail.items[1].title, "Pilhas e Baterias");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_uf() {
        let server = test_server();

        let response = server
            .post("/points")
            .multipart(point_form("São Paulo", "SAO", "1"))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert!(body.message.contains("uf must be exactly 2 characters"));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_items() {
        let server = test_server();

        let response = server
            .post("/points")
            .multipart(point_form("São Paulo", "SP", "1,two"))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_requires_image() {
        let server = test_server();
        let form = MultipartForm::new()
            .add_text("name", "Mercado Verde")
            .add_text("email", "contato@mercadoverde.com.br")
            .add_text("whatsapp", "5511999999999")
            .add_text("city", "São Paulo")
            .add_text("uf", "SP")
            .add_text("latitude", "-23.5505")
            .add_text("longitude", "-46.6333")
            .add_text("items", "1");

        let response = server
            .post("/points")
            .multipart(form)
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.message, "image is required");
    }

    #[tokio::test]
    async fn test_get_unknown_point_returns_message() {
        let server = test_server();

        let response = server.get("/points/404").expect_failure().await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.message, "point not found");
    }

    #[tokio::test]
    async fn test_get_point_with_non_numeric_id() {
        let server = test_server();

        let response = server.get("/points/abc").expect_failure().await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_points() {
        let server = test_server();
        for (city, uf, items) in [
            ("Belo Horizonte", "MG", "1,2"),
            ("Belo Horizonte", "MG", "3"),
            ("Contagem", "MG", "1"),
        ] {
            server
                .post("/points")
                .multipart(point_form(city, uf, items))
                .await
                .assert_status_ok();
        }

        let response = server
            .get("/points")
            .add_query_param("city", "Belo Horizonte")
            .add_query_param("uf", "MG")
            .add_query_param("items", "1,2")
            .await;

        response.assert_status_ok();
        let points: Vec<PointResponseDto> = response.json();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].city, "Belo Horizonte");
    }

    #[tokio::test]
    async fn test_search_rejects_malformed_items() {
        let server = test_server();

        let response = server
            .get("/points")
            .add_query_param("city", "Contagem")
            .add_query_param("uf", "MG")
            .add_query_param("items", "1,x")
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
