use serde::de::DeserializeOwned;

use crate::core::config::GeographyConfig;
use crate::core::error::{AppError, Result};
use crate::features::geography::dtos::{CityResponse, UfResponse};

/// Read-only client for the geography service
pub struct GeographyService {
    client: reqwest::Client,
    base_url: String,
}

impl GeographyService {
    pub fn new(config: &GeographyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("EcoletaCore/0.1 (collection-points)")
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// All region codes, sorted alphabetically
    pub async fn list_region_codes(&self) -> Result<Vec<String>> {
        let url = format!("{}/estados", self.base_url);
        let regions: Vec<UfResponse> = self.fetch(&url).await?;

        Ok(sorted_region_codes(regions))
    }

    /// City names of one region, in the order the service returns them
    pub async fn list_sub_regions(&self, uf: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/estados/{}/municipios",
            self.base_url,
            urlencoding::encode(uf)
        );
        let cities: Vec<CityResponse> = self.fetch(&url).await?;

        Ok(cities.into_iter().map(|c| c.nome).collect())
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Geography lookup: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Geography request failed: {:?}", e);
            AppError::ExternalServiceError(format!("Geography request failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Geography service returned status: {}", response.status());
            return Err(AppError::ExternalServiceError(format!(
                "Geography service returned status {}",
                response.status()
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse geography response: {:?}", e);
            AppError::ExternalServiceError(format!("Failed to parse geography response: {}", e))
        })
    }
}

fn sorted_region_codes(regions: Vec<UfResponse>) -> Vec<String> {
    let mut codes: Vec<String> = regions.into_iter().map(|r| r.sigla).collect();
    codes.sort();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, routing::get, Json, Router};
    use serde_json::{json, Value};

    #[test]
    fn test_region_payload_is_sorted_by_code() {
        let payload = r#"[
            {"id": 35, "sigla": "SP", "nome": "São Paulo"},
            {"id": 12, "sigla": "AC", "nome": "Acre"},
            {"id": 31, "sigla": "MG", "nome": "Minas Gerais"}
        ]"#;
        let regions: Vec<UfResponse> = serde_json::from_str(payload).unwrap();

        assert_eq!(sorted_region_codes(regions), vec!["AC", "MG", "SP"]);
    }

    async fn fake_regions() -> Json<Value> {
        Json(json!([{"sigla": "RJ"}, {"sigla": "BA"}]))
    }

    async fn fake_cities(Path(uf): Path<String>) -> Json<Value> {
        match uf.as_str() {
            "RJ" => Json(json!([{"nome": "Rio de Janeiro"}, {"nome": "Niterói"}])),
            _ => Json(json!([])),
        }
    }

    /// Serve a stand-in geography service on a loopback port
    async fn spawn_fake_service() -> String {
        let app = Router::new()
            .route("/estados", get(fake_regions))
            .route("/estados/{uf}/municipios", get(fake_cities));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_lookups_against_fake_service() {
        let base_url = spawn_fake_service().await;
        let service = GeographyService::new(&GeographyConfig { base_url }).unwrap();

        assert_eq!(service.list_region_codes().await.unwrap(), vec!["BA", "RJ"]);
        assert_eq!(
            service.list_sub_regions("RJ").await.unwrap(),
            vec!["Rio de Janeiro", "Niterói"]
        );
        assert!(service.list_sub_regions("BA").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error_status_is_external_error() {
        let base_url = spawn_fake_service().await;
        let service = GeographyService::new(&GeographyConfig {
            base_url: format!("{}/missing", base_url),
        })
        .unwrap();

        let result = service.list_region_codes().await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
