use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use super::error::{ApiError, Operation};
use super::models::{AnalysisRequest, AnalysisResponse, Company, HealthResponse, SearchResponse};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Thin wrapper over the analysis backend's HTTP surface.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `POST /api/analyze`
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ApiError> {
        tracing::info!(
            company = %request.company_name,
            year = %request.year,
            report = %request.report_code,
            "requesting analysis"
        );

        let builder = self.client.post(self.url("/api/analyze")).json(request);
        let response: AnalysisResponse = self.send(builder, Operation::Analyze).await?;

        if let Some(radar) = &response.radar_data {
            if !radar.is_paired() {
                tracing::warn!(
                    categories = radar.categories.len(),
                    values = radar.values.len(),
                    "radar categories and values differ in length"
                );
            }
        }

        Ok(response)
    }

    /// `GET /api/companies/search`
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Company>, ApiError> {
        tracing::debug!(query, limit, "searching companies");

        let limit = limit.to_string();
        let builder = self
            .client
            .get(self.url("/api/companies/search"))
            .query(&[("query", query), ("limit", limit.as_str())]);
        let response: SearchResponse = self.send(builder, Operation::Search).await?;

        Ok(response.companies)
    }

    /// `GET /health`; any failure reads as unhealthy.
    pub async fn health_check(&self) -> bool {
        let builder = self.client.get(self.url("/health"));
        match self.send::<HealthResponse>(builder, Operation::Health).await {
            Ok(health) => health.status == "healthy",
            Err(e) => {
                tracing::debug!(error = %e, "health check failed");
                false
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        operation: Operation,
    ) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(?operation, error = %e, "backend unreachable");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Transport)?;

        if !status.is_success() {
            let error = ApiError::from_error_body(operation, status.as_u16(), &body);
            tracing::warn!(?operation, status = status.as_u16(), error = %error, "backend rejected request");
            return Err(error);
        }

        serde_json::from_str(&body).map_err(|source| {
            tracing::warn!(?operation, error = %source, "unexpected response body");
            ApiError::Decode { operation, source }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::NETWORK_ERROR_MESSAGE;
    use crate::api::testing::{spawn_backend, unreachable_base_url};
    use crate::domain::ReportCode;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn analyze_posts_backend_field_names() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route(
            "/api/analyze",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "success": true,
                    "message": format!("{} {} {}", body["company_name"], body["year"], body["reprt_code"]),
                    "data": {"company_name": body["company_name"], "year": body["year"], "data": []}
                }))
            }),
        );
        let base = spawn_backend(router).await?;

        let request = AnalysisRequest::new("삼성전자", 2023, ReportCode::HalfYear);
        let response = client(&base).analyze(&request).await?;

        assert!(response.success);
        assert_eq!(response.message, r#""삼성전자" "2023" "11013""#);
        assert!(response.radar_data.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn analyze_surfaces_server_detail() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route(
            "/api/analyze",
            post(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({"detail": "해당 연도의 재무 데이터를 찾을 수 없습니다."})),
                )
            }),
        );
        let base = spawn_backend(router).await?;

        let request = AnalysisRequest::new("카카오", 2019, ReportCode::Annual);
        let Err(error) = client(&base).analyze(&request).await else {
            return Err("expected a server error".into());
        };

        assert_eq!(error.status(), Some(404));
        assert_eq!(error.to_string(), "해당 연도의 재무 데이터를 찾을 수 없습니다.");
        Ok(())
    }

    #[tokio::test]
    async fn analyze_transport_failure_uses_generic_message() {
        let request = AnalysisRequest::new("카카오", 2023, ReportCode::ThirdQuarter);
        let result = client(&unreachable_base_url()).analyze(&request).await;

        assert!(matches!(&result, Err(error) if error.is_transport()));
        assert!(matches!(result, Err(error) if error.to_string() == NETWORK_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn search_sends_query_and_limit() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route(
            "/api/companies/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let query = params.get("query").cloned().unwrap_or_default();
                let limit = params.get("limit").cloned().unwrap_or_default();
                Json(json!({"companies": [{"name": query, "code": limit}]}))
            }),
        );
        let base = spawn_backend(router).await?;

        let companies = client(&base).search("삼성", 3).await?;

        assert_eq!(
            companies,
            vec![Company {
                name: "삼성".to_string(),
                code: "3".to_string()
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn search_rejects_malformed_body() -> Result<(), Box<dyn std::error::Error>> {
        let router = Router::new().route("/api/companies/search", get(|| async { "not json" }));
        let base = spawn_backend(router).await?;

        let result = client(&base).search("삼성", DEFAULT_SEARCH_LIMIT).await;

        assert!(matches!(
            result,
            Err(ApiError::Decode {
                operation: Operation::Search,
                ..
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn health_check_reads_status_and_never_errors() -> Result<(), Box<dyn std::error::Error>> {
        let healthy = Router::new().route("/health", get(|| async { Json(json!({"status": "healthy"})) }));
        let degraded = Router::new().route("/health", get(|| async { Json(json!({"status": "degraded"})) }));

        assert!(client(&spawn_backend(healthy).await?).health_check().await);
        assert!(!client(&spawn_backend(degraded).await?).health_check().await);
        assert!(!client(&unreachable_base_url()).health_check().await);
        Ok(())
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = client("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
    }
}
