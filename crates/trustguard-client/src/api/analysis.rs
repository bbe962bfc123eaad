//! Review-analysis service endpoints.

use crate::config::Service;
use crate::TrustGuardClient;
use tracing::instrument;
use trustguard_core::{Result, ReviewAnalysisRequest, ReviewAnalysisResponse};

/// Review-analysis endpoints
pub struct AnalysisApi<'a> {
    client: &'a TrustGuardClient,
}

impl<'a> AnalysisApi<'a> {
    pub(crate) const fn new(client: &'a TrustGuardClient) -> Self {
        Self { client }
    }

    /// Score a single review
    ///
    /// Waits for the client's rate limiter before sending.
    #[instrument(skip_all, fields(rating = request.rating, chars = request.review_length_chars))]
    pub async fn analyze_review(
        &self,
        request: &ReviewAnalysisRequest,
    ) -> Result<ReviewAnalysisResponse> {
        self.client.throttle().await;
        self.client
            .post(Service::Analysis, &["analyze", "review"], request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustguard_core::{ReviewSignal, TrustGuardError};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> TrustGuardClient {
        TrustGuardClient::builder()
            .analysis_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn posts_request_and_decodes_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze/review"))
            .and(body_partial_json(serde_json::json!({
                "rating": 5,
                "review_text": "Great value.",
                "verified_purchase": true,
                "account_age_days": 365
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "authenticity_score": 91.5,
                "is_fake": false,
                "fake_indicators": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let signal = ReviewSignal::new("Great value.", 5).verified(true);
        let response = client
            .analysis()
            .analyze_review(&ReviewAnalysisRequest::from(&signal))
            .await
            .unwrap();
        assert!((response.authenticity_score - 91.5).abs() < f64::EPSILON);
        assert!(!response.is_fake);
    }

    #[tokio::test]
    async fn server_error_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze/review"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"detail": "model not loaded"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let signal = ReviewSignal::new("ok", 3);
        let err = client
            .analysis()
            .analyze_review(&ReviewAnalysisRequest::from(&signal))
            .await
            .unwrap_err();
        match err {
            TrustGuardError::Api { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "model not loaded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze/review"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let signal = ReviewSignal::new("ok", 3);
        let err = client
            .analysis()
            .analyze_review(&ReviewAnalysisRequest::from(&signal))
            .await
            .unwrap_err();
        assert!(matches!(err, TrustGuardError::Json(_)));
        assert!(err.is_service_failure());
    }
}
