//! Trust-score backend endpoints.

use crate::config::Service;
use crate::TrustGuardClient;
use tracing::instrument;
use trustguard_core::{Result, TrustScore};

/// Trust-score endpoints
pub struct TrustScoreApi<'a> {
    client: &'a TrustGuardClient,
}

impl<'a> TrustScoreApi<'a> {
    pub(crate) const fn new(client: &'a TrustGuardClient) -> Self {
        Self { client }
    }

    /// Fetch the current trust score for a product
    #[instrument(skip(self))]
    pub async fn get(&self, product_id: &str) -> Result<TrustScore> {
        self.client
            .get(Service::Backend, &["api", "trust-score", product_id])
            .await
    }
}
