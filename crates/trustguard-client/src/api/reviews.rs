//! Review submission endpoints.

use crate::config::Service;
use crate::TrustGuardClient;
use tracing::instrument;
use trustguard_core::{Result, Review, ReviewSubmission};

/// Review endpoints
pub struct ReviewsApi<'a> {
    client: &'a TrustGuardClient,
}

impl<'a> ReviewsApi<'a> {
    pub(crate) const fn new(client: &'a TrustGuardClient) -> Self {
        Self { client }
    }

    /// Submit a review; the backend scores it and returns the stored record
    #[instrument(skip_all, fields(rating = submission.rating))]
    pub async fn submit(&self, submission: &ReviewSubmission) -> Result<Review> {
        self.client
            .post(Service::Backend, &["api", "reviews"], submission)
            .await
    }
}
