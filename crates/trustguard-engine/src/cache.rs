//! Memoized authenticity results.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use trustguard_core::AuthenticityResult;

/// Identifies one analyzed review
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Product the review belongs to
    pub product_id: String,
    /// Review identifier
    pub review_id: String,
}

impl CacheKey {
    /// Create a key
    #[must_use]
    pub fn new(product_id: impl Into<String>, review_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            review_id: review_id.into(),
        }
    }
}

/// Authenticity results keyed by product and review.
///
/// Safe to share across concurrent batch analyses. Entries live until
/// explicitly invalidated.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: RwLock<HashMap<CacheKey, AuthenticityResult>>,
}

impl AnalysisCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for a review
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<AuthenticityResult> {
        let guard = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        guard.get(key).cloned()
    }

    /// Store a result, returning the one it replaced
    pub fn insert(&self, key: CacheKey, result: AuthenticityResult) -> Option<AuthenticityResult> {
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        guard.insert(key, result)
    }

    /// Drop the result for one review
    pub fn invalidate(&self, key: &CacheKey) -> bool {
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        guard.remove(key).is_some()
    }

    /// Drop every result for a product, returning how many were removed
    pub fn invalidate_product(&self, product_id: &str) -> usize {
        let mut guard = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|key, _| key.product_id != product_id);
        before - guard.len()
    }

    /// Drop everything
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of cached results
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
