//! Engagement metrics provider port
//!
//! Abstracts retrieval of engagement counters for a content URL. The
//! production implementation would call the platform open APIs; the
//! shipped adapter simulates them.

use async_trait::async_trait;

use crate::domain::entities::SocialSnapshot;
use crate::error::DomainError;

/// Port trait for fetching an engagement snapshot for a content URL
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<SocialSnapshot, DomainError>;
}
