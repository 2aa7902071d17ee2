//! Snapshot service
//!
//! Resolves a content URL to an engagement snapshot: identifies the
//! platform from the URL's domain and delegates counter retrieval to the
//! configured metrics provider.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Platform, SocialSnapshot};
use crate::domain::ports::MetricsProvider;
use crate::error::AppError;

/// Static description of a supported platform
#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    pub name: &'static str,
    pub platform: Platform,
    pub domains: &'static [&'static str],
    pub example: &'static str,
}

/// Service for resolving content URLs to engagement snapshots
pub struct SnapshotService<M>
where
    M: MetricsProvider,
{
    provider: Arc<M>,
}

impl<M> SnapshotService<M>
where
    M: MetricsProvider,
{
    pub fn new(provider: Arc<M>) -> Self {
        Self { provider }
    }

    /// Fetch an engagement snapshot for a content URL
    ///
    /// Rejects strings that do not parse as absolute http(s) URLs before
    /// touching the provider.
    pub async fn parse(&self, url: &str) -> Result<SocialSnapshot, AppError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|_| AppError::BadRequest(format!("Invalid content URL: {}", url)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AppError::BadRequest(format!(
                "Unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }

        let snapshot = self.provider.fetch(url).await?;
        Ok(snapshot)
    }

    /// The platforms this service can identify
    pub fn supported_platforms(&self) -> &'static [PlatformInfo] {
        supported_platforms()
    }
}

/// The platforms the snapshot pipeline can identify
pub fn supported_platforms() -> &'static [PlatformInfo] {
    SUPPORTED_PLATFORMS
}

static SUPPORTED_PLATFORMS: &[PlatformInfo] = &[
    PlatformInfo {
        name: "TikTok / Douyin",
        platform: Platform::Tiktok,
        domains: &["douyin.com", "tiktok.com"],
        example: "https://www.douyin.com/video/...",
    },
    PlatformInfo {
        name: "Xiaohongshu",
        platform: Platform::Xiaohongshu,
        domains: &["xiaohongshu.com", "xhs.com"],
        example: "https://www.xiaohongshu.com/explore/...",
    },
    PlatformInfo {
        name: "Instagram",
        platform: Platform::Instagram,
        domains: &["instagram.com"],
        example: "https://www.instagram.com/p/...",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::error::DomainError;

    struct FixedProvider(SocialSnapshot);

    #[async_trait]
    impl MetricsProvider for FixedProvider {
        async fn fetch(&self, _url: &str) -> Result<SocialSnapshot, DomainError> {
            Ok(self.0)
        }
    }

    fn service() -> SnapshotService<FixedProvider> {
        SnapshotService::new(Arc::new(FixedProvider(SocialSnapshot {
            followers: 10,
            views: 20,
            likes: 30,
            comments: 40,
            shares: 50,
            platform: Platform::Instagram,
        })))
    }

    #[tokio::test]
    async fn rejects_malformed_urls() {
        assert!(service().parse("not a url").await.is_err());
        assert!(service().parse("example.com/post").await.is_err());
        assert!(service().parse("ftp://example.com/post").await.is_err());
    }

    #[tokio::test]
    async fn passes_valid_urls_to_provider() {
        let snapshot = service()
            .parse("https://www.instagram.com/p/abc")
            .await
            .unwrap();
        assert_eq!(snapshot.views, 20);
    }

    #[test]
    fn supported_platform_listing_is_stable() {
        let platforms = service().supported_platforms();
        assert_eq!(platforms.len(), 3);
        assert_eq!(platforms[0].platform, Platform::Tiktok);
    }
}
