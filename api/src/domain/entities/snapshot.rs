//! Social engagement snapshot
//!
//! A point-in-time set of engagement counters for one piece of content,
//! tagged with the platform it was captured from.

use serde::{Deserialize, Serialize};

/// Platform the content was published on
///
/// Unrecognized platform strings fold to `Other` both when deserializing
/// and when parsing from text, so a snapshot is never rejected for naming
/// a platform we have no multiplier for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Tiktok,
    Xiaohongshu,
    Instagram,
    #[serde(other)]
    Other,
}

impl Platform {
    /// Identify a platform from a content URL by its domain
    pub fn from_url(url: &str) -> Self {
        let url = url.to_lowercase();

        if url.contains("douyin.com") || url.contains("tiktok.com") {
            Platform::Tiktok
        } else if url.contains("xiaohongshu.com") || url.contains("xhs.com") {
            Platform::Xiaohongshu
        } else if url.contains("instagram.com") {
            Platform::Instagram
        } else {
            Platform::Other
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Tiktok => write!(f, "tiktok"),
            Platform::Xiaohongshu => write!(f, "xiaohongshu"),
            Platform::Instagram => write!(f, "instagram"),
            Platform::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "tiktok" => Platform::Tiktok,
            "xiaohongshu" => Platform::Xiaohongshu,
            "instagram" => Platform::Instagram,
            _ => Platform::Other,
        })
    }
}

/// Engagement counters for one piece of content
///
/// Counters are plain i64s; non-positive values are neutralized by the
/// log-normalization in scoring rather than rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSnapshot {
    pub followers: i64,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub platform: Platform,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_from_str_never_fails() {
        assert_eq!("tiktok".parse::<Platform>().unwrap(), Platform::Tiktok);
        assert_eq!("TikTok".parse::<Platform>().unwrap(), Platform::Tiktok);
        assert_eq!(
            "xiaohongshu".parse::<Platform>().unwrap(),
            Platform::Xiaohongshu
        );
        assert_eq!(
            "instagram".parse::<Platform>().unwrap(),
            Platform::Instagram
        );
        assert_eq!("myspace".parse::<Platform>().unwrap(), Platform::Other);
        assert_eq!("".parse::<Platform>().unwrap(), Platform::Other);
    }

    #[test]
    fn platform_from_url() {
        assert_eq!(
            Platform::from_url("https://www.douyin.com/video/123"),
            Platform::Tiktok
        );
        assert_eq!(
            Platform::from_url("https://www.tiktok.com/@user/video/123"),
            Platform::Tiktok
        );
        assert_eq!(
            Platform::from_url("https://www.xiaohongshu.com/explore/abc"),
            Platform::Xiaohongshu
        );
        assert_eq!(Platform::from_url("https://xhs.com/p/abc"), Platform::Xiaohongshu);
        assert_eq!(
            Platform::from_url("https://www.instagram.com/p/abc"),
            Platform::Instagram
        );
        assert_eq!(Platform::from_url("https://example.com/post/1"), Platform::Other);
    }

    #[test]
    fn unknown_platform_deserializes_to_other() {
        let snapshot: SocialSnapshot = serde_json::from_str(
            r#"{"followers":1,"views":2,"likes":3,"comments":4,"shares":5,"platform":"weibo"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.platform, Platform::Other);
    }

    #[test]
    fn snapshot_round_trips() {
        let snapshot = SocialSnapshot {
            followers: 1000,
            views: 50000,
            likes: 4000,
            comments: 250,
            shares: 100,
            platform: Platform::Tiktok,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""platform":"tiktok""#));
        let back: SocialSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
