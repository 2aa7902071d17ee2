//! IP asset and issued-license entities
//!
//! An asset is one piece of registered creator content. Score and license
//! fields start out null and are filled in as the creator walks the scoring
//! and licensing flows. An issued `License` grants one licensee the asset's
//! terms as of issue time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Grade, LicenseTerms};

/// Unique identifier for an IP asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub Uuid);

impl AssetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AssetId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an issued license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LicenseId(pub Uuid);

impl LicenseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LicenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for LicenseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for LicenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of content behind an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Image,
    Video,
    SocialLink,
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentType::Image => write!(f, "image"),
            ContentType::Video => write!(f, "video"),
            ContentType::SocialLink => write!(f, "social-link"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(ContentType::Image),
            "video" => Ok(ContentType::Video),
            "social-link" | "social_link" => Ok(ContentType::SocialLink),
            _ => Err(format!("Unknown content type: {}", s)),
        }
    }
}

/// A registered IP asset
#[derive(Debug, Clone, Serialize)]
pub struct IpAsset {
    pub id: AssetId,
    /// Creator wallet address
    pub creator: String,
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    /// Content hash on IPFS, once pinned
    pub ipfs_hash: Option<String>,
    /// Engagement score, once computed
    pub score: Option<u32>,
    pub grade: Option<Grade>,
    pub reward_amount: Option<u32>,
    /// License terms the creator settled on, once generated
    pub license_terms: Option<LicenseTerms>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to register a new asset
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub creator: String,
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub ipfs_hash: Option<String>,
}

/// A license issued on an asset to one licensee
#[derive(Debug, Clone, Serialize)]
pub struct License {
    pub id: LicenseId,
    pub asset_id: AssetId,
    /// Licensee wallet address
    pub licensee: String,
    pub terms: LicenseTerms,
    pub created_at: DateTime<Utc>,
}

/// Data needed to issue a license
#[derive(Debug, Clone)]
pub struct NewLicense {
    pub asset_id: AssetId,
    pub licensee: String,
    pub terms: LicenseTerms,
}
