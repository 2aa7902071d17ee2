//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::{
    AnswerValue, Answers, AssetId, ContentType, IpAsset, LicenseTerms, Platform, SocialSnapshot,
};

/// Create a test snapshot with mid-range engagement
pub fn test_snapshot() -> SocialSnapshot {
    SocialSnapshot {
        followers: 12_000,
        views: 250_000,
        likes: 18_000,
        comments: 900,
        shares: 400,
        platform: Platform::Tiktok,
    }
}

/// Create a test asset with default values
pub fn test_asset() -> IpAsset {
    IpAsset {
        id: AssetId(Uuid::new_v4()),
        creator: "0xabc0000000000000000000000000000000000001".to_string(),
        title: "Sunset timelapse".to_string(),
        description: Some("Original timelapse from the harbor".to_string()),
        content_type: ContentType::Video,
        ipfs_hash: Some("QmTestHash".to_string()),
        score: None,
        grade: None,
        reward_amount: None,
        license_terms: None,
        created_at: Utc::now(),
    }
}

/// Create permissive license terms for testing
pub fn test_terms() -> LicenseTerms {
    LicenseTerms {
        commercial_use: true,
        derivatives: true,
        attribution: true,
        share_alike: false,
        territory: vec!["Worldwide".to_string()],
        channels: vec!["Social media".to_string(), "Websites and blogs".to_string()],
        timeframe: 36,
        royalty: Some(5),
    }
}

/// Create a filled-in questionnaire answer set
pub fn test_answers() -> Answers {
    let mut answers = Answers::new();
    answers.insert(
        "content_type".to_string(),
        AnswerValue::One("Video content".to_string()),
    );
    answers.insert(
        "commercial_use".to_string(),
        AnswerValue::One("Allow".to_string()),
    );
    answers.insert(
        "derivatives".to_string(),
        AnswerValue::One("Non-commercial only".to_string()),
    );
    answers.insert(
        "attribution".to_string(),
        AnswerValue::One("Attribution required".to_string()),
    );
    answers.insert(
        "territory".to_string(),
        AnswerValue::Many(vec!["Worldwide".to_string()]),
    );
    answers.insert(
        "channels".to_string(),
        AnswerValue::Many(vec![
            "Social media".to_string(),
            "Websites and blogs".to_string(),
        ]),
    );
    answers.insert(
        "timeframe".to_string(),
        AnswerValue::One("3 years".to_string()),
    );
    answers
}
