//! Scoring configuration constants
//!
//! Defines the counter weights, platform multipliers and reward amounts
//! for the content scoring system. Grade cutoffs live on the `Grade`
//! entity itself.

use crate::domain::entities::Platform;

/// Weight of the follower count in the raw score
pub const WEIGHT_FOLLOWERS: f64 = 0.25;

/// Weight of the view count in the raw score
pub const WEIGHT_VIEWS: f64 = 0.30;

/// Weight of the like count in the raw score
pub const WEIGHT_LIKES: f64 = 0.20;

/// Weight of the comment count in the raw score
pub const WEIGHT_COMMENTS: f64 = 0.15;

/// Weight of the share count in the raw score
pub const WEIGHT_SHARES: f64 = 0.10;

/// Token reward per grade tier
pub const REWARD_S: u32 = 250;
pub const REWARD_A: u32 = 100;
pub const REWARD_B: u32 = 50;
pub const REWARD_C: u32 = 10;
pub const REWARD_D: u32 = 0;

/// Platform reach multiplier applied to the raw score
pub fn platform_multiplier(platform: Platform) -> f64 {
    match platform {
        Platform::Tiktok => 1.2,
        Platform::Xiaohongshu => 1.1,
        Platform::Instagram => 1.0,
        Platform::Other => 0.9,
    }
}
