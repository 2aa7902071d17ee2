//! Content scoring
//!
//! Maps an engagement snapshot to a normalized 0-100 score, a letter grade
//! and a token reward. Counters are log10-normalized so a viral outlier
//! cannot dominate the scale, then combined with fixed weights and the
//! platform reach multiplier.

use crate::app::scoring_config::{
    platform_multiplier, REWARD_A, REWARD_B, REWARD_C, REWARD_D, REWARD_S, WEIGHT_COMMENTS,
    WEIGHT_FOLLOWERS, WEIGHT_LIKES, WEIGHT_SHARES, WEIGHT_VIEWS,
};
use crate::domain::entities::{Grade, ScoreResult, SocialSnapshot};

/// log10 of a counter, with non-positive values neutralized to log10(1) = 0
fn normalize(counter: i64) -> f64 {
    (counter.max(1) as f64).log10()
}

/// Score one engagement snapshot
///
/// Total over any snapshot: negative counters normalize to 0 and the final
/// value is clamped into [0, 100].
pub fn compute_score(snapshot: &SocialSnapshot) -> ScoreResult {
    let raw = normalize(snapshot.followers) * WEIGHT_FOLLOWERS
        + normalize(snapshot.views) * WEIGHT_VIEWS
        + normalize(snapshot.likes) * WEIGHT_LIKES
        + normalize(snapshot.comments) * WEIGHT_COMMENTS
        + normalize(snapshot.shares) * WEIGHT_SHARES;

    let scaled = raw * platform_multiplier(snapshot.platform) * 10.0;
    let score = scaled.round().clamp(0.0, 100.0) as u32;

    ScoreResult {
        score,
        grade: Grade::for_score(score),
        reward_amount: reward_for_score(score),
    }
}

/// Token reward for a score, highest tier first
pub fn reward_for_score(score: u32) -> u32 {
    reward_for_grade(Grade::for_score(score))
}

/// Token reward for a grade tier
pub fn reward_for_grade(grade: Grade) -> u32 {
    match grade {
        Grade::S => REWARD_S,
        Grade::A => REWARD_A,
        Grade::B => REWARD_B,
        Grade::C => REWARD_C,
        Grade::D => REWARD_D,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Platform;

    fn snapshot(
        followers: i64,
        views: i64,
        likes: i64,
        comments: i64,
        shares: i64,
        platform: Platform,
    ) -> SocialSnapshot {
        SocialSnapshot {
            followers,
            views,
            likes,
            comments,
            shares,
            platform,
        }
    }

    #[test]
    fn zero_snapshot_scores_zero() {
        let result = compute_score(&snapshot(0, 0, 0, 0, 0, Platform::Instagram));
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, Grade::D);
        assert_eq!(result.reward_amount, 0);
    }

    #[test]
    fn negative_counters_behave_like_zero() {
        let negative = compute_score(&snapshot(-50, -1, -999, -3, -7, Platform::Tiktok));
        let zero = compute_score(&snapshot(0, 0, 0, 0, 0, Platform::Tiktok));
        assert_eq!(negative, zero);
    }

    #[test]
    fn score_is_bounded() {
        // i64::MAX everywhere is about as extreme as input gets
        let result = compute_score(&snapshot(
            i64::MAX,
            i64::MAX,
            i64::MAX,
            i64::MAX,
            i64::MAX,
            Platform::Tiktok,
        ));
        assert!(result.score <= 100);
    }

    #[test]
    fn score_is_deterministic() {
        let s = snapshot(120_000, 2_400_000, 180_000, 9_500, 4_200, Platform::Tiktok);
        let first = compute_score(&s);
        for _ in 0..10 {
            assert_eq!(compute_score(&s), first);
        }
    }

    #[test]
    fn known_value() {
        // All counters 10^4: every normalized term is 4.0, the weighted sum
        // is 4.0, so instagram scores round(4.0 * 1.0 * 10) = 40.
        let result = compute_score(&snapshot(
            10_000,
            10_000,
            10_000,
            10_000,
            10_000,
            Platform::Instagram,
        ));
        assert_eq!(result.score, 40);
        assert_eq!(result.grade, Grade::B);
        assert_eq!(result.reward_amount, 50);

        // Same counters on tiktok: round(4.0 * 1.2 * 10) = 48.
        let boosted = compute_score(&snapshot(
            10_000,
            10_000,
            10_000,
            10_000,
            10_000,
            Platform::Tiktok,
        ));
        assert_eq!(boosted.score, 48);
    }

    #[test]
    fn platform_multiplier_is_monotonic() {
        let counters = (500_000, 9_000_000, 700_000, 40_000, 15_000);
        let tiktok = compute_score(&snapshot(
            counters.0, counters.1, counters.2, counters.3, counters.4,
            Platform::Tiktok,
        ));
        let xiaohongshu = compute_score(&snapshot(
            counters.0, counters.1, counters.2, counters.3, counters.4,
            Platform::Xiaohongshu,
        ));
        let instagram = compute_score(&snapshot(
            counters.0, counters.1, counters.2, counters.3, counters.4,
            Platform::Instagram,
        ));
        let other = compute_score(&snapshot(
            counters.0, counters.1, counters.2, counters.3, counters.4,
            Platform::Other,
        ));

        assert!(tiktok.score >= xiaohongshu.score);
        assert!(xiaohongshu.score >= instagram.score);
        assert!(instagram.score >= other.score);
    }

    #[test]
    fn grade_boundaries() {
        let cases = [
            (80, Grade::S, 250),
            (79, Grade::A, 100),
            (60, Grade::A, 100),
            (59, Grade::B, 50),
            (40, Grade::B, 50),
            (39, Grade::C, 10),
            (20, Grade::C, 10),
            (19, Grade::D, 0),
            (0, Grade::D, 0),
            (100, Grade::S, 250),
        ];
        for (score, grade, reward) in cases {
            assert_eq!(Grade::for_score(score), grade, "grade at {}", score);
            assert_eq!(reward_for_score(score), reward, "reward at {}", score);
        }
    }

    #[test]
    fn grade_and_reward_are_monotonic_in_score() {
        let mut prev_grade = Grade::D;
        let mut prev_reward = 0;
        for score in 0..=100 {
            let grade = Grade::for_score(score);
            let reward = reward_for_score(score);
            assert!(grade >= prev_grade, "grade dropped at {}", score);
            assert!(reward >= prev_reward, "reward dropped at {}", score);
            prev_grade = grade;
            prev_reward = reward;
        }
    }
}
