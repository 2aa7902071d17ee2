//! Content score entities
//!
//! The grade is a coarse letter bucket over the numeric score; the reward
//! amount is a discrete token quantity per tier. Both are derived, never
//! stored independently of the score that produced them.

use serde::{Deserialize, Serialize};

/// Letter grade for a content score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    /// Get grade from a content score
    pub fn for_score(score: u32) -> Self {
        match score {
            80.. => Grade::S,
            60..=79 => Grade::A,
            40..=59 => Grade::B,
            20..=39 => Grade::C,
            _ => Grade::D,
        }
    }

    /// Lowest score that still earns this grade
    pub fn min_score(&self) -> u32 {
        match self {
            Grade::S => 80,
            Grade::A => 60,
            Grade::B => 40,
            Grade::C => 20,
            Grade::D => 0,
        }
    }

    /// Short display label for the grade tier
    pub fn label(&self) -> &'static str {
        match self {
            Grade::S => "Viral hit",
            Grade::A => "Excellent content",
            Grade::B => "Good content",
            Grade::C => "Average content",
            Grade::D => "Needs improvement",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::S => write!(f, "S"),
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
        }
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" => Ok(Grade::S),
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            _ => Err(format!("Unknown grade: {}", s)),
        }
    }
}

/// Result of scoring one engagement snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Normalized score in [0, 100]
    pub score: u32,
    pub grade: Grade,
    /// Token reward for this score tier
    pub reward_amount: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_ordering_matches_tiers() {
        assert!(Grade::S > Grade::A);
        assert!(Grade::A > Grade::B);
        assert!(Grade::B > Grade::C);
        assert!(Grade::C > Grade::D);
    }

    #[test]
    fn min_score_matches_for_score() {
        for grade in [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D] {
            assert_eq!(Grade::for_score(grade.min_score()), grade);
        }
    }

    #[test]
    fn grade_from_str() {
        assert_eq!("S".parse::<Grade>().unwrap(), Grade::S);
        assert_eq!("a".parse::<Grade>().unwrap(), Grade::A);
        assert!("F".parse::<Grade>().is_err());
    }

    #[test]
    fn grade_display_round_trips() {
        for grade in [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D] {
            assert_eq!(grade.to_string().parse::<Grade>().unwrap(), grade);
        }
    }
}
