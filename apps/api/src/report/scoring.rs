//! Score weighting and verdict mapping.
//!
//! The 70/30 split between technical accuracy and confidence/communication is
//! a fixed business rule, as are the verdict thresholds. Callers cannot
//! configure either.

use serde::{Deserialize, Serialize};

const TECHNICAL_WEIGHT: f64 = 0.7;
const CONFIDENCE_WEIGHT: f64 = 0.3;

/// Categorical hiring recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    Hire,
    Consider,
    #[serde(rename = "No Hire")]
    NoHire,
}

/// `round(technical * 0.7 + confidence * 0.3)`, rounding half away from zero.
pub fn weighted_score(technical: u32, confidence: u32) -> u32 {
    (technical as f64 * TECHNICAL_WEIGHT + confidence as f64 * CONFIDENCE_WEIGHT).round() as u32
}

/// Thresholds evaluated top-down; boundaries are inclusive on the upper band.
pub fn verdict_for(final_score: u32) -> Verdict {
    if final_score >= 85 {
        Verdict::StrongHire
    } else if final_score >= 70 {
        Verdict::Hire
    } else if final_score >= 50 {
        Verdict::Consider
    } else {
        Verdict::NoHire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_score_known_values() {
        assert_eq!(weighted_score(90, 60), 81);
        assert_eq!(weighted_score(100, 100), 100);
        assert_eq!(weighted_score(40, 40), 40);
        assert_eq!(weighted_score(0, 0), 0);
    }

    #[test]
    fn test_weighted_score_rounds_half_up() {
        // 75*0.7 + 40*0.3 = 64.5
        assert_eq!(weighted_score(75, 40), 65);
        // 85*0.7 + 84*0.3 = 84.7
        assert_eq!(weighted_score(85, 84), 85);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(verdict_for(100), Verdict::StrongHire);
        assert_eq!(verdict_for(85), Verdict::StrongHire);
        assert_eq!(verdict_for(84), Verdict::Hire);
        assert_eq!(verdict_for(70), Verdict::Hire);
        assert_eq!(verdict_for(69), Verdict::Consider);
        assert_eq!(verdict_for(50), Verdict::Consider);
        assert_eq!(verdict_for(49), Verdict::NoHire);
        assert_eq!(verdict_for(0), Verdict::NoHire);
    }

    #[test]
    fn test_weighted_scores_map_to_verdicts() {
        assert_eq!(verdict_for(weighted_score(90, 60)), Verdict::Hire);
        assert_eq!(verdict_for(weighted_score(100, 100)), Verdict::StrongHire);
        assert_eq!(verdict_for(weighted_score(40, 40)), Verdict::NoHire);
    }

    #[test]
    fn test_verdict_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&Verdict::StrongHire).unwrap(),
            "\"Strong Hire\""
        );
        assert_eq!(serde_json::to_string(&Verdict::NoHire).unwrap(), "\"No Hire\"");
        assert_eq!(serde_json::to_string(&Verdict::Hire).unwrap(), "\"Hire\"");
    }
}
