//! Proficiency model: score-to-level banding and weighted score updates.
//!
//! A module's proficiency is an integer 0-100. Quiz results feed into it
//! through [`update_proficiency`], which weights the raw quiz score by the
//! user's current band and never lowers the stored value. The
//! never-decreases policy is intentional (it protects user morale over
//! strict accuracy), with the known consequence that a lucky early high
//! score cannot be corrected downward later.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Score bounds
// ---------------------------------------------------------------------------

/// Lowest representable proficiency / quiz score.
pub const MIN_SCORE: i32 = 0;
/// Highest representable proficiency / quiz score.
pub const MAX_SCORE: i32 = 100;

// ---------------------------------------------------------------------------
// Band thresholds
// ---------------------------------------------------------------------------

/// Scores below this are Beginner.
pub const INTERMEDIATE_THRESHOLD: i32 = 25;
/// Scores below this (and at/above the previous) are Intermediate.
pub const ADVANCED_THRESHOLD: i32 = 50;
/// Scores below this are Advanced.
pub const VERY_ADVANCED_THRESHOLD: i32 = 75;
/// Scores below this are Very Advanced; at/above are Expert.
pub const EXPERT_THRESHOLD: i32 = 90;

// ---------------------------------------------------------------------------
// Proficiency level
// ---------------------------------------------------------------------------

/// The five contiguous proficiency bands partitioning 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    VeryAdvanced,
    Expert,
}

impl ProficiencyLevel {
    /// Derive the level for a score in 0..=100.
    ///
    /// Bands: <25 Beginner, <50 Intermediate, <75 Advanced,
    /// <90 Very Advanced, else Expert.
    pub fn for_score(score: i32) -> Self {
        if score < INTERMEDIATE_THRESHOLD {
            Self::Beginner
        } else if score < ADVANCED_THRESHOLD {
            Self::Intermediate
        } else if score < VERY_ADVANCED_THRESHOLD {
            Self::Advanced
        } else if score < EXPERT_THRESHOLD {
            Self::VeryAdvanced
        } else {
            Self::Expert
        }
    }

    /// Human-readable label, used in prompts and stored topic maps.
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::VeryAdvanced => "Very Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Multiplier applied to a raw quiz score earned while in this band.
    ///
    /// Lower bands earn proportionally less per attempt, so proficiency
    /// climbs gradually rather than jumping to the raw score.
    pub fn weight(self) -> f64 {
        match self {
            Self::Beginner => 0.25,
            Self::Intermediate => 0.5,
            Self::Advanced => 0.75,
            Self::VeryAdvanced => 0.9,
            Self::Expert => 1.0,
        }
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Score arithmetic
// ---------------------------------------------------------------------------

/// Validate that a proficiency or quiz score lies in 0..=100.
pub fn validate_score(score: i32, field: &str) -> Result<(), CoreError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )))
    }
}

/// Percentage of correct answers, rounded to the nearest integer.
///
/// Callers must guarantee at least one question; a zero total is a
/// programming error upstream and is rejected rather than mapped to 0.
pub fn raw_score_percent(correct: usize, total: usize) -> Result<i32, CoreError> {
    if total == 0 {
        return Err(CoreError::Internal(
            "cannot score a quiz with zero questions".into(),
        ));
    }
    if correct > total {
        return Err(CoreError::Internal(format!(
            "correct count {correct} exceeds total {total}"
        )));
    }
    Ok((correct as f64 / total as f64 * 100.0).round() as i32)
}

/// Fold a raw quiz score (0-100) into the current proficiency.
///
/// `candidate = round(raw * weight(current band))`; the result is
/// `max(current, candidate)`, so a quiz attempt never lowers proficiency.
pub fn update_proficiency(current: i32, raw_score_percent: i32) -> i32 {
    let weight = ProficiencyLevel::for_score(current).weight();
    let candidate = (raw_score_percent as f64 * weight).round() as i32;
    current.max(candidate)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ProficiencyLevel::for_score band boundaries --

    #[test]
    fn level_bands_partition_the_score_range() {
        assert_eq!(ProficiencyLevel::for_score(0), ProficiencyLevel::Beginner);
        assert_eq!(ProficiencyLevel::for_score(24), ProficiencyLevel::Beginner);
        assert_eq!(
            ProficiencyLevel::for_score(25),
            ProficiencyLevel::Intermediate
        );
        assert_eq!(
            ProficiencyLevel::for_score(49),
            ProficiencyLevel::Intermediate
        );
        assert_eq!(ProficiencyLevel::for_score(50), ProficiencyLevel::Advanced);
        assert_eq!(ProficiencyLevel::for_score(74), ProficiencyLevel::Advanced);
        assert_eq!(
            ProficiencyLevel::for_score(75),
            ProficiencyLevel::VeryAdvanced
        );
        assert_eq!(
            ProficiencyLevel::for_score(89),
            ProficiencyLevel::VeryAdvanced
        );
        assert_eq!(ProficiencyLevel::for_score(90), ProficiencyLevel::Expert);
        assert_eq!(ProficiencyLevel::for_score(100), ProficiencyLevel::Expert);
    }

    #[test]
    fn every_score_maps_to_exactly_one_band() {
        for score in MIN_SCORE..=MAX_SCORE {
            // for_score is total over the range; this would panic otherwise.
            let _ = ProficiencyLevel::for_score(score);
        }
    }

    #[test]
    fn level_labels() {
        assert_eq!(ProficiencyLevel::Beginner.label(), "Beginner");
        assert_eq!(ProficiencyLevel::Intermediate.label(), "Intermediate");
        assert_eq!(ProficiencyLevel::Advanced.label(), "Advanced");
        assert_eq!(ProficiencyLevel::VeryAdvanced.label(), "Very Advanced");
        assert_eq!(ProficiencyLevel::Expert.label(), "Expert");
    }

    // -- weights --

    #[test]
    fn band_weights() {
        assert!((ProficiencyLevel::Beginner.weight() - 0.25).abs() < f64::EPSILON);
        assert!((ProficiencyLevel::Intermediate.weight() - 0.5).abs() < f64::EPSILON);
        assert!((ProficiencyLevel::Advanced.weight() - 0.75).abs() < f64::EPSILON);
        assert!((ProficiencyLevel::VeryAdvanced.weight() - 0.9).abs() < f64::EPSILON);
        assert!((ProficiencyLevel::Expert.weight() - 1.0).abs() < f64::EPSILON);
    }

    // -- raw_score_percent --

    #[test]
    fn raw_score_six_of_ten_is_sixty() {
        assert_eq!(raw_score_percent(6, 10).unwrap(), 60);
    }

    #[test]
    fn raw_score_rounds_to_nearest() {
        // 2/3 = 66.67 -> 67
        assert_eq!(raw_score_percent(2, 3).unwrap(), 67);
        // 1/3 = 33.33 -> 33
        assert_eq!(raw_score_percent(1, 3).unwrap(), 33);
    }

    #[test]
    fn raw_score_zero_total_is_an_error() {
        assert!(raw_score_percent(0, 0).is_err());
    }

    #[test]
    fn raw_score_correct_above_total_is_an_error() {
        assert!(raw_score_percent(11, 10).is_err());
    }

    // -- update_proficiency --

    #[test]
    fn beginner_sixty_percent_yields_fifteen() {
        // weight 0.25 at proficiency 0: round(60 * 0.25) = 15
        assert_eq!(update_proficiency(0, 60), 15);
    }

    #[test]
    fn update_never_decreases() {
        for current in MIN_SCORE..MAX_SCORE {
            for raw in (MIN_SCORE..=MAX_SCORE).step_by(10) {
                assert!(
                    update_proficiency(current, raw) >= current,
                    "update_proficiency({current}, {raw}) decreased"
                );
            }
        }
    }

    #[test]
    fn poor_attempt_keeps_current_value() {
        // round(10 * 0.75) = 8 < 60
        assert_eq!(update_proficiency(60, 10), 60);
    }

    #[test]
    fn expert_band_passes_raw_score_through() {
        assert_eq!(update_proficiency(90, 100), 100);
    }

    #[test]
    fn candidate_uses_weight_of_current_band() {
        // At 40 (Intermediate, 0.5): round(90 * 0.5) = 45
        assert_eq!(update_proficiency(40, 90), 45);
    }

    // -- validate_score --

    #[test]
    fn validate_score_bounds() {
        assert!(validate_score(0, "proficiency").is_ok());
        assert!(validate_score(100, "proficiency").is_ok());
        assert!(validate_score(-1, "proficiency").is_err());
        assert!(validate_score(101, "proficiency").is_err());
    }
}
