//! Workout complexity score (WCS) calculation.
//!
//! The score is a small integer derived from the questionnaire:
//! experience + training days + intensity - time constraint. Fixed mapping
//! tables cover the supported domains; numeric values outside them fail the
//! run with `InvalidInput`.

use crate::trace::Trace;
use crate::types::{
    ExperienceLevel, Intensity, UserConstraints, UserProfile, DEFAULT_AVAILABLE_TIME,
    DEFAULT_INTENSITY, DEFAULT_TRAINING_DAYS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Complexity bucket for a computed score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Basic,
    Moderate,
    Advanced,
}

impl ComplexityLevel {
    /// Bucket a raw score: <=1 Basic, 2-3 Moderate, >=4 Advanced
    pub fn from_score(score: i32) -> Self {
        if score <= 1 {
            ComplexityLevel::Basic
        } else if score <= 3 {
            ComplexityLevel::Moderate
        } else {
            ComplexityLevel::Advanced
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplexityLevel::Basic => "Basic",
            ComplexityLevel::Moderate => "Moderate",
            ComplexityLevel::Advanced => "Advanced",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComplexityLevel::Basic => {
                "fundamental movements with adequate rest"
            }
            ComplexityLevel::Moderate => {
                "a balanced approach with progressive exercises"
            }
            ComplexityLevel::Advanced => {
                "challenging exercises at higher intensity"
            }
        }
    }
}

/// Component values and result of the score calculation
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub experience_value: i32,
    pub training_days_value: i32,
    pub intensity_value: i32,
    pub time_constraint_value: i32,
    pub score: i32,
    pub complexity: ComplexityLevel,
}

fn experience_value(level: ExperienceLevel) -> i32 {
    match level {
        ExperienceLevel::Beginner => 0,
        ExperienceLevel::Intermediate => 1,
    }
}

fn training_days_value(days: u8) -> Result<i32> {
    match days {
        2 => Ok(0),
        3 => Ok(1),
        4 => Ok(2),
        other => Err(Error::invalid_input("training_days", other)),
    }
}

fn intensity_value(intensity: Intensity) -> i32 {
    match intensity {
        Intensity::Light => 0,
        Intensity::Medium => 1,
        Intensity::High => 2,
    }
}

/// Inverted mapping: more available time means a lower constraint
fn time_constraint_value(minutes: u32) -> Result<i32> {
    match minutes {
        60 => Ok(0),
        45 => Ok(1),
        30 => Ok(2),
        other => Err(Error::invalid_input("available_time", other)),
    }
}

/// Calculate the workout complexity score from the questionnaire
///
/// Defaults are substituted for unset answers (2 days, medium intensity,
/// 60 minutes; experience defaults to beginner). Each component and the
/// final value are traced in a fixed order.
pub fn calculate_score(
    profile: &UserProfile,
    constraints: &UserConstraints,
    trace: &mut Trace,
) -> Result<ScoreBreakdown> {
    let experience = profile.experience_level.unwrap_or(ExperienceLevel::Beginner);
    let days = constraints.training_days.unwrap_or(DEFAULT_TRAINING_DAYS);
    let intensity = constraints.intensity.unwrap_or(DEFAULT_INTENSITY);
    let minutes = constraints.available_time.unwrap_or(DEFAULT_AVAILABLE_TIME);

    let experience_value = experience_value(experience);
    trace.calculation(format!(
        "Experience level: {} (value {})",
        experience.label(),
        experience_value
    ));

    let training_days_value = training_days_value(days)?;
    trace.calculation(format!(
        "Training days: {} per week (value {})",
        days, training_days_value
    ));

    let intensity_value = intensity_value(intensity);
    trace.calculation(format!(
        "Intensity: {} (value {})",
        intensity.label(),
        intensity_value
    ));

    let time_constraint_value = time_constraint_value(minutes)?;
    trace.calculation(format!(
        "Available time: {} minutes (time constraint {})",
        minutes, time_constraint_value
    ));

    let score =
        experience_value + training_days_value + intensity_value - time_constraint_value;
    trace.calculation(format!(
        "Complexity score: ({} + {} + {}) - {} = {}",
        experience_value, training_days_value, intensity_value, time_constraint_value, score
    ));

    let complexity = ComplexityLevel::from_score(score);
    trace.optimization(format!(
        "Score interpretation: {} complexity, {}",
        complexity.label(),
        complexity.description()
    ));

    Ok(ScoreBreakdown {
        experience_value,
        training_days_value,
        intensity_value,
        time_constraint_value,
        score,
        complexity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrainingGoal;

    fn profile(level: Option<ExperienceLevel>) -> UserProfile {
        UserProfile {
            experience_level: level,
            training_goal: Some(TrainingGoal::GeneralFitness),
        }
    }

    fn constraints(days: Option<u8>, time: Option<u32>, intensity: Option<Intensity>) -> UserConstraints {
        UserConstraints {
            training_days: days,
            available_time: time,
            intensity,
            injuries: vec![],
        }
    }

    #[test]
    fn test_score_formula() {
        // beginner, 3 days, medium, 45 min: 0 + 1 + 1 - 1 = 1
        let mut trace = Trace::new();
        let breakdown = calculate_score(
            &profile(Some(ExperienceLevel::Beginner)),
            &constraints(Some(3), Some(45), Some(Intensity::Medium)),
            &mut trace,
        )
        .unwrap();

        assert_eq!(breakdown.score, 1);
        assert_eq!(breakdown.complexity, ComplexityLevel::Basic);
    }

    #[test]
    fn test_score_upper_bound() {
        // intermediate, 4 days, high, 60 min: 1 + 2 + 2 - 0 = 5
        let mut trace = Trace::new();
        let breakdown = calculate_score(
            &profile(Some(ExperienceLevel::Intermediate)),
            &constraints(Some(4), Some(60), Some(Intensity::High)),
            &mut trace,
        )
        .unwrap();

        assert_eq!(breakdown.score, 5);
        assert_eq!(breakdown.complexity, ComplexityLevel::Advanced);
    }

    #[test]
    fn test_score_can_go_negative() {
        // beginner, 2 days, light, 30 min: 0 + 0 + 0 - 2 = -2
        let mut trace = Trace::new();
        let breakdown = calculate_score(
            &profile(Some(ExperienceLevel::Beginner)),
            &constraints(Some(2), Some(30), Some(Intensity::Light)),
            &mut trace,
        )
        .unwrap();

        assert_eq!(breakdown.score, -2);
        assert_eq!(breakdown.complexity, ComplexityLevel::Basic);
    }

    #[test]
    fn test_defaults_substituted_when_unset() {
        // defaults: beginner, 2 days, medium, 60 min: 0 + 0 + 1 - 0 = 1
        let mut trace = Trace::new();
        let breakdown = calculate_score(
            &profile(None),
            &constraints(None, None, None),
            &mut trace,
        )
        .unwrap();

        assert_eq!(breakdown.experience_value, 0);
        assert_eq!(breakdown.training_days_value, 0);
        assert_eq!(breakdown.intensity_value, 1);
        assert_eq!(breakdown.time_constraint_value, 0);
        assert_eq!(breakdown.score, 1);
    }

    #[test]
    fn test_invalid_training_days_rejected() {
        let mut trace = Trace::new();
        let err = calculate_score(
            &profile(None),
            &constraints(Some(5), Some(45), None),
            &mut trace,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidInput { field: "training_days", .. }
        ));
    }

    #[test]
    fn test_invalid_available_time_rejected() {
        let mut trace = Trace::new();
        let err = calculate_score(
            &profile(None),
            &constraints(Some(3), Some(50), None),
            &mut trace,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidInput { field: "available_time", .. }
        ));
    }

    #[test]
    fn test_trace_order_is_fixed() {
        let mut trace = Trace::new();
        calculate_score(
            &profile(Some(ExperienceLevel::Beginner)),
            &constraints(Some(3), Some(45), Some(Intensity::Medium)),
            &mut trace,
        )
        .unwrap();

        let messages: Vec<_> = trace.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages.len(), 6);
        assert!(messages[0].starts_with("Experience level"));
        assert!(messages[1].starts_with("Training days"));
        assert!(messages[2].starts_with("Intensity"));
        assert!(messages[3].starts_with("Available time"));
        assert!(messages[4].starts_with("Complexity score"));
        assert!(messages[5].starts_with("Score interpretation"));
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(ComplexityLevel::from_score(-2), ComplexityLevel::Basic);
        assert_eq!(ComplexityLevel::from_score(1), ComplexityLevel::Basic);
        assert_eq!(ComplexityLevel::from_score(2), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::from_score(3), ComplexityLevel::Moderate);
        assert_eq!(ComplexityLevel::from_score(4), ComplexityLevel::Advanced);
    }
}
