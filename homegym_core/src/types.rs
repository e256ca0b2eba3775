//! Core domain types for the HomeGym recommendation system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their properties
//! - The user questionnaire (profile, constraints, equipment)
//! - Scheduled exercises, sessions and workout days
//! - The exercise catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Questionnaire Types
// ============================================================================

/// Training experience level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
}

impl ExperienceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
        }
    }
}

/// Training goal selected in the questionnaire
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    MuscleGain,
    Strength,
    GeneralFitness,
}

impl TrainingGoal {
    pub fn label(&self) -> &'static str {
        match self {
            TrainingGoal::MuscleGain => "muscle gain",
            TrainingGoal::Strength => "strength",
            TrainingGoal::GeneralFitness => "general fitness",
        }
    }
}

/// Requested workout intensity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    Medium,
    High,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

/// Physical limitation reported by the user
///
/// `None` is the questionnaire sentinel for "no injuries" and is stripped
/// before the injury filter runs.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Injury {
    None,
    Shoulder,
    Knee,
    Back,
}

impl Injury {
    pub fn label(&self) -> &'static str {
        match self {
            Injury::None => "none",
            Injury::Shoulder => "shoulder",
            Injury::Knee => "knee",
            Injury::Back => "back",
        }
    }
}

/// User profile answers
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub experience_level: Option<ExperienceLevel>,
    pub training_goal: Option<TrainingGoal>,
}

/// User constraint answers
///
/// Training days and available time are open numeric fields and are
/// validated against the supported domains (2/3/4 days, 30/45/60 minutes)
/// when the score is calculated. Unset fields fall back to
/// [`DEFAULT_TRAINING_DAYS`] and [`DEFAULT_AVAILABLE_TIME`].
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UserConstraints {
    pub training_days: Option<u8>,
    pub available_time: Option<u32>,
    pub intensity: Option<Intensity>,
    #[serde(default)]
    pub injuries: Vec<Injury>,
}

/// Default training days substituted when the questionnaire left it unset
pub const DEFAULT_TRAINING_DAYS: u8 = 2;

/// Default session minutes substituted when the questionnaire left it unset
pub const DEFAULT_AVAILABLE_TIME: u32 = 60;

/// Default intensity substituted when the questionnaire left it unset
pub const DEFAULT_INTENSITY: Intensity = Intensity::Medium;

// ============================================================================
// Equipment Types
// ============================================================================

/// Equipment capability an exercise can require
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentTag {
    Dumbbells,
    Bands,
    Bench,
    PullupBar,
    Bodyweight,
}

impl EquipmentTag {
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentTag::Dumbbells => "dumbbells",
            EquipmentTag::Bands => "bands",
            EquipmentTag::Bench => "bench",
            EquipmentTag::PullupBar => "pull-up bar",
            EquipmentTag::Bodyweight => "bodyweight",
        }
    }

    /// All capabilities, in questionnaire order
    pub fn all() -> [EquipmentTag; 5] {
        [
            EquipmentTag::Dumbbells,
            EquipmentTag::Bands,
            EquipmentTag::Bench,
            EquipmentTag::PullupBar,
            EquipmentTag::Bodyweight,
        ]
    }
}

/// Equipment available to the user
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Equipment {
    pub dumbbells: bool,
    pub bands: bool,
    pub bench: bool,
    pub pullup_bar: bool,
    pub bodyweight: bool,
}

impl Equipment {
    /// Check whether a single capability is available
    pub fn has(&self, tag: EquipmentTag) -> bool {
        match tag {
            EquipmentTag::Dumbbells => self.dumbbells,
            EquipmentTag::Bands => self.bands,
            EquipmentTag::Bench => self.bench,
            EquipmentTag::PullupBar => self.pullup_bar,
            EquipmentTag::Bodyweight => self.bodyweight,
        }
    }

    /// The available capabilities, in questionnaire order
    pub fn available_tags(&self) -> Vec<EquipmentTag> {
        EquipmentTag::all()
            .into_iter()
            .filter(|tag| self.has(*tag))
            .collect()
    }
}

// ============================================================================
// Exercise Types
// ============================================================================

/// Muscle group an exercise primarily targets
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Push,
    Pull,
    Legs,
    Core,
}

impl MuscleGroup {
    pub fn label(&self) -> &'static str {
        match self {
            MuscleGroup::Push => "push",
            MuscleGroup::Pull => "pull",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Core => "core",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Joint impact level of an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLevel {
    High,
    Low,
}

/// An immutable exercise definition from the catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub equipment_needed: Vec<EquipmentTag>,
    pub impact: ImpactLevel,
    pub overhead: bool,
    pub back_strain: bool,
    pub default_sets: u32,
    pub default_reps: u32,
    pub default_rest_seconds: u32,
    pub calories_per_set: u32,
    pub duration_minutes: u32,
}

// ============================================================================
// Plan Types
// ============================================================================

/// An exercise scheduled for a specific session
///
/// References the catalog record; sets/reps/rest are the run-specific values
/// after goal and score adjustment. The base exercise is never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduledExercise {
    pub exercise: Arc<Exercise>,
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    pub note: Option<String>,
}

/// One training session within a workout day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub session_number: u32,
    pub exercises: Vec<ScheduledExercise>,
    pub duration_minutes: u32,
}

/// A named training day in the weekly plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day_name: String,
    pub focus: String,
    pub sessions: Vec<WorkoutSession>,
    /// Displayed duration. Always equals the requested session minutes.
    pub total_duration_minutes: u32,
    /// Time the greedy packer actually filled, in minutes. May be less than
    /// the displayed duration.
    pub packed_minutes: f64,
    pub total_calories: u32,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The ordered catalog of exercise definitions
///
/// Exercises are held behind `Arc` so scheduled entries share the catalog
/// record instead of copying it.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub exercises: Vec<Arc<Exercise>>,
}
