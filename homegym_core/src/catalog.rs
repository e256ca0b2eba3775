//! Built-in exercise catalog.
//!
//! This module provides the static exercise database the engine draws from.
//! The catalog is ordered; filtering and day selection preserve this order.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

/// Cached default catalog - built once and reused across all runs
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
///
/// The catalog is read-only, so the same reference can be shared across
/// concurrent runs.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog of home-gym exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    let exercises = vec![
        // ====================================================================
        // Push
        // ====================================================================
        Exercise {
            id: "pushup".into(),
            name: "Push-up".into(),
            muscle_group: MuscleGroup::Push,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 12,
            default_rest_seconds: 60,
            calories_per_set: 5,
            duration_minutes: 5,
        },
        Exercise {
            id: "db_floor_press".into(),
            name: "Dumbbell Floor Press".into(),
            muscle_group: MuscleGroup::Push,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 75,
            calories_per_set: 6,
            duration_minutes: 5,
        },
        Exercise {
            id: "db_shoulder_press".into(),
            name: "Dumbbell Shoulder Press".into(),
            muscle_group: MuscleGroup::Push,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: true,
            back_strain: false,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 75,
            calories_per_set: 6,
            duration_minutes: 5,
        },
        Exercise {
            id: "db_bench_press".into(),
            name: "Dumbbell Bench Press".into(),
            muscle_group: MuscleGroup::Push,
            equipment_needed: vec![EquipmentTag::Dumbbells, EquipmentTag::Bench],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 4,
            default_reps: 8,
            default_rest_seconds: 90,
            calories_per_set: 7,
            duration_minutes: 6,
        },
        Exercise {
            id: "pike_pushup".into(),
            name: "Pike Push-up".into(),
            muscle_group: MuscleGroup::Push,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::Low,
            overhead: true,
            back_strain: false,
            default_sets: 3,
            default_reps: 8,
            default_rest_seconds: 60,
            calories_per_set: 5,
            duration_minutes: 4,
        },
        Exercise {
            id: "band_chest_press".into(),
            name: "Band Chest Press".into(),
            muscle_group: MuscleGroup::Push,
            equipment_needed: vec![EquipmentTag::Bands],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 12,
            default_rest_seconds: 45,
            calories_per_set: 4,
            duration_minutes: 4,
        },
        // ====================================================================
        // Pull
        // ====================================================================
        Exercise {
            id: "db_bent_over_row".into(),
            name: "Bent-Over Dumbbell Row".into(),
            muscle_group: MuscleGroup::Pull,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: true,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 75,
            calories_per_set: 6,
            duration_minutes: 5,
        },
        Exercise {
            id: "pullup".into(),
            name: "Pull-up".into(),
            muscle_group: MuscleGroup::Pull,
            equipment_needed: vec![EquipmentTag::PullupBar],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 6,
            default_rest_seconds: 90,
            calories_per_set: 7,
            duration_minutes: 5,
        },
        Exercise {
            id: "band_row".into(),
            name: "Band Row".into(),
            muscle_group: MuscleGroup::Pull,
            equipment_needed: vec![EquipmentTag::Bands],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 12,
            default_rest_seconds: 45,
            calories_per_set: 4,
            duration_minutes: 4,
        },
        Exercise {
            id: "db_curl".into(),
            name: "Dumbbell Curl".into(),
            muscle_group: MuscleGroup::Pull,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 12,
            default_rest_seconds: 60,
            calories_per_set: 4,
            duration_minutes: 4,
        },
        Exercise {
            id: "renegade_row".into(),
            name: "Renegade Row".into(),
            muscle_group: MuscleGroup::Pull,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: true,
            default_sets: 3,
            default_reps: 8,
            default_rest_seconds: 75,
            calories_per_set: 6,
            duration_minutes: 5,
        },
        // ====================================================================
        // Legs
        // ====================================================================
        Exercise {
            id: "bw_squat".into(),
            name: "Bodyweight Squat".into(),
            muscle_group: MuscleGroup::Legs,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 15,
            default_rest_seconds: 45,
            calories_per_set: 5,
            duration_minutes: 4,
        },
        Exercise {
            id: "goblet_squat".into(),
            name: "Goblet Squat".into(),
            muscle_group: MuscleGroup::Legs,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 12,
            default_rest_seconds: 75,
            calories_per_set: 6,
            duration_minutes: 5,
        },
        Exercise {
            id: "jump_squat".into(),
            name: "Jump Squat".into(),
            muscle_group: MuscleGroup::Legs,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::High,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 60,
            calories_per_set: 7,
            duration_minutes: 4,
        },
        Exercise {
            id: "db_lunge".into(),
            name: "Dumbbell Lunge".into(),
            muscle_group: MuscleGroup::Legs,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::High,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 60,
            calories_per_set: 6,
            duration_minutes: 5,
        },
        Exercise {
            id: "db_romanian_deadlift".into(),
            name: "Dumbbell Romanian Deadlift".into(),
            muscle_group: MuscleGroup::Legs,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: true,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 90,
            calories_per_set: 6,
            duration_minutes: 5,
        },
        Exercise {
            id: "bench_step_up".into(),
            name: "Bench Step-up".into(),
            muscle_group: MuscleGroup::Legs,
            equipment_needed: vec![EquipmentTag::Dumbbells, EquipmentTag::Bench],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 60,
            calories_per_set: 5,
            duration_minutes: 5,
        },
        Exercise {
            id: "glute_bridge".into(),
            name: "Glute Bridge".into(),
            muscle_group: MuscleGroup::Legs,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 15,
            default_rest_seconds: 45,
            calories_per_set: 4,
            duration_minutes: 4,
        },
        // ====================================================================
        // Core
        // ====================================================================
        Exercise {
            id: "crunch".into(),
            name: "Crunch".into(),
            muscle_group: MuscleGroup::Core,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 15,
            default_rest_seconds: 30,
            calories_per_set: 3,
            duration_minutes: 3,
        },
        Exercise {
            id: "hanging_leg_raise".into(),
            name: "Hanging Leg Raise".into(),
            muscle_group: MuscleGroup::Core,
            equipment_needed: vec![EquipmentTag::PullupBar],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 8,
            default_rest_seconds: 60,
            calories_per_set: 5,
            duration_minutes: 4,
        },
        Exercise {
            id: "russian_twist".into(),
            name: "Russian Twist".into(),
            muscle_group: MuscleGroup::Core,
            equipment_needed: vec![EquipmentTag::Dumbbells],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: true,
            default_sets: 3,
            default_reps: 12,
            default_rest_seconds: 45,
            calories_per_set: 4,
            duration_minutes: 4,
        },
        Exercise {
            id: "dead_bug".into(),
            name: "Dead Bug".into(),
            muscle_group: MuscleGroup::Core,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 10,
            default_rest_seconds: 30,
            calories_per_set: 3,
            duration_minutes: 3,
        },
        Exercise {
            id: "plank_shoulder_tap".into(),
            name: "Plank Shoulder Tap".into(),
            muscle_group: MuscleGroup::Core,
            equipment_needed: vec![EquipmentTag::Bodyweight],
            impact: ImpactLevel::Low,
            overhead: false,
            back_strain: false,
            default_sets: 3,
            default_reps: 12,
            default_rest_seconds: 30,
            calories_per_set: 3,
            duration_minutes: 3,
        },
    ];

    Catalog {
        exercises: exercises.into_iter().map(Arc::new).collect(),
    }
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = HashSet::new();

        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if !seen_ids.insert(exercise.id.clone()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            }
            if exercise.equipment_needed.is_empty() {
                errors.push(format!(
                    "Exercise '{}' requires no equipment capability",
                    exercise.id
                ));
            }
            if exercise.default_sets == 0 {
                errors.push(format!("Exercise '{}' has zero default sets", exercise.id));
            }
            if exercise.default_reps == 0 {
                errors.push(format!("Exercise '{}' has zero default reps", exercise.id));
            }
            if exercise.default_rest_seconds < 15 || exercise.default_rest_seconds > 180 {
                errors.push(format!(
                    "Exercise '{}' rest {}s outside the 15-180s range",
                    exercise.id, exercise.default_rest_seconds
                ));
            }
        }

        // Every muscle group must be represented or the split templates
        // produce empty days.
        for group in [
            MuscleGroup::Push,
            MuscleGroup::Pull,
            MuscleGroup::Legs,
            MuscleGroup::Core,
        ] {
            if !self.exercises.iter().any(|e| e.muscle_group == group) {
                errors.push(format!("Catalog has no {} exercises", group));
            }
        }

        errors
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
