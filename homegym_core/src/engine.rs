//! Recommendation engine orchestration.
//!
//! A run executes the four stages in strict sequence around a fresh trace:
//! score calculation, exercise filtering, plan building, metrics. The run is
//! synchronous and owns all of its mutable state, so the catalog reference
//! can be shared across concurrent runs.

use crate::filter::filter_exercises;
use crate::metrics::{estimate_calories, volume_score};
use crate::planner::build_plan;
use crate::score::{calculate_score, ScoreBreakdown};
use crate::trace::{Trace, TraceEntry};
use crate::types::{Catalog, Equipment, UserConstraints, UserProfile, WorkoutDay};
use crate::Result;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Complete output of one engine run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanResult {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub score: ScoreBreakdown,
    pub volume_score: u32,
    pub estimated_calories: u32,
    pub plan: Vec<WorkoutDay>,
    pub trace: Vec<TraceEntry>,
    pub excluded_by_equipment: Vec<String>,
    pub excluded_by_injury: Vec<String>,
}

/// Run the recommendation engine over the questionnaire answers
///
/// `seed` makes plan generation reproducible; `None` draws the shuffle order
/// from entropy. Fails with `InvalidInput` when a numeric questionnaire value
/// is outside the supported domain; every other edge case degrades to an
/// empty or low plan with trace warnings.
pub fn run(
    catalog: &Catalog,
    profile: &UserProfile,
    constraints: &UserConstraints,
    equipment: &Equipment,
    seed: Option<u64>,
) -> Result<PlanResult> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut trace = Trace::new();

    tracing::info!(catalog_size = catalog.len(), ?seed, "starting engine run");

    trace.system("HomeGym recommendation engine starting");
    trace.system(format!("Loaded {} exercises from the catalog", catalog.len()));

    trace.system("Phase 1: input processing");
    let score = calculate_score(profile, constraints, &mut trace)?;

    trace.system("Phase 2: constraint checking");
    let filtered = filter_exercises(catalog, equipment, &constraints.injuries, &mut trace);

    trace.system("Phase 3: plan generation");
    let plan = build_plan(
        &filtered.available,
        profile,
        constraints,
        &score,
        &mut rng,
        &mut trace,
    );

    trace.system("Phase 4: metrics calculation");
    let volume_score = volume_score(&plan, &mut trace);
    let estimated_calories = estimate_calories(&plan, constraints.intensity, &mut trace);

    trace.success(format!(
        "Inference complete: score {}, volume {}, {} kcal per week",
        score.score, volume_score, estimated_calories
    ));

    tracing::info!(
        score = score.score,
        volume_score,
        estimated_calories,
        "engine run complete"
    );

    Ok(PlanResult {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        score,
        volume_score,
        estimated_calories,
        plan,
        trace: trace.into_entries(),
        excluded_by_equipment: filtered.excluded_by_equipment,
        excluded_by_injury: filtered.excluded_by_injury,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::score::ComplexityLevel;
    use crate::trace::TraceCategory;
    use crate::types::{ExperienceLevel, Injury, Intensity, TrainingGoal};
    use crate::Error;

    fn scenario_profile() -> UserProfile {
        UserProfile {
            experience_level: Some(ExperienceLevel::Intermediate),
            training_goal: Some(TrainingGoal::Strength),
        }
    }

    fn scenario_constraints() -> UserConstraints {
        UserConstraints {
            training_days: Some(3),
            available_time: Some(45),
            intensity: Some(Intensity::High),
            injuries: vec![Injury::None],
        }
    }

    fn dumbbells_only() -> Equipment {
        Equipment {
            dumbbells: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Intermediate strength trainee, 3 days x 45 min at high intensity,
        // no injuries, dumbbells only.
        let catalog = build_default_catalog();
        let result = run(
            &catalog,
            &scenario_profile(),
            &scenario_constraints(),
            &dumbbells_only(),
            Some(7),
        )
        .unwrap();

        // Score: 1 + 1 + 2 - 1 = 3, Moderate.
        assert_eq!(result.score.score, 3);
        assert_eq!(result.score.complexity, ComplexityLevel::Moderate);

        // Everything that needs more than dumbbells is excluded.
        assert!(result.excluded_by_equipment.contains(&"Push-up".to_string()));
        assert!(result.excluded_by_equipment.contains(&"Pull-up".to_string()));
        assert!(result.excluded_by_equipment.contains(&"Band Row".to_string()));
        assert!(result.excluded_by_injury.is_empty());

        let shape: Vec<_> = result
            .plan
            .iter()
            .map(|d| (d.day_name.as_str(), d.focus.as_str()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Monday", "Upper Body"),
                ("Wednesday", "Lower Body"),
                ("Friday", "Full Body"),
            ]
        );
        for day in &result.plan {
            assert_eq!(day.total_duration_minutes, 45);
            assert!(!day.sessions[0].exercises.is_empty());
        }
    }

    #[test]
    fn test_surviving_exercises_are_dumbbell_only() {
        let catalog = build_default_catalog();
        let result = run(
            &catalog,
            &scenario_profile(),
            &scenario_constraints(),
            &dumbbells_only(),
            Some(7),
        )
        .unwrap();

        for scheduled in result
            .plan
            .iter()
            .flat_map(|d| &d.sessions)
            .flat_map(|s| &s.exercises)
        {
            for tag in &scheduled.exercise.equipment_needed {
                assert!(dumbbells_only().has(*tag));
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_run() {
        let catalog = build_default_catalog();
        let run_once = || {
            run(
                &catalog,
                &scenario_profile(),
                &scenario_constraints(),
                &dumbbells_only(),
                Some(99),
            )
            .unwrap()
        };

        let first = run_once();
        let second = run_once();

        assert_eq!(first.volume_score, second.volume_score);
        assert_eq!(first.estimated_calories, second.estimated_calories);

        let ids = |result: &PlanResult| -> Vec<String> {
            result
                .plan
                .iter()
                .flat_map(|d| &d.sessions)
                .flat_map(|s| &s.exercises)
                .map(|s| s.exercise.id.clone())
                .collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_invalid_input_fails_the_whole_run() {
        let catalog = build_default_catalog();
        let mut constraints = scenario_constraints();
        constraints.available_time = Some(90);

        let err = run(
            &catalog,
            &scenario_profile(),
            &constraints,
            &dumbbells_only(),
            Some(1),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidInput { field: "available_time", .. }
        ));
    }

    #[test]
    fn test_no_equipment_degrades_to_empty_plan() {
        let catalog = build_default_catalog();
        let result = run(
            &catalog,
            &scenario_profile(),
            &scenario_constraints(),
            &Equipment::default(),
            Some(1),
        )
        .unwrap();

        assert_eq!(result.volume_score, 0);
        assert_eq!(result.estimated_calories, 0);
        assert_eq!(result.plan.len(), 3);
        assert!(result
            .plan
            .iter()
            .all(|d| d.sessions[0].exercises.is_empty()));
        assert!(result
            .trace
            .iter()
            .any(|e| e.category == TraceCategory::Warning));
    }

    #[test]
    fn test_trace_is_stage_ordered() {
        let catalog = build_default_catalog();
        let result = run(
            &catalog,
            &scenario_profile(),
            &scenario_constraints(),
            &dumbbells_only(),
            Some(7),
        )
        .unwrap();

        let position = |needle: &str| {
            result
                .trace
                .iter()
                .position(|e| e.message.contains(needle))
                .unwrap_or_else(|| panic!("missing trace entry: {}", needle))
        };

        let phases = [
            position("Phase 1"),
            position("Phase 2"),
            position("Phase 3"),
            position("Phase 4"),
            position("Inference complete"),
        ];
        assert!(phases.windows(2).all(|w| w[0] < w[1]));

        // Stage output lands between its phase marker and the next.
        assert!(position("Complexity score") > position("Phase 1"));
        assert!(position("Complexity score") < position("Phase 2"));
        assert!(position("Split rule") > position("Phase 3"));
        assert!(position("Volume score") > position("Phase 4"));
    }
}
