//! Exercise filtering against equipment and reported injuries.
//!
//! Two sequential passes over the catalog: equipment first, then injuries.
//! Both preserve catalog order and record every exclusion by name so the
//! result can report what was ruled out and why.

use crate::trace::Trace;
use crate::types::{Catalog, Equipment, Exercise, ImpactLevel, Injury, MuscleGroup};
use std::sync::Arc;

/// Output of the filter stage
#[derive(Clone, Debug, Default)]
pub struct FilterOutcome {
    /// Exercises that survived both passes, in catalog order
    pub available: Vec<Arc<Exercise>>,
    pub excluded_by_equipment: Vec<String>,
    pub excluded_by_injury: Vec<String>,
}

/// Reason an exercise conflicts with a reported injury
///
/// Rules are checked in a fixed order (knee, shoulder, back) and the first
/// match wins, so each exclusion is logged exactly once.
fn injury_conflict(exercise: &Exercise, injuries: &[Injury]) -> Option<&'static str> {
    if injuries.contains(&Injury::Knee)
        && exercise.muscle_group == MuscleGroup::Legs
        && exercise.impact == ImpactLevel::High
    {
        return Some("high impact is not suitable with a knee injury");
    }
    if injuries.contains(&Injury::Shoulder) && exercise.overhead {
        return Some("overhead movement is not suitable with a shoulder injury");
    }
    if injuries.contains(&Injury::Back) && exercise.back_strain {
        return Some("movement strains the lower back");
    }
    None
}

/// Filter the catalog down to exercises usable with the given equipment and
/// injuries
pub fn filter_exercises(
    catalog: &Catalog,
    equipment: &Equipment,
    injuries: &[Injury],
    trace: &mut Trace,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    let available_tags = equipment.available_tags();
    let tag_list = if available_tags.is_empty() {
        "none".to_string()
    } else {
        available_tags
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    trace.system(format!("Available equipment: {}", tag_list));

    // Equipment pass: every required capability must be available.
    let mut usable: Vec<Arc<Exercise>> = Vec::new();
    for exercise in &catalog.exercises {
        let has_all = exercise
            .equipment_needed
            .iter()
            .all(|tag| equipment.has(*tag));

        if has_all {
            usable.push(Arc::clone(exercise));
        } else {
            let required = exercise
                .equipment_needed
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", ");
            trace.constraint(format!(
                "Equipment rule: excluding \"{}\" (requires {})",
                exercise.name, required
            ));
            outcome.excluded_by_equipment.push(exercise.name.clone());
        }
    }
    trace.system(format!("Exercises after equipment filter: {}", usable.len()));

    // Injury pass: only runs when real limitations were reported.
    let reported: Vec<Injury> = injuries
        .iter()
        .copied()
        .filter(|i| *i != Injury::None)
        .collect();

    if reported.is_empty() {
        trace.success("No physical limitations detected");
        outcome.available = usable;
        return outcome;
    }

    let names = reported
        .iter()
        .map(|i| i.label())
        .collect::<Vec<_>>()
        .join(", ");
    trace.warning(format!("Physical limitations detected: {}", names));

    for exercise in usable {
        match injury_conflict(&exercise, &reported) {
            Some(reason) => {
                trace.constraint(format!(
                    "Injury rule: excluding \"{}\" ({})",
                    exercise.name, reason
                ));
                outcome.excluded_by_injury.push(exercise.name.clone());
            }
            None => outcome.available.push(exercise),
        }
    }
    trace.system(format!(
        "Exercises after injury filter: {}",
        outcome.available.len()
    ));

    outcome
}
