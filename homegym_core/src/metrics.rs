//! Aggregate plan metrics: volume score and weekly calorie estimate.

use crate::trace::Trace;
use crate::types::{Intensity, WorkoutDay};

/// Weighted workload measure across the whole plan:
/// round(total sets x 10 + total reps x 0.5)
pub fn volume_score(plan: &[WorkoutDay], trace: &mut Trace) -> u32 {
    let mut total_sets: u32 = 0;
    let mut total_reps: u32 = 0;

    for day in plan {
        for session in &day.sessions {
            for scheduled in &session.exercises {
                total_sets += scheduled.sets;
                total_reps += scheduled.sets * scheduled.reps;
            }
        }
    }

    let volume = (total_sets as f64 * 10.0 + total_reps as f64 * 0.5).round() as u32;
    trace.calculation(format!(
        "Volume score: ({} sets x 10) + ({} reps x 0.5) = {}",
        total_sets, total_reps, volume
    ));

    volume
}

/// Intensity multiplier applied to the summed plan calories
fn intensity_multiplier(intensity: Option<Intensity>) -> f64 {
    match intensity {
        Some(Intensity::High) => 1.3,
        Some(Intensity::Medium) => 1.1,
        Some(Intensity::Light) | None => 1.0,
    }
}

/// Weekly calorie estimate: round(sum of day calories x intensity multiplier)
pub fn estimate_calories(
    plan: &[WorkoutDay],
    intensity: Option<Intensity>,
    trace: &mut Trace,
) -> u32 {
    let base: u32 = plan.iter().map(|d| d.total_calories).sum();
    let multiplier = intensity_multiplier(intensity);
    let total = (base as f64 * multiplier).round() as u32;

    let intensity_label = intensity.map(|i| i.label()).unwrap_or("unset");
    trace.calculation(format!(
        "Calorie estimate: {} base x {:.1} ({} intensity) = {} kcal per week",
        base, multiplier, intensity_label, total
    ));

    total
}
