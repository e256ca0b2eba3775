//! Weekly plan construction.
//!
//! The split pattern is a fixed policy on the training-days count. Each day
//! draws a pool from the muscle-group buckets, adjusts every exercise for
//! the training goal and complexity score, then greedily packs the pool into
//! the session's time budget in shuffled order.

use crate::score::ScoreBreakdown;
use crate::trace::Trace;
use crate::types::{
    Exercise, MuscleGroup, ScheduledExercise, TrainingGoal, UserConstraints, UserProfile,
    WorkoutDay, WorkoutSession, DEFAULT_AVAILABLE_TIME, DEFAULT_TRAINING_DAYS,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

const WARMUP_MINUTES: f64 = 5.0;
const COOLDOWN_MINUTES: f64 = 3.0;
/// Working time per set, in minutes
const SET_MINUTES: f64 = 0.5;
/// Hard ceiling when padding a selected exercise with extra sets
const MAX_PADDED_SETS: u32 = 6;
/// Greedy fill stops early once this share of the budget is used
const FILL_STOP_RATIO: f64 = 0.85;
/// Padding runs while the packed time is below this share of the budget
const PAD_TARGET_RATIO: f64 = 0.9;

/// Weekly split selected from the training-days count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitPattern {
    FullBody,
    UpperLowerFull,
    UpperLower,
}

impl SplitPattern {
    /// Policy table: 2 days full body, 3 days upper/lower/full, anything
    /// else the four-day upper/lower split.
    pub fn for_days(days: u8) -> Self {
        match days {
            2 => SplitPattern::FullBody,
            3 => SplitPattern::UpperLowerFull,
            _ => SplitPattern::UpperLower,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SplitPattern::FullBody => "Full Body",
            SplitPattern::UpperLowerFull => "Upper/Lower/Full Body",
            SplitPattern::UpperLower => "Upper/Lower",
        }
    }
}

/// A contiguous slice of one muscle-group bucket
#[derive(Clone, Copy, Debug)]
struct GroupSlice {
    group: MuscleGroup,
    skip: usize,
    take: usize,
}

const fn slice(group: MuscleGroup, skip: usize, take: usize) -> GroupSlice {
    GroupSlice { group, skip, take }
}

/// One day of a split: weekday slot, focus label and bucket slices
#[derive(Clone, Copy, Debug)]
struct DayTemplate {
    day: &'static str,
    focus: &'static str,
    slices: &'static [GroupSlice],
}

const FULL_BODY_SLICES: &[GroupSlice] = &[
    slice(MuscleGroup::Push, 0, 2),
    slice(MuscleGroup::Pull, 0, 2),
    slice(MuscleGroup::Legs, 0, 2),
    slice(MuscleGroup::Core, 0, 1),
];

const TWO_DAY_TEMPLATE: &[DayTemplate] = &[
    DayTemplate { day: "Tuesday", focus: "Full Body", slices: FULL_BODY_SLICES },
    DayTemplate { day: "Friday", focus: "Full Body", slices: FULL_BODY_SLICES },
];

const THREE_DAY_TEMPLATE: &[DayTemplate] = &[
    DayTemplate {
        day: "Monday",
        focus: "Upper Body",
        slices: &[slice(MuscleGroup::Push, 0, 3), slice(MuscleGroup::Pull, 0, 3)],
    },
    DayTemplate {
        day: "Wednesday",
        focus: "Lower Body",
        slices: &[slice(MuscleGroup::Legs, 0, 4), slice(MuscleGroup::Core, 0, 2)],
    },
    DayTemplate {
        day: "Friday",
        focus: "Full Body",
        slices: &[
            slice(MuscleGroup::Push, 0, 2),
            slice(MuscleGroup::Pull, 0, 2),
            slice(MuscleGroup::Legs, 0, 2),
        ],
    },
];

const FOUR_DAY_TEMPLATE: &[DayTemplate] = &[
    DayTemplate {
        day: "Monday",
        focus: "Upper Body (Push)",
        slices: &[slice(MuscleGroup::Push, 0, 4), slice(MuscleGroup::Core, 0, 1)],
    },
    DayTemplate {
        day: "Tuesday",
        focus: "Lower Body",
        slices: &[slice(MuscleGroup::Legs, 0, 4), slice(MuscleGroup::Core, 0, 2)],
    },
    DayTemplate {
        day: "Thursday",
        focus: "Upper Body (Pull)",
        slices: &[slice(MuscleGroup::Pull, 0, 4), slice(MuscleGroup::Core, 0, 1)],
    },
    DayTemplate {
        day: "Friday",
        focus: "Lower Body + Core",
        slices: &[slice(MuscleGroup::Legs, 2, 3), slice(MuscleGroup::Core, 1, 3)],
    },
];

fn templates(pattern: SplitPattern) -> &'static [DayTemplate] {
    match pattern {
        SplitPattern::FullBody => TWO_DAY_TEMPLATE,
        SplitPattern::UpperLowerFull => THREE_DAY_TEMPLATE,
        SplitPattern::UpperLower => FOUR_DAY_TEMPLATE,
    }
}

/// Filtered exercises partitioned by muscle group, catalog order preserved
#[derive(Clone, Debug, Default)]
struct Buckets {
    push: Vec<Arc<Exercise>>,
    pull: Vec<Arc<Exercise>>,
    legs: Vec<Arc<Exercise>>,
    core: Vec<Arc<Exercise>>,
}

impl Buckets {
    fn partition(available: &[Arc<Exercise>]) -> Self {
        let mut buckets = Buckets::default();
        for exercise in available {
            let bucket = match exercise.muscle_group {
                MuscleGroup::Push => &mut buckets.push,
                MuscleGroup::Pull => &mut buckets.pull,
                MuscleGroup::Legs => &mut buckets.legs,
                MuscleGroup::Core => &mut buckets.core,
            };
            bucket.push(Arc::clone(exercise));
        }
        buckets
    }

    fn group(&self, group: MuscleGroup) -> &[Arc<Exercise>] {
        match group {
            MuscleGroup::Push => &self.push,
            MuscleGroup::Pull => &self.pull,
            MuscleGroup::Legs => &self.legs,
            MuscleGroup::Core => &self.core,
        }
    }
}

/// Turn a catalog exercise into a scheduled one, applying the goal and
/// score adjustments with their clamped bounds
pub(crate) fn adjust_exercise(
    exercise: &Arc<Exercise>,
    goal: Option<TrainingGoal>,
    score: i32,
) -> ScheduledExercise {
    let mut sets = exercise.default_sets;
    let mut reps = exercise.default_reps;
    let mut rest = exercise.default_rest_seconds;
    let mut note = None;

    match goal {
        Some(TrainingGoal::Strength) => {
            sets = (sets + 1).min(5);
            reps = reps.saturating_sub(4).max(4);
            rest = (rest + 30).min(120);
            note = Some("Focus on heavy weight and controlled movement".to_string());
        }
        Some(TrainingGoal::MuscleGain) => {
            sets = (sets + 1).min(4);
            reps = (reps + 2).min(12);
            rest = 75;
            note = Some("Focus on the mind-muscle connection and slow negatives".to_string());
        }
        Some(TrainingGoal::GeneralFitness) => {
            reps = (reps + 3).min(15);
            rest = rest.saturating_sub(15).max(30);
            note = Some("Keep the heart rate elevated with minimal rest".to_string());
        }
        None => {}
    }

    if score >= 4 {
        sets = (sets + 1).min(5);
        rest = rest.saturating_sub(15).max(30);
    } else if score <= 1 {
        sets = sets.saturating_sub(1).max(2);
        rest = (rest + 15).min(120);
    }

    ScheduledExercise {
        exercise: Arc::clone(exercise),
        sets,
        reps,
        rest_seconds: rest,
        note,
    }
}

/// Estimated minutes one scheduled exercise occupies: working sets plus the
/// rests between them
fn scheduled_minutes(scheduled: &ScheduledExercise) -> f64 {
    let work = scheduled.sets as f64 * SET_MINUTES;
    let rest = scheduled.sets.saturating_sub(1) as f64 * (scheduled.rest_seconds as f64 / 60.0);
    work + rest
}

/// Pack one day's pool into the session time budget
fn pack_day(
    template: &DayTemplate,
    buckets: &Buckets,
    goal: Option<TrainingGoal>,
    score: i32,
    requested_minutes: u32,
    rng: &mut impl Rng,
    trace: &mut Trace,
) -> WorkoutDay {
    let mut pool: Vec<Arc<Exercise>> = template
        .slices
        .iter()
        .flat_map(|s| {
            buckets
                .group(s.group)
                .iter()
                .skip(s.skip)
                .take(s.take)
                .cloned()
        })
        .collect();
    pool.shuffle(rng);

    let effective = requested_minutes as f64 - WARMUP_MINUTES - COOLDOWN_MINUTES;
    let mut selected: Vec<ScheduledExercise> = Vec::new();
    let mut packed = 0.0;

    for exercise in &pool {
        let scheduled = adjust_exercise(exercise, goal, score);
        let minutes = scheduled_minutes(&scheduled);
        if packed + minutes <= effective {
            packed += minutes;
            selected.push(scheduled);
        }
        if packed >= effective * FILL_STOP_RATIO {
            break;
        }
    }

    // Pad with extra sets while the session is clearly underfilled.
    while packed < effective * PAD_TARGET_RATIO && !selected.is_empty() {
        let mut added = false;
        for scheduled in selected.iter_mut() {
            let extra = SET_MINUTES + scheduled.rest_seconds as f64 / 60.0;
            if scheduled.sets < MAX_PADDED_SETS && packed + extra <= effective {
                scheduled.sets += 1;
                packed += extra;
                added = true;
            }
        }
        if !added {
            break;
        }
    }

    let total_calories = selected
        .iter()
        .map(|s| s.exercise.calories_per_set * s.sets)
        .sum();

    trace.optimization(format!(
        "{}: {} exercises scheduled for a {} minute session",
        template.day,
        selected.len(),
        requested_minutes
    ));
    tracing::debug!(
        day = template.day,
        exercises = selected.len(),
        packed_minutes = packed,
        "packed day"
    );

    WorkoutDay {
        day_name: template.day.to_string(),
        focus: template.focus.to_string(),
        sessions: vec![WorkoutSession {
            session_number: 1,
            exercises: selected,
            duration_minutes: requested_minutes,
        }],
        total_duration_minutes: requested_minutes,
        packed_minutes: packed,
        total_calories,
    }
}

/// Build the weekly plan from the filtered exercise set
pub fn build_plan(
    available: &[Arc<Exercise>],
    profile: &UserProfile,
    constraints: &UserConstraints,
    score: &ScoreBreakdown,
    rng: &mut impl Rng,
    trace: &mut Trace,
) -> Vec<WorkoutDay> {
    let days = constraints.training_days.unwrap_or(DEFAULT_TRAINING_DAYS);
    let minutes = constraints.available_time.unwrap_or(DEFAULT_AVAILABLE_TIME);
    let goal = profile.training_goal;

    trace.system(format!(
        "Generating a {}-day plan with {} minute sessions",
        days, minutes
    ));

    let pattern = SplitPattern::for_days(days);
    trace.rule(format!(
        "Split rule: {} days per week selects the {} split",
        days,
        pattern.label()
    ));
    trace.optimization(format!(
        "Time per session: {} minutes (including {:.0} minute warm-up and {:.0} minute cool-down)",
        minutes, WARMUP_MINUTES, COOLDOWN_MINUTES
    ));

    if available.is_empty() {
        trace.warning("No exercises available after filtering; the plan will be empty");
    }

    let buckets = Buckets::partition(available);
    let plan: Vec<WorkoutDay> = templates(pattern)
        .iter()
        .map(|template| pack_day(template, &buckets, goal, score.score, minutes, rng, trace))
        .collect();

    match goal {
        Some(TrainingGoal::Strength) => {
            trace.optimization("Goal optimization: strength favours longer rest and lower reps");
        }
        Some(TrainingGoal::MuscleGain) => {
            trace.optimization("Goal optimization: muscle gain favours time under tension");
        }
        Some(TrainingGoal::GeneralFitness) => {
            trace.optimization(
                "Goal optimization: general fitness favours circuit work with minimal rest",
            );
        }
        None => {
            trace.optimization("No training goal set; catalog defaults apply");
        }
    }

    plan
}
