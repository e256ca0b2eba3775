use clap::{Args, Parser, Subcommand};
use homegym_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "homegym")]
#[command(about = "Home workout plan recommendation engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly workout plan (default)
    Plan(PlanArgs),

    /// List the built-in exercise catalog
    Catalog,

    /// Write a starter configuration file
    InitConfig,
}

#[derive(Args, Default)]
struct PlanArgs {
    /// Experience level (beginner, intermediate)
    #[arg(long)]
    experience: Option<String>,

    /// Training goal (muscle_gain, strength, general_fitness)
    #[arg(long)]
    goal: Option<String>,

    /// Training days per week (2, 3 or 4)
    #[arg(long)]
    days: Option<u8>,

    /// Session time in minutes (30, 45 or 60)
    #[arg(long)]
    time: Option<u32>,

    /// Intensity (light, medium, high)
    #[arg(long)]
    intensity: Option<String>,

    /// Injuries, comma separated (none, shoulder, knee, back)
    #[arg(long, value_delimiter = ',')]
    injuries: Vec<String>,

    /// Equipment, comma separated (dumbbells, bands, bench, pullup_bar,
    /// bodyweight); overrides the config file
    #[arg(long, value_delimiter = ',')]
    equipment: Vec<String>,

    /// Fixed shuffle seed for a reproducible plan
    #[arg(long)]
    seed: Option<u64>,

    /// Print the full inference trace
    #[arg(long)]
    trace: bool,

    /// Emit the full result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    homegym_core::logging::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Plan(args)) => cmd_plan(&config, &args),
        Some(Commands::Catalog) => cmd_catalog(),
        Some(Commands::InitConfig) => cmd_init_config(cli.config.as_deref()),
        None => cmd_plan(&config, &PlanArgs::default()),
    }
}

fn load_config(override_path: Option<&Path>) -> Result<Config> {
    match override_path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(_) => Ok(Config::default()),
        None => Config::load(),
    }
}

fn cmd_plan(config: &Config, args: &PlanArgs) -> Result<()> {
    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let profile = UserProfile {
        experience_level: args
            .experience
            .as_deref()
            .map(parse_experience)
            .transpose()?,
        training_goal: args.goal.as_deref().map(parse_goal).transpose()?,
    };

    let constraints = UserConstraints {
        training_days: args.days.or(config.defaults.training_days),
        available_time: args.time.or(config.defaults.available_time),
        intensity: args
            .intensity
            .as_deref()
            .map(parse_intensity)
            .transpose()?
            .or(config.defaults.intensity),
        injuries: args
            .injuries
            .iter()
            .map(|s| parse_injury(s))
            .collect::<Result<Vec<_>>>()?,
    };

    let equipment = if args.equipment.is_empty() {
        config.equipment.to_equipment()
    } else {
        parse_equipment(&args.equipment)?
    };

    let seed = args.seed.or(config.engine.seed);
    let result = run(catalog, &profile, &constraints, &equipment, seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if args.trace {
        for entry in &result.trace {
            println!("[{:>12}] {}", entry.category.label(), entry.message);
        }
        println!();
    }

    print_summary(&result);
    Ok(())
}

fn print_summary(result: &PlanResult) {
    println!(
        "Workout Complexity Score: {} ({})",
        result.score.score,
        result.score.complexity.label()
    );
    println!("Volume score: {}", result.volume_score);
    println!("Estimated burn: {} kcal per week", result.estimated_calories);

    if !result.excluded_by_equipment.is_empty() {
        println!(
            "Excluded by equipment: {}",
            result.excluded_by_equipment.join(", ")
        );
    }
    if !result.excluded_by_injury.is_empty() {
        println!(
            "Excluded by injury: {}",
            result.excluded_by_injury.join(", ")
        );
    }

    for day in &result.plan {
        println!();
        println!(
            "{} - {} ({} min, {} kcal)",
            day.day_name, day.focus, day.total_duration_minutes, day.total_calories
        );
        for session in &day.sessions {
            for (index, scheduled) in session.exercises.iter().enumerate() {
                println!(
                    "  {}. {} {}x{}, rest {}s",
                    index + 1,
                    scheduled.exercise.name,
                    scheduled.sets,
                    scheduled.reps,
                    scheduled.rest_seconds
                );
                if let Some(note) = &scheduled.note {
                    println!("     {}", note);
                }
            }
            if session.exercises.is_empty() {
                println!("  (no exercises available)");
            }
        }
    }
}

fn cmd_catalog() -> Result<()> {
    let catalog = get_default_catalog();
    for exercise in &catalog.exercises {
        let equipment = exercise
            .equipment_needed
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<28} {:<5} {}x{}, rest {}s, requires {}",
            exercise.name,
            exercise.muscle_group.label(),
            exercise.default_sets,
            exercise.default_reps,
            exercise.default_rest_seconds,
            equipment
        );
    }
    Ok(())
}

fn cmd_init_config(override_path: Option<&Path>) -> Result<()> {
    let path = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_config_path);
    Config::default().save_to(&path)?;
    println!("Wrote starter config to {}", path.display());
    Ok(())
}

fn parse_experience(value: &str) -> Result<ExperienceLevel> {
    match value.to_lowercase().as_str() {
        "beginner" => Ok(ExperienceLevel::Beginner),
        "intermediate" => Ok(ExperienceLevel::Intermediate),
        _ => Err(Error::invalid_input("experience", value)),
    }
}

fn parse_goal(value: &str) -> Result<TrainingGoal> {
    match value.to_lowercase().as_str() {
        "muscle_gain" => Ok(TrainingGoal::MuscleGain),
        "strength" => Ok(TrainingGoal::Strength),
        "general_fitness" => Ok(TrainingGoal::GeneralFitness),
        _ => Err(Error::invalid_input("goal", value)),
    }
}

fn parse_intensity(value: &str) -> Result<Intensity> {
    match value.to_lowercase().as_str() {
        "light" => Ok(Intensity::Light),
        "medium" => Ok(Intensity::Medium),
        "high" => Ok(Intensity::High),
        _ => Err(Error::invalid_input("intensity", value)),
    }
}

fn parse_injury(value: &str) -> Result<Injury> {
    match value.to_lowercase().as_str() {
        "none" => Ok(Injury::None),
        "shoulder" => Ok(Injury::Shoulder),
        "knee" => Ok(Injury::Knee),
        "back" => Ok(Injury::Back),
        _ => Err(Error::invalid_input("injuries", value)),
    }
}

fn parse_equipment(values: &[String]) -> Result<Equipment> {
    let mut equipment = Equipment::default();
    for value in values {
        match value.to_lowercase().as_str() {
            "dumbbells" => equipment.dumbbells = true,
            "bands" => equipment.bands = true,
            "bench" => equipment.bench = true,
            "pullup_bar" => equipment.pullup_bar = true,
            "bodyweight" => equipment.bodyweight = true,
            _ => return Err(Error::invalid_input("equipment", value)),
        }
    }
    Ok(equipment)
}
