use crate::infra::load_advisors;
use chrono::Local;
use clap::Args;
use farm_advisor::config::AppConfig;
use farm_advisor::error::AppError;
use farm_advisor::workflows::irrigation::{ScheduleOutcome, WeatherReading};
use farm_advisor::workflows::schemes::{EligibilityForm, MatchView};

#[derive(Args, Debug, Default)]
pub(crate) struct EligibilityArgs {
    /// State the farm is located in
    #[arg(long, default_value = "")]
    pub(crate) state: String,
    /// Primary crop grown
    #[arg(long, default_value = "")]
    pub(crate) crop: String,
    /// Cultivated land in hectares
    #[arg(long, default_value = "")]
    pub(crate) land_size: String,
    /// Annual household income in rupees
    #[arg(long, default_value = "")]
    pub(crate) income: String,
    /// Age of the farmer in years
    #[arg(long, default_value = "")]
    pub(crate) age: String,
    /// The farm follows organic practices
    #[arg(long)]
    pub(crate) organic: bool,
    /// The farm has irrigation access
    #[arg(long)]
    pub(crate) irrigation: bool,
    /// conventional, organic, or mixed
    #[arg(long, default_value = "")]
    pub(crate) farming_type: String,
    /// Print the matches as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl From<&EligibilityArgs> for EligibilityForm {
    fn from(args: &EligibilityArgs) -> Self {
        EligibilityForm {
            land_size: args.land_size.clone(),
            state: args.state.clone(),
            crop: args.crop.clone(),
            income: args.income.clone(),
            age: args.age.clone(),
            is_organic: args.organic,
            has_irrigation: args.irrigation,
            farming_type: args.farming_type.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScheduleArgs {
    /// Crop to plan irrigation for
    #[arg(long)]
    pub(crate) crop: String,
    /// Air temperature in degrees Celsius
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) temperature: Option<f64>,
    /// Relative humidity in percent
    #[arg(long)]
    pub(crate) humidity: Option<f64>,
    /// Rainfall in millimetres
    #[arg(long)]
    pub(crate) rainfall: Option<f64>,
    /// Short weather description
    #[arg(long)]
    pub(crate) description: Option<String>,
    /// Print the outcome as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl From<&ScheduleArgs> for WeatherReading {
    fn from(args: &ScheduleArgs) -> Self {
        WeatherReading {
            temperature_c: args.temperature,
            humidity_pct: args.humidity,
            rainfall_mm: args.rainfall,
            description: args.description.clone(),
        }
    }
}

pub(crate) fn run_eligibility(args: EligibilityArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let advisors = load_advisors(&config)?;

    let matches: Vec<MatchView> = advisors
        .schemes
        .recommend(EligibilityForm::from(&args))?
        .into_iter()
        .map(MatchView::from)
        .collect();

    if args.json {
        print_json(&matches)?;
        return Ok(());
    }

    render_matches(&matches);
    Ok(())
}

pub(crate) fn run_schedule(args: ScheduleArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let advisors = load_advisors(&config)?;

    let weather = WeatherReading::from(&args).into_snapshot();
    let outcome = advisors.irrigation.adjust(&args.crop, &weather);

    if args.json {
        print_json(&outcome)?;
        return Ok(());
    }

    render_schedule(&outcome);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
    println!("{}", rendered);
    Ok(())
}

fn render_matches(matches: &[MatchView]) {
    println!("Scheme eligibility");
    if matches.is_empty() {
        println!("No scheme reached the qualifying score.");
        return;
    }

    for (rank, view) in matches.iter().enumerate() {
        println!(
            "{}. {} ({}% match)",
            rank + 1,
            view.scheme_name,
            view.match_percentage
        );
        println!("   {}", view.description);
        if !view.justification.is_empty() {
            println!("   {}", view.justification);
        }
    }
}

fn render_schedule(outcome: &ScheduleOutcome) {
    let recommendation = &outcome.recommendation;

    println!(
        "Irrigation schedule for {} ({})",
        outcome.crop,
        Local::now().format("%Y-%m-%d")
    );
    if outcome.used_default_crop {
        println!(
            "No schedule for '{}'; showing the {} schedule instead.",
            outcome.requested_crop, outcome.crop
        );
    }
    println!(
        "Weather: {:.1} C | {:.0}% humidity | {:.1} mm rain | {}",
        outcome.weather.temperature_c,
        outcome.weather.humidity_pct,
        outcome.weather.rainfall_mm,
        outcome.weather.description
    );
    println!(
        "Season: {} | Baseline: every {} days, {} cm",
        outcome.base.season, outcome.base.base_frequency_days, outcome.base.water_amount_cm
    );

    if outcome.adjustment.applied_rules.is_empty() {
        println!("Adjustments: none");
    } else {
        let rules: Vec<&str> = outcome
            .adjustment
            .applied_rules
            .iter()
            .map(|rule| rule.label())
            .collect();
        println!(
            "Adjustments: {} ({:+} days, {:+} cm)",
            rules.join(", "),
            outcome.adjustment.frequency_delta_days,
            outcome.adjustment.water_delta_cm
        );
    }

    println!("\nFrequency: {}", recommendation.frequency_text);
    println!("Water: {}", recommendation.water_text);
    println!("Best time: {}", recommendation.timing_text);
    println!("Next watering: {}", recommendation.next_watering_text);
    if !outcome.base.tips.is_empty() {
        println!("Tip: {}", outcome.base.tips);
    }
}
