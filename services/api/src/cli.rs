use crate::commands::{run_eligibility, run_schedule, EligibilityArgs, ScheduleArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use farm_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Farm Advisor",
    about = "Recommend assistance schemes and weather-adjusted irrigation schedules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank assistance schemes for a farmer profile
    Eligibility(EligibilityArgs),
    /// Adjust a crop's irrigation schedule for the given weather
    Schedule(ScheduleArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility(args) => run_eligibility(args),
        Command::Schedule(args) => run_schedule(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["farm-advisor-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn eligibility_flags_parse() {
        let cli = Cli::try_parse_from([
            "farm-advisor-api",
            "eligibility",
            "--state",
            "Punjab",
            "--land-size",
            "2",
            "--irrigation",
        ])
        .expect("parses");

        let Some(Command::Eligibility(args)) = cli.command else {
            panic!("expected eligibility command");
        };
        assert_eq!(args.state, "Punjab");
        assert_eq!(args.land_size, "2");
        assert!(args.irrigation);
        assert!(!args.organic);
    }

    #[test]
    fn schedule_weather_flags_are_optional() {
        let cli = Cli::try_parse_from(["farm-advisor-api", "schedule", "--crop", "wheat"])
            .expect("parses");

        let Some(Command::Schedule(args)) = cli.command else {
            panic!("expected schedule command");
        };
        assert_eq!(args.crop, "wheat");
        assert!(args.temperature.is_none());
        assert!(!args.json);
    }
}
