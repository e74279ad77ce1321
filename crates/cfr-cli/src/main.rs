use anyhow::Result;
use cfr_risk::{RiskFactor, RiskProfile};
use clap::Parser;
use tracing::debug;

mod commands;

#[derive(Parser)]
#[command(name = "cfr")]
#[command(about = "Estimate your risk of dying if you contract COVID-19", long_about = None)]
struct Cli {
    /// Age in years
    #[arg(value_name = "AGE", required_unless_present = "show_table")]
    age: Option<u32>,

    /// Stir in the risk for a smoker
    #[arg(short = 's', long)]
    smoker: bool,

    /// Stir in the risk for a male (default is female)
    #[arg(short = 'm', long)]
    male: bool,

    /// Stir in the risk for having hypertension
    #[arg(short = 'H', long)]
    hypertensive: bool,

    /// Stir in the risk for diabetes
    #[arg(short = 'd', long)]
    diabetic: bool,

    /// Stir in the risk for cardiac disease
    #[arg(short = 'c', long = "cardiac-disease")]
    cardiac: bool,

    /// Stir in the risk for chronic respiratory problems
    #[arg(short = 'r', long = "chronic-respiratory-disease")]
    respiratory: bool,

    /// Stir in the risk for having cancer of any kind
    #[arg(short = 'C', long)]
    cancer: bool,

    /// Print the full breakdown as JSON instead of a sentence
    #[arg(long, conflicts_with = "show_table")]
    json: bool,

    /// Print the constant table (canonical JSON) and its hash, then exit
    #[arg(long)]
    show_table: bool,
}

impl Cli {
    fn profile(&self, age: u32) -> RiskProfile {
        RiskProfile::new(age)
            .with_if(RiskFactor::Smoker, self.smoker)
            .with_if(RiskFactor::Male, self.male)
            .with_if(RiskFactor::Hypertensive, self.hypertensive)
            .with_if(RiskFactor::Diabetic, self.diabetic)
            .with_if(RiskFactor::Cardiac, self.cardiac)
            .with_if(RiskFactor::Respiratory, self.respiratory)
            .with_if(RiskFactor::Cancer, self.cancer)
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.show_table {
        return commands::table::show_table();
    }

    let Some(age) = cli.age else {
        unreachable!("clap requires AGE unless --show-table is given");
    };
    let profile = cli.profile(age);
    debug!(age, factors = ?profile.factors, "profile parsed");

    commands::risk::run(&profile, cli.json)
}

/// Logs go to stderr so stdout carries only the result.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();
}
