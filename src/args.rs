use clap::{Parser, ValueEnum};
use hn_e2e::scenarios::Scenario;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hn-e2e")]
#[command(about = "End-to-end checks against the live Hacker News site")]
#[command(version)]
pub struct Args {
    /// Scenario to run
    #[arg(short, long, value_enum, default_value_t = ScenarioArg::All)]
    pub scenario: ScenarioArg,

    /// WebDriver endpoint (overrides config file)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Base URL of the site under test (overrides config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    All,
    Homepage,
    Sorting,
    Navigation,
    Pagination,
}

/// Convert from CLI scenario selection to the internal scenario type;
/// `All` maps to no selection, meaning every scenario runs
pub fn convert_scenario(arg: ScenarioArg) -> Option<Scenario> {
    match arg {
        ScenarioArg::All => None,
        ScenarioArg::Homepage => Some(Scenario::Homepage),
        ScenarioArg::Sorting => Some(Scenario::Sorting),
        ScenarioArg::Navigation => Some(Scenario::Navigation),
        ScenarioArg::Pagination => Some(Scenario::Pagination),
    }
}
