//! Scenario scripts composing the page objects into live-site checks.
//!
//! Scenarios are the only callers of the page objects; they never touch
//! selectors directly. Each scenario starts from a fresh listing load, so
//! they can run in any order against one WebDriver session.

pub mod homepage;
pub mod navigation;
pub mod pagination;
pub mod sorting;

use crate::config::SuiteConfig;
use crate::error::SuiteError;
use fantoccini::Client;
use std::time::{Duration, Instant};

/// The check scenarios the runner can execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Listing integrity: stories render and every record validates
    Homepage,
    /// Page size and score presence on the front page
    Sorting,
    /// Story link and comments-thread navigation round trip
    Navigation,
    /// The More link advances to a different page of stories
    Pagination,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Homepage,
        Scenario::Sorting,
        Scenario::Navigation,
        Scenario::Pagination,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Homepage => "homepage",
            Scenario::Sorting => "sorting",
            Scenario::Navigation => "navigation",
            Scenario::Pagination => "pagination",
        }
    }

    pub async fn execute(&self, client: &Client, config: &SuiteConfig) -> Result<(), SuiteError> {
        match self {
            Scenario::Homepage => homepage::run(client, config).await,
            Scenario::Sorting => sorting::run(client, config).await,
            Scenario::Navigation => navigation::run(client, config).await,
            Scenario::Pagination => pagination::run(client, config).await,
        }
    }
}

/// Result of running one scenario
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub duration: Duration,
    pub result: Result<(), SuiteError>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs the selected scenario, or all of them, strictly in sequence
pub async fn run(
    selection: Option<Scenario>,
    client: &Client,
    config: &SuiteConfig,
) -> Vec<ScenarioOutcome> {
    let chosen: Vec<Scenario> = match selection {
        Some(scenario) => vec![scenario],
        None => Scenario::ALL.to_vec(),
    };

    let mut outcomes = Vec::with_capacity(chosen.len());
    for scenario in chosen {
        log::info!("Running scenario: {}", scenario.name());
        let start = Instant::now();
        let result = scenario.execute(client, config).await;
        let duration = start.elapsed();

        match &result {
            Ok(()) => log::info!(
                "Scenario {} passed in {:.2}s",
                scenario.name(),
                duration.as_secs_f64()
            ),
            Err(e) => log::error!("Scenario {} failed: {}", scenario.name(), e),
        }

        outcomes.push(ScenarioOutcome {
            name: scenario.name(),
            duration,
            result,
        });
    }
    outcomes
}

/// Turns a failed check into an assertion error carrying the observed value
pub(crate) fn ensure(condition: bool, message: impl Into<String>) -> Result<(), SuiteError> {
    if condition {
        Ok(())
    } else {
        Err(SuiteError::Assertion(message.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure() {
        assert!(ensure(true, "fine").is_ok());
        let err = ensure(false, "count was 7").unwrap_err();
        assert!(matches!(err, SuiteError::Assertion(_)));
        assert!(err.to_string().contains("count was 7"));
    }

    #[test]
    fn test_scenario_names_are_distinct() {
        let names: std::collections::HashSet<&str> =
            Scenario::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Scenario::ALL.len());
    }
}
