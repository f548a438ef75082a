use clap::Parser;
use hn_e2e::config::SuiteConfig;
use hn_e2e::{scenarios, session};

mod args;
use args::{Args, convert_scenario};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match SuiteConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => SuiteConfig::default(),
    };
    if let Some(url) = args.webdriver_url {
        config.webdriver_url = url;
    }
    if let Some(base) = args.base_url {
        config.base_url = base;
    }

    println!("Note: checks require a WebDriver server (e.g. chromedriver or geckodriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default {}",
        config.webdriver_url
    );

    let client = match session::connect(&config).await {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to start session: {}", e);
            std::process::exit(2);
        }
    };

    let selection = convert_scenario(args.scenario);
    let start_time = std::time::Instant::now();
    let outcomes = scenarios::run(selection, &client, &config).await;

    let mut failed: usize = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => println!(
                "PASS  {}  ({:.2}s)",
                outcome.name,
                outcome.duration.as_secs_f64()
            ),
            Err(e) => {
                failed += 1;
                println!(
                    "FAIL  {}  ({:.2}s): {}",
                    outcome.name,
                    outcome.duration.as_secs_f64(),
                    e
                );
            }
        }
    }
    println!(
        "{} of {} scenarios passed in {:.2} seconds",
        outcomes.len() - failed,
        outcomes.len(),
        start_time.elapsed().as_secs_f64()
    );

    if let Err(e) = client.close().await {
        log::warn!("Failed to close WebDriver session: {}", e);
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
