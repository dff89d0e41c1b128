use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use classbell_core::{logging, ClassbellConfig, ClassbellError};
use classbell_refresh::{FixedClock, RefreshDriver};
use classbell_schedule::{parse_clock, parse_weekday, Locale, ScheduleTable, SchoolTime};
use tracing::debug;

mod output;

use output::{print_schedule, print_state, CliError};

#[derive(Parser)]
#[command(name = "classbell")]
#[command(about = "Class-period greeting: which period or break is running right now", long_about = None)]
struct Cli {
    /// Message language (ko, en); overrides CLASSBELL_LOCALE
    #[arg(long, global = true)]
    locale: Option<Locale>,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the greeting for the current wall-clock time
    Now,
    /// Show the greeting for a given day and time
    At {
        /// Day: 0-6 (0 = Sunday), an English name or a Korean day
        day: String,
        /// Time of day as HH:MM
        time: String,
    },
    /// List the period timetable
    Schedule,
    /// Keep the greeting up to date until interrupted
    Watch {
        /// Seconds between refreshes; overrides CLASSBELL_REFRESH_SECS
        #[arg(long)]
        interval_secs: Option<u64>,
    },
    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut config = ClassbellConfig::from_env().map_err(ClassbellError::from)?;
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Err(err) = logging::init_tracing(&config) {
        eprintln!("⚠️ failed to initialise tracing: {err}");
    }
    debug!(locale = %config.locale, json = cli.json, "command line overrides applied");

    match cli.command {
        Commands::Now => {
            let driver = RefreshDriver::from_config(&config)?;
            print_state(&driver.evaluate(0), cli.json)?;
        }
        Commands::At { day, time } => {
            let weekday = parse_weekday(&day)?;
            let (hour, minute) = parse_clock(&time)?;
            let at = SchoolTime::from_weekday(weekday, hour, minute)?;
            let driver = RefreshDriver::new(
                Arc::new(FixedClock::new(at)),
                config.locale,
                config.refresh_interval,
            )?;
            print_state(&driver.evaluate(0), cli.json)?;
        }
        Commands::Schedule => {
            print_schedule(&ScheduleTable::standard(), config.locale, cli.json)?;
        }
        Commands::Watch { interval_secs } => {
            if let Some(secs) = interval_secs {
                config.refresh_interval = Duration::from_secs(secs);
            }
            watch(&config, cli.json).await?;
        }
        Commands::Version => {
            println!("Classbell v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

async fn watch(config: &ClassbellConfig, json: bool) -> Result<(), CliError> {
    let handle = RefreshDriver::from_config(config)?.start();
    let mut reader = handle.subscribe();

    let initial = reader.borrow_and_update().clone();
    print_state(&initial, json)?;

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal?;
                break;
            }
            changed = reader.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = reader.borrow_and_update().clone();
                print_state(&state, json)?;
            }
        }
    }

    handle.stop().await?;
    Ok(())
}
