//! SkyCoach command-line front end.
//!
//! Reads provider JSON from files, so it can be fed saved responses or the
//! output of any HTTP client:
//!
//! ```bash
//! skycoach score --weather now.json --air air.json --activity cycling
//! skycoach summary --weather now.json --forecast forecast.json --json
//! skycoach city "what's the weather in São Paulo?"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skycoach_core::{AppError, Config};
use skycoach_weather::{
    air_quality_card, daily_outlook, extract_city, notifications, safety_alerts, score,
    summarize, weather_card, Activity, ActivityRequest, AirQualitySnapshot, AlertSeverity,
    ForecastWindow, PhysicalCondition, RecommendationStatus, Utterance, WeatherSnapshot,
};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(
    name = "skycoach",
    about = "Outdoor activity advisor",
    long_about = "Scores outdoor activities against current weather and air quality, \
                  and produces spoken-style summaries."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Data sources shared by the scoring commands
#[derive(clap::Args)]
struct Inputs {
    /// Current-weather payload (JSON)
    #[arg(long)]
    weather: Option<PathBuf>,

    /// Air-pollution payload (JSON)
    #[arg(long)]
    air: Option<PathBuf>,
}

#[derive(clap::Args)]
struct Plan {
    /// Planned activity, e.g. "running" or "outdoor-rest"
    #[arg(long)]
    activity: Option<Activity>,

    /// Physical condition, e.g. "good" or "sensitive"
    #[arg(long)]
    condition: Option<PhysicalCondition>,
}

#[derive(Subcommand)]
enum Command {
    /// Score an activity and list cautions
    Score {
        #[command(flatten)]
        inputs: Inputs,
        #[command(flatten)]
        plan: Plan,
    },

    /// Print the full weather summary
    Summary {
        #[command(flatten)]
        inputs: Inputs,
        #[command(flatten)]
        plan: Plan,

        /// Multi-step forecast payload (JSON)
        #[arg(long)]
        forecast: Option<PathBuf>,

        /// Print the speech request as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the current conditions and air-quality panel
    Conditions {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Print notifications and safety alerts
    Alerts {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Print a day-by-day outlook
    Outlook {
        /// Multi-step forecast payload (JSON)
        #[arg(long)]
        forecast: PathBuf,
    },

    /// Extract a city name from a voice transcript
    City {
        /// Transcript words
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List activities and physical conditions
    Activities,

    /// Show saved preferences, or update them when options are given
    Prefs {
        #[command(flatten)]
        plan: Plan,

        /// Default city
        #[arg(long)]
        city: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        match e.downcast_ref::<AppError>() {
            Some(app_err) => eprintln!("{}\n  caused by: {e:#}", app_err.user_message()),
            None => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (mut config, validation) = Config::load_validated(cli.config.as_deref())?;

    let filter = if cli.verbose {
        "debug"
    } else {
        config.logging.filter.as_str()
    };
    skycoach_core::init(filter)?;

    for warning in &validation.warnings {
        warn!("Config warning: {}", warning);
    }

    match cli.command {
        Command::Score { inputs, plan } => {
            let (weather, air) = inputs.load()?;
            let request = plan.resolve(&config);
            let result = score(weather.as_ref(), air.as_ref(), &request);
            let status = RecommendationStatus::classify(i32::from(result.score));

            println!(
                "{} {} - {}: {}/100",
                status.icon(),
                request.activity,
                status.label(),
                result.score
            );
            for caution in &result.cautions {
                println!("  - {caution}");
            }
        }
        Command::Summary {
            inputs,
            plan,
            forecast,
            json,
        } => {
            let (weather, air) = inputs.load()?;
            let forecast = forecast.as_deref().map(read_forecast).transpose()?;
            let request = plan.resolve(&config);
            let result = score(weather.as_ref(), air.as_ref(), &request);
            let text = summarize(
                weather.as_ref(),
                air.as_ref(),
                &result,
                &request,
                forecast.as_ref(),
            );

            if json {
                let utterance = Utterance::new(&text, &config.speech);
                println!("{}", serde_json::to_string_pretty(&utterance)?);
            } else {
                println!("{text}");
            }
        }
        Command::Conditions { inputs } => {
            let (weather, air) = inputs.load()?;
            match &weather {
                Some(weather) => {
                    for line in weather_card(weather) {
                        println!("{line}");
                    }
                }
                None => println!("No weather data"),
            }
            if let Some(air) = &air {
                println!();
                for line in air_quality_card(air) {
                    println!("{line}");
                }
            }
        }
        Command::Alerts { inputs } => {
            let (weather, air) = inputs.load()?;
            for notice in notifications(weather.as_ref(), air.as_ref()) {
                println!("{notice}");
            }
            for alert in safety_alerts(weather.as_ref(), air.as_ref()) {
                println!(
                    "[{}] {} {}: {}",
                    severity_tag(alert.severity),
                    alert.icon,
                    alert.title,
                    alert.message
                );
            }
        }
        Command::Outlook { forecast } => {
            let window = read_forecast(&forecast)?;
            for day in daily_outlook(&window) {
                println!(
                    "{}  {:>3.0}° / {:>3.0}°  {}",
                    day.date.format("%a %d %b"),
                    day.temp_max,
                    day.temp_min,
                    day.description
                );
            }
        }
        Command::City { text } => {
            let transcript = text.join(" ");
            match extract_city(&transcript) {
                Some(city) => println!("{city}"),
                None => match config.default_city() {
                    Some(city) => {
                        warn!("No city found in {:?}, using the default city", transcript);
                        println!("{city}");
                    }
                    None => anyhow::bail!("No city found in \"{transcript}\""),
                },
            }
        }
        Command::Activities => {
            for activity in Activity::ALL {
                println!("{activity}");
            }
            println!();
            for condition in PhysicalCondition::ALL {
                println!("{:<10} {}", condition.label(), condition.description());
            }
        }
        Command::Prefs { plan, city } => {
            let changed = plan.activity.is_some() || plan.condition.is_some() || city.is_some();
            config.preferences.activity = plan.activity.unwrap_or(config.preferences.activity);
            config.preferences.condition = plan.condition.unwrap_or(config.preferences.condition);
            if let Some(city) = city {
                config.preferences.city = Some(city).filter(|c| !c.trim().is_empty());
            }

            if changed {
                match &cli.config {
                    Some(path) => config.save_to(path)?,
                    None => config.save()?,
                }
                debug!("Preferences saved");
            }

            println!("Activity:  {}", config.preferences.activity);
            println!("Condition: {}", config.preferences.condition);
            println!("City:      {}", config.default_city().unwrap_or("(none)"));
        }
    }

    Ok(())
}

impl Inputs {
    fn load(&self) -> Result<(Option<WeatherSnapshot>, Option<AirQualitySnapshot>)> {
        let weather = self.weather.as_deref().map(read_weather).transpose()?;
        let air = match self.air.as_deref() {
            Some(path) => read_air_quality(path)?,
            None => None,
        };
        if weather.is_none() {
            debug!("No weather payload given");
        }
        Ok((weather, air))
    }
}

impl Plan {
    /// Fill unset fields from the configured preferences
    fn resolve(&self, config: &Config) -> ActivityRequest {
        ActivityRequest::new(
            self.activity.unwrap_or(config.preferences.activity),
            self.condition.unwrap_or(config.preferences.condition),
        )
    }
}

fn read_payload(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn read_weather(path: &Path) -> Result<WeatherSnapshot> {
    let text = read_payload(path)?;
    WeatherSnapshot::from_provider_json(&text)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to parse weather payload {}", path.display()))
}

fn read_air_quality(path: &Path) -> Result<Option<AirQualitySnapshot>> {
    let text = read_payload(path)?;
    AirQualitySnapshot::from_provider_json(&text)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to parse air-quality payload {}", path.display()))
}

fn read_forecast(path: &Path) -> Result<ForecastWindow> {
    let text = read_payload(path)?;
    ForecastWindow::from_provider_json(&text)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to parse forecast payload {}", path.display()))
}

fn severity_tag(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Danger => "danger",
        AlertSeverity::Warning => "warning",
        AlertSeverity::Info => "info",
    }
}
