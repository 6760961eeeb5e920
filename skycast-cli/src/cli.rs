use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{Config, UnitSystem, WeatherClient, WeatherQuery, WeatherResponse};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather viewer CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Visual Crossing API key.
    Configure,

    /// Show current conditions and the daily forecast for a location.
    Show {
        /// Location name, e.g. "pszczyna" or "New York, NY".
        location: String,

        /// Unit system: "metric" or "us".
        #[arg(long, default_value = "metric")]
        unit: String,
    },

    /// List the selectable unit systems.
    Units,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, unit } => show(location, &unit).await,
            Command::Units => {
                for unit in UnitSystem::all() {
                    println!("{} - {}", unit.query_value(), unit.unit_name());
                }
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("Visual Crossing API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(location: String, unit: &str) -> anyhow::Result<()> {
    let unit = UnitSystem::try_from(unit)?;

    let config = Config::load()?;
    let client = WeatherClient::from_config(&config)?;

    let query = WeatherQuery { location, unit };
    let response = client.fetch(&query).await?;

    print!("{}", render(&response, unit));
    Ok(())
}

fn render(response: &WeatherResponse, unit: UnitSystem) -> String {
    let mut out = String::new();
    let suffix = unit.suffix();
    let current = &response.current_conditions;

    out.push_str(&format!("{}\n", response.resolved_address));
    out.push_str(&format!("Current temperature: {}{}\n", current.temp, suffix));
    out.push_str(&format!(
        "Feels like temperature: {}{}\n",
        current.feelslike, suffix
    ));
    out.push_str(&format!("Humidity: {}\n", current.humidity));

    for day in &response.days {
        out.push_str(&format!(
            "Day: {}  Temperature: {}{}\n",
            day.weekday(&response.timezone),
            day.temp,
            suffix
        ));
    }

    out
}
