use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Measurement convention used for both the API query and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSystem {
    #[default]
    Metric,
    Us,
}

impl UnitSystem {
    /// Wire value sent as the `unitGroup` query parameter.
    pub fn query_value(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Us => "us",
        }
    }

    /// Suffix appended to rendered temperatures.
    pub fn suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "C",
            UnitSystem::Us => "F",
        }
    }

    /// Human-readable name of the temperature scale.
    pub fn unit_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Celsius",
            UnitSystem::Us => "Fahrenheit",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Metric, UnitSystem::Us]
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.query_value())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "us" => Ok(UnitSystem::Us),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported unit systems: metric, us."
            )),
        }
    }
}

/// One fetch request: a free-text location plus the selected unit system.
///
/// Built fresh by the caller for every fetch and never persisted. The
/// location is sent to the remote API verbatim; an empty or nonsensical
/// value surfaces as a remote error, not a local one.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub location: String,
    pub unit: UnitSystem,
}

/// Decoded timeline payload.
///
/// Decoding is strict: a missing required field fails the whole decode.
/// Extra fields the API sends beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    /// Human-readable place name the API resolved the query to.
    pub resolved_address: String,
    /// IANA timezone name of the resolved place.
    pub timezone: String,
    pub current_conditions: CurrentConditions,
    /// Per-day forecast, chronological as returned by the API.
    pub days: Vec<DayForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp: f64,
    pub feelslike: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    /// Calendar date, wire format "yyyy-MM-dd". No time or zone component.
    pub datetime: NaiveDate,
    pub temp: f64,
}

impl DayForecast {
    /// English weekday name of this forecast's date, interpreted at local
    /// midnight in the named timezone.
    ///
    /// The stored date has no time component, so this is a formatting
    /// detail rather than a real conversion: an unrecognized timezone
    /// name (or a date whose midnight does not exist in that timezone)
    /// falls back to formatting the stored date directly.
    pub fn weekday(&self, timezone_name: &str) -> String {
        let date = timezone_name
            .parse::<Tz>()
            .ok()
            .and_then(|tz| {
                tz.from_local_datetime(&self.datetime.and_time(NaiveTime::MIN))
                    .earliest()
            })
            .map(|dt| dt.date_naive())
            .unwrap_or(self.datetime);

        date.format("%A").to_string()
    }
}
