use chrono::{DateTime, Utc};
use ndarray::Array1;

use serde_derive::{Deserialize, Serialize};

use crate::constants::*;

/// WeatherSample is the weather of a single simulation step, as provided
/// by the caller (forecast entries or form inputs). `sanitized` is the
/// typed boundary between raw values and the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSample {
    /// display label for the step (day name, hour, ...)
    pub label: String,
    /// air temperature [°F]
    pub temperature_f: f32,
    /// relative humidity [%]
    pub humidity_pct: f32,
    /// wind speed [mph]
    pub wind_mph: f32,
    /// hours since the previous step [h]
    pub elapsed_hours: f32,
}

impl WeatherSample {
    pub fn new(
        label: &str,
        temperature_f: f32,
        humidity_pct: f32,
        wind_mph: f32,
        elapsed_hours: f32,
    ) -> Self {
        WeatherSample {
            label: label.to_owned(),
            temperature_f,
            humidity_pct,
            wind_mph,
            elapsed_hours,
        }
    }

    /// Build a sample from a forecast entry, labeling it with its valid time
    pub fn from_forecast(
        time: &DateTime<Utc>,
        temperature_f: f32,
        humidity_pct: f32,
        wind_mph: f32,
        elapsed_hours: f32,
    ) -> Self {
        WeatherSample {
            label: time.format("%a %d %b").to_string(),
            temperature_f,
            humidity_pct,
            wind_mph,
            elapsed_hours,
        }
    }

    /// Replace non-finite fields with the documented fallbacks and clamp
    /// the rest to their valid ranges
    pub fn sanitized(&self) -> WeatherSample {
        let temperature_f = if self.temperature_f.is_finite() {
            self.temperature_f
        } else {
            DEFAULT_TEMPERATURE
        };
        let humidity_pct = if self.humidity_pct.is_finite() {
            self.humidity_pct.clamp(0.0, 100.0)
        } else {
            DEFAULT_HUMIDITY
        };
        let wind_mph = if self.wind_mph.is_finite() {
            f32::max(self.wind_mph, 0.0)
        } else {
            DEFAULT_WIND
        };
        let elapsed_hours = if self.elapsed_hours.is_finite() {
            f32::max(self.elapsed_hours, 0.0)
        } else {
            0.0
        };
        WeatherSample {
            label: self.label.clone(),
            temperature_f,
            humidity_pct,
            wind_mph,
            elapsed_hours,
        }
    }
}

/// InputElement is the weather input of a single site in a batch run
#[derive(Debug)]
pub struct InputElement {
    /// air temperature [°F]
    pub temperature_f: f32,
    /// relative humidity [%]
    pub humidity: f32,
    /// wind speed [mph]
    pub wind_mph: f32,
    /// rain of the last 24 hours [inches]
    pub rain_inches: f32,
    /// hours since the previous update [h]
    pub elapsed_hours: f32,
}

impl Default for InputElement {
    fn default() -> Self {
        Self {
            temperature_f: NODATAVAL,
            humidity: NODATAVAL,
            wind_mph: NODATAVAL,
            rain_inches: NODATAVAL,
            elapsed_hours: NODATAVAL,
        }
    }
}

pub struct Input {
    pub time: DateTime<Utc>,
    pub data: Array1<InputElement>,
}
