use chrono::{DateTime, Utc};
use ndarray::Array1;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumProperty, EnumString};

use crate::constants::NODATAVAL;
use crate::modules::moisture::models::FuelMoisture;

// ---------------- SIMULATION RESULTS ---------------- //

/// One row of a multi-day simulation, in forecast order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyResult {
    pub label: String,
    /// input air temperature [°F]
    pub temperature_f: f32,
    /// input relative humidity [%]
    pub humidity_pct: f32,
    /// equilibrium moisture content [%]
    pub emc: f32,
    /// 1-hr fuel moisture after the step [%]
    pub one_hour: f32,
    /// 10-hr fuel moisture after the step [%]
    pub ten_hour: f32,
}

/// One row of the 24-hour day/night cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyResult {
    /// step index in the cycle (0-23)
    pub hour: usize,
    /// input air temperature [°F]
    pub temperature_f: f32,
    /// input relative humidity [%]
    pub humidity_pct: f32,
    /// equilibrium moisture content [%]
    pub emc: f32,
    /// 1-hr fuel moisture after the step [%]
    pub one_hour: f32,
    /// 10-hr fuel moisture after the step [%]
    pub ten_hour: f32,
    /// 100-hr fuel moisture after the step [%]
    pub hundred_hour: f32,
    /// rate of spread at the step moisture [chains/h]
    pub ros: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiDaySummary {
    /// label of the first step where 1-hr moisture reaches the critical
    /// threshold, if any
    pub first_critical_day: Option<String>,
    /// 1-hr moisture after the last step [%]
    pub final_one_hour: f32,
    /// 10-hr moisture after the last step [%]
    pub final_ten_hour: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiurnalSummary {
    /// step of the cycle with the lowest 1-hr moisture
    pub min_moisture_hour: usize,
    /// lowest 1-hr moisture of the cycle [%]
    pub min_moisture_value: f32,
    /// highest rate of spread of the cycle [chains/h]
    pub peak_ros: f32,
    /// moisture at the end of the daytime block
    pub end_of_day: FuelMoisture,
    /// moisture at the end of the cycle
    pub end_of_cycle: FuelMoisture,
}

// ---------------- BATCH OUTPUT ---------------- //

/// OutputElement is the model output for a single site of a batch
#[derive(Debug)]
pub struct OutputElement {
    /// equilibrium moisture content [%]
    pub emc: f32,
    /// 1-hr fuel moisture [%]
    pub one_hour: f32,
    /// 10-hr fuel moisture [%]
    pub ten_hour: f32,
    /// 100-hr fuel moisture [%]
    pub hundred_hour: f32,
    /// rate of spread [chains/h]
    pub ros: f32,
    /// input temperature [°F]
    pub temperature_f: f32,
    /// input relative humidity [%]
    pub humidity: f32,
    /// input wind speed [mph]
    pub wind_mph: f32,
}

impl Default for OutputElement {
    fn default() -> Self {
        Self {
            emc: NODATAVAL,
            one_hour: NODATAVAL,
            ten_hour: NODATAVAL,
            hundred_hour: NODATAVAL,
            ros: NODATAVAL,
            temperature_f: NODATAVAL,
            humidity: NODATAVAL,
            wind_mph: NODATAVAL,
        }
    }
}

#[allow(non_camel_case_types)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    EnumString,
    EnumProperty,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum OutputVariableName {
    /// Equilibrium Moisture Content
    #[strum(props(long_name = "Equilibrium Moisture Content", units = "%"))]
    emc,
    /// 1-hr Fuel Moisture
    #[strum(props(long_name = "1-hr Fuel Moisture", units = "%"))]
    oneHour,
    /// 10-hr Fuel Moisture
    #[strum(props(long_name = "10-hr Fuel Moisture", units = "%"))]
    tenHour,
    /// 100-hr Fuel Moisture
    #[strum(props(long_name = "100-hr Fuel Moisture", units = "%"))]
    hundredHour,
    /// Rate of Spread
    #[strum(props(long_name = "Rate of Spread", units = "chains/h"))]
    ros,

    /// Input Temperature
    #[strum(props(long_name = "Input Temperature", units = "°F"))]
    temperature,
    /// Input Relative Humidity
    #[strum(props(long_name = "Input Relative Humidity", units = "%"))]
    humidity,
    /// Input Wind Speed
    #[strum(props(long_name = "Input Wind Speed", units = "mph"))]
    windSpeed,
}

pub struct Output {
    pub time: DateTime<Utc>,
    pub data: Array1<OutputElement>,
}

impl Output {
    pub fn new(time: DateTime<Utc>, data: Array1<OutputElement>) -> Self {
        Self { time, data }
    }

    pub fn get_array(&self, func: fn(&OutputElement) -> f32) -> Array1<f32> {
        let vec = self.data.par_iter().map(func).collect::<Vec<_>>();
        Array1::from_vec(vec)
    }

    pub fn get(&self, variable: &OutputVariableName) -> Option<Array1<f32>> {
        use OutputVariableName::*;
        match variable {
            emc => Some(self.get_array(|o| o.emc)),
            oneHour => Some(self.get_array(|o| o.one_hour)),
            tenHour => Some(self.get_array(|o| o.ten_hour)),
            hundredHour => Some(self.get_array(|o| o.hundred_hour)),
            ros => Some(self.get_array(|o| o.ros)),

            temperature => Some(self.get_array(|o| o.temperature_f)),
            humidity => Some(self.get_array(|o| o.humidity)),
            windSpeed => Some(self.get_array(|o| o.wind_mph)),
        }
    }
}
