use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::*;
use crate::models::{
    input::{InputElement, WeatherSample},
    output::{DailyResult, DiurnalSummary, HourlyResult, MultiDaySummary, OutputElement},
};
use crate::modules::moisture::{
    config::MoistureModelConfig,
    constants::*,
    functions::{initial_moisture_from_rainfall, update_toward_equilibrium},
    models::FuelMoisture,
};
use crate::modules::spread::{
    functions::get_ros,
    models::{FuelKind, InvalidFuelError},
};

use super::constants::*;
use super::models::{MoistureStateElement, SitePropertiesElement};

// MULTI-DAY DRIVER

///Run the moisture model over an ordered forecast sequence. Every step
///depends on the previous one, so the fold is strictly sequential.
pub fn run_multi_day(
    initial_m1: f32,  // 1-hr moisture before the first step [%]
    initial_m10: f32, // 10-hr moisture before the first step [%]
    steps: &[WeatherSample],
    config: &MoistureModelConfig,
) -> (Vec<DailyResult>, MultiDaySummary) {
    let mut m1 = initial_m1;
    let mut m10 = initial_m10;
    let mut daily_results: Vec<DailyResult> = Vec::with_capacity(steps.len());
    let mut first_critical_day: Option<String> = None;

    for step in steps {
        let sample = step.sanitized();
        let emc = config.emc(sample.temperature_f, sample.humidity_pct);

        m1 = update_toward_equilibrium(m1, emc, sample.elapsed_hours, TAU_ONE_HOUR);
        m10 = update_toward_equilibrium(m10, emc, sample.elapsed_hours, TAU_TEN_HOUR);

        if first_critical_day.is_none() && m1 <= CRITICAL_ONE_HOUR {
            first_critical_day = Some(sample.label.clone());
        }

        daily_results.push(DailyResult {
            label: sample.label,
            temperature_f: sample.temperature_f,
            humidity_pct: sample.humidity_pct,
            emc,
            one_hour: m1,
            ten_hour: m10,
        });
    }

    let summary = MultiDaySummary {
        first_critical_day,
        final_one_hour: m1,
        final_ten_hour: m10,
    };
    (daily_results, summary)
}

// 24-HOUR CYCLE DRIVER

///Run the fixed day/night cycle: a daytime block at the day extremes
///followed by a nighttime block at the night extremes, one hour per step.
///Initial moisture comes from the rainfall heuristic; the spread estimate
///uses flat ground.
#[allow(clippy::too_many_arguments)]
pub fn run_diurnal(
    day_temp_f: f32,   // daytime temperature [°F]
    day_min_rh: f32,   // daytime minimum relative humidity [%]
    night_temp_f: f32, // nighttime temperature [°F]
    night_max_rh: f32, // nighttime maximum relative humidity [%]
    rain_inches: f32,  // 24h rainfall [inches]
    wind_mph: f32,     // wind speed, held for the whole cycle [mph]
    fuel: FuelKind,
    config: &MoistureModelConfig,
) -> (Vec<HourlyResult>, DiurnalSummary) {
    let preset = fuel.preset();
    let mut moisture = initial_moisture_from_rainfall(rain_inches);
    let wind = if wind_mph.is_finite() {
        f32::max(wind_mph, 0.0)
    } else {
        DEFAULT_WIND
    };

    let mut hourly: Vec<HourlyResult> = Vec::with_capacity(CYCLE_STEPS);
    for hour in 0..CYCLE_STEPS {
        let (temp_f, rh) = if hour < DAY_STEPS {
            (day_temp_f, day_min_rh)
        } else {
            (night_temp_f, night_max_rh)
        };
        let sample =
            WeatherSample::new(&format!("{:02}:00", hour), temp_f, rh, wind, STEP_HOURS).sanitized();

        let emc = config.emc(sample.temperature_f, sample.humidity_pct);
        moisture.update(emc, STEP_HOURS);
        let ros = get_ros(preset, moisture.one_hour, wind, 0.0);

        hourly.push(HourlyResult {
            hour,
            temperature_f: sample.temperature_f,
            humidity_pct: sample.humidity_pct,
            emc,
            one_hour: moisture.one_hour,
            ten_hour: moisture.ten_hour,
            hundred_hour: moisture.hundred_hour,
            ros,
        });
    }

    let summary = extract_diurnal_summary(&hourly);
    (hourly, summary)
}

///Run the day/night cycle from a fuel key string
#[allow(clippy::too_many_arguments)]
pub fn run_diurnal_for_key(
    day_temp_f: f32,
    day_min_rh: f32,
    night_temp_f: f32,
    night_max_rh: f32,
    rain_inches: f32,
    wind_mph: f32,
    fuel_key: &str,
    config: &MoistureModelConfig,
) -> Result<(Vec<HourlyResult>, DiurnalSummary), InvalidFuelError> {
    let fuel = FuelKind::from_key(fuel_key)?;
    Ok(run_diurnal(
        day_temp_f,
        day_min_rh,
        night_temp_f,
        night_max_rh,
        rain_inches,
        wind_mph,
        fuel,
        config,
    ))
}

fn extract_diurnal_summary(hourly: &[HourlyResult]) -> DiurnalSummary {
    let m1_series: Array1<f32> = hourly.iter().map(|h| h.one_hour).collect();
    let min_moisture_hour = m1_series.argmin().unwrap_or(0);
    let min_moisture_value = m1_series[min_moisture_hour];

    let peak_ros = hourly
        .iter()
        .map(|h| h.ros)
        .reduce(f32::max)
        .unwrap_or(NODATAVAL);

    let end_of_day = &hourly[END_OF_DAY_HOUR];
    let end_of_cycle = &hourly[CYCLE_STEPS - 1];

    DiurnalSummary {
        min_moisture_hour,
        min_moisture_value,
        peak_ros,
        end_of_day: FuelMoisture::new(
            end_of_day.one_hour,
            end_of_day.ten_hour,
            end_of_day.hundred_hour,
        ),
        end_of_cycle: FuelMoisture::new(
            end_of_cycle.one_hour,
            end_of_cycle.ten_hour,
            end_of_cycle.hundred_hour,
        ),
    }
}

// BATCH UPDATE

///Advance the moisture state of a single site, keeping the current state
///when the weather inputs are missing
pub fn update_site_fn(
    state: &mut MoistureStateElement,
    input: &InputElement,
    config: &MoistureModelConfig,
) {
    let temperature = input.temperature_f;
    let humidity = input.humidity;

    if temperature == NODATAVAL || humidity == NODATAVAL {
        // keep the current moisture if we don't have all the data
        return;
    }

    let h = humidity.clamp(0.0, 100.0);
    let dt = if input.elapsed_hours == NODATAVAL || input.elapsed_hours <= 0.0 {
        STEP_HOURS
    } else {
        input.elapsed_hours
    };

    let emc = config.emc(temperature, h);
    state.moisture.update(emc, dt);
}

///Compute the output of a single site from its state, its properties and
///the current weather
pub fn get_output_fn(
    state: &MoistureStateElement,
    props: &SitePropertiesElement,
    input: &InputElement,
    config: &MoistureModelConfig,
) -> OutputElement {
    let wind = if input.wind_mph == NODATAVAL {
        DEFAULT_WIND
    } else {
        f32::max(input.wind_mph, 0.0)
    };

    let emc = if input.temperature_f == NODATAVAL || input.humidity == NODATAVAL {
        NODATAVAL
    } else {
        config.emc(input.temperature_f, input.humidity.clamp(0.0, 100.0))
    };

    let ros = get_ros(
        props.fuel.preset(),
        state.moisture.one_hour,
        wind,
        props.slope_pct,
    );

    OutputElement {
        emc,
        one_hour: state.moisture.one_hour,
        ten_hour: state.moisture.ten_hour,
        hundred_hour: state.moisture.hundred_hour,
        ros,
        temperature_f: input.temperature_f,
        humidity: input.humidity,
        wind_mph: wind,
    }
}
