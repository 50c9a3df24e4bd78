use crate::modules::functions::fahrenheit_to_celsius;

use super::{constants::*, models::FuelMoisture};

///Equilibrium moisture content from the Simard-style three-term fit.
///Humidity is clamped to [0, 100] and the result to [EMC_MIN, EMC_MAX];
///a non-finite result collapses to the floor.
pub fn emc_simard(
    temp_f: f32,  // air temperature [°F]
    rh_pct: f32,  // relative humidity [%]
) -> f32 {
    let h = rh_pct.clamp(0.0, 100.0);
    let t = fahrenheit_to_celsius(temp_f);

    let emc = EMC_A1 * f32::powf(h, EMC_A2)
        + EMC_A3 * f32::exp((h - 100.0) / 10.0)
        + EMC_A4 * (EMC_REF_TEMP - t) * (1.0 - f32::exp(-EMC_A5 * h));

    if !emc.is_finite() {
        return EMC_MIN;
    }
    emc.clamp(EMC_MIN, EMC_MAX)
}

///Equilibrium moisture content from the simplified polynomial fit,
///clamped to [EMC_POLY_MIN, EMC_POLY_MAX]
pub fn emc_polynomial(
    temp_f: f32,  // air temperature [°F]
    rh_pct: f32,  // relative humidity [%]
) -> f32 {
    let h = rh_pct.clamp(0.0, 100.0);
    let t = fahrenheit_to_celsius(temp_f);
    let r = h / 100.0;

    let emc = r * (EMC_P1 + EMC_P2 * t) + r * r * (EMC_P3 + EMC_P4 * t);

    if !emc.is_finite() {
        return EMC_POLY_MIN;
    }
    emc.clamp(EMC_POLY_MIN, EMC_POLY_MAX)
}

///Relax a moisture value toward the equilibrium over the elapsed time.
///The same exponential handles drying and wetting. A non-positive tau is
///treated as instantaneous equilibrium and returns the emc directly;
///negative elapsed time is clamped to zero.
pub fn update_toward_equilibrium(
    prev_moisture: f32, // moisture before the step [%]
    emc: f32,           // equilibrium moisture content [%]
    elapsed_hours: f32, // elapsed time [h]
    tau_hours: f32,     // timelag constant [h]
) -> f32 {
    if tau_hours <= 0.0 {
        return emc;
    }
    let dt = if elapsed_hours.is_finite() {
        f32::max(elapsed_hours, 0.0)
    } else {
        0.0
    };

    emc + (prev_moisture - emc) * f32::exp(-dt / tau_hours)
}

///Initial dead fuel moisture from the rainfall of the last 24 hours.
///Step function on the rainfall thresholds; negative or non-finite
///rain counts as no rain.
pub fn initial_moisture_from_rainfall(
    rain_inches: f32, // 24h rainfall [inches]
) -> FuelMoisture {
    let rain = if rain_inches.is_finite() {
        f32::max(rain_inches, 0.0)
    } else {
        0.0
    };

    let (one_hour, ten_hour, hundred_hour) = if rain < RAIN_LIGHT {
        MOISTURE_DRY
    } else if rain < RAIN_MODERATE {
        MOISTURE_LIGHT
    } else if rain < RAIN_HEAVY {
        MOISTURE_MODERATE
    } else {
        MOISTURE_HEAVY
    };

    FuelMoisture {
        one_hour,
        ten_hour,
        hundred_hour,
    }
}
