use super::{
    constants::*,
    models::{FuelKind, FuelPreset, InvalidFuelError},
};

///Moisture effect on fire propagation. Moisture above the reference
///suppresses spread exponentially, moisture below it accelerates spread,
///clamped on both sides.
pub fn get_moisture_effect(
    preset: &FuelPreset,
    dffm_1h: f32, // 1-hr fuel moisture [%]
) -> f32 {
    let effect = f32::exp(-preset.moisture_sensitivity * (dffm_1h - REFERENCE_MOISTURE) / MOISTURE_SCALE);
    effect.clamp(MOISTURE_EFF_MIN, MOISTURE_EFF_MAX)
}

///Wind effect on fire propagation. Wind below the reference speed adds
///nothing; above it the contribution grows superlinearly, scaled by the
///wind sensitivity of the fuel.
pub fn get_wind_effect(
    preset: &FuelPreset,
    wind_mph: f32, // wind speed [mph]
) -> f32 {
    let excess = f32::max(0.0, wind_mph - REFERENCE_WIND) / WIND_SCALE;
    let effect = 1.0 + preset.wind_sensitivity * f32::powf(excess, WIND_EXP);
    effect.clamp(WIND_EFF_MIN, WIND_EFF_MAX)
}

///Slope effect on fire propagation, linear and fuel independent
pub fn get_slope_effect(
    slope_pct: f32, // slope [%]
) -> f32 {
    (1.0 + SLOPE_COEFF * slope_pct).clamp(SLOPE_EFF_MIN, SLOPE_EFF_MAX)
}

///Rate of spread of a fuel bed at the given moisture, wind and slope,
///never below the floor value
pub fn get_ros(
    preset: &FuelPreset,
    one_hour_moisture: f32, // 1-hr fuel moisture [%]
    wind_mph: f32,          // wind speed [mph]
    slope_pct: f32,         // slope [%]
) -> f32 {
    let moisture_effect = get_moisture_effect(preset, one_hour_moisture);
    let wind_effect = get_wind_effect(preset, wind_mph);
    let slope_effect = get_slope_effect(slope_pct);

    f32::max(
        ROS_MIN,
        preset.base_ros * moisture_effect * wind_effect * slope_effect,
    )
}

///Rate of spread from a fuel key string; unknown keys are an error,
///never a default estimate
pub fn get_ros_for_key(
    key: &str,
    one_hour_moisture: f32, // 1-hr fuel moisture [%]
    wind_mph: f32,          // wind speed [mph]
    slope_pct: f32,         // slope [%]
) -> Result<f32, InvalidFuelError> {
    let fuel = FuelKind::from_key(key)?;
    Ok(get_ros(fuel.preset(), one_hour_moisture, wind_mph, slope_pct))
}

///Convert a spread rate from chains per hour to feet per minute
pub fn chains_per_hour_to_feet_per_minute(chains_per_hour: f32) -> f32 {
    chains_per_hour * FEET_PER_CHAIN / MINUTES_PER_HOUR
}
