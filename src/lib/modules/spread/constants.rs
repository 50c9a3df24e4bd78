// Reference conditions of the baseline rate of spread
pub const REFERENCE_MOISTURE: f32 = 9.0; // [%]
pub const REFERENCE_WIND: f32 = 5.0; // [mph]

// MOISTURE EFFECT
pub const MOISTURE_SCALE: f32 = 10.0; // [%]
pub const MOISTURE_EFF_MIN: f32 = 0.05;
pub const MOISTURE_EFF_MAX: f32 = 2.5;

// WIND EFFECT
pub const WIND_SCALE: f32 = 25.0; // [mph]
pub const WIND_EXP: f32 = 1.15;
pub const WIND_EFF_MIN: f32 = 0.5;
pub const WIND_EFF_MAX: f32 = 4.0;

// SLOPE EFFECT
pub const SLOPE_COEFF: f32 = 0.02; // [1/%]
pub const SLOPE_EFF_MIN: f32 = 1.0;
pub const SLOPE_EFF_MAX: f32 = 2.5;

// floor for the rate of spread [chains/h]
pub const ROS_MIN: f32 = 0.1;

// one chain is 66 feet
pub const FEET_PER_CHAIN: f32 = 66.0;
pub const MINUTES_PER_HOUR: f32 = 60.0;
