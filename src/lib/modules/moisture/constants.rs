// EMC CONSTANTS
// Simard-style three-term fit
pub const EMC_A1: f32 = 0.942;
pub const EMC_A2: f32 = 0.679;
pub const EMC_A3: f32 = 11.0;
pub const EMC_A4: f32 = 0.18;
pub const EMC_A5: f32 = 0.115;
pub const EMC_REF_TEMP: f32 = 21.1; // [°C]
pub const EMC_MIN: f32 = 0.1; // [%]
pub const EMC_MAX: f32 = 100.0; // [%]

// Simplified polynomial fit
pub const EMC_P1: f32 = 4.0;
pub const EMC_P2: f32 = 0.2;
pub const EMC_P3: f32 = 0.5;
pub const EMC_P4: f32 = 0.01;
pub const EMC_POLY_MIN: f32 = 1.0; // [%]
pub const EMC_POLY_MAX: f32 = 35.0; // [%]

// TIMELAG CONSTANTS
// response time of each dead fuel class [h]
pub const TAU_ONE_HOUR: f32 = 1.0;
pub const TAU_TEN_HOUR: f32 = 10.0;
pub const TAU_HUNDRED_HOUR: f32 = 100.0;

// 1-hr moisture at or below this value marks critical fire weather [%]
pub const CRITICAL_ONE_HOUR: f32 = 6.0;

// RAINFALL CONSTANTS
// 24h rainfall thresholds for the initial moisture buckets [inches]
pub const RAIN_LIGHT: f32 = 0.10;
pub const RAIN_MODERATE: f32 = 0.30;
pub const RAIN_HEAVY: f32 = 0.75;
// calibration triples (1-hr, 10-hr, 100-hr) [%]
pub const MOISTURE_DRY: (f32, f32, f32) = (18.0, 15.0, 14.0);
pub const MOISTURE_LIGHT: (f32, f32, f32) = (22.0, 17.0, 14.5);
pub const MOISTURE_MODERATE: (f32, f32, f32) = (27.0, 21.0, 16.0);
pub const MOISTURE_HEAVY: (f32, f32, f32) = (33.0, 26.0, 19.0);
