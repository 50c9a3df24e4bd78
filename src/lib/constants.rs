pub const NODATAVAL: f32 = -9999.0;

// Fallback values substituted for missing or non-finite weather inputs
pub const DEFAULT_TEMPERATURE: f32 = 70.0; // [°F]
pub const DEFAULT_HUMIDITY: f32 = 50.0; // [%]
pub const DEFAULT_WIND: f32 = 5.0; // [mph]
