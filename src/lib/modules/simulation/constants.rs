// Fixed shape of the synthetic day/night cycle
pub const DAY_STEPS: usize = 10;
pub const NIGHT_STEPS: usize = 14;
pub const CYCLE_STEPS: usize = DAY_STEPS + NIGHT_STEPS;
pub const STEP_HOURS: f32 = 1.0; // [h]

// last step of the daytime block
pub const END_OF_DAY_HOUR: usize = DAY_STEPS - 1;
