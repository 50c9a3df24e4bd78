use serde_derive::{Deserialize, Serialize};

use super::{constants::*, functions::update_toward_equilibrium};

///Water content of the dead fuel classes, as percent of dry weight.
///Only the timelag update mutates it; each class relaxes toward the
///current equilibrium with its own response time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelMoisture {
    /// 1-hr fuels, < 1/4 inch diameter [%]
    pub one_hour: f32,
    /// 10-hr fuels, 1/4 to 1 inch diameter [%]
    pub ten_hour: f32,
    /// 100-hr fuels, 1 to 3 inch diameter [%]
    pub hundred_hour: f32,
}

impl FuelMoisture {
    pub fn new(one_hour: f32, ten_hour: f32, hundred_hour: f32) -> Self {
        FuelMoisture {
            one_hour,
            ten_hour,
            hundred_hour,
        }
    }

    ///Relax all three classes toward the equilibrium over the elapsed time
    pub fn update(&mut self, emc: f32, elapsed_hours: f32) {
        self.one_hour = update_toward_equilibrium(self.one_hour, emc, elapsed_hours, TAU_ONE_HOUR);
        self.ten_hour = update_toward_equilibrium(self.ten_hour, emc, elapsed_hours, TAU_TEN_HOUR);
        self.hundred_hour =
            update_toward_equilibrium(self.hundred_hour, emc, elapsed_hours, TAU_HUNDRED_HOUR);
    }
}
