use chrono::prelude::*;
use itertools::izip;
use ndarray::{Array1, Zip};

use crate::models::{input::Input, output::Output};
use crate::modules::moisture::{
    config::MoistureModelConfig, functions::initial_moisture_from_rainfall, models::FuelMoisture,
};
use crate::modules::spread::models::FuelKind;

use super::functions::{get_output_fn, update_site_fn};

// SITE PROPERTIES

#[derive(Debug)]
pub struct SitePropertiesElement {
    pub lon: f32,
    pub lat: f32,
    /// terrain slope [%]
    pub slope_pct: f32,
    /// dominant fuel bed of the site
    pub fuel: FuelKind,
}

#[derive(Debug)]
pub struct SiteProperties {
    pub data: Array1<SitePropertiesElement>,
    pub len: usize,
}

pub struct SitePropertiesContainer {
    pub lons: Vec<f32>,
    pub lats: Vec<f32>,
    pub slopes: Vec<f32>,
    pub fuels: Vec<FuelKind>,
}

impl SiteProperties {
    pub fn new(props: SitePropertiesContainer) -> Self {
        let data: Array1<SitePropertiesElement> =
            izip!(props.lons, props.lats, props.slopes, props.fuels)
                .map(|(lon, lat, slope_pct, fuel)| SitePropertiesElement {
                    lon,
                    lat,
                    slope_pct,
                    fuel,
                })
                .collect();

        let len = data.len();
        Self { data, len }
    }

    pub fn get_coords(&self) -> (Vec<f32>, Vec<f32>) {
        let lats: Vec<f32> = self.data.iter().map(|p| p.lat).collect();
        let lons: Vec<f32> = self.data.iter().map(|p| p.lon).collect();
        (lats, lons)
    }
}

// WARM STATE

///Moisture carried over from a previous run of the model for one site
#[derive(Debug, Clone)]
pub struct WarmState {
    pub moisture: FuelMoisture,
}

impl Default for WarmState {
    fn default() -> Self {
        WarmState {
            // dry-start moisture, same as a rain-free 24h window
            moisture: initial_moisture_from_rainfall(0.0),
        }
    }
}

// STATE

#[derive(Debug)]
pub struct MoistureStateElement {
    pub moisture: FuelMoisture,
}

#[derive(Debug)]
pub struct MoistureState {
    pub time: DateTime<Utc>,
    pub data: Array1<MoistureStateElement>,
    len: usize,
    config: MoistureModelConfig,
}

impl MoistureState {
    /// Create a new state.
    pub fn new(
        warm_state: &[WarmState],
        time: &DateTime<Utc>,
        config: MoistureModelConfig,
    ) -> MoistureState {
        let data = Array1::from_vec(
            warm_state
                .iter()
                .map(|w| MoistureStateElement {
                    moisture: w.moisture,
                })
                .collect(),
        );

        MoistureState {
            time: *time,
            data,
            len: warm_state.len(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update_state(&mut self, input: &Input) {
        let config = &self.config;
        Zip::from(&mut self.data)
            .and(&input.data)
            .par_for_each(|state, input_data| update_site_fn(state, input_data, config));
    }

    pub fn get_output(&self, props: &SiteProperties, input: &Input) -> Output {
        let config = &self.config;
        let output_data = Zip::from(&self.data)
            .and(&props.data)
            .and(&input.data)
            .par_map_collect(|state, props_data, input_data| {
                get_output_fn(state, props_data, input_data, config)
            });

        Output::new(self.time, output_data)
    }

    /// Update the moisture state of all the sites
    pub fn update(&mut self, input: &Input) {
        let new_time = &input.time;
        self.time = *new_time;
        self.update_state(input);
    }

    pub fn output(&self, props: &SiteProperties, input: &Input) -> Output {
        self.get_output(props, input)
    }
}
