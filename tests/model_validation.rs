//! Validation of the moisture and spread formulas against known scenarios
use approx::assert_relative_eq;

use fuelcast::models::input::WeatherSample;
use fuelcast::modules::moisture::config::MoistureModelConfig;
use fuelcast::modules::moisture::functions::{
    emc_polynomial, emc_simard, initial_moisture_from_rainfall, update_toward_equilibrium,
};
use fuelcast::modules::simulation::functions::{run_diurnal_for_key, run_multi_day};
use fuelcast::modules::spread::constants::ROS_MIN;
use fuelcast::modules::spread::functions::{
    chains_per_hour_to_feet_per_minute, get_ros, get_ros_for_key,
};
use fuelcast::modules::spread::models::FuelKind;

#[test]
fn emc_simard_reference_value() {
    // 70 °F / 50% RH, the dashboard default conditions
    let emc = emc_simard(70.0, 50.0);
    assert_relative_eq!(emc, 13.49, epsilon = 0.05);
}

#[test]
fn emc_variants_keep_their_own_bounds() {
    // extreme inputs exercise both clamps of both calibrations
    for rh in [0.0, 50.0, 100.0, 250.0, -10.0] {
        for temp in [-50.0, 70.0, 150.0] {
            let simard = emc_simard(temp, rh);
            assert!((0.1..=100.0).contains(&simard), "simard {simard}");
            let poly = emc_polynomial(temp, rh);
            assert!((1.0..=35.0).contains(&poly), "polynomial {poly}");
        }
    }
}

#[test]
fn timelag_update_reference_value() {
    // 10 + (20 - 10)·e^-1
    let updated = update_toward_equilibrium(20.0, 10.0, 10.0, 10.0);
    assert_relative_eq!(updated, 13.6788, epsilon = 1e-3);
}

#[test]
fn rainfall_bucket_boundaries() {
    let below = initial_moisture_from_rainfall(0.05);
    assert_eq!(
        (below.one_hour, below.ten_hour, below.hundred_hour),
        (18.0, 15.0, 14.0)
    );
    // the 0.10 boundary belongs to the wetter bucket
    let at_boundary = initial_moisture_from_rainfall(0.10);
    assert_eq!(
        (
            at_boundary.one_hour,
            at_boundary.ten_hour,
            at_boundary.hundred_hour
        ),
        (22.0, 17.0, 14.5)
    );
}

#[test]
fn ros_floor_and_conversion() {
    let preset = FuelKind::HardwoodDeadfall.preset();
    // soaked fuel on flat ground in still air
    let ros = get_ros(preset, 80.0, 0.0, 0.0);
    assert!(ros >= ROS_MIN);

    let feet_per_minute = chains_per_hour_to_feet_per_minute(ros);
    assert_relative_eq!(feet_per_minute, ros * 1.1, epsilon = 1e-5);
}

#[test]
fn unknown_fuel_key_is_signalled() {
    let result = get_ros_for_key("volcanic_scree", 9.0, 5.0, 0.0);
    assert!(result.is_err());
    assert_eq!(
        result.unwrap_err().to_string(),
        "invalid fuel type: volcanic_scree"
    );
}

#[test]
fn multi_day_simulation_single_step() {
    let config = MoistureModelConfig::default();
    let steps = vec![WeatherSample::new("Day 1", 90.0, 15.0, 10.0, 12.0)];
    let (daily, summary) = run_multi_day(8.0, 10.0, &steps, &config);

    assert_eq!(daily.len(), 1);
    let row = &daily[0];
    // hot and dry weather pulls both classes below their initial values
    assert!(row.one_hour < 8.0);
    assert!(row.ten_hour < 10.0);
    assert!(row.ten_hour > row.one_hour);
    assert_eq!(summary.final_one_hour, row.one_hour);
    assert_eq!(summary.final_ten_hour, row.ten_hour);
}

#[test]
fn diurnal_simulation_tracks_the_minimum() {
    let config = MoistureModelConfig::default();
    let (hourly, summary) = run_diurnal_for_key(
        95.0,
        15.0,
        70.0,
        60.0,
        0.05,
        10.0,
        "pasture_grass",
        &config,
    )
    .expect("known fuel key");

    assert_eq!(hourly.len(), 24);
    // constant day weather dries monotonically, so the minimum sits at the
    // end of the daytime block
    assert_eq!(summary.min_moisture_hour, 9);
    for row in &hourly {
        assert!(row.one_hour >= summary.min_moisture_value);
        assert!(row.ros <= summary.peak_ros);
    }
    // night recovery wets the fine fuels again
    assert!(summary.end_of_cycle.one_hour > summary.min_moisture_value);
}
