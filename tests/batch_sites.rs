//! Batch evaluation across independent sites and the dashboard wire format
use chrono::{TimeZone, Utc};
use ndarray::Array1;

use fuelcast::constants::NODATAVAL;
use fuelcast::models::input::{Input, InputElement, WeatherSample};
use fuelcast::models::output::{DailyResult, OutputVariableName};
use fuelcast::modules::moisture::config::MoistureModelConfig;
use fuelcast::modules::simulation::models::{
    MoistureState, SiteProperties, SitePropertiesContainer, WarmState,
};
use fuelcast::modules::spread::models::FuelKind;

fn three_sites() -> SiteProperties {
    SiteProperties::new(SitePropertiesContainer {
        lons: vec![-120.5, -121.0, -121.5],
        lats: vec![38.5, 39.0, 39.5],
        slopes: vec![0.0, 15.0, 40.0],
        fuels: vec![
            FuelKind::PastureGrass,
            FuelKind::LeafLitter,
            FuelKind::HardwoodDeadfall,
        ],
    })
}

#[test]
fn batch_update_is_per_site() {
    let time = Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap();
    let props = three_sites();
    let warm_states = vec![WarmState::default(); props.len];
    let mut state = MoistureState::new(&warm_states, &time, MoistureModelConfig::default());
    assert_eq!(state.len(), 3);

    // site 1 has no humidity report and must keep its warm-state moisture
    let input = Input {
        time,
        data: Array1::from_vec(vec![
            InputElement {
                temperature_f: 95.0,
                humidity: 12.0,
                wind_mph: 15.0,
                elapsed_hours: 1.0,
                ..Default::default()
            },
            InputElement {
                temperature_f: 95.0,
                humidity: NODATAVAL,
                wind_mph: 15.0,
                elapsed_hours: 1.0,
                ..Default::default()
            },
            InputElement {
                temperature_f: 60.0,
                humidity: 90.0,
                wind_mph: 5.0,
                elapsed_hours: 1.0,
                ..Default::default()
            },
        ]),
    };
    state.update(&input);

    let initial = WarmState::default().moisture;
    let dried = &state.data[0];
    let untouched = &state.data[1];
    let wetted = &state.data[2];
    assert!(dried.moisture.one_hour < initial.one_hour);
    assert_eq!(untouched.moisture, initial);
    assert!(wetted.moisture.one_hour > initial.one_hour);

    let output = state.output(&props, &input);
    let ros = output.get(&OutputVariableName::ros).expect("ros variable");
    assert_eq!(ros.len(), 3);
    for value in ros.iter() {
        assert!(*value >= 0.1);
    }
    // missing humidity is echoed as nodata, not invented
    let humidity = output
        .get(&OutputVariableName::humidity)
        .expect("humidity variable");
    assert_eq!(humidity[1], NODATAVAL);
}

#[test]
fn site_coords_round_trip() {
    let props = three_sites();
    let (lats, lons) = props.get_coords();
    assert_eq!(lats, vec![38.5, 39.0, 39.5]);
    assert_eq!(lons, vec![-120.5, -121.0, -121.5]);
}

#[test]
fn forecast_samples_take_their_label_from_the_valid_time() {
    let time = Utc.with_ymd_and_hms(2026, 8, 7, 18, 0, 0).unwrap();
    let sample = WeatherSample::from_forecast(&time, 91.0, 20.0, 10.0, 24.0);
    assert_eq!(sample.label, "Fri 07 Aug");
    assert_eq!(sample.elapsed_hours, 24.0);
}

#[test]
fn results_serialize_with_stable_keys() {
    let row = DailyResult {
        label: "Mon 03 Aug".to_string(),
        temperature_f: 91.0,
        humidity_pct: 18.0,
        emc: 4.6,
        one_hour: 5.1,
        ten_hour: 7.9,
    };
    let value = serde_json::to_value(&row).expect("serializable row");
    for key in [
        "label",
        "temperature_f",
        "humidity_pct",
        "emc",
        "one_hour",
        "ten_hour",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }

    let fuel = serde_json::to_value(FuelKind::PastureGrass).expect("serializable fuel");
    assert_eq!(fuel, serde_json::json!("pasture_grass"));
}
