//! Unit coverage for axis scorers and the evaluation facade.
#![expect(
    clippy::float_arithmetic,
    reason = "tests compare floating-point scores against tolerances"
)]

use rstest::{fixture, rstest};
use swellcast_core::test_support::sample_spot;
use swellcast_core::{
    Axis, AxisScorer, BreakType, ObservationSample, SpotProfile, TideWindow, WeightProfile,
};

use crate::tuning::{
    BEACH_SIZE_CAP_M, POINT_SIZE_CAP_M, REEF_SIZE_CAP_M, WIND_KILL_SPEED_MS,
};
use crate::{
    DirectionScorer, RatingInputs, TideScorer, WindScorer, direction_quality, evaluate,
    period_quality, rate_forecast, size_quality, tide_quality, wind_quality,
};

const TOLERANCE: f64 = 0.005;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected approximately {expected}, got {actual}"
    );
}

#[fixture]
fn spot() -> SpotProfile {
    sample_spot()
}

#[fixture]
fn clean_sample() -> ObservationSample {
    ObservationSample {
        hs: 1.5,
        tp: 13.0,
        dp: 215.0,
        wind: 3.0,
        wind_dir: 90.0,
        tide: None,
    }
}

#[rstest]
fn rates_clean_beach_morning(spot: SpotProfile, clean_sample: ObservationSample) {
    let rated = evaluate(&RatingInputs::new(&clean_sample, &spot), None);
    let scores: Vec<_> = rated
        .components
        .iter()
        .map(|component| (component.axis, component.score))
        .collect();
    let expected = [
        (Axis::Wind, 1.0 - 3.0 / WIND_KILL_SPEED_MS),
        (Axis::Dir, 1.0),
        (Axis::Period, 1.0),
        (Axis::Size, 0.6),
        (Axis::Tide, 1.0),
    ];
    for ((axis, score), (expected_axis, expected_score)) in scores.into_iter().zip(expected) {
        assert_eq!(axis, expected_axis);
        assert_close(score, expected_score);
    }
    assert_eq!(
        rated.reasons,
        ["offshore or light winds", "favourable swell direction", "good period"]
    );
}

#[rstest]
fn component_labels_follow_axis_order(spot: SpotProfile, clean_sample: ObservationSample) {
    let rated = evaluate(&RatingInputs::new(&clean_sample, &spot), None);
    let labels: Vec<_> = rated
        .components
        .iter()
        .map(|component| component.label.as_str())
        .collect();
    assert_eq!(labels, ["Wind", "Swell direction", "Period", "Size", "Tide"]);
}

#[rstest]
fn aggregate_absent_without_profile(spot: SpotProfile, clean_sample: ObservationSample) {
    let rated = evaluate(&RatingInputs::new(&clean_sample, &spot), None);
    assert!(rated.aggregate.is_none());
    let json = serde_json::to_value(&rated).expect("serialise rated result");
    assert!(json["aggregate"].is_null());
}

#[rstest]
fn empty_profile_still_aggregates(spot: SpotProfile, clean_sample: ObservationSample) {
    let rated = evaluate(&RatingInputs::new(&clean_sample, &spot), Some(&WeightProfile::new()));
    let aggregate = rated.aggregate.expect("empty profile aggregates");
    assert_eq!(aggregate.score, 10.0);
}

#[rstest]
fn onshore_gale_floors_wind_weighted_rating(spot: SpotProfile) {
    let sample = ObservationSample {
        wind: 20.0,
        wind_dir: 270.0,
        ..ObservationSample::default()
    };
    let weights = WeightProfile::new().with_weight(Axis::Wind, 1.0);
    let rated = evaluate(&RatingInputs::new(&sample, &spot), Some(&weights));
    assert_eq!(rated.components[0].score, 0.0);
    assert_eq!(rated.aggregate.map(|aggregate| aggregate.score), Some(0.0));
}

#[rstest]
fn balanced_weights_match_geometric_mean(spot: SpotProfile, clean_sample: ObservationSample) {
    let weights = WeightProfile::new()
        .with_weight(Axis::Dir, 1.0)
        .with_weight(Axis::Size, 1.0);
    let rated = evaluate(&RatingInputs::new(&clean_sample, &spot), Some(&weights));
    let aggregate = rated.aggregate.expect("profile aggregates");
    // sqrt(1.0 * 0.6) = 0.7746 -> 7.7
    assert_close(aggregate.score, 7.7);
    assert_eq!(aggregate.weights.weight(Axis::Dir), Some(0.5));
    assert_eq!(aggregate.weights.weight(Axis::Wind), Some(0.0));
}

#[rstest]
#[case::calm_offshore(0.0, 90.0, 1.0)]
#[case::kill_speed_offshore(18.0, 90.0, 0.0)]
#[case::above_kill_speed(25.0, 90.0, 0.0)]
#[case::dead_onshore(0.0, 270.0, 0.0)]
#[case::edge_of_dead_zone(0.0, 240.0, 0.0)]
#[case::cross_shore(0.0, 0.0, 0.4)]
#[case::half_speed_offshore(9.0, 90.0, 0.5)]
fn wind_quality_cases(#[case] speed: f64, #[case] wind_dir: f64, #[case] expected: f64) {
    assert_close(wind_quality(speed, wind_dir, 270.0), expected);
}

#[rstest]
fn wind_matches_coast_bearing_across_north(spot: SpotProfile) {
    // A north-facing coast is offshore with southerlies.
    assert_close(wind_quality(0.0, 180.0, 0.0), 1.0);
    assert_close(wind_quality(0.0, 0.0, 0.0), 0.0);
    let sample = ObservationSample {
        wind_dir: 90.0,
        ..ObservationSample::default()
    };
    assert_eq!(WindScorer.score(&sample, &spot), 1.0);
}

#[rstest]
#[case::centre(215.0, 1.0)]
#[case::window_edge(240.0, 1.0 - 25.0 / 60.0)]
#[case::just_outside(250.0, 1.0 - 35.0 / 120.0)]
#[case::opposite(35.0, 0.0)]
fn direction_quality_cases(#[case] dp: f64, #[case] expected: f64) {
    assert_close(direction_quality(dp, 190.0, 240.0), expected);
}

#[rstest]
fn direction_handles_window_across_north() {
    // Window 350..=30 is centred on 10.
    assert_close(direction_quality(10.0, 350.0, 30.0), 1.0);
    assert_close(direction_quality(370.0, 350.0, 30.0), 1.0);
    assert_close(direction_quality(355.0, 350.0, 30.0), 1.0 - 15.0 / 60.0);
}

#[rstest]
#[case(400.0, 0.0, 40.0, 0.0)]
#[case(-170.0, 240.0, 190.0, 240.0)]
#[case(190.0, 600.0, 190.0, 240.0)]
fn direction_normalises_out_of_range_bounds(
    #[case] min: f64,
    #[case] max: f64,
    #[case] normalised_min: f64,
    #[case] normalised_max: f64,
) {
    for dp in [0.0, 20.0, 100.0, 200.0, 215.0, 300.0] {
        assert_close(
            direction_quality(dp, min, max),
            direction_quality(dp, normalised_min, normalised_max),
        );
    }
    assert_close(direction_quality(200.0, 400.0, 0.0), 1.0);
}

#[rstest]
fn full_circle_window_treats_every_direction_as_inside(spot: SpotProfile) {
    let mut open = spot;
    open.swell_window = swellcast_core::SwellWindow::new(100.0, 100.0).expect("valid window");
    let sample = ObservationSample {
        dp: 160.0,
        ..ObservationSample::default()
    };
    assert_close(DirectionScorer.score(&sample, &open), 0.0);
    let near = ObservationSample {
        dp: 130.0,
        ..ObservationSample::default()
    };
    // Centre of a full-circle window starting at 100 is 100; inside falloff applies.
    assert_close(DirectionScorer.score(&near, &open), 0.5);
}

#[rstest]
#[case::below_minimum(5.0, 0.0)]
#[case::at_minimum(8.0, 0.0)]
#[case::midway(10.5, 0.5)]
#[case::ideal(13.0, 1.0)]
#[case::beyond_ideal(18.0, 1.0)]
fn period_quality_ramps(#[case] tp: f64, #[case] expected: f64) {
    assert_close(period_quality(tp, 8.0, 13.0), expected);
}

#[rstest]
fn period_span_never_collapses() {
    assert_close(period_quality(10.5, 10.0, 10.0), 0.5);
    assert_close(period_quality(11.0, 12.0, 9.0), 0.0);
}

#[rstest]
#[case(BreakType::Beach, BEACH_SIZE_CAP_M)]
#[case(BreakType::Point, POINT_SIZE_CAP_M)]
#[case(BreakType::Reef, REEF_SIZE_CAP_M)]
fn size_saturates_at_break_cap(#[case] break_type: BreakType, #[case] cap: f64) {
    assert_close(size_quality(cap / 2.0, break_type), 0.5);
    assert_eq!(size_quality(cap, break_type), 1.0);
    assert_eq!(size_quality(cap * 3.0, break_type), 1.0);
    assert_eq!(size_quality(-1.0, break_type), 0.0);
}

#[rstest]
#[case::ideal(Some(1.0), 1.0)]
#[case::lower_edge(Some(0.5), 0.0)]
#[case::halfway(Some(0.75), 0.75)]
#[case::outside(Some(1.6), 0.0)]
#[case::missing(None, 1.0)]
fn tide_quality_with_window(#[case] tide: Option<f64>, #[case] expected: f64) {
    let window = TideWindow::new(0.5, Some(1.0), 1.5).expect("valid tide window");
    assert_close(tide_quality(tide, Some(&window)), expected);
}

#[rstest]
fn tide_defaults_ideal_to_midpoint() {
    let window = TideWindow::new(0.0, None, 2.0).expect("valid tide window");
    assert_close(tide_quality(Some(1.0), Some(&window)), 1.0);
    assert_close(tide_quality(Some(1.5), Some(&window)), 0.75);
}

#[rstest]
fn zero_width_tide_window_uses_minimum_half_range() {
    let window = TideWindow::new(1.0, None, 1.0).expect("valid tide window");
    assert_eq!(tide_quality(Some(1.0), Some(&window)), 1.0);
    assert_eq!(tide_quality(Some(1.05), Some(&window)), 0.0);
}

#[rstest]
fn tide_is_neutral_without_spot_window(spot: SpotProfile) {
    let sample = ObservationSample {
        tide: Some(4.2),
        ..ObservationSample::default()
    };
    assert_eq!(TideScorer.score(&sample, &spot), 1.0);
}

#[rstest]
fn tide_outside_window_is_explained(spot: SpotProfile, clean_sample: ObservationSample) {
    let tidal = spot.with_tide_window(TideWindow::new(0.5, None, 1.5).expect("valid tide window"));
    let sample = ObservationSample {
        tide: Some(3.0),
        ..clean_sample
    };
    let rated = evaluate(&RatingInputs::new(&sample, &tidal), None);
    assert_eq!(rated.components[4].score, 0.0);
    assert_eq!(rated.reasons.last().map(String::as_str), Some("tide out of window"));
}

#[rstest]
fn non_finite_readings_score_within_bounds(spot: SpotProfile) {
    let sample = ObservationSample {
        hs: f64::NAN,
        tp: f64::INFINITY,
        dp: f64::NAN,
        wind: f64::NEG_INFINITY,
        wind_dir: f64::NAN,
        tide: Some(f64::NAN),
    };
    let rated = evaluate(&RatingInputs::new(&sample, &spot), Some(&WeightProfile::new()));
    for component in &rated.components {
        assert!(
            (0.0..=1.0).contains(&component.score),
            "{} out of range: {}",
            component.axis,
            component.score
        );
    }
}

#[rstest]
fn rate_forecast_preserves_hour_order(spot: SpotProfile, clean_sample: ObservationSample) {
    let hours = [
        swellcast_core::ForecastHour::new("2024-06-01T05:00", clean_sample),
        swellcast_core::ForecastHour::new("2024-06-01T06:00", ObservationSample::default()),
    ];
    let rated = rate_forecast(&spot, &hours, None);
    let times: Vec<_> = rated.iter().map(|hour| hour.time.as_str()).collect();
    assert_eq!(times, ["2024-06-01T05:00", "2024-06-01T06:00"]);
    assert_eq!(rated.first().map(|hour| hour.sample), Some(clean_sample));
}

#[rstest]
fn rated_hour_flattens_result(spot: SpotProfile, clean_sample: ObservationSample) {
    let hours = [swellcast_core::ForecastHour::new("2024-06-01T05:00", clean_sample)];
    let rated = rate_forecast(&spot, &hours, None);
    let json = serde_json::to_value(&rated).expect("serialise rated hours");
    let hour = &json[0];
    assert_eq!(hour["time"], "2024-06-01T05:00");
    assert_eq!(hour["sample"]["windDir"], 90.0);
    assert_eq!(hour["components"][0]["axis"], "wind");
    assert!(hour["reasons"].is_array());
}
