//! Behaviour coverage for rating single forecast hours.
#![expect(
    clippy::expect_used,
    reason = "behaviour steps fail fast when fixtures are missing"
)]

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use swellcast_core::test_support::sample_spot;
use swellcast_core::{Axis, ObservationSample, SpotProfile, WeightProfile};
use swellcast_scorer::{
    LegacyRating, RatedResult, RatingInputs, evaluate, legacy_weight_profile, score_forecast,
};

#[fixture]
fn spot() -> RefCell<Option<SpotProfile>> {
    RefCell::new(None)
}

#[fixture]
fn sample() -> RefCell<ObservationSample> {
    RefCell::new(ObservationSample::default())
}

#[fixture]
fn rated() -> RefCell<Option<RatedResult>> {
    RefCell::new(None)
}

#[fixture]
fn legacy() -> RefCell<Option<LegacyRating>> {
    RefCell::new(None)
}

fn rate(
    spot: &RefCell<Option<SpotProfile>>,
    sample: &RefCell<ObservationSample>,
    rated: &RefCell<Option<RatedResult>>,
    weights: Option<&WeightProfile>,
) {
    let spot_ref = spot.borrow();
    let profile = spot_ref.as_ref().expect("spot configured");
    let observation = sample.borrow();
    rated.replace(Some(evaluate(
        &RatingInputs::new(&observation, profile),
        weights,
    )));
}

fn aggregate_score(rated: &RefCell<Option<RatedResult>>) -> f64 {
    rated
        .borrow()
        .as_ref()
        .expect("hour rated")
        .aggregate
        .as_ref()
        .expect("aggregate reported")
        .score
}

#[given("a west-facing beach break with a south-west swell window")]
fn given_beach(#[from(spot)] spot: &RefCell<Option<SpotProfile>>) {
    spot.replace(Some(sample_spot()));
}

#[given("a clean south-west groundswell with a light easterly")]
fn given_clean_swell(#[from(sample)] sample: &RefCell<ObservationSample>) {
    sample.replace(ObservationSample {
        hs: 1.5,
        tp: 13.0,
        dp: 215.0,
        wind: 3.0,
        wind_dir: 90.0,
        tide: None,
    });
}

#[given("a strong onshore westerly")]
fn given_onshore_gale(#[from(sample)] sample: &RefCell<ObservationSample>) {
    sample.replace(ObservationSample {
        hs: 1.0,
        tp: 9.0,
        dp: 230.0,
        wind: 20.0,
        wind_dir: 270.0,
        tide: None,
    });
}

#[when("I rate the hour without weights")]
fn when_rate_unweighted(
    #[from(spot)] spot: &RefCell<Option<SpotProfile>>,
    #[from(sample)] sample: &RefCell<ObservationSample>,
    #[from(rated)] rated: &RefCell<Option<RatedResult>>,
) {
    rate(spot, sample, rated, None);
}

#[when("I rate the hour weighting only wind")]
fn when_rate_wind_only(
    #[from(spot)] spot: &RefCell<Option<SpotProfile>>,
    #[from(sample)] sample: &RefCell<ObservationSample>,
    #[from(rated)] rated: &RefCell<Option<RatedResult>>,
) {
    let weights = WeightProfile::new().with_weight(Axis::Wind, 1.0);
    rate(spot, sample, rated, Some(&weights));
}

#[when("I rate the hour with an empty weight profile")]
fn when_rate_empty_profile(
    #[from(spot)] spot: &RefCell<Option<SpotProfile>>,
    #[from(sample)] sample: &RefCell<ObservationSample>,
    #[from(rated)] rated: &RefCell<Option<RatedResult>>,
) {
    rate(spot, sample, rated, Some(&WeightProfile::new()));
}

#[when("I rate the hour with the legacy wrapper")]
fn when_rate_legacy(
    #[from(spot)] spot: &RefCell<Option<SpotProfile>>,
    #[from(sample)] sample: &RefCell<ObservationSample>,
    #[from(rated)] rated: &RefCell<Option<RatedResult>>,
    #[from(legacy)] legacy: &RefCell<Option<LegacyRating>>,
) {
    {
        let spot_ref = spot.borrow();
        let profile = spot_ref.as_ref().expect("spot configured");
        let observation = sample.borrow();
        legacy.replace(Some(score_forecast(&RatingInputs::new(
            &observation,
            profile,
        ))));
    }
    rate(spot, sample, rated, Some(&legacy_weight_profile()));
}

#[then("every component score lies between zero and one")]
fn then_scores_bounded(#[from(rated)] rated: &RefCell<Option<RatedResult>>) {
    let borrowed = rated.borrow();
    let result = borrowed.as_ref().expect("hour rated");
    assert!(
        result
            .components
            .iter()
            .all(|component| (0.0..=1.0).contains(&component.score))
    );
}

#[then("no aggregate is reported")]
fn then_no_aggregate(#[from(rated)] rated: &RefCell<Option<RatedResult>>) {
    assert!(rated.borrow().as_ref().expect("hour rated").aggregate.is_none());
}

#[then("the reasons start with offshore or light winds")]
fn then_reasons_start_offshore(#[from(rated)] rated: &RefCell<Option<RatedResult>>) {
    let result = rated.borrow();
    let first = result
        .as_ref()
        .expect("hour rated")
        .reasons
        .first()
        .cloned();
    assert_eq!(first.as_deref(), Some("offshore or light winds"));
}

#[then("the aggregate score is zero")]
fn then_aggregate_zero(#[from(rated)] rated: &RefCell<Option<RatedResult>>) {
    assert_eq!(aggregate_score(rated), 0.0);
}

#[then("the aggregate score is ten")]
fn then_aggregate_ten(#[from(rated)] rated: &RefCell<Option<RatedResult>>) {
    assert_eq!(aggregate_score(rated), 10.0);
}

#[then("the legacy score matches a rating with the frozen weights")]
fn then_legacy_matches(
    #[from(rated)] rated: &RefCell<Option<RatedResult>>,
    #[from(legacy)] legacy: &RefCell<Option<LegacyRating>>,
) {
    let expected = aggregate_score(rated);
    let borrowed = legacy.borrow();
    let rating = borrowed.as_ref().expect("legacy rating");
    assert_eq!(rating.score, expected);
    assert_eq!(rating.components.size_score, 0.6);
    assert_eq!(rating.components.tide_score, 1.0);
}

#[scenario(path = "tests/features/rating.feature", index = 0)]
fn clean_offshore_morning(
    spot: RefCell<Option<SpotProfile>>,
    sample: RefCell<ObservationSample>,
    rated: RefCell<Option<RatedResult>>,
) {
    let _ = (spot, sample, rated);
}

#[scenario(path = "tests/features/rating.feature", index = 1)]
fn onshore_gale(
    spot: RefCell<Option<SpotProfile>>,
    sample: RefCell<ObservationSample>,
    rated: RefCell<Option<RatedResult>>,
) {
    let _ = (spot, sample, rated);
}

#[scenario(path = "tests/features/rating.feature", index = 2)]
fn empty_weight_profile(
    spot: RefCell<Option<SpotProfile>>,
    sample: RefCell<ObservationSample>,
    rated: RefCell<Option<RatedResult>>,
) {
    let _ = (spot, sample, rated);
}

#[scenario(path = "tests/features/rating.feature", index = 3)]
fn legacy_wrapper(
    spot: RefCell<Option<SpotProfile>>,
    sample: RefCell<ObservationSample>,
    rated: RefCell<Option<RatedResult>>,
    legacy: RefCell<Option<LegacyRating>>,
) {
    let _ = (spot, sample, rated, legacy);
}
