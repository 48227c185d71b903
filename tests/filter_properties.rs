//! Integration tests for the rule engine.
//!
//! Exercises the public API against the demonstration flight set and the
//! filtering properties: identity, order preservation, idempotence.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use flight_filter::{
    evaluate, filter, ArrivalBeforeDepartureRule, ExcessiveGroundTimeRule, FilterConfig,
    FixedClock, Flight, FlightBuilder, FlightFilterRule, NotInPastRule, RuleKind, Segment,
};

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 15)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .expect("valid date")
}

fn at(hours: i64) -> NaiveDateTime {
    now() + Duration::days(3) + Duration::hours(hours)
}

fn flight(hours: &[i64]) -> Flight {
    let dates: Vec<NaiveDateTime> = hours.iter().map(|&h| at(h)).collect();
    FlightBuilder::create_flight(&dates).expect("flight")
}

fn all_rules() -> Vec<Box<dyn FlightFilterRule>> {
    vec![
        Box::new(NotInPastRule::new(now())),
        Box::new(ArrivalBeforeDepartureRule),
        Box::new(ExcessiveGroundTimeRule::new()),
    ]
}

#[test]
fn test_no_rules_keeps_every_flight() {
    let flights = FlightBuilder::sample_flights(now());
    let rules: Vec<Box<dyn FlightFilterRule>> = Vec::new();
    assert_eq!(filter(&flights, &rules), flights);
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(filter(&[], &all_rules()).is_empty());
}

#[test]
fn test_filter_is_idempotent() {
    let flights = FlightBuilder::sample_flights(now());
    let rules = all_rules();
    let once = filter(&flights, &rules);
    let twice = filter(&once, &rules);
    assert_eq!(once, twice);
}

#[test]
fn test_order_is_preserved() {
    let flights = vec![
        flight(&[5, 6]),
        flight(&[0, -6]),
        flight(&[1, 2]),
        flight(&[0, 2, 5, 6]),
    ];
    let rules: [&dyn FlightFilterRule; 1] = [&ArrivalBeforeDepartureRule];
    assert_eq!(
        filter(&flights, &rules),
        vec![flights[0].clone(), flights[2].clone(), flights[3].clone()]
    );
}

#[test]
fn test_normal_flight_passes_time_rules() {
    let f = flight(&[0, 2]);
    assert!(NotInPastRule::new(now()).keep(&f));
    assert!(ArrivalBeforeDepartureRule.keep(&f));
}

#[test]
fn test_ground_time_scenarios() {
    let rule = ExcessiveGroundTimeRule::new();
    assert!(rule.keep(&flight(&[0, 2, 5, 6])));
    assert!(!rule.keep(&flight(&[0, 2, 3, 5])));
    assert!(rule.keep(&flight(&[0, 2])));
}

#[test]
fn test_inverted_flight_excluded() {
    let f = flight(&[0, -6]);
    let rules: [&dyn FlightFilterRule; 1] = [&ArrivalBeforeDepartureRule];
    assert!(filter(&[f], &rules).is_empty());
}

#[test]
fn test_past_rule_boundary() {
    let departed = Flight::new(vec![Segment::new(
        now() - Duration::seconds(1),
        now() + Duration::hours(1),
    )])
    .expect("flight");
    let departing_now =
        Flight::new(vec![Segment::new(now(), now() + Duration::hours(1))]).expect("flight");
    let rule = NotInPastRule::from_clock(&FixedClock(now()));
    let rules: [&dyn FlightFilterRule; 1] = [&rule];

    let kept = filter(&[departed, departing_now.clone()], &rules);
    assert_eq!(kept, vec![departing_now]);
}

#[test]
fn test_sample_set_with_all_rules() {
    let flights = FlightBuilder::sample_flights(now());
    let kept = filter(&flights, &all_rules());
    assert_eq!(
        kept,
        vec![flights[0].clone(), flights[4].clone(), flights[5].clone()]
    );
}

#[test]
fn test_config_built_rules_match_manual_rules() {
    let flights = FlightBuilder::sample_flights(now());
    let from_config = FilterConfig::default().build_rules(&FixedClock(now()));
    assert_eq!(
        filter(&flights, &from_config),
        filter(&flights, &all_rules())
    );
}

#[test]
fn test_report_lists_rejections() {
    let flights = FlightBuilder::sample_flights(now());
    let rules = FilterConfig::new()
        .with_rules([RuleKind::Past, RuleKind::Inverted])
        .build_rules(&FixedClock(now()));
    let report = evaluate(&flights, &rules);

    let rejected: Vec<(usize, Vec<&str>)> = report
        .rejected()
        .map(|v| (v.index, v.rejected_by.clone()))
        .collect();
    assert_eq!(
        rejected,
        vec![
            (2, vec!["not_in_past"]),
            (3, vec!["arrival_before_departure"]),
        ]
    );
    assert_eq!(report.summary(), "4 of 6 flights retained");
}

#[test]
fn test_odd_timestamp_count_is_isolated() {
    let t = at(0);
    let results: Vec<Result<Flight, _>> = vec![
        FlightBuilder::create_flight(&[t, t + Duration::hours(1)]),
        FlightBuilder::create_flight(&[t]),
        FlightBuilder::create_flight(&[t, t + Duration::hours(2)]),
    ];
    let flights: Vec<Flight> = results.into_iter().filter_map(Result::ok).collect();
    assert_eq!(flights.len(), 2);
}
