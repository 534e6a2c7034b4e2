//! Edge cases and error handling for the interval engine

use prop_confidence::{compute, proportion_intervals};
use prop_core::{Error, ProportionRow, RunConfiguration, StatrsProvider};

#[test]
fn test_empty_rows_fail() {
    let result = proportion_intervals(&[], 0.05);
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn test_numerator_above_denominator_fails() {
    let result = proportion_intervals(&[ProportionRow::new(10.0, 5.0)], 0.05);
    assert!(matches!(result, Err(Error::InvalidProportion { .. })));
}

#[test]
fn test_zero_denominator_fails() {
    let result = proportion_intervals(&[ProportionRow::new(0.0, 0.0)], 0.05);
    assert!(matches!(result, Err(Error::InvalidProportion { .. })));
}

#[test]
fn test_offending_pair_is_reported() {
    let rows = vec![
        ProportionRow::new(5.0, 10.0),
        ProportionRow::new(12.0, 7.0),
    ];
    match proportion_intervals(&rows, 0.05) {
        Err(Error::InvalidProportion {
            numerator,
            denominator,
        }) => {
            assert_eq!(numerator, 12.0);
            assert_eq!(denominator, 7.0);
        }
        other => panic!("expected InvalidProportion, got {other:?}"),
    }
}

#[test]
fn test_alpha_outside_unit_interval_fails_before_computation() {
    let rows = [ProportionRow::new(5.0, 10.0)];
    assert!(matches!(
        proportion_intervals(&rows, 0.0),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        proportion_intervals(&rows, 1.0),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn test_no_partial_report_on_failure() {
    // a bad row in the middle fails the whole run
    let rows = vec![
        ProportionRow::new(5.0, 10.0),
        ProportionRow::new(11.0, 10.0),
        ProportionRow::new(6.0, 10.0),
    ];
    assert!(proportion_intervals(&rows, 0.05).is_err());
}

#[test]
fn test_fractional_counts_are_accepted() {
    // aggregated inputs can carry non-integral counts
    let report = proportion_intervals(&[ProportionRow::new(10.5, 40.25)], 0.05).unwrap();
    let result = &report.results[0];
    assert!(result.binomial.contains(result.p));
    assert!(result.poisson.contains(result.p));
}

#[test]
fn test_explicit_configuration_path_matches_convenience() {
    let rows = [
        ProportionRow::new(52.0, 100.0),
        ProportionRow::new(55.0, 100.0),
    ];
    let config = RunConfiguration::new(0.05).unwrap();
    let explicit = compute(&rows, &config, &StatrsProvider).unwrap();
    let convenient = proportion_intervals(&rows, 0.05).unwrap();
    assert_eq!(explicit, convenient);
}

#[test]
fn test_dropped_rows_annotation() {
    let report = proportion_intervals(&[ProportionRow::new(5.0, 10.0)], 0.05)
        .unwrap()
        .with_dropped_rows(2);
    assert_eq!(report.dropped_rows, 2);
}
