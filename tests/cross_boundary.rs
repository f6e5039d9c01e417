use std::sync::Mutex;
use unsafe_access_demos::cross_boundary::{self, CrossBoundaryReport};
use unsafe_access_demos::CrossBoundaryConfig;

// The C variable is process-wide; tests in this file run on parallel threads.
static FOREIGN_LOCK: Mutex<()> = Mutex::new(());

fn run_serialized(config: &CrossBoundaryConfig) -> CrossBoundaryReport {
    let _guard = FOREIGN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cross_boundary::run(config, false)
}

#[test]
fn test_foreign_write_is_seen_by_managed_side() {
    let config = CrossBoundaryConfig::default();
    let report = run_serialized(&config);

    assert_eq!(report.managed_before, 5);
    assert_eq!(report.managed_after_foreign, 10);
}

#[test]
fn test_managed_write_is_seen_by_foreign_side() {
    let _guard = FOREIGN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let report = cross_boundary::run(&CrossBoundaryConfig::default(), false);

    assert_eq!(report.foreign_after, 4666);
    assert_eq!(cross_boundary::foreign_value(), 4666);
}

#[test]
fn test_foreign_before_is_what_the_foreign_side_held() {
    let _guard = FOREIGN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let held = cross_boundary::foreign_value();
    let report = cross_boundary::run(&CrossBoundaryConfig::default(), false);

    assert_eq!(report.foreign_before, held);
}

#[test]
fn test_repeated_runs_give_the_same_delta() {
    let _guard = FOREIGN_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let config = CrossBoundaryConfig::default();
    let first = cross_boundary::run(&config, false);
    let second = cross_boundary::run(&config, false);

    assert_eq!(first.managed_address, second.managed_address);
    assert_eq!(first.delta, second.delta);
}

#[test]
fn test_custom_values_flow_both_ways() {
    let config = CrossBoundaryConfig {
        managed_initial: -1,
        foreign_write: 77,
        managed_overwrite: 1234,
    };
    let report = run_serialized(&config);

    assert_eq!(report.managed_before, -1);
    assert_eq!(report.managed_after_foreign, 77);
    assert_eq!(report.foreign_after, 1234);
}
